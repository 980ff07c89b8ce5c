use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{
    BoundaryResponseDto, ProvinceOverviewDto, RegionResponseDto, RegionSearchQuery,
};
use crate::features::regions::models::Region;
use crate::features::regions::services::{BoundaryResolver, RegionService};
use crate::shared::types::{ApiResponse, Meta};

/// State for region handlers
#[derive(Clone)]
pub struct RegionState {
    pub region_service: Arc<RegionService>,
    pub boundary_resolver: Arc<BoundaryResolver>,
}

fn region_list(regions: Vec<Region>) -> Json<ApiResponse<Vec<RegionResponseDto>>> {
    let dtos: Vec<RegionResponseDto> = regions.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Json(ApiResponse::success(Some(dtos), None, Some(meta)))
}

// ==================== Hierarchy Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 503, description = "Region store unavailable")
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let provinces = state.region_service.list_provinces().await?;
    Ok(region_list(provinces))
}

/// Provinces with capital, area and population
#[utoipa::path(
    get,
    path = "/api/regions/overview",
    responses(
        (status = 200, description = "Province overview", body = ApiResponse<Vec<ProvinceOverviewDto>>),
        (status = 503, description = "Region store unavailable")
    ),
    tag = "regions"
)]
pub async fn province_overview(
    State(state): State<RegionState>,
) -> Result<Json<ApiResponse<Vec<ProvinceOverviewDto>>>> {
    let provinces = state.region_service.list_provinces().await?;
    let dtos: Vec<ProvinceOverviewDto> = provinces.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// List regencies/cities in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{code}/regencies",
    params(
        ("code" = String, Path, description = "Province code (2 digits)")
    ),
    responses(
        (status = 200, description = "List of regencies in the province", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Code is not a province code"),
        (status = 404, description = "Malformed code")
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regencies = state.region_service.list_regencies(&code).await?;
    Ok(region_list(regencies))
}

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{code}/districts",
    params(
        ("code" = String, Path, description = "Regency code (5 characters, e.g. 11.01)")
    ),
    responses(
        (status = 200, description = "List of districts in the regency", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Code is not a regency code"),
        (status = 404, description = "Malformed code")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let districts = state.region_service.list_districts(&code).await?;
    Ok(region_list(districts))
}

/// List villages in a district
#[utoipa::path(
    get,
    path = "/api/regions/districts/{code}/villages",
    params(
        ("code" = String, Path, description = "District code (8 characters, e.g. 11.01.01)")
    ),
    responses(
        (status = 200, description = "List of villages in the district", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Code is not a district code"),
        (status = 404, description = "Malformed code")
    ),
    tag = "regions"
)]
pub async fn list_villages_by_district(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let villages = state.region_service.list_villages(&code).await?;
    Ok(region_list(villages))
}

/// Search provinces and regencies by name
#[utoipa::path(
    get,
    path = "/api/regions/search",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Matching regions, shortest codes first", body = ApiResponse<Vec<RegionResponseDto>>),
        (status = 400, description = "Search keyword required")
    ),
    tag = "regions"
)]
pub async fn search_regions(
    State(state): State<RegionState>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegionResponseDto>>>> {
    let regions = state.region_service.search(&query.keyword).await?;
    Ok(region_list(regions))
}

/// Get a region by code
#[utoipa::path(
    get,
    path = "/api/regions/{code}",
    params(
        ("code" = String, Path, description = "Region code (2, 5, 8 or 13 characters)")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionResponseDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<RegionResponseDto>>> {
    let region = state.region_service.get_by_code(&code).await?;
    Ok(Json(ApiResponse::success(Some(region.into()), None, None)))
}

// ==================== Boundary Handlers ====================

/// Resolve the boundary geometry of a region
#[utoipa::path(
    get,
    path = "/api/regions/{code}/boundary",
    params(
        ("code" = String, Path, description = "Region code (2, 5, 8 or 13 characters)")
    ),
    responses(
        (status = 200, description = "Region boundary; geometry is null when unavailable", body = ApiResponse<BoundaryResponseDto>),
        (status = 404, description = "Region not found"),
        (status = 503, description = "Region store unavailable")
    ),
    tag = "regions"
)]
pub async fn get_boundary(
    State(state): State<RegionState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<BoundaryResponseDto>>> {
    let boundary = state.boundary_resolver.resolve(&code).await?;
    Ok(Json(ApiResponse::success(Some(boundary.into()), None, None)))
}
