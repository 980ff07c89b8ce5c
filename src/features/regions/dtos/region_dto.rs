use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{BoundaryResult, Region};

/// Query parameters for searching regions by name
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Case-insensitive, partial match on province and regency names
    #[param(example = "aceh")]
    pub keyword: String,
}

/// Response DTO for a region in hierarchy listings and detail views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    pub code: String,
    pub name: String,
    /// Level label (Provinsi, Kabupaten/Kota, Kecamatan, Desa/Kelurahan)
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i16>,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            code: region.code,
            name: region.name,
            level: region.level.label().to_string(),
            capital: region.capital,
            lat: region.lat,
            lng: region.lng,
            elevation: region.elevation,
            timezone: region.timezone,
            area: region.area,
            population: region.population,
            parent_code: region.parent_code,
            status: region.status,
        }
    }
}

/// Response DTO for the province overview (map landing data)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceOverviewDto {
    pub code: String,
    pub name: String,
    pub level: String,
    pub capital: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub area: Option<f64>,
    pub population: Option<f64>,
}

impl From<Region> for ProvinceOverviewDto {
    fn from(region: Region) -> Self {
        Self {
            code: region.code,
            name: region.name,
            level: region.level.label().to_string(),
            capital: region.capital,
            lat: region.lat,
            lng: region.lng,
            area: region.area,
            population: region.population,
        }
    }
}

/// Response DTO for a resolved boundary.
///
/// `geometry` is always present; `null` means no boundary is available.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryResponseDto {
    pub code: String,
    pub name: String,
    pub level: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// GeoJSON geometry text
    pub geometry: Option<String>,
}

impl From<BoundaryResult> for BoundaryResponseDto {
    fn from(result: BoundaryResult) -> Self {
        Self {
            code: result.code,
            name: result.name,
            level: result.level.label().to_string(),
            lat: result.lat,
            lng: result.lng,
            geometry: result.geometry,
        }
    }
}
