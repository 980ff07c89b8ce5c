use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::province_overview,
        regions_handlers::list_regencies_by_province,
        regions_handlers::list_districts_by_regency,
        regions_handlers::list_villages_by_district,
        regions_handlers::search_regions,
        regions_handlers::get_region,
        regions_handlers::get_boundary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::RegionResponseDto,
            regions_dtos::ProvinceOverviewDto,
            regions_dtos::BoundaryResponseDto,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<regions_dtos::RegionResponseDto>,
            ApiResponse<Vec<regions_dtos::ProvinceOverviewDto>>,
            ApiResponse<regions_dtos::BoundaryResponseDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts, villages) and boundaries"),
    ),
    info(
        title = "Wilayah API",
        version = "0.1.0",
        description = "Indonesian administrative regions and boundary geometry",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_region_paths() {
        let openapi = ApiDoc::openapi();
        assert!(openapi.paths.paths.contains_key("/api/regions/{code}/boundary"));
        assert!(openapi.paths.paths.contains_key("/api/regions/search"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Custom");
        assert_eq!(openapi.info.version, "9.9.9");
    }
}
