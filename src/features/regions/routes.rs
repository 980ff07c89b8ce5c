use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers::{self, RegionState};
use crate::features::regions::services::{BoundaryResolver, RegionService};

/// Create routes for the regions feature
pub fn routes(
    region_service: Arc<RegionService>,
    boundary_resolver: Arc<BoundaryResolver>,
) -> Router {
    let state = RegionState {
        region_service,
        boundary_resolver,
    };

    Router::new()
        // Static segments take precedence over the {code} routes below
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route("/api/regions/overview", get(handlers::province_overview))
        .route("/api/regions/search", get(handlers::search_regions))
        .route(
            "/api/regions/provinces/{code}/regencies",
            get(handlers::list_regencies_by_province),
        )
        .route(
            "/api/regions/regencies/{code}/districts",
            get(handlers::list_districts_by_regency),
        )
        .route(
            "/api/regions/districts/{code}/villages",
            get(handlers::list_villages_by_district),
        )
        .route("/api/regions/{code}", get(handlers::get_region))
        .route("/api/regions/{code}/boundary", get(handlers::get_boundary))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::regions::services::{MockBoundaryStore, MockHierarchyStore};
    use crate::shared::test_helpers::sample_region;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::time::Duration;

    fn server(hierarchy: MockHierarchyStore, boundaries: MockBoundaryStore) -> TestServer {
        let hierarchy = Arc::new(hierarchy);
        let region_service = Arc::new(RegionService::new(hierarchy.clone()));
        let boundary_resolver = Arc::new(BoundaryResolver::new(
            hierarchy,
            Arc::new(boundaries),
            Duration::from_secs(5),
        ));
        TestServer::new(routes(region_service, boundary_resolver)).unwrap()
    }

    #[tokio::test]
    async fn test_list_provinces_envelope() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy.expect_list_provinces().returning(|| {
            Ok(vec![
                sample_region("11", "Aceh", None),
                sample_region("12", "Sumatera Utara", None),
            ])
        });

        let response = server(hierarchy, MockBoundaryStore::new())
            .get("/api/regions/provinces")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["code"], "11");
        assert_eq!(body["data"][0]["level"], "Provinsi");
    }

    #[tokio::test]
    async fn test_province_overview_carries_attributes_without_boundary() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy.expect_list_provinces().times(1).returning(|| {
            let mut aceh = sample_region("11", "Aceh", Some("<polygon-text>"));
            aceh.capital = Some("Banda Aceh".to_string());
            aceh.population = Some(5_274_871.0);
            Ok(vec![aceh])
        });

        let response = server(hierarchy, MockBoundaryStore::new())
            .get("/api/regions/overview")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["capital"], "Banda Aceh");
        assert_eq!(body["data"][0]["population"], 5_274_871.0);
        assert!(!body["data"][0].as_object().unwrap().contains_key("path"));
    }

    #[tokio::test]
    async fn test_boundary_for_province_returns_path() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy
            .expect_get_by_code()
            .returning(|_| Ok(sample_region("11", "Aceh", Some("<polygon-text>"))));
        let mut boundaries = MockBoundaryStore::new();
        boundaries.expect_regency_union_geometry().times(0);

        let response = server(hierarchy, boundaries)
            .get("/api/regions/11/boundary")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["code"], "11");
        assert_eq!(body["data"]["geometry"], "<polygon-text>");
    }

    #[tokio::test]
    async fn test_boundary_without_geometry_has_explicit_null() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy
            .expect_get_by_code()
            .returning(|_| Ok(sample_region("11010010", "Bakongan", None)));
        let mut boundaries = MockBoundaryStore::new();
        boundaries.expect_district_geometry().returning(|_| None);

        let response = server(hierarchy, boundaries)
            .get("/api/regions/11010010/boundary")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["level"], "Kecamatan");
        assert!(body["data"].as_object().unwrap().contains_key("geometry"));
        assert!(body["data"]["geometry"].is_null());
    }

    #[tokio::test]
    async fn test_boundary_for_unknown_code_is_404() {
        let response = server(MockHierarchyStore::new(), MockBoundaryStore::new())
            .get("/api/regions/1101/boundary")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_store_unavailable_is_503() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy
            .expect_get_by_code()
            .returning(|_| Err(AppError::StoreUnavailable("pool timed out".to_string())));

        let response = server(hierarchy, MockBoundaryStore::new())
            .get("/api/regions/11/boundary")
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_search_without_keyword_is_400() {
        let response = server(MockHierarchyStore::new(), MockBoundaryStore::new())
            .get("/api/regions/search")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_with_keyword() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy
            .expect_search()
            .withf(|keyword| keyword == "aceh")
            .returning(|_| {
                Ok(vec![
                    sample_region("11", "Aceh", None),
                    sample_region("11010", "Aceh Selatan", None),
                ])
            });

        let response = server(hierarchy, MockBoundaryStore::new())
            .get("/api/regions/search")
            .add_query_param("keyword", "aceh")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][1]["code"], "11010");
        assert_eq!(body["data"][1]["parentCode"], "11");
    }

    #[tokio::test]
    async fn test_list_districts_by_regency() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy
            .expect_list_children()
            .returning(|_, _| Ok(vec![sample_region("11010010", "Bakongan", None)]));

        let response = server(hierarchy, MockBoundaryStore::new())
            .get("/api/regions/regencies/11010/districts")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][0]["level"], "Kecamatan");
    }

    #[tokio::test]
    async fn test_get_region_detail() {
        let mut hierarchy = MockHierarchyStore::new();
        hierarchy
            .expect_get_by_code()
            .withf(|code| code.as_str() == "11.01")
            .returning(|_| Ok(sample_region("11.01", "Aceh Selatan", Some("<polygon-text>"))));

        let response = server(hierarchy, MockBoundaryStore::new())
            .get("/api/regions/11.01")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["name"], "Aceh Selatan");
        assert_eq!(body["data"]["level"], "Kabupaten/Kota");
        assert!(body["data"].get("path").is_none());
    }
}
