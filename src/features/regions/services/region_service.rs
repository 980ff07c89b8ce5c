use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionCode, RegionLevel};

use super::HierarchyStore;

/// Service for navigating Indonesian administrative regions
pub struct RegionService {
    store: Arc<dyn HierarchyStore>,
}

impl RegionService {
    pub fn new(store: Arc<dyn HierarchyStore>) -> Self {
        Self { store }
    }

    /// List all provinces
    pub async fn list_provinces(&self) -> Result<Vec<Region>> {
        self.store.list_provinces().await
    }

    /// List the direct children of `parent_code` at `child_level`
    pub async fn list_children(
        &self,
        parent_code: &str,
        child_level: RegionLevel,
    ) -> Result<Vec<Region>> {
        let parent = RegionCode::parse(parent_code).ok_or_else(|| {
            AppError::NotFound(format!("Region with code '{}' not found", parent_code))
        })?;

        if parent.level().child() != Some(child_level) {
            return Err(AppError::BadRequest(format!(
                "Code '{}' is a {}, expected a parent of {}",
                parent_code,
                parent.level().label(),
                child_level.label()
            )));
        }

        self.store.list_children(&parent, child_level).await
    }

    pub async fn list_regencies(&self, province_code: &str) -> Result<Vec<Region>> {
        self.list_children(province_code, RegionLevel::Regency).await
    }

    pub async fn list_districts(&self, regency_code: &str) -> Result<Vec<Region>> {
        self.list_children(regency_code, RegionLevel::District).await
    }

    pub async fn list_villages(&self, district_code: &str) -> Result<Vec<Region>> {
        self.list_children(district_code, RegionLevel::Village).await
    }

    /// Search provinces and regencies by name
    pub async fn search(&self, keyword: &str) -> Result<Vec<Region>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::BadRequest(
                "Search parameter 'keyword' is required".to_string(),
            ));
        }

        self.store.search(keyword).await
    }

    /// Get a region by its code, from whichever table holds its level
    pub async fn get_by_code(&self, code: &str) -> Result<Region> {
        let parsed = RegionCode::parse(code)
            .ok_or_else(|| AppError::NotFound(format!("Region with code '{}' not found", code)))?;

        self.store.get_by_code(&parsed).await
    }
}
