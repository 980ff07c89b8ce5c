use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{
    BoundaryResult, GeometrySource, Region, RegionCode, RegionLevel,
};

use super::{BoundaryStore, HierarchyStore};

const UNION_CLIENT_GRACE: Duration = Duration::from_millis(500);

/// Resolves a region code to its attributes plus boundary geometry.
///
/// Geometry policy per level, always stored geometry before the path:
///
/// | Level    | First choice                 | Fallback |
/// |----------|------------------------------|----------|
/// | Village  | village boundary row         | path     |
/// | District | district boundary row        | path     |
/// | Regency  | union of district polygons   | path     |
/// | Province | (never unioned)              | path     |
pub struct BoundaryResolver {
    hierarchy: Arc<dyn HierarchyStore>,
    boundaries: Arc<dyn BoundaryStore>,
    union_timeout: Duration,
}

impl BoundaryResolver {
    pub fn new(
        hierarchy: Arc<dyn HierarchyStore>,
        boundaries: Arc<dyn BoundaryStore>,
        union_timeout: Duration,
    ) -> Self {
        Self {
            hierarchy,
            boundaries,
            union_timeout,
        }
    }

    pub async fn resolve(&self, raw_code: &str) -> Result<BoundaryResult> {
        let not_found = || AppError::NotFound(format!("Region with code '{}' not found", raw_code));

        let code = RegionCode::parse(raw_code).ok_or_else(not_found)?;

        let region = match self.hierarchy.get_by_code(&code).await {
            Ok(region) => region,
            Err(e @ (AppError::NotFound(_) | AppError::StoreUnavailable(_))) => return Err(e),
            Err(e) => {
                tracing::error!("Error getting boundary data for code {}: {}", code, e);
                return Err(not_found());
            }
        };

        let (geometry, source) = self.geometry_for(&code, &region).await;

        tracing::debug!(
            "Resolved boundary for {} ({}) from {:?}",
            code,
            code.level().label(),
            source
        );

        Ok(BoundaryResult {
            code: region.code,
            name: region.name,
            level: code.level(),
            lat: region.lat,
            lng: region.lng,
            geometry,
            source,
        })
    }

    async fn geometry_for(
        &self,
        code: &RegionCode,
        region: &Region,
    ) -> (Option<String>, GeometrySource) {
        let direct = match code.level() {
            level if level.is_leaf() => self
                .stored_geometry(code)
                .await
                .map(|g| (g, GeometrySource::Stored)),
            RegionLevel::Regency => self
                .regency_union(code)
                .await
                .map(|g| (g, GeometrySource::RegencyUnion)),
            // Provinces are never unioned
            _ => None,
        };

        match direct.filter(|(g, _)| !g.trim().is_empty()) {
            Some((geometry, source)) => (Some(geometry), source),
            None => match region.path_geometry() {
                Some(path) => (Some(path.to_string()), GeometrySource::Path),
                None => (None, GeometrySource::None),
            },
        }
    }

    async fn stored_geometry(&self, code: &RegionCode) -> Option<String> {
        match code.level() {
            RegionLevel::District => self.boundaries.district_geometry(code).await,
            RegionLevel::Village => self.boundaries.village_geometry(code).await,
            _ => None,
        }
    }

    // The store cancels the union on the server after `union_timeout`;
    // this client-side bound only catches a store that does not.
    async fn regency_union(&self, code: &RegionCode) -> Option<String> {
        match tokio::time::timeout(
            self.union_timeout + UNION_CLIENT_GRACE,
            self.boundaries.regency_union_geometry(code),
        )
        .await
        {
            Ok(geometry) => geometry,
            Err(_) => {
                tracing::warn!(
                    "Union of district boundaries for {} exceeded {:?}, using path",
                    code,
                    self.union_timeout
                );
                None
            }
        }
    }
}
