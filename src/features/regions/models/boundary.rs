use serde::Serialize;

use super::level::RegionLevel;

/// Where the geometry of a [`BoundaryResult`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometrySource {
    /// Row in the district or village boundary table
    Stored,
    /// Union of the district polygons of a regency
    RegencyUnion,
    /// Precomputed path on the attribute record
    Path,
    None,
}

/// Normalized boundary projection for one region code.
/// Built per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryResult {
    pub code: String,
    pub name: String,
    pub level: RegionLevel,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// GeoJSON (or legacy path) text; `None` when nothing is available
    pub geometry: Option<String>,
    pub source: GeometrySource,
}
