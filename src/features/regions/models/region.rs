use serde::Serialize;
use sqlx::FromRow;

use super::level::RegionLevel;

/// Region attribute record, independent of which table it was read from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub level: RegionLevel,
    /// Ibukota; only provinces and regencies carry one
    pub capital: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub elevation: Option<f32>,
    pub timezone: Option<i16>,
    pub area: Option<f64>,
    pub population: Option<f64>,
    pub parent_code: Option<String>,
    /// Precomputed, possibly simplified boundary serialization
    pub path: Option<String>,
    pub status: Option<i16>,
}

impl Region {
    /// The precomputed path, if it holds anything
    pub fn path_geometry(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Row of `wilayah_level_1_2` (provinces and regencies, keyed by code)
#[derive(Debug, Clone, FromRow)]
pub struct UpperRegionRow {
    pub kode: String,
    pub nama: Option<String>,
    pub ibukota: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub elv: Option<f32>,
    pub tz: Option<i16>,
    pub luas: Option<f64>,
    pub penduduk: Option<f64>,
    pub path: Option<String>,
    pub status: Option<i16>,
}

impl From<UpperRegionRow> for Region {
    fn from(row: UpperRegionRow) -> Self {
        let level = RegionLevel::from_code(&row.kode);
        // No parent column here: the parent is the code prefix
        let parent_code = level
            .parent()
            .and_then(RegionLevel::code_len)
            .and_then(|len| row.kode.get(..len))
            .map(str::to_string);

        Self {
            name: row.nama.unwrap_or_default(),
            level,
            capital: row.ibukota,
            lat: row.lat,
            lng: row.lng,
            elevation: row.elv,
            timezone: row.tz,
            area: row.luas,
            population: row.penduduk,
            parent_code,
            path: row.path,
            status: row.status,
            code: row.kode,
        }
    }
}

/// Row of `wilayah_level_3_4` (districts and villages, explicit parent and level tag)
#[derive(Debug, Clone, FromRow)]
pub struct LowerRegionRow {
    pub kode: String,
    pub nama: Option<String>,
    pub parent_kode: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub path: Option<String>,
    pub level: Option<i16>,
}

impl From<LowerRegionRow> for Region {
    fn from(row: LowerRegionRow) -> Self {
        let level = match row.level.map(RegionLevel::from_tag) {
            Some(level) if level != RegionLevel::Unknown => level,
            _ => RegionLevel::from_code(&row.kode),
        };

        Self {
            name: row.nama.unwrap_or_default(),
            level,
            capital: None,
            lat: row.lat,
            lng: row.lng,
            elevation: None,
            timezone: None,
            area: None,
            population: None,
            parent_code: row.parent_kode,
            path: row.path,
            status: None,
            code: row.kode,
        }
    }
}
