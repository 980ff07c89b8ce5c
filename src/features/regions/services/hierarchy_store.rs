use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{
    LowerRegionRow, Region, RegionCode, RegionLevel, UpperRegionRow,
};
use crate::shared::validation::escape_like;

/// Read access to region attribute records.
///
/// Callers see one logical `Region` regardless of which physical table
/// holds it; the routing is decided by the code's level.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HierarchyStore: Send + Sync {
    /// Keyed read; `NotFound` when absent
    async fn get_by_code(&self, code: &RegionCode) -> Result<Region>;

    /// All provinces, ascending by code
    async fn list_provinces(&self) -> Result<Vec<Region>>;

    /// Direct children of `parent` at `child_level`, ascending by code
    async fn list_children(
        &self,
        parent: &RegionCode,
        child_level: RegionLevel,
    ) -> Result<Vec<Region>>;

    /// Case-insensitive name match over provinces and regencies,
    /// ordered by code length then code
    async fn search(&self, keyword: &str) -> Result<Vec<Region>>;
}

/// PostgreSQL-backed hierarchy store over the two attribute tables
pub struct PgHierarchyStore {
    upper: UpperRegionTable,
    lower: LowerRegionTable,
}

impl PgHierarchyStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            upper: UpperRegionTable { pool: pool.clone() },
            lower: LowerRegionTable { pool },
        }
    }
}

#[async_trait]
impl HierarchyStore for PgHierarchyStore {
    async fn get_by_code(&self, code: &RegionCode) -> Result<Region> {
        let region = match code.level() {
            RegionLevel::Province | RegionLevel::Regency => self.upper.find(code.as_str()).await?,
            RegionLevel::District | RegionLevel::Village => self.lower.find(code.as_str()).await?,
            RegionLevel::Unknown => None,
        };

        region.ok_or_else(|| AppError::NotFound(format!("Region with code '{}' not found", code)))
    }

    async fn list_provinces(&self) -> Result<Vec<Region>> {
        self.upper.list_provinces().await
    }

    async fn list_children(
        &self,
        parent: &RegionCode,
        child_level: RegionLevel,
    ) -> Result<Vec<Region>> {
        match child_level {
            RegionLevel::Regency => {
                self.upper
                    .list_by_prefix(parent.as_str(), RegionLevel::Regency)
                    .await
            }
            RegionLevel::District | RegionLevel::Village => {
                self.lower.list_by_parent(parent.as_str(), child_level).await
            }
            RegionLevel::Province | RegionLevel::Unknown => Ok(Vec::new()),
        }
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Region>> {
        self.upper.search(keyword).await
    }
}

/// `wilayah_level_1_2`: provinces and regencies keyed directly by code.
/// The parent is implicit in the code prefix.
struct UpperRegionTable {
    pool: PgPool,
}

impl UpperRegionTable {
    async fn find(&self, code: &str) -> Result<Option<Region>> {
        let row = sqlx::query_as::<_, UpperRegionRow>(
            r#"
            SELECT kode, nama, ibukota, lat, lng, elv, tz, luas, penduduk, path, status
            FROM wilayah_level_1_2
            WHERE kode = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region by code {}: {:?}", code, e);
            AppError::from_store(e)
        })?;

        Ok(row.map(Region::from))
    }

    async fn list_provinces(&self) -> Result<Vec<Region>> {
        let rows = sqlx::query_as::<_, UpperRegionRow>(
            r#"
            SELECT kode, nama, ibukota, lat, lng, elv, tz, luas, penduduk, path, status
            FROM wilayah_level_1_2
            WHERE LENGTH(kode) = 2
            ORDER BY kode ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch provinces: {:?}", e);
            AppError::from_store(e)
        })?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn list_by_prefix(&self, parent_code: &str, level: RegionLevel) -> Result<Vec<Region>> {
        let Some(code_len) = level.code_len() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, UpperRegionRow>(
            r#"
            SELECT kode, nama, ibukota, lat, lng, elv, tz, luas, penduduk, path, status
            FROM wilayah_level_1_2
            WHERE LENGTH(kode) = $2 AND LEFT(kode, LENGTH($1)) = $1
            ORDER BY kode ASC
            "#,
        )
        .bind(parent_code)
        .bind(code_len as i32)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch {} children of {}: {:?}",
                level.label(),
                parent_code,
                e
            );
            AppError::from_store(e)
        })?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Region>> {
        let rows = sqlx::query_as::<_, UpperRegionRow>(
            r#"
            SELECT kode, nama, ibukota, lat, lng, elv, tz, luas, penduduk, path, status
            FROM wilayah_level_1_2
            WHERE nama ILIKE '%' || $1 || '%'
            ORDER BY LENGTH(kode) ASC, kode ASC
            "#,
        )
        .bind(escape_like(keyword))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search regions: {:?}", e);
            AppError::from_store(e)
        })?;

        Ok(rows.into_iter().map(Region::from).collect())
    }
}

/// `wilayah_level_3_4`: districts and villages with an explicit parent code
/// and numeric level tag.
struct LowerRegionTable {
    pool: PgPool,
}

impl LowerRegionTable {
    async fn find(&self, code: &str) -> Result<Option<Region>> {
        let row = sqlx::query_as::<_, LowerRegionRow>(
            r#"
            SELECT kode, nama, parent_kode, lat, lng, path, level
            FROM wilayah_level_3_4
            WHERE kode = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region by code {}: {:?}", code, e);
            AppError::from_store(e)
        })?;

        Ok(row.map(Region::from))
    }

    // The level filter is part of the table's contract even though code
    // lengths already differ between districts and villages.
    async fn list_by_parent(&self, parent_code: &str, level: RegionLevel) -> Result<Vec<Region>> {
        let Some(tag) = level.tag() else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<_, LowerRegionRow>(
            r#"
            SELECT kode, nama, parent_kode, lat, lng, path, level
            FROM wilayah_level_3_4
            WHERE parent_kode = $1 AND level = $2
            ORDER BY kode ASC
            "#,
        )
        .bind(parent_code)
        .bind(tag)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch {} children of {}: {:?}",
                level.label(),
                parent_code,
                e
            );
            AppError::from_store(e)
        })?;

        Ok(rows.into_iter().map(Region::from).collect())
    }
}
