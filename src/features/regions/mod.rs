//! Indonesian administrative regions (wilayah) and their boundaries.
//!
//! Region codes encode their level in their length: 2 = province,
//! 5 = regency/city, 8 = district, 13 = village. Codes are accepted in
//! plain-digit or dotted form (`11`, `11.01`, `11.01.01`, `11.01.01.2001`).
//! The two forms are distinct keys and are never normalized to each other:
//! `11010010` and `11.01.01` look up whatever row carries that exact text.
//!
//! ## Storage
//!
//! Attributes live in two tables with different layouts:
//! `wilayah_level_1_2` (provinces and regencies, parent implied by the code
//! prefix) and `wilayah_level_3_4` (districts and villages, explicit parent
//! code and level tag). Polygons exist only for districts
//! (`idn_admbnda_adm3_bps_20200401`) and villages (`all_villages`).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/overview` | Provinces with capital, area and population |
//! | GET | `/api/regions/provinces/{code}/regencies` | List regencies in a province |
//! | GET | `/api/regions/regencies/{code}/districts` | List districts in a regency |
//! | GET | `/api/regions/districts/{code}/villages` | List villages in a district |
//! | GET | `/api/regions/search?keyword=` | Search provinces and regencies by name |
//! | GET | `/api/regions/{code}` | Get region by code |
//! | GET | `/api/regions/{code}/boundary` | Resolve boundary geometry |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{BoundaryResolver, PgBoundaryStore, PgHierarchyStore, RegionService};
