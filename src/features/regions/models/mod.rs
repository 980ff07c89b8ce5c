mod boundary;
mod level;
mod region;

pub use boundary::{BoundaryResult, GeometrySource};
pub use level::{RegionCode, RegionLevel};
pub use region::{LowerRegionRow, Region, UpperRegionRow};
