mod boundary_resolver;
mod boundary_store;
mod hierarchy_store;
mod region_service;

pub use boundary_resolver::BoundaryResolver;
pub use boundary_store::{BoundaryStore, PgBoundaryStore};
pub use hierarchy_store::{HierarchyStore, PgHierarchyStore};
pub use region_service::RegionService;

#[cfg(test)]
pub use boundary_store::MockBoundaryStore;
#[cfg(test)]
pub use hierarchy_store::MockHierarchyStore;
