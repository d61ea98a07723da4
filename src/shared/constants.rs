/// Default page size for category listings
pub const DEFAULT_PAGE_SIZE: i64 = 2;

/// Maximum page size accepted by the list endpoint
pub const MAX_PAGE_SIZE: i64 = 9;
