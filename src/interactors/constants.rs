// sent to the store when the client didn't ask for a page
pub const NO_PAGINATION: i32 = -1;

pub const DEFAULT_RESOURCE: &str = "IntAct";

pub const DEFAULT_BASE_PATH: &str = "/interactors/static";

pub const DEFAULT_BIND_ADDRESS_AND_PORT: &str = "0.0.0.0:8500";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_POOL_MAX_SIZE: usize = 16;
