/// User agent sent with every API request
pub const USER_AGENT: &str = "actionkit-client/0.1.0";
/// Path prefix shared by every endpoint URL and resource reference
pub const REST_BASE_PATH: &str = "/rest/v1";
/// Row count above which a table upload is gzip-compressed even when it is
/// eligible for the server's fast-processing path, to keep memory bounded
pub const FAST_PATH_MAX_ROWS: usize = 1_000_000;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
