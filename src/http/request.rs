/// Field capacities. Values longer than these are silently truncated on a
/// UTF-8 character boundary; the parser never errors on oversized input.
pub const MAX_METHOD_LEN: usize = 16;
pub const MAX_PATH_LEN: usize = 1024;
pub const MAX_HEADER_NAME_LEN: usize = 64;
pub const MAX_HEADER_VALUE_LEN: usize = 512;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_USER_AGENT: &str = "unknown";

/// A parsed request, created per connection and dropped after handling.
///
/// Every field holds a defined value after parsing, even when the raw input
/// was empty, truncated, or malformed. Downstream code never sees partial
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method token, `"GET"` when absent or malformed.
    pub method: String,
    /// Request target, `"/"` when absent or malformed.
    pub path: String,
    /// User-Agent header value, `"unknown"` when absent.
    pub user_agent: String,
    /// Remaining headers in encounter order, kept only for logging.
    pub other_headers: Vec<(String, String)>,
    /// Delay resolved from the path; zero means no delay.
    pub snooze_seconds: u64,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            path: DEFAULT_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            other_headers: Vec::new(),
            snooze_seconds: 0,
        }
    }
}
