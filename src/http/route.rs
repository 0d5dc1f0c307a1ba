const SNOOZE_PREFIX: &str = "/snooze/";

/// Where a request target lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/snooze/<N>` matched; delay for N whole seconds (N may be 0).
    Snooze(u64),
    /// Everything else: serve the configured default message.
    Default,
}

/// Matches the literal prefix `/snooze/` followed by one or more ASCII
/// digits and nothing after them. Any mismatch (wrong prefix, empty suffix,
/// a sign, a stray character, a digit string too large for u64) falls
/// through to [`Route::Default`] without reporting an error.
pub fn resolve(path: &str) -> Route {
    let Some(digits) = path.strip_prefix(SNOOZE_PREFIX) else {
        return Route::Default;
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Route::Default;
    }

    match digits.parse::<u64>() {
        Ok(seconds) => Route::Snooze(seconds),
        Err(_) => Route::Default,
    }
}
