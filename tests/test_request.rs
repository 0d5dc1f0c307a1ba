use snooze::http::request::{
    DEFAULT_METHOD, DEFAULT_PATH, DEFAULT_USER_AGENT, MAX_HEADER_NAME_LEN, MAX_HEADER_VALUE_LEN,
    MAX_METHOD_LEN, MAX_PATH_LEN, Request,
};

#[test]
fn test_request_default_is_fully_defined() {
    let req = Request::default();

    assert_eq!(req.method, DEFAULT_METHOD);
    assert_eq!(req.path, DEFAULT_PATH);
    assert_eq!(req.user_agent, DEFAULT_USER_AGENT);
    assert!(req.other_headers.is_empty());
    assert_eq!(req.snooze_seconds, 0);
}

#[test]
fn test_default_values() {
    assert_eq!(DEFAULT_METHOD, "GET");
    assert_eq!(DEFAULT_PATH, "/");
    assert_eq!(DEFAULT_USER_AGENT, "unknown");
}

#[test]
fn test_capacities_are_sane() {
    // Defaults must fit their own capacities.
    assert!(DEFAULT_METHOD.len() <= MAX_METHOD_LEN);
    assert!(DEFAULT_PATH.len() <= MAX_PATH_LEN);
    assert!(DEFAULT_USER_AGENT.len() <= MAX_HEADER_VALUE_LEN);
    assert!(MAX_HEADER_NAME_LEN > "Content-Length".len());
}
