use crate::http::request::{
    MAX_HEADER_NAME_LEN, MAX_HEADER_VALUE_LEN, MAX_METHOD_LEN, MAX_PATH_LEN, Request,
};

/// Parses a raw request buffer in one linear pass.
///
/// This is a best-effort diagnostic parser, not a conformant one: it never
/// fails. The request line is split on its first two spaces into method and
/// target (the version token is ignored); a line that cannot yield both
/// tokens leaves the defaults in place. Header lines up to the first empty
/// line are split on the first `:`; the `User-Agent` header (matched
/// case-insensitively) is pulled out, every other header is appended to
/// `other_headers` in encounter order. Oversized tokens are truncated
/// silently. Anything after the blank line (a body) is ignored.
pub fn parse_request(buf: &[u8]) -> Request {
    let mut req = Request::default();

    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split("\r\n");

    if let Some(request_line) = lines.next() {
        parse_request_line(request_line, &mut req);
    }

    for line in lines {
        if line.is_empty() {
            break; // end of headers; body bytes (if any) follow
        }

        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim_start_matches([' ', '\t']);

        if name.eq_ignore_ascii_case("User-Agent") {
            req.user_agent = truncate(value, MAX_HEADER_VALUE_LEN);
        } else {
            req.other_headers.push((
                truncate(name, MAX_HEADER_NAME_LEN),
                truncate(value, MAX_HEADER_VALUE_LEN),
            ));
        }
    }

    req
}

fn parse_request_line(line: &str, req: &mut Request) {
    let Some((method, rest)) = line.split_once(' ') else {
        return;
    };

    let target = match rest.split_once(' ') {
        Some((target, _version)) => target,
        None => rest,
    };

    if method.is_empty() || target.is_empty() {
        return;
    }

    req.method = truncate(method, MAX_METHOD_LEN);
    req.path = truncate(target, MAX_PATH_LEN);
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request(b"GET /snooze/3 HTTP/1.1\r\nHost: example.com\r\n\r\n");

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/snooze/3");
        assert_eq!(
            req.other_headers,
            vec![("Host".to_string(), "example.com".to_string())]
        );
    }

    #[test]
    fn empty_buffer_yields_defaults() {
        let req = parse_request(b"");

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/");
        assert_eq!(req.user_agent, "unknown");
        assert!(req.other_headers.is_empty());
    }
}
