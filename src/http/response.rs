/// Ceiling for the formatted header block. Realistic bodies stay far below
/// it; a Content-Length digit string long enough to blow past it means the
/// builder yields nothing and the connection goes straight to closing.
const MAX_HEAD_LEN: usize = 256;

/// A framed `200 OK` response. The only status this server ever sends:
/// malformed requests still get the default or snooze body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    head: Vec<u8>,
    body: Vec<u8>,
}

impl Response {
    /// Builds a response around `body`, with `Content-Length` set to its
    /// exact byte length and `Connection: close`. Returns `None` when the
    /// header block does not fit its formatting ceiling.
    pub fn ok(body: impl Into<Vec<u8>>) -> Option<Self> {
        Self::with_head_limit(body.into(), MAX_HEAD_LEN)
    }

    fn with_head_limit(body: Vec<u8>, limit: usize) -> Option<Self> {
        let head = format!(
            "HTTP/1.1 200 OK\r\n\
             Server: snooze\r\n\
             Content-Type: text/html; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\
             \r\n",
            body.len()
        );

        if head.len() > limit {
            return None;
        }

        Some(Self {
            head: head.into_bytes(),
            body,
        })
    }

    /// Header block plus body, ready for the wire.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut buf = self.head;
        buf.extend_from_slice(&self.body);
        buf
    }

    pub fn head(&self) -> &[u8] {
        &self.head
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Confirmation body for a matched snooze route.
pub fn snooze_body(seconds: u64) -> String {
    format!("Snoozed for {} seconds!\n", seconds)
}
