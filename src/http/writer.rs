use std::io::{self, ErrorKind};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Writes a serialized response, tracking progress across partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            buffer: response.into_bytes(),
            written: 0,
        }
    }

    /// Writes until every byte is on the wire or a fatal socket error.
    /// Interrupted writes are retried; a zero-length write or any other
    /// error aborts the response and the caller proceeds to closing.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> io::Result<()> {
        while self.written < self.buffer.len() {
            match stream.write(&self.buffer[self.written..]).await {
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::WriteZero,
                        "peer closed while writing response",
                    ));
                }
                Ok(n) => self.written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}
