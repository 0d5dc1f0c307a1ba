use bytes::BytesMut;
use std::io::ErrorKind;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

/// Hard ceiling on accumulated request bytes. When the peer never sends the
/// header terminator this is the backstop that keeps the read loop finite.
pub const READ_CAPACITY: usize = 8192;

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Accumulates bytes from the socket until the header terminator appears,
/// the capacity ceiling is reached, the peer closes, or a read fails.
///
/// Short input is not an error: whatever was accumulated (possibly nothing)
/// is returned and the parser fills in defaults for the missing pieces.
/// Interrupted reads are retried; no attempt is made to read a body.
pub async fn read_request(stream: &mut TcpStream) -> BytesMut {
    let mut buf = BytesMut::with_capacity(READ_CAPACITY);
    let mut chunk = [0u8; 1024];

    loop {
        if headers_complete(&buf) || buf.len() >= READ_CAPACITY {
            break;
        }

        let want = chunk.len().min(READ_CAPACITY - buf.len());
        match stream.read(&mut chunk[..want]).await {
            Ok(0) => break, // peer closed
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    buf
}

fn headers_complete(buf: &[u8]) -> bool {
    buf.windows(HEADER_TERMINATOR.len())
        .any(|w| w == HEADER_TERMINATOR)
}
