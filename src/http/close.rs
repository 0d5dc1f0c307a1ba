use std::io::ErrorKind;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Half-close, drain, then full close.
///
/// Closing a socket while unread client bytes sit in the kernel receive
/// buffer makes some stacks send an RST, which the peer reports as a
/// truncated response. So: shut down the write side (FIN) with reads left
/// open, discard anything still arriving until EOF or would-block, then
/// drop the stream for the full close. Runs on every path, error paths
/// included.
pub async fn graceful_close(mut stream: TcpStream) {
    let _ = stream.shutdown().await;

    let mut scratch = [0u8; 256];
    loop {
        match stream.try_read(&mut scratch) {
            Ok(0) => break, // peer finished sending
            Ok(_) => continue,
            Err(e) if e.kind() == ErrorKind::WouldBlock => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    // stream dropped here; descriptor released on both paths
}
