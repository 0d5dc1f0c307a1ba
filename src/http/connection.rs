use bytes::BytesMut;
use std::time::Instant;
use tokio::net::TcpStream;
use tokio::time::{Duration, sleep};
use tracing::debug;

use crate::http::close::graceful_close;
use crate::http::parser::parse_request;
use crate::http::reader::read_request;
use crate::http::request::Request;
use crate::http::response::{Response, snooze_body};
use crate::http::route::{self, Route};
use crate::http::writer::ResponseWriter;
use crate::logging::{self, RequestLog};

/// One accepted socket, driven from accept to close. Never reused.
pub struct Connection {
    state: ConnectionState,
    default_message: String,
}

/// Each state owns the stream; `Closing` hands it to the closer, so the
/// descriptor is released on every path. No state re-enters on error.
pub enum ConnectionState {
    Reading(TcpStream),
    Routing(TcpStream, BytesMut),
    Responding(TcpStream, Route),
    Closing(TcpStream),
    Done,
}

impl Connection {
    pub fn new(stream: TcpStream, default_message: String) -> Self {
        Self {
            state: ConnectionState::Reading(stream),
            default_message,
        }
    }

    /// Drives the state machine to completion and emits exactly one summary
    /// log entry, even when nothing parsable ever arrived.
    pub async fn run(mut self) {
        let started = Instant::now();
        let mut request = Request::default();

        loop {
            self.state = match self.state {
                ConnectionState::Reading(mut stream) => {
                    let buf = read_request(&mut stream).await;
                    if buf.is_empty() {
                        // immediate peer close: no response attempt
                        ConnectionState::Closing(stream)
                    } else {
                        ConnectionState::Routing(stream, buf)
                    }
                }

                ConnectionState::Routing(stream, buf) => {
                    request = parse_request(&buf);
                    let route = route::resolve(&request.path);
                    if let Route::Snooze(seconds) = route {
                        request.snooze_seconds = seconds;
                    }
                    ConnectionState::Responding(stream, route)
                }

                ConnectionState::Responding(mut stream, route) => {
                    let body = match route {
                        Route::Snooze(seconds) => {
                            if seconds > 0 {
                                sleep(Duration::from_secs(seconds)).await;
                            }
                            snooze_body(seconds)
                        }
                        Route::Default => self.default_message.clone(),
                    };

                    match Response::ok(body) {
                        Some(response) => {
                            let mut writer = ResponseWriter::new(response);
                            if let Err(e) = writer.write_to_stream(&mut stream).await {
                                debug!("response write aborted: {}", e);
                            }
                        }
                        None => {
                            debug!("header block over its ceiling, closing without response");
                        }
                    }

                    ConnectionState::Closing(stream)
                }

                ConnectionState::Closing(stream) => {
                    graceful_close(stream).await;
                    ConnectionState::Done
                }

                ConnectionState::Done => break,
            };
        }

        logging::record(&RequestLog {
            method: &request.method,
            path: &request.path,
            user_agent: &request.user_agent,
            other_headers: &request.other_headers,
            exec_time_seconds: started.elapsed().as_secs_f64(),
        });
    }
}
