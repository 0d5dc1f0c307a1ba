//! HTTP request pipeline.
//!
//! Deliberately not a compliant HTTP/1.1 implementation: no keep-alive, no
//! chunked encoding, no pipelining, no request bodies. Just enough protocol
//! to read one request, answer it, and close cleanly.
//!
//! # Submodules
//!
//! - **`reader`**: bounded accumulation of raw bytes off the socket
//! - **`parser`**: single-pass, infallible header parse into a [`request::Request`]
//! - **`request`**: the request record and its field capacities
//! - **`route`**: snooze-vs-default path resolution
//! - **`response`**: minimal `200 OK` framing with exact Content-Length
//! - **`writer`**: retrying response writer
//! - **`close`**: half-close + drain shutdown sequence
//! - **`connection`**: the per-connection state machine tying it together
//!
//! # Connection state machine
//!
//! ```text
//! Reading ──▶ Routing ──▶ Responding ──▶ Closing ──▶ Done
//!    │                    (sleeps first on                │
//!    │                     a snooze route)                │
//!    └────────── zero-byte read ──▶ Closing       one log entry
//! ```
//!
//! Every path, error paths included, converges on `Closing`, and `Done`
//! always emits exactly one summary log entry.

pub mod close;
pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod route;
pub mod writer;
