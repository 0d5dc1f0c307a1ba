//! snooze - Delay-Testing HTTP Endpoint
//!
//! Core library for the per-connection request pipeline and server loop.

pub mod config;
pub mod http;
pub mod logging;
pub mod server;
