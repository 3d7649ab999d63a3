//! Fileserv - Minimal HTTP/1.0 Static File Server
//!
//! Core library for request framing, parsing, path validation and
//! response streaming.

pub mod config;
pub mod http;
pub mod server;
