//! HTTP protocol implementation.
//!
//! This module implements a restricted HTTP/1.0 GET server: one request
//! per connection, request line only, no keep-alive.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the per-connection state machine
//! - **`framer`**: Buffers incoming bytes until a complete request head is available
//! - **`parser`**: Parses the request line out of the framed bytes
//! - **`request`**: Parsed request representation
//! - **`path`**: Validates the request target and resolves it against the document root
//! - **`response`**: Response wire format (status lines and fixed headers)
//! - **`writer`**: Streams the response (error head or file contents) to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Framing   │ ← Read until "\r\n\r\n" or capacity
//!        └──────┬──────┘
//!               │ Request head received
//!               ▼
//!        ┌──────────────────┐
//!        │    Parsing       │ ← Match the GET request-line grammar
//!        └──────┬───────────┘
//!               │ Parsed request
//!               ▼
//!        ┌──────────────────┐
//!        │   Validating     │ ← Confine the target to the document root
//!        └──────┬───────────┘
//!               │ Resource path
//!               ▼
//!        ┌──────────────────┐
//!        │   Streaming      │ ← Send the file, or the 400 response
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! A failure in Framing, Parsing or Validating jumps straight to Streaming
//! with a 400 response. A connection that closes before sending a request
//! head jumps straight to Closed. There is exactly one response per
//! connection.
//!
//! # Example
//!
//! ```ignore
//! use fileserv::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("0.0.0.0:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, "./www".into());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod framer;
pub mod parser;
pub mod path;
pub mod connection;
pub mod writer;
