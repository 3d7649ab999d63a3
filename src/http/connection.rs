use std::path::PathBuf;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::warn;

use crate::http::framer::{self, FrameOutcome};
use crate::http::parser;
use crate::http::path;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::{self, StreamError};

/// Drives one accepted connection through its lifecycle.
///
/// Generic over the stream so tests can run it over an in-memory duplex
/// pipe instead of a real socket.
pub struct Connection<S> {
    stream: S,
    root: PathBuf,
    state: ConnectionState,
}

pub enum ConnectionState {
    Framing,
    Parsing(BytesMut),
    Validating(Request),
    Streaming(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: PathBuf) -> Self {
        Self {
            stream,
            root,
            state: ConnectionState::Framing,
        }
    }

    /// Runs the state machine: `Framing → Parsing → Validating →
    /// Streaming → Closed`.
    ///
    /// A failure in Framing, Parsing or Validating jumps to Streaming
    /// with a 400 response; a peer that hangs up before completing a
    /// request head jumps straight to Closed. Exactly one response is
    /// written per connection, then the stream is dropped. No retries.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Framing => {
                    match framer::frame_request(&mut self.stream).await? {
                        FrameOutcome::Complete(head) => {
                            self.state = ConnectionState::Parsing(head);
                        }

                        FrameOutcome::TooLarge => {
                            warn!("Request head exceeded buffer capacity");
                            self.state = ConnectionState::Streaming(Response::Error(
                                StatusCode::BadRequest,
                            ));
                        }

                        FrameOutcome::NoRequest => {
                            // Nothing to answer; tear down quietly
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Parsing(head) => match parser::parse_request_line(&head) {
                    Ok(req) => {
                        self.state = ConnectionState::Validating(req);
                    }

                    Err(e) => {
                        warn!("Malformed request: {:?}", e);
                        self.state =
                            ConnectionState::Streaming(Response::Error(StatusCode::BadRequest));
                    }
                },

                ConnectionState::Validating(req) => {
                    match path::resolve(&self.root, &req.target) {
                        Ok(resource) => {
                            self.state = ConnectionState::Streaming(Response::File(resource));
                        }

                        Err(e) => {
                            warn!("Forbidden target {:?}: {:?}", req.target, e);
                            self.state =
                                ConnectionState::Streaming(Response::Error(StatusCode::BadRequest));
                        }
                    }
                }

                ConnectionState::Streaming(response) => {
                    let result = match &response {
                        Response::File(resource) => {
                            writer::stream_file(&mut self.stream, resource).await
                        }
                        Response::Error(status) => {
                            writer::send_error(&mut self.stream, *status).await
                        }
                    };

                    match result {
                        Ok(()) => {}

                        Err(StreamError::Resource(e)) => {
                            // Missing or unreadable file: close cleanly,
                            // never hang or stream garbage
                            warn!("Resource unavailable: {}", e);
                        }

                        Err(StreamError::Connection(e)) => {
                            return Err(e.into());
                        }
                    }

                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
