use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{self, StatusCode};

/// File contents are copied to the socket in chunks of this size.
const CHUNK_SIZE: usize = 4096;

/// What went wrong while streaming a response.
///
/// The two sides of the copy fail differently: a broken resource leaves
/// the socket usable enough for a clean close, a broken socket does not.
#[derive(Debug)]
pub enum StreamError {
    /// The resource could not be opened or read.
    Resource(std::io::Error),
    /// The socket write failed.
    Connection(std::io::Error),
}

/// Writes an error head (no body) to the client.
pub async fn send_error<S>(stream: &mut S, status: StatusCode) -> Result<(), StreamError>
where
    S: AsyncWrite + Unpin,
{
    let head = response::error_head(status);

    stream
        .write_all(head.as_bytes())
        .await
        .map_err(StreamError::Connection)?;
    stream.flush().await.map_err(StreamError::Connection)
}

/// Streams a file to the client behind the fixed 200 head.
///
/// The file is opened before any bytes are written, so a missing or
/// unreadable resource closes the connection without a misleading
/// success head on the wire. The copy loop stops on the first
/// zero-length read; a file read error mid-stream stops the copy and
/// surfaces as [`StreamError::Resource`].
pub async fn stream_file<S>(stream: &mut S, path: &Path) -> Result<(), StreamError>
where
    S: AsyncWrite + Unpin,
{
    let mut file = File::open(path).await.map_err(StreamError::Resource)?;

    stream
        .write_all(response::SUCCESS_HEAD.as_bytes())
        .await
        .map_err(StreamError::Connection)?;

    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut chunk).await.map_err(StreamError::Resource)?;

        if n == 0 {
            // End of file
            break;
        }

        stream
            .write_all(&chunk[..n])
            .await
            .map_err(StreamError::Connection)?;
    }

    stream.flush().await.map_err(StreamError::Connection)
}
