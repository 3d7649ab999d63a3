use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Capacity of the per-connection request buffer.
pub const MAX_REQUEST_BYTES: usize = 4096;

const TERMINATOR: &[u8] = b"\r\n\r\n";

/// Outcome of framing one request head off a connection.
#[derive(Debug)]
pub enum FrameOutcome {
    /// A complete request head, ending at (and including) `\r\n\r\n`.
    Complete(BytesMut),
    /// The buffer filled to capacity before a terminator arrived.
    TooLarge,
    /// The peer closed the stream before sending a complete head.
    NoRequest,
}

/// Reads from `stream` until the buffer holds `\r\n\r\n`, the buffer is
/// full, or the peer hangs up.
///
/// Bytes past the terminator are discarded; pipelined requests are not
/// supported. The buffer never grows past [`MAX_REQUEST_BYTES`], so a
/// request head with no terminator yields a definite [`FrameOutcome::TooLarge`]
/// instead of reading forever.
pub async fn frame_request<S>(stream: &mut S) -> anyhow::Result<FrameOutcome>
where
    S: AsyncRead + Unpin,
{
    let mut buffer = BytesMut::with_capacity(MAX_REQUEST_BYTES);
    let mut temp = [0u8; 1024];

    loop {
        // Try to find the terminator in whatever we already have
        if let Some(end) = find_terminator(&buffer) {
            buffer.truncate(end + TERMINATOR.len());
            return Ok(FrameOutcome::Complete(buffer));
        }

        if buffer.len() >= MAX_REQUEST_BYTES {
            return Ok(FrameOutcome::TooLarge);
        }

        // Read more data, but never past the buffer's capacity
        let room = (MAX_REQUEST_BYTES - buffer.len()).min(temp.len());
        let n = stream.read(&mut temp[..room]).await?;

        if n == 0 {
            // Client closed connection
            return Ok(FrameOutcome::NoRequest);
        }

        buffer.extend_from_slice(&temp[..n]);
    }
}

fn find_terminator(buf: &[u8]) -> Option<usize> {
    buf.windows(TERMINATOR.len())
        .position(|w| w == TERMINATOR)
}
