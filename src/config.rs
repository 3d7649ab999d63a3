use std::path::PathBuf;

use anyhow::Context;

/// Server configuration, taken from the command line.
///
/// Exactly two positional arguments: the port to listen on and the
/// directory to serve files out of. No flags, no environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub root: PathBuf,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        let mut args = std::env::args().skip(1);

        let port = args
            .next()
            .context("usage: fileserv <port> <root-dir>")?;
        let root = args
            .next()
            .context("usage: fileserv <port> <root-dir>")?;

        let port: u16 = port
            .parse()
            .with_context(|| format!("invalid port: {port}"))?;

        Ok(Self {
            listen_addr: format!("0.0.0.0:{port}"),
            root: PathBuf::from(root),
        })
    }
}
