//! Handing contact links to the host environment
//!
//! The dispatcher only decides *which* URI a social command wants; how the
//! host actually navigates there is behind [`UriOpener`].

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

static SUPPORTED_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(https?://[^\s]+|mailto:[^\s@]+@[^\s@]+)$").expect("URI pattern is valid")
});

/// Whether a URI uses one of the schemes we are willing to open
pub fn is_supported_uri(uri: &str) -> bool {
    SUPPORTED_URI.is_match(uri)
}

/// Opens external URIs on behalf of the contact terminal
pub trait UriOpener: Send + Sync {
    fn open(&self, uri: &str) -> Result<()>;
}

/// Launches the platform's default handler for a URI
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn launcher(uri: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(uri);
            cmd
        }

        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", uri]);
            cmd
        }

        #[cfg(not(any(target_os = "macos", windows)))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(uri);
            cmd
        }
    }
}

impl UriOpener for SystemOpener {
    fn open(&self, uri: &str) -> Result<()> {
        if !is_supported_uri(uri) {
            return Err(Error::UnsupportedUri {
                uri: uri.to_string(),
            });
        }

        debug!("Launching system handler for {}", uri);
        launch_reaped(Self::launcher(uri), uri).map(|_| ())
    }
}

/// Spawn a launcher and wait for it on a helper thread
///
/// The launcher exits once it has handed the URI over and must be reaped.
fn launch_reaped(mut cmd: Command, uri: &str) -> Result<thread::JoinHandle<Option<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::OpenFailed {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

    let uri = uri.to_string();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                warn!("Launcher for {} exited with {}", uri, status);
            }
            Some(status)
        }
        Err(e) => {
            warn!("Could not wait for launcher of {}: {}", uri, e);
            None
        }
    }))
}

/// Remembers requested URIs instead of opening them
///
/// Used by `--dry-run` and by tests that need to observe deferred opens.
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs requested so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|uris| uris.clone())
            .unwrap_or_default()
    }
}

impl UriOpener for RecordingOpener {
    fn open(&self, uri: &str) -> Result<()> {
        if !is_supported_uri(uri) {
            return Err(Error::UnsupportedUri {
                uri: uri.to_string(),
            });
        }

        info!("(dry run) would open {}", uri);
        self.opened
            .lock()
            .map_err(|_| Error::Other("opener log poisoned".to_string()))?
            .push(uri.to_string());
        Ok(())
    }
}
