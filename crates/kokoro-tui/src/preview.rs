//! Track preview playback through an mpv child process, one at a time.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Started,
    Stopped,
}

pub struct PreviewPlayer {
    enabled: bool,
    binary: Option<PathBuf>,
    current: Option<(String, Child)>,
}

impl PreviewPlayer {
    pub fn new(enabled: bool) -> Self {
        let binary = if enabled {
            kokoro_proto::platform::find_mpv_binary()
        } else {
            None
        };
        match &binary {
            Some(path) => info!("preview: using {:?}", path),
            None if enabled => warn!("preview: mpv not found, previews unavailable"),
            None => debug!("preview: disabled in config"),
        }
        Self {
            enabled,
            binary,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|(url, _)| url.as_str())
    }

    /// Play `url`, or stop it if it is the preview already playing. Starting a
    /// new preview stops the previous one.
    pub fn toggle(&mut self, url: &str) -> anyhow::Result<PreviewState> {
        if self.current() == Some(url) {
            self.stop();
            return Ok(PreviewState::Stopped);
        }
        if !self.enabled {
            anyhow::bail!("previews are disabled in config");
        }
        let binary = self
            .binary
            .clone()
            .context("mpv not found; install it to play previews")?;

        self.stop();
        let child = Command::new(&binary)
            .arg("--no-video")
            .arg("--really-quiet")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start {:?}", binary))?;
        info!("preview: playing {} (pid {:?})", url, child.id());
        self.current = Some((url.to_string(), child));
        Ok(PreviewState::Started)
    }

    pub fn stop(&mut self) {
        if let Some((url, mut child)) = self.current.take() {
            if let Err(e) = child.start_kill() {
                debug!("preview: kill {}: {}", url, e);
            }
            info!("preview: stopped {}", url);
        }
    }

    /// Reap a preview that finished on its own; returns its URL.
    pub fn poll(&mut self) -> Option<String> {
        let (_, child) = self.current.as_mut()?;
        match child.try_wait() {
            Ok(Some(status)) => {
                debug!("preview: mpv exited with {}", status);
                self.current.take().map(|(url, _)| url)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("preview: {}", e);
                self.current.take().map(|(url, _)| url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_player_refuses() {
        let mut player = PreviewPlayer::new(false);
        assert!(player.toggle("https://p.scdn.co/mp3-preview/1").is_err());
        assert!(player.current().is_none());
        assert!(player.poll().is_none());
    }

    #[tokio::test]
    async fn test_missing_binary_is_an_error() {
        let mut player = PreviewPlayer {
            enabled: true,
            binary: None,
            current: None,
        };
        let err = player.toggle("https://p.scdn.co/mp3-preview/1").unwrap_err();
        assert!(err.to_string().contains("mpv not found"));
    }
}
