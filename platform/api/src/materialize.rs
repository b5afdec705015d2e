use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

pub type MaterializeResult<T> = Result<T, MaterializeError>;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("image request failed")]
    Transport(#[source] reqwest::Error),
    #[error("image download failed with status {status}")]
    DownloadFailed { status: u16 },
    #[error("unable to read image response")]
    UnreadableResponse(#[source] reqwest::Error),
    #[error("failed to write image to temporary file")]
    WriteFailed(#[from] std::io::Error),
}

/// Downloads a remote image into a locally readable temporary file so the
/// host clipboard can reference a path instead of a URL.
#[derive(Clone, Debug, Default)]
pub struct Materializer {
    http: reqwest::Client,
}

impl Materializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `url` and persist the bytes under a freshly allocated temp
    /// directory, named `{suggested_name}.png` (or `image.png`). A unique
    /// parent directory per call keeps repeated names from colliding.
    ///
    /// The caller owns the returned path for the duration of the clipboard
    /// operation; cleanup is left to the host temp-directory policy.
    pub async fn materialize(
        &self,
        url: &str,
        suggested_name: Option<&str>,
    ) -> MaterializeResult<PathBuf> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(MaterializeError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(MaterializeError::DownloadFailed {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(MaterializeError::UnreadableResponse)?;

        let file_name = match suggested_name {
            // Path separators in a display name would escape the temp dir.
            Some(name) => format!("{}.png", name.replace(['/', '\\'], "-")),
            None => "image.png".to_string(),
        };

        let dir = tempfile::Builder::new()
            .prefix("staffdir-")
            .tempdir()?
            .keep();
        let path = dir.join(file_name);
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "image materialized");
        Ok(path)
    }
}

impl From<reqwest::Client> for Materializer {
    fn from(http: reqwest::Client) -> Self {
        Self { http }
    }
}
