//! Image references attached to events.
//!
//! Images are never fetched or read: a remote image is kept as its URL and a
//! local image as the path the user picked.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{EventClockError, EventClockResult};

/// Shown for events created without an image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageRef {
    Remote(Url),
    Local(PathBuf),
    Placeholder,
}

impl ImageRef {
    /// Parse user input into an image reference.
    ///
    /// - empty or missing input gives [`ImageRef::Placeholder`]
    /// - `http`/`https` URLs give [`ImageRef::Remote`]
    /// - `file://` URLs and plain paths give [`ImageRef::Local`] (with `~` expanded)
    pub fn parse(input: Option<&str>) -> EventClockResult<Self> {
        let input = match input.map(str::trim) {
            None | Some("") => return Ok(ImageRef::Placeholder),
            Some(s) => s,
        };

        match Url::parse(input) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(ImageRef::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(ImageRef::Local)
                    .map_err(|_| EventClockError::InvalidImage(input.to_string())),
                // Windows drive letters ("C:\...") parse as a one-letter scheme
                scheme if scheme.len() == 1 => Ok(Self::local(input)),
                scheme => Err(EventClockError::InvalidImage(format!(
                    "unsupported scheme '{scheme}' in {input}"
                ))),
            },
            Err(_) => Ok(Self::local(input)),
        }
    }

    /// Reference to a remote image. Used for seed data.
    pub fn remote(url: &str) -> EventClockResult<Self> {
        Url::parse(url)
            .map(ImageRef::Remote)
            .map_err(|e| EventClockError::InvalidImage(format!("{url}: {e}")))
    }

    fn local(path: &str) -> Self {
        ImageRef::Local(PathBuf::from(shellexpand::tilde(path).into_owned()))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageRef::Placeholder)
    }

    /// Render the reference, substituting `placeholder` when no image was given.
    pub fn describe(&self, placeholder: &str) -> String {
        match self {
            ImageRef::Remote(url) => url.to_string(),
            ImageRef::Local(path) => path.display().to_string(),
            ImageRef::Placeholder => placeholder.to_string(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(PLACEHOLDER_IMAGE_URL))
    }
}
