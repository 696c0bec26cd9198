//! Interfaces to the external collaborators that supply images.
//!
//! The display session never reads files or talks to the network itself.
//! A file-open collaborator and a remote image-search collaborator hand it
//! complete, decoded images or fail outright.

use async_trait::async_trait;
use std::path::Path;

use crate::{LoadedImage, Survey, ViewerResult};

/// File-open collaborator: decodes an image file from disk.
pub trait ImageSource: Send + Sync {
    /// Decode the image at `path` with its coordinate mapping.
    fn open(&self, path: &Path) -> ViewerResult<LoadedImage>;
}

/// Remote image-search collaborator: fetches the first image matching an
/// object name or position from a sky survey.
#[async_trait]
pub trait SurveySearch: Send + Sync {
    async fn search(&self, position: &str, survey: &Survey) -> ViewerResult<LoadedImage>;
}
