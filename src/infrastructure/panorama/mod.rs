// SPDX-License-Identifier: MPL-2.0
//! Panorama viewer backed by the `image` crate decoders.
//!
//! Construction is cheap and synchronous: it validates the configuration and
//! resolves the image reference below the asset root. Decoding happens when
//! the ready signal is polled, on tokio's blocking pool, so the UI thread
//! never touches the file.

use crate::application::port::panorama::{
    Construction, PanoramaViewer, ReadySignal, ViewerConfig, ViewerError, ViewerInstance,
};
use crate::domain::gallery::resolve_asset_path;
use crate::domain::media::RawImage;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Viewer that decodes the selected picture from disk.
#[derive(Debug, Clone)]
pub struct DecodingPanoramaViewer {
    asset_root: PathBuf,
}

impl DecodingPanoramaViewer {
    #[must_use]
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
        }
    }

    #[must_use]
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}

impl PanoramaViewer for DecodingPanoramaViewer {
    fn construct(&mut self, config: ViewerConfig) -> Result<Construction, ViewerError> {
        config.validate()?;
        let path = resolve_asset_path(&self.asset_root, &config.source_image_ref)
            .map_err(|e| ViewerError::ConstructionFailed(e.to_string()))?;

        tracing::debug!(
            image_ref = %config.source_image_ref,
            path = %path.display(),
            container = config.container.id,
            "panorama viewer constructed"
        );

        let disposed = Arc::new(AtomicBool::new(false));
        let ready: ReadySignal = Box::pin(load_panorama(path, Arc::clone(&disposed)));
        let instance = DecodingInstance { config, disposed };

        Ok(Construction {
            instance: Box::new(instance),
            ready,
        })
    }
}

/// Instance handed to the host; disposal cancels a pending load.
#[derive(Debug)]
struct DecodingInstance {
    config: ViewerConfig,
    disposed: Arc<AtomicBool>,
}

impl ViewerInstance for DecodingInstance {
    fn config(&self) -> &ViewerConfig {
        &self.config
    }

    fn dispose(&mut self) {
        if !self.disposed.swap(true, Ordering::AcqRel) {
            tracing::debug!(image_ref = %self.config.source_image_ref, "panorama viewer disposed");
        }
    }
}

async fn load_panorama(path: PathBuf, disposed: Arc<AtomicBool>) -> Result<RawImage, ViewerError> {
    if disposed.load(Ordering::Acquire) {
        return Err(ViewerError::Disposed);
    }

    let decoded = tokio::task::spawn_blocking(move || decode_rgba(&path))
        .await
        .map_err(|e| ViewerError::LoadFailed(format!("decoder task failed: {e}")))??;

    // The file may finish decoding after the host moved on.
    if disposed.load(Ordering::Acquire) {
        return Err(ViewerError::Disposed);
    }
    Ok(decoded)
}

/// Decodes the file at `path` into RGBA8 pixels.
///
/// # Errors
///
/// Returns [`ViewerError::LoadFailed`] when the file is missing, unreadable
/// or not a supported image.
pub fn decode_rgba(path: &Path) -> Result<RawImage, ViewerError> {
    let image = image_rs::open(path).map_err(|e| match e {
        image_rs::ImageError::IoError(io) => {
            ViewerError::LoadFailed(format!("{}: {io}", path.display()))
        }
        other => ViewerError::LoadFailed(other.to_string()),
    })?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RawImage::from_rgba(width, height, rgba.into_raw()))
}
