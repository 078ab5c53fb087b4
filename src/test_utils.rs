// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the panorama viewer port.
//!
//! [`RecordingViewer`] records every configuration it is asked to construct
//! and every disposal, and hands out ready signals that never resolve, so
//! tests drive readiness explicitly through the host.
//!
//! ```
//! use iced_pano::application::port::{ContainerHandle, PanoramaViewer, ViewerConfig};
//! use iced_pano::test_utils::RecordingViewer;
//!
//! let recorder = RecordingViewer::new();
//! let mut viewer = recorder.clone();
//! let container = ContainerHandle { id: "container", height_px: 480.0 };
//! let _ = viewer.construct(ViewerConfig::new("/photo/earth.jpg", container));
//!
//! assert_eq!(recorder.construct_count(), 1);
//! ```

use crate::application::port::panorama::{
    Construction, PanoramaViewer, ViewerConfig, ViewerError, ViewerInstance,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Log {
    constructed: Vec<ViewerConfig>,
    disposed: Vec<String>,
}

/// Viewer that records calls instead of loading anything.
///
/// Clones share the same log, so a test keeps one clone for inspection and
/// boxes another into the host.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewer {
    log: Arc<Mutex<Log>>,
    refuse_with: Option<ViewerError>,
}

impl RecordingViewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A viewer whose every construction fails with `error`.
    #[must_use]
    pub fn refusing(error: ViewerError) -> Self {
        Self {
            refuse_with: Some(error),
            ..Self::default()
        }
    }

    /// Configurations passed to `construct`, in call order.
    #[must_use]
    pub fn constructed(&self) -> Vec<ViewerConfig> {
        lock(&self.log).constructed.clone()
    }

    #[must_use]
    pub fn construct_count(&self) -> usize {
        lock(&self.log).constructed.len()
    }

    /// Source references of the instances disposed so far, in order.
    #[must_use]
    pub fn disposed(&self) -> Vec<String> {
        lock(&self.log).disposed.clone()
    }
}

impl PanoramaViewer for RecordingViewer {
    fn construct(&mut self, config: ViewerConfig) -> Result<Construction, ViewerError> {
        if let Some(error) = &self.refuse_with {
            return Err(error.clone());
        }
        lock(&self.log).constructed.push(config.clone());

        Ok(Construction {
            instance: Box::new(RecordingInstance {
                config,
                log: Arc::clone(&self.log),
                disposed: false,
            }),
            ready: Box::pin(futures_util::future::pending()),
        })
    }
}

struct RecordingInstance {
    config: ViewerConfig,
    log: Arc<Mutex<Log>>,
    disposed: bool,
}

impl ViewerInstance for RecordingInstance {
    fn config(&self) -> &ViewerConfig {
        &self.config
    }

    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            lock(&self.log)
                .disposed
                .push(self.config.source_image_ref.clone());
        }
    }
}

fn lock(log: &Mutex<Log>) -> MutexGuard<'_, Log> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}
