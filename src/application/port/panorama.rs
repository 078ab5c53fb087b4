// SPDX-License-Identifier: MPL-2.0
//! Panorama viewer port definition.
//!
//! The viewer is an external collaborator: the host constructs one instance
//! per selection, bound to the display container, and waits for the
//! instance's ready signal. Replacing or unmounting the host disposes the
//! instance.
//!
//! ```text
//! host ── construct(ViewerConfig) ──► PanoramaViewer
//!   ▲                                      │
//!   │                         Construction { instance, ready }
//!   └──────── ready resolves ◄─────────────┘
//! ```

use crate::domain::media::RawImage;
use futures_util::future::BoxFuture;
use std::fmt;

/// Identifier of the region the viewer renders into.
pub const DISPLAY_CONTAINER_ID: &str = "container";

/// Width of the viewer relative to its container.
pub const FULL_WIDTH_PERCENT: u8 = 100;

// =============================================================================
// ViewerError
// =============================================================================

/// Errors surfaced by the panorama viewer boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// A selection arrived without an image reference.
    InvalidSelection,

    /// The collaborator refused the configuration synchronously.
    ConstructionFailed(String),

    /// The collaborator was constructed but could not load the image.
    LoadFailed(String),

    /// The instance was disposed before it became ready.
    Disposed,
}

impl ViewerError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ViewerError::InvalidSelection => "error-viewer-invalid-selection",
            ViewerError::ConstructionFailed(_) => "error-viewer-construction",
            ViewerError::LoadFailed(_) => "error-viewer-load",
            ViewerError::Disposed => "error-viewer-disposed",
        }
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::InvalidSelection => write!(f, "Selection has no image reference"),
            ViewerError::ConstructionFailed(msg) => {
                write!(f, "Viewer construction failed: {msg}")
            }
            ViewerError::LoadFailed(msg) => write!(f, "Panorama failed to load: {msg}"),
            ViewerError::Disposed => write!(f, "Viewer was disposed before it was ready"),
        }
    }
}

impl std::error::Error for ViewerError {}

// =============================================================================
// Configuration
// =============================================================================

/// Handle to the display container the viewer is bound to.
///
/// The host owns the container and may resize it before handing the handle
/// over; the id is stable for the lifetime of the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerHandle {
    pub id: &'static str,
    pub height_px: f32,
}

/// Markup the viewer shows while it is loading, opaque to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingIndicator {
    class_name: &'static str,
}

impl LoadingIndicator {
    /// The spinner style used by the host's own loading overlay.
    #[must_use]
    pub fn spinner() -> Self {
        Self {
            class_name: "loader",
        }
    }

    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::spinner()
    }
}

/// Configuration record passed to [`PanoramaViewer::construct`].
///
/// Readiness is not part of the record: it comes back as the
/// [`Construction::ready`] future.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub source_image_ref: String,
    pub container: ContainerHandle,
    pub enable_time_animation: bool,
    pub show_navigation_bar: bool,
    pub width_percent: u8,
    pub loading_indicator: LoadingIndicator,
    pub enable_smooth_user_moves: bool,
}

impl ViewerConfig {
    /// Builds the configuration the gallery always uses: navigation bar on,
    /// full container width, no intro animation, no smoothed moves.
    #[must_use]
    pub fn new(source_image_ref: impl Into<String>, container: ContainerHandle) -> Self {
        Self {
            source_image_ref: source_image_ref.into(),
            container,
            enable_time_animation: false,
            show_navigation_bar: true,
            width_percent: FULL_WIDTH_PERCENT,
            loading_indicator: LoadingIndicator::spinner(),
            enable_smooth_user_moves: false,
        }
    }

    /// Checks the fields every viewer implementation relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidSelection`] for an empty source and
    /// [`ViewerError::ConstructionFailed`] for a width outside `1..=100`.
    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.source_image_ref.trim().is_empty() {
            return Err(ViewerError::InvalidSelection);
        }
        if self.width_percent == 0 || self.width_percent > FULL_WIDTH_PERCENT {
            return Err(ViewerError::ConstructionFailed(format!(
                "width must be 1-100%, got {}%",
                self.width_percent
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Viewer traits
// =============================================================================

/// Future resolved once the instance has the panorama ready to display.
pub type ReadySignal = BoxFuture<'static, Result<RawImage, ViewerError>>;

/// A live viewer bound to the display container.
pub trait ViewerInstance: Send {
    /// The configuration the instance was constructed with.
    fn config(&self) -> &ViewerConfig;

    /// Releases the instance. Calling it twice is harmless.
    ///
    /// A pending ready signal of a disposed instance resolves to
    /// [`ViewerError::Disposed`] or is never observed by the host.
    fn dispose(&mut self);
}

/// Result of a successful construction.
pub struct Construction {
    pub instance: Box<dyn ViewerInstance>,
    pub ready: ReadySignal,
}

impl fmt::Debug for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Construction")
            .field("source_image_ref", &self.instance.config().source_image_ref)
            .finish_non_exhaustive()
    }
}

/// Port for the panorama viewer collaborator.
///
/// # Example
///
/// ```ignore
/// use iced_pano::application::port::panorama::{PanoramaViewer, ViewerConfig};
///
/// fn show(viewer: &mut impl PanoramaViewer, config: ViewerConfig) {
///     match viewer.construct(config) {
///         Ok(construction) => spawn(construction.ready),
///         Err(e) => eprintln!("viewer refused: {e}"),
///     }
/// }
/// ```
pub trait PanoramaViewer: Send {
    /// Creates a viewer instance for `config.source_image_ref`.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewerError`] if the configuration cannot be honored.
    /// Failures while loading are reported through the ready signal instead.
    fn construct(&mut self, config: ViewerConfig) -> Result<Construction, ViewerError>;
}
