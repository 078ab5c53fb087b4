// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **General**: Logging
//! - **Gallery**: Asset root and thumbnail strip
//! - **Viewer**: Display container and spinner

// ==========================================================================
// General Defaults
// ==========================================================================

/// Default tracing filter directive when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Directory that `/photo/...` references are resolved against.
pub const DEFAULT_ASSET_ROOT: &str = "public";

/// Default edge length of a gallery thumbnail (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 96.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 32.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 256.0;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Height given to the display container before the viewer is bound to it.
pub const DEFAULT_CONTAINER_HEIGHT: f32 = 480.0;

/// Minimum display container height.
pub const MIN_CONTAINER_HEIGHT: f32 = 120.0;

/// Maximum display container height.
pub const MAX_CONTAINER_HEIGHT: f32 = 2160.0;

/// Interval of the spinner animation tick while loading (milliseconds).
pub const SPINNER_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_SIZE > 0.0);
    assert!(MAX_THUMBNAIL_SIZE > MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(MIN_CONTAINER_HEIGHT > 0.0);
    assert!(MAX_CONTAINER_HEIGHT > MIN_CONTAINER_HEIGHT);
    assert!(DEFAULT_CONTAINER_HEIGHT >= MIN_CONTAINER_HEIGHT);
    assert!(DEFAULT_CONTAINER_HEIGHT <= MAX_CONTAINER_HEIGHT);

    assert!(SPINNER_TICK_MS > 0);
};
