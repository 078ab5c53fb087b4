// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! `image` decoders and the tokio blocking pool.
//!
//! # Available Adapters
//!
//! - [`panorama`]: Decodes panoramas from the asset root (implements [`PanoramaViewer`])
//!
//! [`PanoramaViewer`]: crate::application::port::PanoramaViewer

pub mod panorama;

pub use panorama::DecodingPanoramaViewer;
