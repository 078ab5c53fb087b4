// SPDX-License-Identifier: MPL-2.0
//! `iced_pano` is a single-window panorama gallery built with the Iced GUI
//! framework.
//!
//! Clicking a thumbnail hands the picture to a panorama viewer bound to the
//! display container; a spinner is shown until the viewer reports it is
//! ready.
//!
//! # Layers
//!
//! - [`domain`] - Picture catalog and decoded image data
//! - [`application`] - Ports the UI talks to (the panorama viewer)
//! - [`infrastructure`] - Adapters implementing those ports
//! - [`ui`] - Gallery panel, viewer host and widgets
//! - [`app`] - Iced application root, configuration and paths

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod ui;

pub use app::config;
