// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: the viewer host
//! owns its state and renders the stateless gallery panel.
//!
//! - [`viewer_host`] - Selection/ready state machine and display container
//! - [`gallery`] - Thumbnail strip for the picture catalog
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod theming;
pub mod viewer_host;
pub mod widgets;
