// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no presentation dependencies.
//!
//! This module contains pure domain types and value objects. It depends on
//! nothing but `std` so it can be tested without a renderer.
//!
//! # Modules
//!
//! - [`gallery`]: The static picture catalog ([`ImageOption`](gallery::ImageOption))
//!   and asset reference resolution
//! - [`media`]: Decoded pixel data ([`RawImage`](media::RawImage))

pub mod gallery;
pub mod media;
