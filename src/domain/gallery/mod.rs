// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the fixed set of selectable pictures.

pub mod catalog;

pub use catalog::{resolve_asset_path, AssetPathError, ImageOption, CATALOG};
