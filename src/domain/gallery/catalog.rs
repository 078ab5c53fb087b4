// SPDX-License-Identifier: MPL-2.0
//! The static picture catalog and asset reference resolution.
//!
//! Image references are web-style absolute paths (`/photo/earth.jpg`). They
//! are resolved against an asset root directory on disk; a reference can
//! never point outside that root.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// One selectable picture in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOption {
    /// Human-readable label, also the option key.
    pub label: &'static str,
    /// Reference of the full-resolution panorama.
    pub full_image_ref: &'static str,
    /// Reference of the thumbnail shown in the gallery strip.
    pub thumbnail_ref: &'static str,
}

/// Pictures offered by the gallery, in display order.
pub static CATALOG: [ImageOption; 4] = [
    ImageOption {
        label: "工厂",
        full_image_ref: "/photo/factory.jpg",
        thumbnail_ref: "/photo/factory-small.jpg",
    },
    ImageOption {
        label: "地球",
        full_image_ref: "/photo/earth.jpg",
        thumbnail_ref: "/photo/earth-small.jpg",
    },
    ImageOption {
        label: "太阳",
        full_image_ref: "/photo/sunshine.jpg",
        thumbnail_ref: "/photo/sunshine-small.jpg",
    },
    ImageOption {
        label: "沙漠",
        full_image_ref: "/photo/desert.jpg",
        thumbnail_ref: "/photo/desert-small.jpg",
    },
];

impl ImageOption {
    /// Looks up the catalog entry whose full-resolution reference matches.
    #[must_use]
    pub fn by_full_image_ref(reference: &str) -> Option<&'static ImageOption> {
        CATALOG
            .iter()
            .find(|option| option.full_image_ref == reference)
    }
}

/// Reasons an image reference cannot be mapped onto the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetPathError {
    /// The reference is empty or only slashes.
    Empty,
    /// The reference contains `..` or a platform prefix.
    EscapesRoot,
}

impl fmt::Display for AssetPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetPathError::Empty => write!(f, "empty image reference"),
            AssetPathError::EscapesRoot => write!(f, "image reference escapes the asset root"),
        }
    }
}

impl std::error::Error for AssetPathError {}

/// Maps an image reference onto a file below `root`.
///
/// Leading slashes are stripped so `/photo/a.jpg` becomes `<root>/photo/a.jpg`.
///
/// # Errors
///
/// Returns [`AssetPathError`] for empty references and for references that
/// would leave `root`.
pub fn resolve_asset_path(root: &Path, reference: &str) -> Result<PathBuf, AssetPathError> {
    let relative = Path::new(reference.trim_start_matches('/'));
    let mut resolved = root.to_path_buf();
    let mut pushed = false;

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                pushed = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AssetPathError::EscapesRoot);
            }
        }
    }

    if pushed {
        Ok(resolved)
    } else {
        Err(AssetPathError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_four_distinct_options() {
        let labels: HashSet<_> = CATALOG.iter().map(|o| o.label).collect();
        let refs: HashSet<_> = CATALOG.iter().map(|o| o.full_image_ref).collect();
        assert_eq!(CATALOG.len(), 4);
        assert_eq!(labels.len(), 4);
        assert_eq!(refs.len(), 4);
    }

    #[test]
    fn catalog_thumbnails_follow_small_suffix() {
        for option in &CATALOG {
            let stem = option.full_image_ref.trim_end_matches(".jpg");
            assert_eq!(option.thumbnail_ref, format!("{stem}-small.jpg"));
        }
    }

    #[test]
    fn by_full_image_ref_finds_earth() {
        let option = ImageOption::by_full_image_ref("/photo/earth.jpg").expect("earth exists");
        assert_eq!(option.label, "地球");
        assert!(ImageOption::by_full_image_ref("/photo/moon.jpg").is_none());
    }

    #[test]
    fn resolve_strips_leading_slash() {
        let path = resolve_asset_path(Path::new("public"), "/photo/factory.jpg")
            .expect("valid reference");
        assert_eq!(path, Path::new("public").join("photo").join("factory.jpg"));
    }

    #[test]
    fn resolve_accepts_relative_reference() {
        let path =
            resolve_asset_path(Path::new("public"), "./photo/desert.jpg").expect("valid reference");
        assert_eq!(path, Path::new("public").join("photo").join("desert.jpg"));
    }

    #[test]
    fn resolve_rejects_parent_components() {
        assert_eq!(
            resolve_asset_path(Path::new("public"), "/photo/../../etc/passwd"),
            Err(AssetPathError::EscapesRoot)
        );
    }

    #[test]
    fn resolve_rejects_empty_reference() {
        assert_eq!(
            resolve_asset_path(Path::new("public"), ""),
            Err(AssetPathError::Empty)
        );
        assert_eq!(
            resolve_asset_path(Path::new("public"), "///"),
            Err(AssetPathError::Empty)
        );
    }
}
