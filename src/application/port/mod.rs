// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`panorama`]: The panorama viewer collaborator bound to the display container
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `image` crate types)
//! - Traits are `Send` so hosts can be moved across threads in tests and benches
//! - Asynchronous completion is exposed as a boxed future; callers wrap it in
//!   Iced's `Task` rather than the port depending on Iced

pub mod panorama;

pub use panorama::{
    Construction, ContainerHandle, LoadingIndicator, PanoramaViewer, ReadySignal, ViewerConfig,
    ViewerError, ViewerInstance,
};
