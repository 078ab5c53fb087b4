// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the UI and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports from its update loop

pub mod port;
