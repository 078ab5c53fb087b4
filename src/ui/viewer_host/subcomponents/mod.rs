// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer host.
//!
//! Each sub-component has its own State and Message and a handle() method.
//! `component.rs` orchestrates them.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── loading      - Loading flag and spinner
//!     └── error_state  - Failure banner
//! ```

pub mod error_state;
pub mod loading;
