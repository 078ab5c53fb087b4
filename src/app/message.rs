// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer_host;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Host(viewer_host::Message),
    /// Periodic tick driving the loading spinner.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PANO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional asset root override; wins over `[gallery] asset_root`.
    pub asset_root: Option<String>,
    /// Image reference to select at startup (e.g. `/photo/earth.jpg`).
    pub initial_image: Option<String>,
}
