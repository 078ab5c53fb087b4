// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the viewer host, localization
//! and settings.
//!
//! The `App` struct owns the viewer host and forwards its messages; window
//! lifecycle (spinner ticks, close requests) is handled here so the host only
//! sees its own state machine.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::PanoramaViewer;
use crate::i18n::fluent::I18n;
use crate::infrastructure::DecodingPanoramaViewer;
use crate::ui::gallery;
use crate::ui::viewer_host;
use config::Config;
use iced::widget::Container;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    asset_root: PathBuf,
    host: viewer_host::State,
    /// Resolved once at boot; `System` is not re-detected per frame.
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("asset_root", &self.asset_root)
            .field("host", &self.host)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings. Close requests are delivered as messages so
/// the viewer can be disposed before the window goes away.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; flags and config are consumed once.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the production app: the decoding viewer reads pictures below
    /// the asset root, and `flags.initial_image` is selected right away.
    fn new(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let asset_root = flags
            .asset_root
            .clone()
            .map_or_else(|| config.asset_root(), PathBuf::from);
        tracing::info!(
            asset_root = %asset_root.display(),
            locale = %i18n.current_locale(),
            "starting gallery"
        );

        let viewer = DecodingPanoramaViewer::new(asset_root.clone());
        let mut app = Self::with_viewer(config, i18n, asset_root, Box::new(viewer));

        let task = match flags.initial_image {
            Some(image_ref) => app.select(&image_ref),
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the app around any panorama viewer implementation.
    #[must_use]
    pub fn with_viewer(
        config: Config,
        i18n: I18n,
        asset_root: PathBuf,
        viewer: Box<dyn PanoramaViewer>,
    ) -> Self {
        let host = viewer_host::State::new(viewer, config.container_height());
        Self {
            i18n,
            theme: config.general.theme_mode.iced_theme(),
            config,
            asset_root,
            host,
        }
    }

    /// Same path as a thumbnail click.
    pub fn select(&mut self, image_ref: &str) -> Task<Message> {
        self.host
            .handle_selection(image_ref, &self.i18n)
            .map(Message::Host)
    }

    #[must_use]
    pub fn host(&self) -> &viewer_host::State {
        &self.host
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Host(msg) => self.host.handle_message(msg, &self.i18n).map(Message::Host),
            Message::Tick(_instant) => self
                .host
                .handle_message(viewer_host::Message::SpinnerTick, &self.i18n)
                .map(Message::Host),
            Message::WindowCloseRequested(window_id) => {
                tracing::debug!(?window_id, "close requested, unmounting viewer");
                self.host.unmount();
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self
            .host
            .view(viewer_host::ViewEnv {
                i18n: &self.i18n,
                asset_root: &self.asset_root,
                thumbnail_size: self.config.thumbnail_size(),
            })
            .map(Message::Host);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.host.selected_image_ref() {
            Some(image_ref) => self.i18n.tr_with_args(
                "window-title-with-image",
                &[("name", gallery::display_name(image_ref))],
            ),
            None => self.i18n.tr("window-title"),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.host.is_loading()),
            subscription::create_close_subscription(),
        ])
    }
}
