// SPDX-License-Identifier: MPL-2.0
//! Viewer host component encapsulating state and update logic.
//!
//! ```text
//! Idle ──select──► Loading ──ready──► Ready ──select──► Loading
//!                     │
//!                     └──failure──► Idle (error banner shown)
//! ```
//!
//! An empty selection leaves every state untouched.

use crate::application::port::panorama::{
    ContainerHandle, PanoramaViewer, ViewerConfig, ViewerError, ViewerInstance,
    DISPLAY_CONTAINER_ID,
};
use crate::domain::media::RawImage;
use crate::i18n::fluent::I18n;
use crate::ui::viewer_host::subcomponents::{error_state, loading};
use crate::ui::viewer_host::{self as host_view, NavigationContext};
use iced::widget::image::Handle;
use iced::{Element, Task};
use std::fmt;
use std::path::Path;

/// Messages handled by the viewer host.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery thumbnail was clicked.
    Choose(String),
    /// The ready signal of the instance built for `generation` resolved.
    ViewerReady {
        generation: u64,
        result: Result<RawImage, ViewerError>,
    },
    SpinnerTick,
    Error(error_state::Message),
}

/// Coarse state of the host, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Pieces the host renders, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Gallery,
    /// Present while the last attempt failed.
    ErrorBanner,
    DisplayContainer,
    /// Overlaid on the display container while loading.
    LoadingIndicator,
}

/// Environment passed to [`State::view`].
#[derive(Debug, Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub asset_root: &'a Path,
    pub thumbnail_size: f32,
}

/// Panorama handed back by the viewer, converted for rendering.
#[derive(Debug, Clone)]
pub struct ReadyFrame {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl ReadyFrame {
    fn from_raw(image: RawImage) -> Self {
        let (width, height) = (image.width(), image.height());
        Self {
            handle: Handle::from_rgba(width, height, image.into_rgba_bytes()),
            width,
            height,
        }
    }
}

/// Viewer host state.
///
/// `selected_image_ref` is `None` exactly when no instance exists and
/// nothing is loading.
pub struct State {
    viewer: Box<dyn PanoramaViewer>,
    selected_image_ref: Option<String>,
    loading: loading::State,
    instance: Option<Box<dyn ViewerInstance>>,
    /// Bumped on every accepted selection and on unmount; ready signals
    /// carrying an older value are dropped.
    generation: u64,
    frame: Option<ReadyFrame>,
    error: Option<error_state::State>,
    container_height: f32,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("selected_image_ref", &self.selected_image_ref)
            .field("is_loading", &self.loading.is_loading())
            .field("generation", &self.generation)
            .field("has_instance", &self.instance.is_some())
            .field("has_frame", &self.frame.is_some())
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Mounts the host with no selection.
    #[must_use]
    pub fn new(viewer: Box<dyn PanoramaViewer>, container_height: f32) -> Self {
        Self {
            viewer,
            selected_image_ref: None,
            loading: loading::State::default(),
            instance: None,
            generation: 0,
            frame: None,
            error: None,
            container_height,
        }
    }

    /// Starts showing `image_ref`, replacing whatever was shown before.
    ///
    /// The returned task resolves into [`Message::ViewerReady`] once the new
    /// instance is ready or has failed.
    pub fn handle_selection(&mut self, image_ref: &str, i18n: &I18n) -> Task<Message> {
        if image_ref.trim().is_empty() {
            tracing::debug!(error = %ViewerError::InvalidSelection, "selection ignored");
            return Task::none();
        }

        self.release_instance();
        self.frame = None;
        self.error = None;
        self.loading.handle(loading::Message::StartLoading);
        self.selected_image_ref = Some(image_ref.to_string());
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        tracing::info!(image_ref, generation, "selection accepted");

        let config = ViewerConfig::new(image_ref, self.container_handle());
        match self.viewer.construct(config) {
            Ok(construction) => {
                self.instance = Some(construction.instance);
                Task::perform(construction.ready, move |result| Message::ViewerReady {
                    generation,
                    result,
                })
            }
            Err(error) => {
                self.fail(&error, i18n);
                Task::none()
            }
        }
    }

    /// Clears the loading flag. Calling it without a pending load does
    /// nothing.
    pub fn on_viewer_ready(&mut self) {
        if !self.loading.is_loading() {
            return;
        }
        let elapsed_ms = self
            .loading
            .elapsed()
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        tracing::info!(
            image_ref = self.selected_image_ref.as_deref().unwrap_or_default(),
            generation = self.generation,
            elapsed_ms,
            "panorama ready"
        );
        self.loading.handle(loading::Message::StopLoading);
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> Task<Message> {
        match message {
            Message::Choose(image_ref) => return self.handle_selection(&image_ref, i18n),
            Message::ViewerReady { generation, result } => {
                if generation != self.generation || self.instance.is_none() {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "stale ready signal dropped"
                    );
                    return Task::none();
                }
                match result {
                    Ok(image) => {
                        self.frame = Some(ReadyFrame::from_raw(image));
                        self.on_viewer_ready();
                    }
                    Err(error) => self.fail(&error, i18n),
                }
            }
            Message::SpinnerTick => self.loading.handle(loading::Message::SpinnerTick),
            Message::Error(error_state::Message::Dismiss) => self.error = None,
            Message::Error(msg) => {
                if let Some(error) = self.error.as_mut() {
                    error.handle(msg);
                }
            }
        }
        Task::none()
    }

    /// Disposes the live instance and returns to Idle.
    pub fn unmount(&mut self) {
        self.release_instance();
        self.loading.handle(loading::Message::StopLoading);
        self.selected_image_ref = None;
        self.frame = None;
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading.is_loading() {
            Phase::Loading
        } else if self.selected_image_ref.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn selected_image_ref(&self) -> Option<&str> {
        self.selected_image_ref.as_deref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    #[must_use]
    pub fn frame(&self) -> Option<&ReadyFrame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        self.error.as_ref()
    }

    /// The display container as handed to the viewer.
    #[must_use]
    pub fn container_handle(&self) -> ContainerHandle {
        ContainerHandle {
            id: DISPLAY_CONTAINER_ID,
            height_px: self.container_height,
        }
    }

    /// What the current state renders, in drawing order.
    #[must_use]
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers = vec![Layer::Gallery];
        if self.error.is_some() {
            layers.push(Layer::ErrorBanner);
        }
        layers.push(Layer::DisplayContainer);
        if self.loading.is_loading() {
            layers.push(Layer::LoadingIndicator);
        }
        layers
    }

    #[must_use]
    pub fn shows_loading_indicator(&self) -> bool {
        self.layers().contains(&Layer::LoadingIndicator)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let navigation = self
            .frame
            .as_ref()
            .zip(self.selected_image_ref.as_deref())
            .map(|(frame, image_ref)| NavigationContext { frame, image_ref });

        host_view::view(host_view::ViewContext {
            env,
            layers: self.layers(),
            selected_image_ref: self.selected_image_ref.as_deref(),
            container_height: self.container_height,
            navigation,
            error: self.error.as_ref(),
            spinner_rotation: self.loading.spinner_rotation(),
        })
    }

    fn fail(&mut self, error: &ViewerError, i18n: &I18n) {
        let image_ref = self.selected_image_ref.take().unwrap_or_default();
        tracing::warn!(
            image_ref = %image_ref,
            generation = self.generation,
            %error,
            "panorama viewer failed"
        );
        self.release_instance();
        self.loading.handle(loading::Message::StopLoading);
        self.frame = None;
        self.error = Some(error_state::State::new(error, &image_ref, i18n));
    }

    fn release_instance(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.dispose();
            tracing::debug!(
                image_ref = %instance.config().source_image_ref,
                "viewer instance released"
            );
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.release_instance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::gallery::CATALOG;
    use crate::test_utils::RecordingViewer;

    const CONTAINER_HEIGHT: f32 = 480.0;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn host() -> (State, RecordingViewer) {
        let recorder = RecordingViewer::new();
        let state = State::new(Box::new(recorder.clone()), CONTAINER_HEIGHT);
        (state, recorder)
    }

    fn ready(generation: u64) -> Message {
        Message::ViewerReady {
            generation,
            result: Ok(RawImage::from_rgba(2, 1, vec![0; 8])),
        }
    }

    #[test]
    fn mounts_idle() {
        let (state, recorder) = host();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.selected_image_ref(), None);
        assert!(!state.is_loading());
        assert!(!state.has_instance());
        assert_eq!(recorder.construct_count(), 0);
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let i18n = i18n();
        let (mut state, recorder) = host();

        let _ = state.handle_selection("", &i18n);
        assert!(!state.is_loading());
        assert_eq!(state.selected_image_ref(), None);

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let generation = state.generation();
        let _ = state.handle_selection("   ", &i18n);

        assert!(state.is_loading());
        assert_eq!(state.selected_image_ref(), Some("/photo/earth.jpg"));
        assert_eq!(state.generation(), generation);
        assert_eq!(recorder.construct_count(), 1);
        assert!(recorder.disposed().is_empty());
    }

    #[test]
    fn selection_then_ready_clears_loading() {
        let i18n = i18n();
        let (mut state, _recorder) = host();

        let _ = state.handle_selection("/photo/sunshine.jpg", &i18n);
        state.on_viewer_ready();

        assert_eq!(state.selected_image_ref(), Some("/photo/sunshine.jpg"));
        assert!(!state.is_loading());
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn ready_without_selection_is_a_no_op() {
        let (mut state, _recorder) = host();
        state.on_viewer_ready();
        state.on_viewer_ready();

        assert_eq!(state.selected_image_ref(), None);
        assert!(!state.is_loading());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn second_selection_restarts_loading() {
        let i18n = i18n();
        let (mut state, _recorder) = host();

        let _ = state.handle_selection("/photo/factory.jpg", &i18n);
        state.on_viewer_ready();
        let _ = state.handle_selection("/photo/desert.jpg", &i18n);

        assert_eq!(state.selected_image_ref(), Some("/photo/desert.jpg"));
        assert!(state.is_loading());

        state.on_viewer_ready();
        assert_eq!(state.selected_image_ref(), Some("/photo/desert.jpg"));
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_indicator_layer_follows_loading_flag() {
        let i18n = i18n();
        let (mut state, _recorder) = host();
        assert!(!state.shows_loading_indicator());

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        assert!(state.shows_loading_indicator());

        let generation = state.generation();
        let _ = state.handle_message(ready(generation), &i18n);
        assert!(!state.shows_loading_indicator());
    }

    #[test]
    fn gallery_and_container_are_always_rendered() {
        let i18n = i18n();
        let (mut state, _recorder) = host();
        assert_eq!(state.layers(), vec![Layer::Gallery, Layer::DisplayContainer]);

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        assert_eq!(
            state.layers(),
            vec![
                Layer::Gallery,
                Layer::DisplayContainer,
                Layer::LoadingIndicator
            ]
        );
    }

    #[test]
    fn selection_constructs_viewer_with_fixed_options() {
        let i18n = i18n();
        let (mut state, recorder) = host();

        let _ = state.handle_selection("/photo/factory.jpg", &i18n);

        let constructed = recorder.constructed();
        assert_eq!(constructed.len(), 1);
        let config = &constructed[0];
        assert_eq!(config.source_image_ref, "/photo/factory.jpg");
        assert!(!config.enable_time_animation);
        assert!(config.show_navigation_bar);
        assert_eq!(config.width_percent, 100);
        assert!(!config.enable_smooth_user_moves);
        assert_eq!(config.container.id, "container");
        assert_eq!(config.container.height_px, CONTAINER_HEIGHT);
        assert!(state.is_loading());
    }

    #[test]
    fn each_catalog_option_selects_its_full_ref() {
        let i18n = i18n();
        let (mut state, recorder) = host();

        for option in &CATALOG {
            let _ = state.handle_message(Message::Choose(option.full_image_ref.to_string()), &i18n);
            assert_eq!(state.selected_image_ref(), Some(option.full_image_ref));
        }

        let sources: Vec<String> = recorder
            .constructed()
            .into_iter()
            .map(|config| config.source_image_ref)
            .collect();
        let expected: Vec<&str> = CATALOG.iter().map(|option| option.full_image_ref).collect();
        assert_eq!(sources, expected);
    }

    #[test]
    fn replacing_selection_disposes_previous_instance() {
        let i18n = i18n();
        let (mut state, recorder) = host();

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let _ = state.handle_selection("/photo/desert.jpg", &i18n);

        assert_eq!(recorder.disposed(), vec!["/photo/earth.jpg".to_string()]);
        assert!(state.has_instance());
    }

    #[test]
    fn stale_ready_does_not_clear_newer_loading() {
        let i18n = i18n();
        let (mut state, _recorder) = host();

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let stale = state.generation();
        let _ = state.handle_selection("/photo/desert.jpg", &i18n);

        let _ = state.handle_message(ready(stale), &i18n);

        assert!(state.is_loading());
        assert!(state.frame().is_none());
        assert_eq!(state.selected_image_ref(), Some("/photo/desert.jpg"));
    }

    #[test]
    fn ready_message_stores_frame() {
        let i18n = i18n();
        let (mut state, _recorder) = host();

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let generation = state.generation();
        let _ = state.handle_message(ready(generation), &i18n);

        let frame = state.frame().expect("frame stored");
        assert_eq!((frame.width, frame.height), (2, 1));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn construction_failure_returns_to_idle_with_banner() {
        let i18n = i18n();
        let recorder = RecordingViewer::refusing(ViewerError::ConstructionFailed("no".into()));
        let mut state = State::new(Box::new(recorder), CONTAINER_HEIGHT);

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_loading());
        assert!(!state.has_instance());
        assert!(state.layers().contains(&Layer::ErrorBanner));
        let error = state.error().expect("banner");
        assert_eq!(error.friendly_key(), "error-viewer-construction");
        assert_eq!(error.image_ref(), "/photo/earth.jpg");
    }

    #[test]
    fn load_failure_returns_to_idle_and_disposes() {
        let i18n = i18n();
        let (mut state, recorder) = host();

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let generation = state.generation();
        let _ = state.handle_message(
            Message::ViewerReady {
                generation,
                result: Err(ViewerError::LoadFailed("corrupt".into())),
            },
            &i18n,
        );

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.shows_loading_indicator());
        assert_eq!(recorder.disposed(), vec!["/photo/earth.jpg".to_string()]);
        assert_eq!(
            state.error().map(error_state::State::friendly_key),
            Some("error-viewer-load")
        );
    }

    #[test]
    fn new_selection_and_dismiss_clear_banner() {
        let i18n = i18n();
        let (mut state, _recorder) = host();

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let generation = state.generation();
        let _ = state.handle_message(
            Message::ViewerReady {
                generation,
                result: Err(ViewerError::LoadFailed("corrupt".into())),
            },
            &i18n,
        );
        let _ = state.handle_message(Message::Error(error_state::Message::ToggleDetails), &i18n);
        assert!(state.error().is_some_and(error_state::State::show_details));

        let _ = state.handle_message(Message::Error(error_state::Message::Dismiss), &i18n);
        assert!(state.error().is_none());

        let _ = state.handle_message(
            Message::ViewerReady {
                generation,
                result: Err(ViewerError::Disposed),
            },
            &i18n,
        );
        let _ = state.handle_selection("/photo/desert.jpg", &i18n);
        assert!(state.error().is_none());
    }

    #[test]
    fn unmount_disposes_and_drops_late_ready() {
        let i18n = i18n();
        let (mut state, recorder) = host();

        let _ = state.handle_selection("/photo/factory.jpg", &i18n);
        let generation = state.generation();
        state.unmount();

        assert_eq!(recorder.disposed(), vec!["/photo/factory.jpg".to_string()]);
        assert_eq!(state.phase(), Phase::Idle);

        let _ = state.handle_message(ready(generation), &i18n);
        assert!(state.frame().is_none());
        assert_eq!(state.selected_image_ref(), None);
    }

    #[test]
    fn drop_disposes_live_instance() {
        let i18n = i18n();
        let (mut state, recorder) = host();
        let _ = state.handle_selection("/photo/sunshine.jpg", &i18n);

        drop(state);

        assert_eq!(recorder.disposed(), vec!["/photo/sunshine.jpg".to_string()]);
    }

    #[test]
    fn spinner_ticks_only_while_loading() {
        let i18n = i18n();
        let (mut state, _recorder) = host();
        let _ = state.handle_message(Message::SpinnerTick, &i18n);
        assert_eq!(state.phase(), Phase::Idle);

        let _ = state.handle_selection("/photo/earth.jpg", &i18n);
        let _ = state.handle_message(Message::SpinnerTick, &i18n);
        assert!(state.is_loading());
    }
}
