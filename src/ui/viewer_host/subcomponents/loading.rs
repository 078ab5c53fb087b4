// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.
//!
//! There is no timeout: the flag stays set until the viewer reports ready
//! or failed, however long that takes.

use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Loading state for the viewer host.
#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    /// When loading started (for logging how long the viewer took).
    started_at: Option<Instant>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A selection was accepted.
    StartLoading,
    /// The viewer became ready or failed.
    StopLoading,
    /// Animate the spinner.
    SpinnerTick,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::StartLoading => {
                self.is_loading = true;
                self.started_at = Some(Instant::now());
                self.spinner_rotation = 0.0;
            }
            Message::StopLoading => {
                self.is_loading = false;
                self.started_at = None;
                self.spinner_rotation = 0.0;
            }
            Message::SpinnerTick => {
                if self.is_loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Time since loading started, if currently loading.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|started| started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_loading_sets_state() {
        let mut state = State::default();
        assert!(!state.is_loading());

        state.handle(Message::StartLoading);

        assert!(state.is_loading());
        assert!(state.elapsed().is_some());
    }

    #[test]
    fn stop_loading_clears_state() {
        let mut state = State::default();
        state.handle(Message::StartLoading);
        state.handle(Message::SpinnerTick);
        state.handle(Message::StopLoading);

        assert!(!state.is_loading());
        assert!(state.elapsed().is_none());
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn stop_loading_twice_is_harmless() {
        let mut state = State::default();
        state.handle(Message::StopLoading);
        state.handle(Message::StopLoading);
        assert!(!state.is_loading());
    }

    #[test]
    fn spinner_tick_advances_rotation_only_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner_rotation(), 0.0);

        state.handle(Message::StartLoading);
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn spinner_rotation_wraps_around() {
        let mut state = State::default();
        state.handle(Message::StartLoading);
        for _ in 0..100 {
            state.handle(Message::SpinnerTick);
        }
        assert!(state.spinner_rotation() <= std::f32::consts::TAU);
    }
}
