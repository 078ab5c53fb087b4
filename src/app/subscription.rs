// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::defaults::SPINNER_TICK_MS;
use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Ticks only while a panorama is loading, so an idle window stays idle.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(SPINNER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Window close requests are intercepted to dispose the viewer first.
pub fn create_close_subscription() -> Subscription<Message> {
    window::close_requests().map(Message::WindowCloseRequested)
}
