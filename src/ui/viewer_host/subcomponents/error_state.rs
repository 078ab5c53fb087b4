// SPDX-License-Identifier: MPL-2.0
//! Failure banner shown when a panorama could not be displayed.

use crate::application::port::ViewerError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

/// Error state for displaying user-friendly errors with optional details.
#[derive(Debug, Clone)]
pub struct State {
    /// i18n key for the friendly error message.
    friendly_key: &'static str,
    /// Translated friendly error message.
    friendly_text: String,
    /// Technical error details.
    details: String,
    /// Image the failed selection pointed at.
    image_ref: String,
    show_details: bool,
}

/// Messages for the error state sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
    /// Hide the banner (handled by orchestrator).
    Dismiss,
}

impl State {
    /// Create the banner for a viewer failure on `image_ref`.
    #[must_use]
    pub fn new(error: &ViewerError, image_ref: &str, i18n: &I18n) -> Self {
        let friendly_key = error.i18n_key();
        Self {
            friendly_key,
            friendly_text: i18n.tr(friendly_key),
            details: error.to_string(),
            image_ref: image_ref.to_string(),
            show_details: false,
        }
    }

    /// Handle an error state message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
            Message::Dismiss => { /* handled by orchestrator */ }
        }
    }

    #[must_use]
    pub fn friendly_text(&self) -> &str {
        &self.friendly_text
    }

    /// Get the technical error details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Check if details are currently shown.
    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }
}

/// Renders the banner: summary line, details toggle and dismiss button.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let toggle_label = if state.show_details {
        i18n.tr("error-details-hide")
    } else {
        i18n.tr("error-details-show")
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(toggle_label).size(typography::CAPTION))
                .on_press(Message::ToggleDetails),
        )
        .push(
            button(Text::new(i18n.tr("error-dismiss")).size(typography::CAPTION))
                .on_press(Message::Dismiss),
        );

    let summary = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(state.friendly_text.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(actions);

    let mut content = Column::new().spacing(spacing::XS).push(summary);

    if state.show_details {
        content = content.push(
            Text::new(state.details.as_str())
                .size(typography::CAPTION)
                .width(Length::Fill),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(banner_style)
        .into()
}

fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
