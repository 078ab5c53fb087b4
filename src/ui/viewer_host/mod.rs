// SPDX-License-Identifier: MPL-2.0
//! Viewer host: gallery, display container and loading overlay.
//!
//! State and update logic live in [`component`]; this module renders a
//! [`ViewContext`] assembled by [`component::State::view`].

pub mod component;
pub mod subcomponents;

pub use component::{Layer, Message, Phase, ReadyFrame, State, ViewEnv};

use crate::application::port::panorama::DISPLAY_CONTAINER_ID;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::viewer_host::subcomponents::error_state;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, Column, Container, Id, Image, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub env: ViewEnv<'a>,
    pub layers: Vec<Layer>,
    pub selected_image_ref: Option<&'a str>,
    pub container_height: f32,
    pub navigation: Option<NavigationContext<'a>>,
    pub error: Option<&'a error_state::State>,
    pub spinner_rotation: f32,
}

/// The ready panorama and the reference it was loaded from.
pub struct NavigationContext<'a> {
    pub frame: &'a ReadyFrame,
    pub image_ref: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.env.i18n;
    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill);
    let mut display: Option<Stack<'_, Message>> = None;

    for layer in &ctx.layers {
        match layer {
            Layer::Gallery => {
                page = page.push(gallery::view(
                    gallery::ViewContext {
                        i18n,
                        asset_root: ctx.env.asset_root,
                        thumbnail_size: ctx.env.thumbnail_size,
                        selected: ctx.selected_image_ref,
                    },
                    Message::Choose,
                ));
            }
            Layer::ErrorBanner => {
                if let Some(error) = ctx.error {
                    page = page.push(error_state::view(error, i18n).map(Message::Error));
                }
            }
            Layer::DisplayContainer => {
                let content = match &ctx.navigation {
                    Some(navigation) => panorama_view(navigation, i18n),
                    None => placeholder_view(ctx.selected_image_ref, i18n),
                };
                display = Some(
                    Stack::new()
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .push(content),
                );
            }
            Layer::LoadingIndicator => {
                let overlay = loading_overlay(ctx.selected_image_ref, ctx.spinner_rotation, i18n);
                display = display.map(|stack| stack.push(overlay));
            }
        }
    }

    if let Some(display) = display {
        page = page.push(
            Container::new(display)
                .id(Id::new(DISPLAY_CONTAINER_ID))
                .width(Length::Fill)
                .height(Length::Fixed(ctx.container_height))
                .style(display_style),
        );
    }

    page.into()
}

fn placeholder_view<'a>(
    selected_image_ref: Option<&'a str>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    // While loading the overlay carries the text.
    let hint = if selected_image_ref.is_none() {
        i18n.tr("viewer-empty")
    } else {
        String::new()
    };

    Container::new(Text::new(hint).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn panorama_view<'a>(
    navigation: &NavigationContext<'a>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let frame = navigation.frame;
    let picture = Image::new(frame.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let width = frame.width.to_string();
    let height = frame.height.to_string();
    let dimensions = i18n.tr_with_args(
        "viewer-navbar-dimensions",
        &[("width", width.as_str()), ("height", height.as_str())],
    );

    let navbar = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(gallery::display_name(navigation.image_ref))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(Text::new(navigation.image_ref).size(typography::CAPTION))
            .push(Text::new(dimensions).size(typography::CAPTION)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
    .padding([spacing::XXS, spacing::XS])
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::GRAY_200),
        ..container::Style::default()
    });

    Column::new().push(picture).push(navbar).into()
}

fn loading_overlay<'a>(
    selected_image_ref: Option<&'a str>,
    spinner_rotation: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::WHITE, spinner_rotation).into_element::<Message>();

    let loading_text = match selected_image_ref {
        Some(image_ref) => i18n.tr_with_args(
            "viewer-loading-named",
            &[("name", gallery::display_name(image_ref))],
        ),
        None => i18n.tr("viewer-loading"),
    };

    let loading_content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(Text::new(loading_text).size(typography::BODY));

    let overlay = Container::new(loading_content)
        .padding(spacing::MD)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        });

    Container::new(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn display_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
