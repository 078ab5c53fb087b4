// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip listing the catalog.
//!
//! The panel holds no state: each thumbnail is a button whose press message
//! is `on_choose(option.full_image_ref)`.

use crate::domain::gallery::{resolve_asset_path, ImageOption, CATALOG};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, image, tooltip, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub asset_root: &'a Path,
    pub thumbnail_size: f32,
    /// Full reference of the current selection, highlighted in the strip.
    pub selected: Option<&'a str>,
}

/// Human readable name of an image reference: the catalog label when the
/// reference is in the catalog, the reference itself otherwise.
#[must_use]
pub fn display_name(image_ref: &str) -> &str {
    ImageOption::by_full_image_ref(image_ref).map_or(image_ref, |option| option.label)
}

/// Message a click on `option`'s thumbnail produces.
pub fn thumbnail_message<M>(option: &ImageOption, on_choose: &impl Fn(String) -> M) -> M {
    on_choose(option.full_image_ref.to_string())
}

pub fn view<'a, M: Clone + 'a>(
    ctx: ViewContext<'a>,
    on_choose: impl Fn(String) -> M,
) -> Element<'a, M> {
    let heading = Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_SM);

    let strip = CATALOG.iter().fold(Row::new().spacing(spacing::SM), |row, option| {
        let message = thumbnail_message(option, &on_choose);
        row.push(thumbnail(&ctx, option, message))
    });

    Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(strip)
        .into()
}

fn thumbnail<'a, M: Clone + 'a>(
    ctx: &ViewContext<'a>,
    option: &'static ImageOption,
    message: M,
) -> Element<'a, M> {
    let size = ctx.thumbnail_size;

    let preview: Element<'a, M> = match resolve_asset_path(ctx.asset_root, option.thumbnail_ref) {
        Ok(path) => Image::new(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        Err(error) => {
            tracing::warn!(thumbnail = option.thumbnail_ref, %error, "thumbnail not shown");
            Container::new(Text::new(option.label))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
        }
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(preview)
        .push(Text::new(option.label).size(typography::CAPTION));

    let is_selected = ctx.selected == Some(option.full_image_ref);
    let thumb_button = button(content)
        .padding(spacing::XXS)
        .style(if is_selected {
            button::primary
        } else {
            button::secondary
        })
        .on_press(message);

    let hint = Container::new(
        Text::new(
            ctx.i18n
                .tr_with_args("gallery-thumbnail-tooltip", &[("name", option.label)]),
        )
        .size(typography::CAPTION),
    )
    .padding(spacing::XXS)
    .style(iced::widget::container::rounded_box);

    tooltip(thumb_button, hint, tooltip::Position::Bottom).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::cell::RefCell;

    #[test]
    fn each_option_maps_to_one_choice_with_its_full_ref() {
        let calls = RefCell::new(Vec::new());
        let record = |image_ref: String| calls.borrow_mut().push(image_ref);

        for option in &CATALOG {
            thumbnail_message(option, &record);
        }

        let expected: Vec<String> = CATALOG
            .iter()
            .map(|option| option.full_image_ref.to_string())
            .collect();
        assert_eq!(calls.into_inner(), expected);
    }

    #[test]
    fn view_builds_one_thumbnail_per_option() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let built = RefCell::new(Vec::new());

        let _element: Element<'_, String> = view(
            ViewContext {
                i18n: &i18n,
                asset_root: Path::new("public"),
                thumbnail_size: 96.0,
                selected: Some("/photo/earth.jpg"),
            },
            |image_ref| {
                built.borrow_mut().push(image_ref.clone());
                image_ref
            },
        );

        let built = built.into_inner();
        assert_eq!(built.len(), CATALOG.len());
        for option in &CATALOG {
            assert_eq!(
                built.iter().filter(|r| r.as_str() == option.full_image_ref).count(),
                1
            );
        }
    }

    #[test]
    fn display_name_prefers_catalog_label() {
        assert_eq!(display_name("/photo/earth.jpg"), "地球");
        assert_eq!(display_name("/photo/other.jpg"), "/photo/other.jpg");
    }
}
