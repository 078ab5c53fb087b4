// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a Canvas, rotated by the host's tick.
//!
//! The spinner is a ring of dots; the dot under the current rotation angle
//! is opaque and the trailing dots fade out.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Number of dots on the ring.
const DOT_COUNT: usize = 8;

/// Opacity of the faintest trailing dot.
const MIN_DOT_ALPHA: f32 = 0.15;

/// Animated spinner that rotates smoothly.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Index of the dot the rotation angle currently points at.
fn head_index(rotation: f32) -> usize {
    let turn = rotation.rem_euclid(TAU) / TAU;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (turn * DOT_COUNT as f32).floor() as usize;
    index % DOT_COUNT
}

/// Opacity of dot `index`: 1.0 at the head, fading linearly behind it.
fn dot_alpha(index: usize, rotation: f32) -> f32 {
    let behind = (head_index(rotation) + DOT_COUNT - index) % DOT_COUNT;
    #[allow(clippy::cast_precision_loss)]
    let fade = behind as f32 / DOT_COUNT as f32;
    (1.0 - fade).max(MIN_DOT_ALPHA)
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let extent = frame.width().min(frame.height()) / 2.0;
                let dot_radius = extent / 6.0;
                let ring_radius = extent - dot_radius;

                for index in 0..DOT_COUNT {
                    // -90° offset so dot 0 sits at the top
                    #[allow(clippy::cast_precision_loss)]
                    let angle = TAU * index as f32 / DOT_COUNT as f32 - TAU / 4.0;
                    let dot = Point::new(
                        center.x + ring_radius * angle.cos(),
                        center.y + ring_radius * angle.sin(),
                    );
                    frame.fill(
                        &Path::circle(dot, dot_radius),
                        Color {
                            a: self.color.a * dot_alpha(index, self.rotation),
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_follows_rotation() {
        assert_eq!(head_index(0.0), 0);
        assert_eq!(head_index(TAU / 2.0), DOT_COUNT / 2);
        assert_eq!(head_index(TAU + 0.01), 0);
        assert_eq!(head_index(-0.01), DOT_COUNT - 1);
    }

    #[test]
    fn head_dot_is_opaque_and_tail_fades() {
        assert!((dot_alpha(0, 0.0) - 1.0).abs() < f32::EPSILON);
        assert!(dot_alpha(DOT_COUNT - 1, 0.0) < 1.0);
        assert!(dot_alpha(1, 0.0) < dot_alpha(DOT_COUNT - 1, 0.0));
        for index in 0..DOT_COUNT {
            assert!(dot_alpha(index, 1.3) >= MIN_DOT_ALPHA);
        }
    }
}
