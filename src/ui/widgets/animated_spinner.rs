// SPDX-License-Identifier: MPL-2.0
//! Small rotating arc drawn on a Canvas, shown inside the submit button while
//! a message is being sent.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn of the spinner.
pub const REVOLUTION: Duration = Duration::from_millis(900);

const STROKE_WIDTH: f32 = 2.0;
const ARC_SEGMENTS: u16 = 24;

/// Spinner whose angle is derived from how long the operation has run.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: 0.0,
            color,
            size,
        }
    }

    /// Sets the angle from the elapsed time since the spinner appeared.
    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.rotation = rotation_for(elapsed);
        self.cache.clear();
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Angle in radians, in `[0, TAU)`.
#[must_use]
pub fn rotation_for(elapsed: Duration) -> f32 {
    let period = REVOLUTION.as_secs_f32();
    let turns = elapsed.as_secs_f32() / period;
    turns.fract() * TAU
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
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.3,
                        ..self.color
                    }),
                );

                // Quarter-turn gap, starting from the top
                let start_angle = self.rotation - PI / 2.0;
                let sweep = PI * 1.5;

                let mut arc = canvas::path::Builder::new();
                arc.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                for i in 1..=ARC_SEGMENTS {
                    let angle = start_angle + sweep * f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_at_zero() {
        assert_eq!(rotation_for(Duration::ZERO), 0.0);
    }

    #[test]
    fn rotation_wraps_after_a_revolution() {
        let half = rotation_for(REVOLUTION / 2);
        let one_and_half = rotation_for(REVOLUTION + REVOLUTION / 2);
        assert!((half - PI).abs() < 1e-3);
        assert!((one_and_half - half).abs() < 1e-3);
    }

    #[test]
    fn rotation_stays_in_range() {
        for ms in (0..5000).step_by(37) {
            let angle = rotation_for(Duration::from_millis(ms));
            assert!((0.0..TAU).contains(&angle));
        }
    }
}
