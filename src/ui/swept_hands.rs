//! Stroked hands

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::{Rgb565, RgbColor},
    primitives::{Circle, Line, Primitive, PrimitiveStyle},
    Drawable,
};

use super::{ColorMode, FaceGeometry, Hand, WatchFace, WatchFaceState};
use crate::{
    geometry::{position, Angle},
    host::{LayerKind, TimeUnit},
};

pub const BACKGROUND: ColorMode = Rgb565::BLACK;
pub const HAND_COLOR: ColorMode = Rgb565::WHITE;
pub const SECOND_COLOR: ColorMode = Rgb565::RED;

/// Hour and minute hands as straight strokes from the center.
///
/// With `seconds` a red dot marks where the second hand would point and the
/// face updates every second; otherwise a dot covers the pivot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweptHands {
    pub seconds: bool,
}

impl WatchFace for SweptHands {
    fn granularity(&self) -> TimeUnit {
        if self.seconds {
            TimeUnit::Second
        } else {
            TimeUnit::Minute
        }
    }

    fn layers(&self) -> &'static [LayerKind] {
        &[LayerKind::Background, LayerKind::Hands]
    }

    fn draw<D>(
        &self,
        layer: LayerKind,
        geometry: &FaceGeometry,
        state: &WatchFaceState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        match layer {
            LayerKind::Background => target.fill_solid(&geometry.bounds, BACKGROUND),
            LayerKind::Hands => {
                let center = geometry.center;
                draw_hand(target, center, state.angles.hour, geometry.hour_hand, HAND_COLOR)?;
                draw_hand(target, center, state.angles.minute, geometry.minute_hand, HAND_COLOR)?;
                if self.seconds {
                    let tip = position(state.angles.second, geometry.second_hand.length, center);
                    draw_dot(target, tip, geometry.dot_radius, SECOND_COLOR)
                } else {
                    draw_dot(target, center, geometry.dot_radius, HAND_COLOR)
                }
            }
            LayerKind::Text => Ok(()),
        }
    }
}

/// Stroke a hand from the center towards `angle`
pub(super) fn draw_hand<D>(
    target: &mut D,
    center: Point,
    angle: Angle,
    hand: Hand,
    color: ColorMode,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = ColorMode>,
{
    Line::new(position(angle, hand.length, center), center)
        .into_styled(PrimitiveStyle::with_stroke(color, hand.width))
        .draw(target)
}

pub(super) fn draw_dot<D>(
    target: &mut D,
    center: Point,
    radius: i32,
    color: ColorMode,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = ColorMode>,
{
    Circle::with_center(center, (2 * radius + 1) as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}
