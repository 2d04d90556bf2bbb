//! Polygon hands

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::{Rgb565, RgbColor},
    primitives::{Circle, Primitive, PrimitiveStyle, Triangle},
    Drawable,
};

use super::{swept_hands::draw_dot, ColorMode, FaceGeometry, WatchFace, WatchFaceState};
use crate::{
    geometry::{rotate, scale, Angle},
    host::{LayerKind, TimeUnit},
};

pub const BACKGROUND: ColorMode = Rgb565::BLACK;
pub const OUTLINE_COLOR: ColorMode = Rgb565::new(10, 20, 10);
pub const HAND_COLOR: ColorMode = Rgb565::WHITE;
pub const SECOND_COLOR: ColorMode = Rgb565::RED;

/// Tapered filled hands rotated about the center, inside a circular outline
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TriangularHands {
    pub seconds: bool,
}

impl WatchFace for TriangularHands {
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
        let center = geometry.center;
        match layer {
            LayerKind::Background => {
                target.fill_solid(&geometry.bounds, BACKGROUND)?;
                let diameter = 2 * (geometry.radius - scale(2, geometry.radius));
                Circle::with_center(center, diameter.max(1) as u32)
                    .into_styled(PrimitiveStyle::with_stroke(OUTLINE_COLOR, 1))
                    .draw(target)
            }
            LayerKind::Hands => {
                fill_path(target, &geometry.hour_path, state.angles.hour, center, HAND_COLOR)?;
                fill_path(target, &geometry.minute_path, state.angles.minute, center, HAND_COLOR)?;
                if self.seconds {
                    fill_path(
                        target,
                        &geometry.second_path,
                        state.angles.second,
                        center,
                        SECOND_COLOR,
                    )?;
                }
                draw_dot(target, center, geometry.dot_radius / 2, HAND_COLOR)
            }
            LayerKind::Text => Ok(()),
        }
    }
}

/// Fill a convex path rotated by `angle` about `center` as a triangle fan
fn fill_path<D>(
    target: &mut D,
    path: &[Point],
    angle: Angle,
    center: Point,
    color: ColorMode,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = ColorMode>,
{
    let Some((&first, rest)) = path.split_first() else {
        return Ok(());
    };
    let pivot = rotate(first, angle, center);
    let style = PrimitiveStyle::with_fill(color);
    for pair in rest.windows(2) {
        Triangle::new(
            pivot,
            rotate(pair[0], angle, center),
            rotate(pair[1], angle, center),
        )
        .into_styled(style)
        .draw(target)?;
    }
    Ok(())
}
