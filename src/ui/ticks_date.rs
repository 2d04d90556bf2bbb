//! Tick ring with hands and an optional date

use embedded_graphics::{
    draw_target::DrawTarget,
    mono_font::MonoTextStyle,
    pixelcolor::{Rgb565, RgbColor},
    primitives::{Primitive, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use profont::PROFONT_14_POINT;

use super::{
    swept_hands::{draw_dot, draw_hand},
    ColorMode, FaceGeometry, WatchFace, WatchFaceState,
};
use crate::host::{LayerKind, TimeUnit};

pub const BACKGROUND: ColorMode = Rgb565::BLACK;
pub const TICK_COLOR: ColorMode = Rgb565::WHITE;
pub const HAND_COLOR: ColorMode = Rgb565::WHITE;
pub const DATE_COLOR: ColorMode = Rgb565::YELLOW;

/// Twelve precomputed tick marks on the background, stroked hour and minute
/// hands above and, with `date`, the weekday and day of month on top.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicksDate {
    pub date: bool,
}

impl WatchFace for TicksDate {
    fn granularity(&self) -> TimeUnit {
        TimeUnit::Minute
    }

    fn layers(&self) -> &'static [LayerKind] {
        if self.date {
            &[LayerKind::Background, LayerKind::Hands, LayerKind::Text]
        } else {
            &[LayerKind::Background, LayerKind::Hands]
        }
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
            LayerKind::Background => {
                target.fill_solid(&geometry.bounds, BACKGROUND)?;
                for tick in &geometry.ticks {
                    tick.line
                        .into_styled(PrimitiveStyle::with_stroke(TICK_COLOR, tick.width))
                        .draw(target)?;
                }
                Ok(())
            }
            LayerKind::Hands => {
                let center = geometry.center;
                draw_hand(target, center, state.angles.hour, geometry.hour_hand, HAND_COLOR)?;
                draw_hand(target, center, state.angles.minute, geometry.minute_hand, HAND_COLOR)?;
                draw_dot(target, center, geometry.dot_radius / 2, HAND_COLOR)
            }
            LayerKind::Text if self.date => {
                let character_style = MonoTextStyle::new(&PROFONT_14_POINT, DATE_COLOR);
                let text_style = TextStyleBuilder::new()
                    .alignment(Alignment::Center)
                    .baseline(Baseline::Middle)
                    .build();
                Text::with_text_style(
                    state.date_label.as_str(),
                    geometry.date_bounds.center(),
                    character_style,
                    text_style,
                )
                .draw(target)?;
                Ok(())
            }
            LayerKind::Text => Ok(()),
        }
    }
}
