//! Digital watchface

use embedded_graphics::{
    draw_target::DrawTarget,
    mono_font::MonoTextStyle,
    pixelcolor::{Rgb565, RgbColor},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use profont::PROFONT_24_POINT;

use super::{ColorMode, FaceGeometry, WatchFace, WatchFaceState};
use crate::host::{LayerKind, TimeUnit};

/// Dark candy apple red
pub const BACKGROUND: ColorMode = Rgb565::new(21, 0, 0);
pub const TEXT_COLOR: ColorMode = Rgb565::BLACK;

/// The time as large centered text
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Digital;

impl WatchFace for Digital {
    fn granularity(&self) -> TimeUnit {
        TimeUnit::Minute
    }

    fn layers(&self) -> &'static [LayerKind] {
        &[LayerKind::Background, LayerKind::Text]
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
            LayerKind::Text => {
                let character_style = MonoTextStyle::new(&PROFONT_24_POINT, TEXT_COLOR);
                let text_style = TextStyleBuilder::new()
                    .alignment(Alignment::Center)
                    .baseline(Baseline::Middle)
                    .build();
                Text::with_text_style(
                    state.time_label.as_str(),
                    geometry.time_bounds.center(),
                    character_style,
                    text_style,
                )
                .draw(target)?;
                Ok(())
            }
            LayerKind::Hands => Ok(()),
        }
    }
}
