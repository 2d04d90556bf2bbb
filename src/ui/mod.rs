//! UI definitions module
//!
//! Four render strategies share one state struct and one static geometry.
//! [`Variant`] picks one of the seven face presets built from them.

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{
    geometry::{compute_hand_angles, HandAngles},
    host::{LayerKind, TimeUnit},
    text::{format_date, format_time, Label, Locale, DATE_BUF_LEN, TIME_BUF_LEN},
};

mod digital;
mod layout;
mod swept_hands;
mod ticks_date;
mod triangular_hands;

pub use digital::Digital;
pub use layout::{FaceGeometry, Hand, Tick, PATH_LEN, TICK_COUNT};
pub use swept_hands::SweptHands;
pub use ticks_date::TicksDate;
pub use triangular_hands::TriangularHands;

pub type ColorMode = Rgb565;

/// Render strategy of a face
pub trait WatchFace {
    /// How often the face wants to be recomputed
    fn granularity(&self) -> TimeUnit;

    /// Layers the face draws on, bottom to top
    fn layers(&self) -> &'static [LayerKind];

    /// Draw one layer from the current state
    fn draw<D>(
        &self,
        layer: LayerKind,
        geometry: &FaceGeometry,
        state: &WatchFaceState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>;
}

/// State for the watch face
///
/// Written on load and on every tick, read when painting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WatchFaceState {
    pub angles: HandAngles,
    pub time_label: Label<TIME_BUF_LEN>,
    pub date_label: Label<DATE_BUF_LEN>,
}

impl WatchFaceState {
    /// Recompute everything from a wall clock sample
    pub fn update(&mut self, now: &NaiveDateTime, use_24h: bool, locale: Locale) {
        self.angles = compute_hand_angles(now);
        self.time_label = format_time(now, use_24h);
        self.date_label = format_date(now, locale);
    }
}

/// Face presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Centered digital time
    Digital,
    /// Stroked hands and a dot travelling with the seconds
    SweptSeconds,
    /// Stroked hands, minute updates
    Swept,
    /// Polygon hands including a second hand
    TriangularSeconds,
    /// Polygon hour and minute hands
    Triangular,
    /// Tick ring with stroked hands
    Ticks,
    /// Tick ring, stroked hands and the date
    TicksDate,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Digital,
        Variant::SweptSeconds,
        Variant::Swept,
        Variant::TriangularSeconds,
        Variant::Triangular,
        Variant::Ticks,
        Variant::TicksDate,
    ];
}

macro_rules! with_strategy {
    ($variant:expr, $face:ident => $body:expr) => {
        match $variant {
            Variant::Digital => {
                let $face = Digital;
                $body
            }
            Variant::SweptSeconds => {
                let $face = SweptHands { seconds: true };
                $body
            }
            Variant::Swept => {
                let $face = SweptHands { seconds: false };
                $body
            }
            Variant::TriangularSeconds => {
                let $face = TriangularHands { seconds: true };
                $body
            }
            Variant::Triangular => {
                let $face = TriangularHands { seconds: false };
                $body
            }
            Variant::Ticks => {
                let $face = TicksDate { date: false };
                $body
            }
            Variant::TicksDate => {
                let $face = TicksDate { date: true };
                $body
            }
        }
    };
}

impl WatchFace for Variant {
    fn granularity(&self) -> TimeUnit {
        with_strategy!(self, face => face.granularity())
    }

    fn layers(&self) -> &'static [LayerKind] {
        with_strategy!(self, face => face.layers())
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
        with_strategy!(self, face => face.draw(layer, geometry, state, target))
    }
}
