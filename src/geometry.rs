//! Time to hand geometry
//!
//! Angles are fixed point fractions of a full turn. Angle 0 points to twelve
//! o'clock and angles grow clockwise, which on a y-down screen means
//! `x = sin(a)` and `y = -cos(a)`.

use chrono::Timelike;
use embedded_graphics::geometry::Point;

/// 360° in the angle unit
pub const FULL_TURN: i32 = 0x10000;

/// Scale of [`sin_lookup`] and [`cos_lookup`]
pub const TRIG_SCALE: i32 = 0xFFFF;

/// Face radius that hand lengths and paths are specified for.
///
/// The first faces were drawn on a 144×168 display; everything is scaled
/// from that to the actual face radius with [`scale`].
pub const DESIGN_RADIUS: i32 = 72;

/// A hand angle, always in `[0, FULL_TURN)`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    /// Create an angle, wrapping `raw` into a single turn
    pub const fn new(raw: i32) -> Self {
        Self(raw.rem_euclid(FULL_TURN))
    }

    /// `FULL_TURN * num / den`, truncated
    pub const fn from_fraction(num: i32, den: i32) -> Self {
        Self::new(FULL_TURN * num / den)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    fn radians(self) -> f32 {
        self.0 as f32 * (2.0 * core::f32::consts::PI) / FULL_TURN as f32
    }
}

/// Angles of all three hands for one wall clock sample
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandAngles {
    pub hour: Angle,
    pub minute: Angle,
    pub second: Angle,
}

/// Hour hand angle. Only the 12 hour remainder counts; the minutes move the
/// hand between the hour marks, one step per minute.
pub fn hour_angle(hour: u32, minute: u32) -> Angle {
    let hour = (hour % 12) as i32;
    let minute = (minute % 60) as i32;
    Angle::from_fraction(hour * 60 + minute, 720)
}

pub fn minute_angle(minute: u32) -> Angle {
    Angle::from_fraction((minute % 60) as i32, 60)
}

pub fn second_angle(second: u32) -> Angle {
    Angle::from_fraction((second % 60) as i32, 60)
}

/// Compute all hand angles from a wall clock sample
pub fn compute_hand_angles<T: Timelike>(time: &T) -> HandAngles {
    HandAngles {
        hour: hour_angle(time.hour(), time.minute()),
        minute: minute_angle(time.minute()),
        second: second_angle(time.second()),
    }
}

/// Sine of `angle`, scaled to `[-TRIG_SCALE, TRIG_SCALE]`
pub fn sin_lookup(angle: Angle) -> i32 {
    libm::roundf(libm::sinf(angle.radians()) * TRIG_SCALE as f32) as i32
}

/// Cosine of `angle`, scaled to `[-TRIG_SCALE, TRIG_SCALE]`
pub fn cos_lookup(angle: Angle) -> i32 {
    libm::roundf(libm::cosf(angle.radians()) * TRIG_SCALE as f32) as i32
}

/// Screen position `radius` pixels away from `center` in direction `angle`
pub fn position(angle: Angle, radius: i32, center: Point) -> Point {
    Point::new(
        sin_lookup(angle) * radius / TRIG_SCALE + center.x,
        -cos_lookup(angle) * radius / TRIG_SCALE + center.y,
    )
}

/// Rotate a path point given relative to the pivot clockwise by `angle`,
/// then move it to `center`.
pub fn rotate(point: Point, angle: Angle, center: Point) -> Point {
    let sin = sin_lookup(angle);
    let cos = cos_lookup(angle);
    Point::new(
        (point.x * cos - point.y * sin) / TRIG_SCALE + center.x,
        (point.x * sin + point.y * cos) / TRIG_SCALE + center.y,
    )
}

/// Scale a length specified for [`DESIGN_RADIUS`] to `radius`
pub const fn scale(value: i32, radius: i32) -> i32 {
    value * radius / DESIGN_RADIUS
}
