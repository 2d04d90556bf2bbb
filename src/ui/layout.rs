//! Static face geometry, computed once per load

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::{Line, Rectangle},
};

use crate::geometry::{position, scale, Angle};

pub const TICK_COUNT: usize = 12;
pub const PATH_LEN: usize = 4;

// Lengths below are for a 72 px radius and get scaled to the real face.

const TICK_LENGTHS: [i32; TICK_COUNT] = [12, 6, 6, 12, 6, 6, 12, 6, 6, 12, 6, 6];
const TICK_WIDTHS: [i32; TICK_COUNT] = [3, 1, 1, 3, 1, 1, 3, 1, 1, 3, 1, 1];
const TICK_INSET: i32 = 2;

const HOUR_HAND: (i32, i32) = (40, 6);
const MINUTE_HAND: (i32, i32) = (60, 4);
const SECOND_HAND: (i32, i32) = (65, 2);
const DOT_RADIUS: i32 = 4;

// Tapered hands pointing to twelve, relative to the pivot
const HOUR_PATH: [(i32, i32); PATH_LEN] = [(-5, 8), (5, 8), (2, -40), (-2, -40)];
const MINUTE_PATH: [(i32, i32); PATH_LEN] = [(-4, 10), (4, 10), (1, -60), (-1, -60)];
const SECOND_PATH: [(i32, i32); PATH_LEN] = [(-2, 12), (2, 12), (1, -65), (-1, -65)];

/// A stroked hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub length: i32,
    pub width: u32,
}

/// One graduation of the tick ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub line: Line,
    pub width: u32,
}

/// Per face constants derived from the display bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGeometry {
    pub bounds: Rectangle,
    pub center: Point,
    /// Radius of the largest circle that fits the bounds
    pub radius: i32,
    pub hour_hand: Hand,
    pub minute_hand: Hand,
    pub second_hand: Hand,
    pub dot_radius: i32,
    pub hour_path: [Point; PATH_LEN],
    pub minute_path: [Point; PATH_LEN],
    pub second_path: [Point; PATH_LEN],
    pub ticks: [Tick; TICK_COUNT],
    /// Where the digital time goes
    pub time_bounds: Rectangle,
    /// Where the date label goes
    pub date_bounds: Rectangle,
}

impl FaceGeometry {
    pub fn new(bounds: Rectangle) -> Self {
        let w = bounds.size.width as i32;
        let h = bounds.size.height as i32;
        let center = bounds.top_left + Point::new(w / 2, h / 2);
        let radius = w.min(h) / 2;

        let hand = |(length, width): (i32, i32)| Hand {
            length: scale(length, radius),
            width: scale(width, radius).max(1) as u32,
        };
        let path = |points: [(i32, i32); PATH_LEN]| {
            points.map(|(x, y)| Point::new(scale(x, radius), scale(y, radius)))
        };

        let outer = radius - scale(TICK_INSET, radius);
        let ticks = core::array::from_fn(|i| {
            let angle = Angle::from_fraction(i as i32, TICK_COUNT as i32);
            let inner = outer - scale(TICK_LENGTHS[i], radius);
            Tick {
                line: Line::new(position(angle, inner, center), position(angle, outer, center)),
                width: scale(TICK_WIDTHS[i], radius).max(1) as u32,
            }
        });

        // 52 px down and 50 px tall on the 168 px display
        let time_bounds = Rectangle::new(
            Point::new(bounds.top_left.x, bounds.top_left.y + h * 52 / 168),
            Size::new(w as u32, (h * 50 / 168) as u32),
        );
        let date_bounds = Rectangle::new(
            Point::new(bounds.top_left.x, center.y + scale(24, radius)),
            Size::new(w as u32, scale(20, radius) as u32),
        );

        Self {
            bounds,
            center,
            radius,
            hour_hand: hand(HOUR_HAND),
            minute_hand: hand(MINUTE_HAND),
            second_hand: hand(SECOND_HAND),
            dot_radius: scale(DOT_RADIUS, radius).max(1),
            hour_path: path(HOUR_PATH),
            minute_path: path(MINUTE_PATH),
            second_path: path(SECOND_PATH),
            ticks,
            time_bounds,
            date_bounds,
        }
    }
}
