#![allow(dead_code)]

use std::{cell::Cell, convert::Infallible};

use chrono::{NaiveDate, NaiveDateTime};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{Rgb565, RgbColor},
    primitives::{ContainsPoint, PointsIter, Rectangle},
    Pixel,
};
use potsdam::{error::Error, host::Host, text::Locale, LayerId, LayerKind, TimeUnit};

pub const WIDTH: u32 = 144;
pub const HEIGHT: u32 = 168;
/// Never used by any face
pub const UNPAINTED: Rgb565 = Rgb565::MAGENTA;

pub fn bounds() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT))
}

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 5)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// In-memory frame buffer
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new() -> Self {
        let size = Size::new(WIDTH, HEIGHT);
        Self {
            size,
            pixels: vec![UNPAINTED; (WIDTH * HEIGHT) as usize],
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Number of pixels of `color` inside `area`
    pub fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.size_rect().contains(*p))
            .filter(|p| self.pixel(p.x, p.y) == color)
            .count()
    }

    fn size_rect(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if self.size_rect().contains(point) {
                let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Create(LayerKind, LayerId),
    Destroy(LayerId),
    Dirty(LayerId),
    Subscribe(TimeUnit),
    Unsubscribe,
}

/// Host that records every call the face makes
pub struct MockHost {
    pub calls: Vec<Call>,
    pub use_24h: bool,
    pub locale: Locale,
    /// Fail the n-th layer allocation (0 based)
    pub fail_create_at: Option<usize>,
    pub clock_style_queries: Cell<usize>,
    creates: usize,
    next_id: u8,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            use_24h: true,
            locale: Locale::English,
            fail_create_at: None,
            clock_style_queries: Cell::new(0),
            creates: 0,
            next_id: 0,
        }
    }

    pub fn created(&self) -> Vec<LayerId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Create(_, id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn destroyed(&self) -> Vec<LayerId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Destroy(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn dirty(&self) -> Vec<LayerId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Dirty(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, wanted: Call) -> Option<usize> {
        self.calls.iter().position(|call| *call == wanted)
    }
}

impl Host for MockHost {
    fn create_layer(&mut self, kind: LayerKind, _bounds: Rectangle) -> Result<LayerId, Error> {
        let attempt = self.creates;
        self.creates += 1;
        if self.fail_create_at == Some(attempt) {
            return Err(Error::LayerAllocation);
        }
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.calls.push(Call::Create(kind, id));
        Ok(id)
    }

    fn destroy_layer(&mut self, layer: LayerId) {
        self.calls.push(Call::Destroy(layer));
    }

    fn mark_dirty(&mut self, layer: LayerId) {
        self.calls.push(Call::Dirty(layer));
    }

    fn subscribe(&mut self, unit: TimeUnit) {
        self.calls.push(Call::Subscribe(unit));
    }

    fn unsubscribe(&mut self) {
        self.calls.push(Call::Unsubscribe);
    }

    fn is_24h_style(&self) -> bool {
        self.clock_style_queries.set(self.clock_style_queries.get() + 1);
        self.use_24h
    }

    fn locale(&self) -> Locale {
        self.locale
    }
}
