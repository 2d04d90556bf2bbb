//! Host boundary
//!
//! The face never owns a window, a timer or a display. It asks the host for
//! layers, tells it which layers need a redraw and which tick granularity it
//! wants. [`LayerTable`] is a ready-made bookkeeping host that a firmware
//! main loop can drive.

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    primitives::Rectangle,
};

use crate::{
    error::Error,
    face::Face,
    text::Locale,
    ui::{ColorMode, WatchFace},
};

/// Handle of a host owned drawing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerId(pub u8);

/// What a layer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerKind {
    /// Background color and static artwork, drawn once per load
    Background,
    Hands,
    Text,
}

impl LayerKind {
    /// Whether the layer changes on ticks
    pub fn is_dynamic(self) -> bool {
        !matches!(self, LayerKind::Background)
    }
}

/// Tick granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    Second,
    Minute,
}

impl TimeUnit {
    /// Whether a tick of this granularity falls between `prev` and `now`
    pub fn changed(self, prev: &NaiveDateTime, now: &NaiveDateTime) -> bool {
        let minute_changed = prev.date() != now.date()
            || prev.hour() != now.hour()
            || prev.minute() != now.minute();
        match self {
            TimeUnit::Minute => minute_changed,
            TimeUnit::Second => minute_changed || prev.second() != now.second(),
        }
    }
}

/// Services the face calls into
pub trait Host {
    /// Create a layer covering `bounds`
    fn create_layer(&mut self, kind: LayerKind, bounds: Rectangle) -> Result<LayerId, Error>;

    fn destroy_layer(&mut self, layer: LayerId);

    /// Request a repaint of `layer` before the next frame
    fn mark_dirty(&mut self, layer: LayerId);

    /// Start tick delivery, replacing any previous subscription
    fn subscribe(&mut self, unit: TimeUnit);

    fn unsubscribe(&mut self);

    /// User preference for 24 hour time
    fn is_24h_style(&self) -> bool;

    fn locale(&self) -> Locale {
        Locale::default()
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    id: LayerId,
    kind: LayerKind,
    bounds: Rectangle,
    dirty: bool,
}

/// Host side layer and subscription bookkeeping for up to `N` layers
///
/// Layers are painted in creation order, so the first layer created is the
/// bottom one.
pub struct LayerTable<const N: usize> {
    slots: [Option<Slot>; N],
    next_id: u8,
    subscription: Option<TimeUnit>,
    last_tick: Option<NaiveDateTime>,
    use_24h: bool,
    locale: Locale,
}

impl<const N: usize> LayerTable<N> {
    pub fn new(use_24h: bool, locale: Locale) -> Self {
        Self {
            slots: [None; N],
            next_id: 0,
            subscription: None,
            last_tick: None,
            use_24h,
            locale,
        }
    }

    /// Current tick subscription
    pub fn subscription(&self) -> Option<TimeUnit> {
        self.subscription
    }

    /// Number of live layers
    pub fn layer_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Kinds of the live layers, bottom to top
    pub fn layer_kinds(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.slots.iter().flatten().map(|slot| slot.kind)
    }

    pub fn is_dirty(&self) -> bool {
        self.slots.iter().flatten().any(|slot| slot.dirty)
    }

    /// Seed the tick filter with the sample the face was loaded with.
    pub fn prime(&mut self, now: &NaiveDateTime) {
        if self.subscription.is_some() {
            self.last_tick = Some(*now);
        }
    }

    /// Filter raw clock samples down to the subscribed granularity.
    ///
    /// Returns `true` when the face should get a tick for `now`. A sample
    /// taken before the filter is seeded is only recorded, so subscribing
    /// never fires an immediate tick.
    pub fn should_tick(&mut self, now: &NaiveDateTime) -> bool {
        let Some(unit) = self.subscription else {
            return false;
        };
        let deliver = self
            .last_tick
            .as_ref()
            .is_some_and(|prev| unit.changed(prev, now));
        if deliver || self.last_tick.is_none() {
            self.last_tick = Some(*now);
        }
        deliver
    }

    /// Repaint every layer bottom to top if any of them is dirty.
    ///
    /// Returns whether anything was drawn.
    pub fn paint_dirty<W, D>(&mut self, face: &Face<W>, target: &mut D) -> Result<bool, D::Error>
    where
        W: WatchFace,
        D: DrawTarget<Color = ColorMode>,
    {
        if !self.is_dirty() {
            return Ok(false);
        }
        for slot in self.slots.iter_mut().flatten() {
            face.paint(slot.id, &mut target.clipped(&slot.bounds))?;
            slot.dirty = false;
        }
        Ok(true)
    }

    fn slot_mut(&mut self, layer: LayerId) -> Option<&mut Option<Slot>> {
        self.slots
            .iter_mut()
            .find(|slot| matches!(slot, Some(s) if s.id == layer))
    }
}

impl<const N: usize> Host for LayerTable<N> {
    fn create_layer(&mut self, kind: LayerKind, bounds: Rectangle) -> Result<LayerId, Error> {
        let free = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(Error::LayerAllocation)?;
        let id = LayerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        *free = Some(Slot {
            id,
            kind,
            bounds,
            dirty: false,
        });
        debug!("layer {:?} created for {:?}", id, kind);
        Ok(id)
    }

    fn destroy_layer(&mut self, layer: LayerId) {
        match self.slot_mut(layer) {
            Some(slot) => *slot = None,
            None => warn!("destroying unknown layer {:?}", layer),
        }
    }

    fn mark_dirty(&mut self, layer: LayerId) {
        match self.slot_mut(layer) {
            Some(Some(slot)) => slot.dirty = true,
            _ => warn!("marking unknown layer {:?} dirty", layer),
        }
    }

    fn subscribe(&mut self, unit: TimeUnit) {
        self.subscription = Some(unit);
        self.last_tick = None;
    }

    fn unsubscribe(&mut self) {
        self.subscription = None;
        self.last_tick = None;
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h
    }

    fn locale(&self) -> Locale {
        self.locale
    }
}
