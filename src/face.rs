//! Face lifecycle
//!
//! A [`Face`] reacts to three host events in strict order:
//!
//! ```text
//! Created -> Load -> Loaded -> (Tick)* -> Unload -> Unloaded -> ... -> Destroyed
//! ```
//!
//! Load allocates the layers and the static geometry, samples the clock once
//! and subscribes to ticks. Every tick recomputes the shared state and marks
//! the dynamic layers dirty; the host paints later through [`Face::paint`].
//! Unload stops tick delivery before any resource is released.

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, primitives::Rectangle};

use crate::{
    error::Error,
    host::{Host, LayerId, LayerKind},
    ui::{ColorMode, FaceGeometry, WatchFace, WatchFaceState},
};

/// Most layers a face may use
pub const MAX_LAYERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Created,
    Loaded,
    Unloaded,
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    Load,
    Tick,
    Unload,
    Destroy,
}

/// Host event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The window was pushed; `bounds` is the window area
    Load {
        bounds: Rectangle,
        now: NaiveDateTime,
    },
    Tick {
        now: NaiveDateTime,
    },
    Unload,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Load { .. } => EventKind::Load,
            Event::Tick { .. } => EventKind::Tick,
            Event::Unload => EventKind::Unload,
        }
    }
}

type Layers = [Option<(LayerId, LayerKind)>; MAX_LAYERS];

/// Everything that only exists while the face is loaded
struct Resources {
    geometry: FaceGeometry,
    layers: Layers,
}

impl Resources {
    fn kind_of(&self, layer: LayerId) -> Option<LayerKind> {
        self.layers
            .iter()
            .flatten()
            .find(|(id, _)| *id == layer)
            .map(|(_, kind)| *kind)
    }
}

/// One watch face instance
pub struct Face<W> {
    watchface: W,
    phase: Phase,
    state: WatchFaceState,
    resources: Option<Resources>,
}

impl<W: WatchFace> Face<W> {
    pub fn new(watchface: W) -> Self {
        Self {
            watchface,
            phase: Phase::Created,
            state: WatchFaceState::default(),
            resources: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn watchface(&self) -> &W {
        &self.watchface
    }

    /// Angles and labels from the last load or tick
    pub fn state(&self) -> &WatchFaceState {
        &self.state
    }

    /// Static geometry, only while loaded
    pub fn geometry(&self) -> Option<&FaceGeometry> {
        self.resources.as_ref().map(|res| &res.geometry)
    }

    /// Deliver a host event.
    ///
    /// Events the current phase does not accept are rejected and leave the
    /// face untouched.
    pub fn handle<H: Host>(&mut self, host: &mut H, event: Event) -> Result<(), Error> {
        match (self.phase, event) {
            (Phase::Created | Phase::Unloaded, Event::Load { bounds, now }) => {
                self.load(host, bounds, &now)
            }
            (Phase::Loaded, Event::Tick { now }) => {
                self.tick(host, &now);
                Ok(())
            }
            (Phase::Loaded, Event::Unload) => {
                self.unload(host);
                Ok(())
            }
            (phase, event) => Err(self.reject(phase, event.kind())),
        }
    }

    /// End the face, unloading it first if needed
    pub fn destroy<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        match self.phase {
            Phase::Destroyed => Err(self.reject(Phase::Destroyed, EventKind::Destroy)),
            phase => {
                if phase == Phase::Loaded {
                    self.unload(host);
                }
                self.phase = Phase::Destroyed;
                info!("face destroyed");
                Ok(())
            }
        }
    }

    /// Draw one layer. Unknown layers and unloaded faces draw nothing.
    pub fn paint<D>(&self, layer: LayerId, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let Some(resources) = &self.resources else {
            return Ok(());
        };
        match resources.kind_of(layer) {
            Some(kind) => self
                .watchface
                .draw(kind, &resources.geometry, &self.state, target),
            None => Ok(()),
        }
    }

    fn load<H: Host>(
        &mut self,
        host: &mut H,
        bounds: Rectangle,
        now: &NaiveDateTime,
    ) -> Result<(), Error> {
        let kinds = self.watchface.layers();
        debug_assert!(kinds.len() <= MAX_LAYERS);

        let mut layers: Layers = [None; MAX_LAYERS];
        for (slot, &kind) in kinds.iter().take(MAX_LAYERS).enumerate() {
            match host.create_layer(kind, bounds) {
                Ok(id) => layers[slot] = Some((id, kind)),
                Err(err) => {
                    warn!("face load aborted: {:?}", err);
                    release(host, &mut layers);
                    return Err(err);
                }
            }
        }

        let geometry = FaceGeometry::new(bounds);
        self.state.update(now, host.is_24h_style(), host.locale());
        for (id, _) in layers.iter().flatten() {
            host.mark_dirty(*id);
        }
        self.resources = Some(Resources { geometry, layers });
        self.phase = Phase::Loaded;

        host.subscribe(self.watchface.granularity());
        info!("face loaded with {} layers", kinds.len());
        Ok(())
    }

    fn tick<H: Host>(&mut self, host: &mut H, now: &NaiveDateTime) {
        self.state.update(now, host.is_24h_style(), host.locale());
        trace!("tick: {:?}", self.state.angles);
        if let Some(resources) = &self.resources {
            for (id, kind) in resources.layers.iter().flatten() {
                if kind.is_dynamic() {
                    host.mark_dirty(*id);
                }
            }
        }
    }

    fn unload<H: Host>(&mut self, host: &mut H) {
        // No tick may reach the face once its layers start going away
        host.unsubscribe();
        if let Some(mut resources) = self.resources.take() {
            release(host, &mut resources.layers);
        }
        self.phase = Phase::Unloaded;
        info!("face unloaded");
    }

    fn reject(&self, phase: Phase, event: EventKind) -> Error {
        warn!("{:?} event rejected while {:?}", event, phase);
        Error::InvalidTransition { phase, event }
    }
}

/// Destroy layers in reverse order of creation
fn release<H: Host>(host: &mut H, layers: &mut Layers) {
    for (id, _) in layers.iter_mut().rev().filter_map(Option::take) {
        host.destroy_layer(id);
    }
}
