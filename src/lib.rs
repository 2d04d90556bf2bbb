//! Potsdam watch face
//!
//! Hardware independent core of the watch face: the time to hand geometry
//! mapping, text formatting, the render strategies of all face variants and
//! the lifecycle shell that ties them to a host (window stack, tick timer,
//! display). The PineTime firmware in `main.rs` is one such host.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod error;
pub mod face;
pub mod geometry;
pub mod host;
pub mod text;
pub mod ui;

pub use error::Error;
pub use face::{Event, Face, Phase};
pub use host::{Host, LayerId, LayerKind, LayerTable, TimeUnit};
pub use ui::{Variant, WatchFace, WatchFaceState};
