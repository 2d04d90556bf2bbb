//! Face errors

use core::fmt;

use crate::face::{EventKind, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The host could not create a drawing layer
    LayerAllocation,
    /// An event arrived in a phase that does not accept it
    InvalidTransition { phase: Phase, event: EventKind },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LayerAllocation => f.write_str("layer allocation failed"),
            Error::InvalidTransition { phase, event } => {
                write!(f, "{:?} event not accepted while {:?}", event, phase)
            }
        }
    }
}
