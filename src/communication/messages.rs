use serde::{Deserialize, Serialize};

use crate::models::light::LightColour;
use crate::models::time::Time;

/// Something observable that happened on an intersection. The cascade only
/// records these; rendering is left to a presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LightEvent {
    /// A car arrived at `light`, which showed `colour` at the time.
    CrossingRequested {
        at: Time,
        light: String,
        colour: LightColour,
    },
    /// `light` switched to `colour`; `at` is the clock after the delay was applied.
    ColourChanged {
        at: Time,
        light: String,
        colour: LightColour,
    },
}

impl LightEvent {
    pub fn at(&self) -> Time {
        match self {
            LightEvent::CrossingRequested { at, .. } | LightEvent::ColourChanged { at, .. } => *at,
        }
    }

    pub fn light(&self) -> &str {
        match self {
            LightEvent::CrossingRequested { light, .. }
            | LightEvent::ColourChanged { light, .. } => light,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, LightEvent::ColourChanged { .. })
    }
}
