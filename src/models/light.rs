use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour of a traffic light. Every light starts at `Red`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightColour {
    #[default]
    Red,
    Yellow,
    Green,
}

impl fmt::Display for LightColour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LightColour::Red => write!(f, "red"),
            LightColour::Yellow => write!(f, "yellow"),
            LightColour::Green => write!(f, "green"),
        }
    }
}
