use std::fmt;

use crate::communication::messages::LightEvent;
use crate::control_system::intersection::LightId;
use crate::models::light::LightColour;
use crate::models::time::Time;

/// One arm of the intersection.
#[derive(Debug, Clone)]
pub struct TrafficLight {
    /// Display name used in narration.
    name: String,
    /// Added to the shared clock on every colour change of this light.
    delay: Time,
    /// Current colour; starts `Red`.
    colour: LightColour,
    /// Non-owning handle to the paired light, if any. Set at most once.
    collaborator: Option<LightId>,
}

impl TrafficLight {
    pub(crate) fn new(delay: Time, name: String) -> Self {
        Self {
            name,
            delay,
            colour: LightColour::Red,
            collaborator: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delay(&self) -> Time {
        self.delay
    }

    pub fn colour(&self) -> LightColour {
        self.colour
    }

    pub fn collaborator(&self) -> Option<LightId> {
        self.collaborator
    }

    /// Points this light at `other` unless it already has a collaborator.
    /// Returns whether the link was made.
    pub(crate) fn link(&mut self, other: LightId) -> bool {
        if self.collaborator.is_some() {
            return false;
        }
        self.collaborator = Some(other);
        true
    }

    /// Switches to `colour` after this light's delay has elapsed on `clock`.
    pub(crate) fn advance(&mut self, clock: &mut Time, colour: LightColour) -> LightEvent {
        clock.add(self.delay);
        log::debug!("{} {} -> {} at {}", self.name, self.colour, colour, clock);
        self.colour = colour;
        LightEvent::ColourChanged {
            at: *clock,
            light: self.name.clone(),
            colour,
        }
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_red_without_collaborator() {
        let light = TrafficLight::new(Time::new(0, 0, 5), "North".to_string());
        assert_eq!(light.colour(), LightColour::Red);
        assert_eq!(light.delay(), Time::new(0, 0, 5));
        assert_eq!(light.collaborator(), None);
        assert_eq!(light.to_string(), "North");
    }

    #[test]
    fn advance_moves_clock_by_own_delay() {
        let mut light = TrafficLight::new(Time::new(0, 0, 45), "North".to_string());
        let mut clock = Time::new(0, 0, 30);

        let event = light.advance(&mut clock, LightColour::Yellow);

        assert_eq!(clock, Time::new(0, 1, 15));
        assert_eq!(light.colour(), LightColour::Yellow);
        assert_eq!(
            event,
            LightEvent::ColourChanged {
                at: Time::new(0, 1, 15),
                light: "North".to_string(),
                colour: LightColour::Yellow,
            }
        );
    }

    #[test]
    fn link_is_set_once() {
        let mut light = TrafficLight::new(Time::default(), "North".to_string());
        assert!(light.link(LightId::from_index(1)));
        assert!(!light.link(LightId::from_index(2)));
        assert_eq!(light.collaborator(), Some(LightId::from_index(1)));
    }
}
