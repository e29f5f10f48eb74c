use serde::{Deserialize, Serialize};

use crate::communication::messages::LightEvent;
use crate::control_system::traffic_light::TrafficLight;
use crate::error::IntersectionError;
use crate::models::light::LightColour;
use crate::models::time::Time;

/// Handle to a light owned by an [`Intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightId(usize);

impl LightId {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        LightId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Owns the lights and the clock they share.
///
/// Lights refer to their collaborator by [`LightId`], so a light can be added
/// before its partner exists and neither light owns the other. Lights are never
/// removed, which keeps every handle valid for the life of the intersection.
#[derive(Debug, Clone, Default)]
pub struct Intersection {
    clock: Time,
    lights: Vec<TrafficLight>,
}

impl Intersection {
    /// Creates an empty intersection with the clock at `0:0:0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty intersection with the clock at `start`.
    pub fn starting_at(start: Time) -> Self {
        Self {
            clock: start,
            lights: Vec::new(),
        }
    }

    /// Adds an isolated light in `Red`.
    pub fn add_light(&mut self, delay: Time, name: impl Into<String>) -> LightId {
        let id = LightId(self.lights.len());
        self.lights.push(TrafficLight::new(delay, name.into()));
        id
    }

    /// Adds a light paired with `collaborator`. If the collaborator has no
    /// partner yet it is linked back to the new light; an existing partner is
    /// left in place.
    pub fn add_light_with_collaborator(
        &mut self,
        delay: Time,
        name: impl Into<String>,
        collaborator: LightId,
    ) -> Result<LightId, IntersectionError> {
        self.check(collaborator)?;
        let id = self.add_light(delay, name);
        self.lights[id.0].link(collaborator);
        if !self.lights[collaborator.0].link(id) {
            log::warn!(
                "{} already has a collaborator; {} links one way only",
                self.lights[collaborator.0],
                self.lights[id.0]
            );
        }
        Ok(id)
    }

    pub fn clock(&self) -> Time {
        self.clock
    }

    /// Overwrites the shared clock. No event is produced.
    pub fn set_time(&mut self, time: Time) {
        log::trace!("clock set from {} to {}", self.clock, time);
        self.clock = time;
    }

    pub fn light(&self, id: LightId) -> Option<&TrafficLight> {
        self.lights.get(id.0)
    }

    /// Looks a light up by its display name.
    pub fn find(&self, name: &str) -> Option<LightId> {
        self.lights
            .iter()
            .position(|light| light.name() == name)
            .map(LightId)
    }

    pub fn lights(&self) -> impl Iterator<Item = (LightId, &TrafficLight)> {
        self.lights
            .iter()
            .enumerate()
            .map(|(index, light)| (LightId(index), light))
    }

    /// A car arrives at `id`.
    ///
    /// The first event is always the crossing request with the colour the car
    /// saw, followed by every colour change of the resulting cascade in order.
    /// A yellow or green light does nothing; the car simply has to ask again.
    pub fn request_crossing(&mut self, id: LightId) -> Result<Vec<LightEvent>, IntersectionError> {
        self.check(id)?;
        let light = &self.lights[id.0];
        log::info!("car wants to cross {} ({}) at {}", light, light.colour(), self.clock);

        let mut events = vec![LightEvent::CrossingRequested {
            at: self.clock,
            light: light.name().to_string(),
            colour: light.colour(),
        }];

        if light.colour() != LightColour::Red {
            log::trace!("{} is {}, car waits", light, light.colour());
            return Ok(events);
        }

        match light.collaborator().map(|other| (other, self.lights[other.0].colour())) {
            Some((other, LightColour::Green)) => self.turn_red(other, &mut events),
            Some((_, LightColour::Red)) | None => {
                self.advance(id, LightColour::Yellow, &mut events);
                self.advance(id, LightColour::Green, &mut events);
            }
            Some((_, LightColour::Yellow)) => {
                log::trace!("{} waits for its collaborator to settle", self.lights[id.0]);
            }
        }
        Ok(events)
    }

    /// Asks `id` to vacate green. Normally reached only through a crossing cascade.
    pub fn request_red(&mut self, id: LightId) -> Result<Vec<LightEvent>, IntersectionError> {
        self.check(id)?;
        let mut events = Vec::new();
        self.turn_red(id, &mut events);
        Ok(events)
    }

    /// Asks `id` to take green. Normally reached only through a crossing cascade.
    pub fn request_green(
        &mut self,
        id: LightId,
    ) -> Result<Vec<LightEvent>, IntersectionError> {
        self.check(id)?;
        let mut events = Vec::new();
        self.turn_green(id, &mut events);
        Ok(events)
    }

    // Green -> yellow and yellow -> red both hand over with a green request.
    fn turn_red(&mut self, id: LightId, events: &mut Vec<LightEvent>) {
        let next = match self.lights[id.0].colour() {
            LightColour::Red => return,
            LightColour::Yellow => LightColour::Red,
            LightColour::Green => LightColour::Yellow,
        };
        self.advance(id, next, events);
        if let Some(other) = self.lights[id.0].collaborator() {
            self.turn_green(other, events);
        }
    }

    // Only red -> yellow hands back; yellow -> green ends the cascade.
    fn turn_green(&mut self, id: LightId, events: &mut Vec<LightEvent>) {
        match self.lights[id.0].colour() {
            LightColour::Green => {}
            LightColour::Yellow => self.advance(id, LightColour::Green, events),
            LightColour::Red => {
                self.advance(id, LightColour::Yellow, events);
                if let Some(other) = self.lights[id.0].collaborator() {
                    self.turn_red(other, events);
                }
            }
        }
    }

    fn advance(&mut self, id: LightId, colour: LightColour, events: &mut Vec<LightEvent>) {
        let event = self.lights[id.0].advance(&mut self.clock, colour);
        events.push(event);
    }

    fn check(&self, id: LightId) -> Result<(), IntersectionError> {
        if id.0 < self.lights.len() {
            Ok(())
        } else {
            Err(IntersectionError::UnknownLight(id))
        }
    }
}
