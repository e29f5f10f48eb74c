use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::communication::messages::LightEvent;
use crate::control_system::intersection::{Intersection, LightId};
use crate::error::ConfigError;
use crate::global_variables::MAX_IDLE_GAP_SECS;
use crate::models::time::Time;
use crate::simulation_engine::config::{ArrivalConfig, Arrivals, SimulationConfig};

/// The pair of lights built from a [`SimulationConfig`], ready to receive cars.
#[derive(Debug, Clone)]
pub struct Scenario {
    intersection: Intersection,
    primary: LightId,
    secondary: Option<LightId>,
}

impl Scenario {
    /// Builds the intersection: the primary light first, then the secondary
    /// paired with it.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut intersection = Intersection::starting_at(config.start_time);
        let primary = intersection.add_light(config.primary.delay, config.primary.name.clone());
        let secondary = match &config.secondary {
            Some(light) => Some(intersection.add_light_with_collaborator(
                light.delay,
                light.name.clone(),
                primary,
            )?),
            None => None,
        };
        Ok(Self {
            intersection,
            primary,
            secondary,
        })
    }

    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }

    pub fn primary(&self) -> LightId {
        self.primary
    }

    pub fn secondary(&self) -> Option<LightId> {
        self.secondary
    }

    /// Replays `arrivals` and returns every event in order.
    pub fn run(&mut self, arrivals: &Arrivals) -> Result<Vec<LightEvent>, ConfigError> {
        match arrivals {
            Arrivals::Scripted { requests } => self.run_scripted(requests),
            Arrivals::Random { count, seed } => self.run_random(*count, *seed),
        }
    }

    fn run_scripted(&mut self, requests: &[ArrivalConfig]) -> Result<Vec<LightEvent>, ConfigError> {
        let mut events = Vec::new();
        for request in requests {
            let id = self
                .intersection
                .find(&request.light)
                .ok_or_else(|| ConfigError::UnknownLight(request.light.clone()))?;
            if let Some(at) = request.at {
                self.intersection.set_time(at);
            }
            events.extend(self.intersection.request_crossing(id)?);
        }
        Ok(events)
    }

    fn run_random(&mut self, count: usize, seed: u64) -> Result<Vec<LightEvent>, ConfigError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut events = Vec::new();
        for _ in 0..count {
            let gap = Time::new(0, 0, rng.random_range(0..=MAX_IDLE_GAP_SECS));
            let resumed = self.intersection.clock() + gap;
            self.intersection.set_time(resumed);

            let id = match self.secondary {
                Some(secondary) if rng.random_bool(0.5) => secondary,
                _ => self.primary,
            };
            events.extend(self.intersection.request_crossing(id)?);
        }
        log::info!("random scenario finished at {} after {} cars", self.intersection.clock(), count);
        Ok(events)
    }
}

/// Builds the scenario described by `config` and runs its arrivals.
pub fn run_simulation(config: &SimulationConfig) -> Result<Vec<LightEvent>, ConfigError> {
    let mut scenario = Scenario::from_config(config)?;
    scenario.run(&config.arrivals)
}
