// simulation_main.rs
use paired_lights::global_variables::CONFIG_ENV_VAR;
use paired_lights::monitoring::narrator::Narrator;
use paired_lights::simulation_engine::{run_simulation, SimulationConfig};
use std::env;
use std::error::Error;

fn load_config() -> Result<SimulationConfig, Box<dyn Error>> {
    match env::var(CONFIG_ENV_VAR) {
        Ok(json) => Ok(SimulationConfig::from_json(&json)?),
        Err(env::VarError::NotPresent) => Ok(SimulationConfig::default()),
        Err(e) => Err(e.into()),
    }
}

fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(2);
        }
    };

    let events = match run_simulation(&config) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Simulation error: {}", e);
            std::process::exit(1);
        }
    };

    match Narrator::new(config.narration).render_all(&events) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => eprintln!("Narration error: {}", e),
    }
}
