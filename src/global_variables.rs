// Default arm names
pub const DEFAULT_PRIMARY_NAME: &str = "North";
pub const DEFAULT_SECONDARY_NAME: &str = "East";

// Default transition delay per light (h, m, s)
pub const DEFAULT_DELAY: (u32, u32, u32) = (0, 0, 5);

// Random arrival scenario
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_RANDOM_ARRIVALS: usize = 10;
pub const MAX_IDLE_GAP_SECS: u32 = 30;

// Environment variable holding the JSON scenario config
pub const CONFIG_ENV_VAR: &str = "PAIRED_LIGHTS_CONFIG";
