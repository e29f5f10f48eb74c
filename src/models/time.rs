use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

use crate::error::TimeParseError;

const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MIN;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Simulation clock value in hours, minutes and seconds.
///
/// Always held normalised: seconds and minutes in `0..=59`, hours in `0..=23`.
/// Overflow past midnight wraps; no day counter is kept. The same type is
/// used both for the shared clock and for a light's transition delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// Creates a time, rolling seconds into minutes, minutes into hours and
    /// wrapping hours modulo 24.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        let total = u64::from(hours) * SECS_PER_HOUR
            + u64::from(minutes) * SECS_PER_MIN
            + u64::from(seconds);
        Self::from_seconds(total)
    }

    fn from_seconds(total: u64) -> Self {
        let total = total % SECS_PER_DAY;
        Self {
            hours: (total / SECS_PER_HOUR) as u8,
            minutes: (total % SECS_PER_HOUR / SECS_PER_MIN) as u8,
            seconds: (total % SECS_PER_MIN) as u8,
        }
    }

    pub fn hours(&self) -> u32 {
        u32::from(self.hours)
    }

    pub fn minutes(&self) -> u32 {
        u32::from(self.minutes)
    }

    pub fn seconds(&self) -> u32 {
        u32::from(self.seconds)
    }

    /// Seconds elapsed since midnight.
    pub fn as_seconds(&self) -> u64 {
        u64::from(self.hours) * SECS_PER_HOUR
            + u64::from(self.minutes) * SECS_PER_MIN
            + u64::from(self.seconds)
    }

    /// Adds `other` in place, carrying seconds into minutes and minutes into hours.
    pub fn add(&mut self, other: Time) {
        *self = Self::from_seconds(self.as_seconds() + other.as_seconds());
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        Time::add(self, rhs);
    }
}

// Implemented by path so `Add` stays out of scope here; with the trait imported,
// `time.add(delay)` on a by-value receiver would resolve to `Add::add`.
impl std::ops::Add for Time {
    type Output = Time;

    fn add(mut self, rhs: Time) -> Time {
        Time::add(&mut self, rhs);
        self
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for Time {
    type Err = TimeParseError;

    /// Parses `H:M:S`; components are normalised like [`Time::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(':').collect();
        if fields.len() != 3 {
            return Err(TimeParseError::WrongFieldCount(s.to_string()));
        }
        let mut parsed = [0u32; 3];
        for (slot, field) in parsed.iter_mut().zip(&fields) {
            *slot = field
                .trim()
                .parse()
                .map_err(|_| TimeParseError::InvalidField(field.to_string()))?;
        }
        Ok(Time::new(parsed[0], parsed[1], parsed[2]))
    }
}

impl TryFrom<String> for Time {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(time: Time) -> Self {
        time.to_string()
    }
}
