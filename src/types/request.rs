use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Trip lengths the planner accepts.
pub const DAY_RANGE: RangeInclusive<u32> = 1..=7;

/// Message shown when the destination is blank.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a valid city name.";

/// Validated user input for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    city: String,
    days: u32,
    interests: String,
}

impl TripRequest {
    /// Validate the raw form values. Nothing touches the network until this succeeds.
    pub fn new(city: impl Into<String>, days: u32, interests: impl Into<String>) -> Result<Self> {
        let city: String = city.into();
        let city = city.trim().to_string();
        if city.is_empty() {
            return Err(PlannerError::InvalidInput(EMPTY_CITY_MESSAGE.to_string()));
        }

        if !DAY_RANGE.contains(&days) {
            return Err(PlannerError::InvalidInput(format!(
                "Trip duration must be between {} and {} days, got {}",
                DAY_RANGE.start(),
                DAY_RANGE.end(),
                days
            )));
        }

        let interests: String = interests.into();
        Ok(Self {
            city,
            days,
            interests: interests.trim().to_string(),
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }
}
