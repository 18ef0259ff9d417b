//! Electric vehicle range model.
//!
//! Every numeric input is clamped into its allowed band rather than
//! rejected. Range is `efficiency * state_of_charge * battery_size`, where
//! efficiency (miles per kWh) drops in hot or cold weather.

use std::fmt;

pub const DEFAULT_EV_NAME: &str = "unknown EV";

pub const MIN_BATTERY_KWH: f64 = 10.0;
pub const MAX_BATTERY_KWH: f64 = 150.0;
pub const MIN_STATE_OF_CHARGE: f64 = 0.15;
pub const MAX_STATE_OF_CHARGE: f64 = 1.0;
pub const MIN_EFFICIENCY: f64 = 0.5;
pub const MAX_EFFICIENCY: f64 = 4.5;

/// Temperatures (°F) in this band keep the rated efficiency.
pub const IDEAL_TEMP_LOW_F: f64 = 65.0;
pub const IDEAL_TEMP_HIGH_F: f64 = 77.0;
const HOT_EFFICIENCY_FACTOR: f64 = 0.85;
const COLD_LOSS_PER_DEGREE: f64 = 0.01;
const MAX_COLD_LOSS: f64 = 0.50;

/// Clamps into `[min, max]`; NaN is treated as the minimum.
fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElectricVehicle {
    name: String,
    battery_size: f64,
    state_of_charge: f64,
    current_efficiency: f64,
    default_efficiency: f64,
}

impl ElectricVehicle {
    /// Builds a vehicle, replacing an empty name with [`DEFAULT_EV_NAME`] and
    /// clamping battery size, state of charge and rated efficiency.
    pub fn new(
        name: &str,
        battery_size: f64,
        state_of_charge: f64,
        default_efficiency: f64,
    ) -> Self {
        let name = if name.is_empty() {
            DEFAULT_EV_NAME.to_owned()
        } else {
            name.to_owned()
        };
        let default_efficiency =
            clamp_or_min(default_efficiency, MIN_EFFICIENCY, MAX_EFFICIENCY);
        let mut ev = Self {
            name,
            battery_size: clamp_or_min(battery_size, MIN_BATTERY_KWH, MAX_BATTERY_KWH),
            state_of_charge: MIN_STATE_OF_CHARGE,
            current_efficiency: default_efficiency,
            default_efficiency,
        };
        ev.set_state_of_charge(state_of_charge);
        ev
    }

    /// Estimated range in miles.
    pub fn range(&self) -> f64 {
        self.current_efficiency * self.state_of_charge * self.battery_size
    }

    /// Recomputes the current efficiency from the outside temperature (°F).
    ///
    /// - 65 to 77 inclusive: rated efficiency.
    /// - above 77: 85% of rated.
    /// - below 65: 1% less per degree under 65, never more than 50% less.
    pub fn update_efficiency(&mut self, current_temp_f: f64) {
        self.current_efficiency = if current_temp_f > IDEAL_TEMP_HIGH_F {
            self.default_efficiency * HOT_EFFICIENCY_FACTOR
        } else if current_temp_f >= IDEAL_TEMP_LOW_F {
            self.default_efficiency
        } else {
            let loss = ((IDEAL_TEMP_LOW_F - current_temp_f) * COLD_LOSS_PER_DEGREE).min(MAX_COLD_LOSS);
            self.default_efficiency * (1.0 - loss)
        };
    }

    pub fn set_state_of_charge(&mut self, state_of_charge: f64) {
        self.state_of_charge =
            clamp_or_min(state_of_charge, MIN_STATE_OF_CHARGE, MAX_STATE_OF_CHARGE);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn battery_size(&self) -> f64 {
        self.battery_size
    }

    pub fn state_of_charge(&self) -> f64 {
        self.state_of_charge
    }

    /// Current (weather-adjusted) efficiency.
    pub fn efficiency(&self) -> f64 {
        self.current_efficiency
    }

    pub fn default_efficiency(&self) -> f64 {
        self.default_efficiency
    }
}

impl fmt::Display for ElectricVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} SOC: {:.1}% Range (miles): {:.1}",
            self.name,
            self.state_of_charge * 100.0,
            self.range()
        )
    }
}
