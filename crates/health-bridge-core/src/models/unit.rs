// ABOUTME: Measurement unit enumeration shared by both native health platforms
// ABOUTME: Canonical SCREAMING_SNAKE_CASE names with lossless lookup and an UNKNOWN_UNIT sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! health_data_units {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal ),+ $(,)?) => {
        /// Unit of a health measurement
        ///
        /// Every logical data type maps to exactly one default unit through the
        /// catalog. `UnknownUnit` is the sentinel for types the catalog does not
        /// know; `NoUnit` marks structured or dimensionless values.
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum HealthDataUnit {
            $(
                $(#[$doc])*
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl HealthDataUnit {
            /// Every unit in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical name of this unit
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Look up a unit by its canonical name
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

health_data_units! {
    // Mass
    /// Grams
    Gram => "GRAM",
    /// Kilograms
    Kilogram => "KILOGRAM",
    /// Ounces
    Ounce => "OUNCE",
    /// Pounds
    Pound => "POUND",
    /// Stones
    Stone => "STONE",

    // Length
    /// Meters
    Meter => "METER",
    /// Inches
    Inch => "INCH",
    /// Feet
    Foot => "FOOT",
    /// Yards
    Yard => "YARD",
    /// Miles
    Mile => "MILE",

    // Volume
    /// Liters
    Liter => "LITER",
    /// Milliliters
    Milliliter => "MILLILITER",
    /// US fluid ounces
    FluidOunceUs => "FLUID_OUNCE_US",
    /// Imperial fluid ounces
    FluidOunceImperial => "FLUID_OUNCE_IMPERIAL",
    /// US cups
    CupUs => "CUP_US",
    /// Imperial cups
    CupImperial => "CUP_IMPERIAL",
    /// US pints
    PintUs => "PINT_US",
    /// Imperial pints
    PintImperial => "PINT_IMPERIAL",

    // Pressure
    /// Pascals
    Pascal => "PASCAL",
    /// Millimeters of mercury
    MillimeterOfMercury => "MILLIMETER_OF_MERCURY",
    /// Inches of mercury
    InchesOfMercury => "INCHES_OF_MERCURY",
    /// Centimeters of water
    CentimeterOfWater => "CENTIMETER_OF_WATER",
    /// Atmospheres
    Atmosphere => "ATMOSPHERE",
    /// A-weighted sound pressure level in decibels
    DecibelAWeightedSoundPressureLevel => "DECIBEL_A_WEIGHTED_SOUND_PRESSURE_LEVEL",

    // Time
    /// Seconds
    Second => "SECOND",
    /// Milliseconds
    Millisecond => "MILLISECOND",
    /// Minutes
    Minute => "MINUTE",
    /// Hours
    Hour => "HOUR",
    /// Days
    Day => "DAY",

    // Energy
    /// Joules
    Joule => "JOULE",
    /// Kilocalories
    Kilocalorie => "KILOCALORIE",
    /// Large (food) calories
    LargeCalorie => "LARGE_CALORIE",
    /// Small calories
    SmallCalorie => "SMALL_CALORIE",

    // Temperature
    /// Degrees Celsius
    DegreeCelsius => "DEGREE_CELSIUS",
    /// Degrees Fahrenheit
    DegreeFahrenheit => "DEGREE_FAHRENHEIT",
    /// Kelvin
    Kelvin => "KELVIN",

    // Hearing, electrical, pharmacology
    /// Hearing level in decibels
    DecibelHearingLevel => "DECIBEL_HEARING_LEVEL",
    /// Hertz
    Hertz => "HERTZ",
    /// Siemens
    Siemen => "SIEMEN",
    /// Volts
    Volt => "VOLT",
    /// International units
    InternationalUnit => "INTERNATIONAL_UNIT",

    // Scalars and rates
    /// Plain count
    Count => "COUNT",
    /// Percentage
    Percent => "PERCENT",
    /// Heart beats per minute
    BeatsPerMinute => "BEATS_PER_MINUTE",
    /// Breaths per minute
    RespirationsPerMinute => "RESPIRATIONS_PER_MINUTE",
    /// Milligrams per deciliter
    MilligramPerDeciliter => "MILLIGRAM_PER_DECILITER",
    /// Meters per second
    MeterPerSecond => "METER_PER_SECOND",

    // Sentinels
    /// Unit of a type the catalog does not know
    UnknownUnit => "UNKNOWN_UNIT",
    /// Dimensionless or structured value
    NoUnit => "NO_UNIT",
}

impl HealthDataUnit {
    /// Look up a unit by name, degrading unknown names to `UnknownUnit`
    #[must_use]
    pub fn from_name_lossy(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::UnknownUnit)
    }
}

impl fmt::Display for HealthDataUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for unit in HealthDataUnit::ALL {
            assert_eq!(HealthDataUnit::from_name(unit.as_str()), Some(*unit));
        }
    }

    #[test]
    fn serde_name_matches_canonical_name() {
        let json = serde_json::to_string(&HealthDataUnit::BeatsPerMinute).unwrap();
        assert_eq!(json, "\"BEATS_PER_MINUTE\"");
    }

    #[test]
    fn unknown_names_degrade_to_sentinel() {
        assert_eq!(
            HealthDataUnit::from_name_lossy("FURLONG"),
            HealthDataUnit::UnknownUnit
        );
    }
}
