// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Raw record keys, device defaults, unit conversions, and native code tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Named constants for the raw record layout shared by the read and write
//! paths, so that both sides of the native boundary spell every key the
//! same way.

/// Native integer code tables (recording method, flow, ECG, insulin)
pub mod codes;
/// Unit conversion constants
pub mod units;

/// Keys of the raw record handed over by the native layer
pub mod keys {
    /// Interval start, epoch milliseconds
    pub const DATE_FROM: &str = "date_from";
    /// Interval end, epoch milliseconds
    pub const DATE_TO: &str = "date_to";
    /// Platform-assigned record identifier
    pub const UUID: &str = "uuid";
    /// Identifier of the app or device that wrote the record
    pub const SOURCE_ID: &str = "source_id";
    /// Human-readable name of the writing source
    pub const SOURCE_NAME: &str = "source_name";
    /// Nested mapping of platform-specific extras
    pub const METADATA: &str = "metadata";
    /// Integer provenance code
    pub const RECORDING_METHOD: &str = "recording_method";
    /// Device product type string
    pub const PRODUCT_TYPE: &str = "productType";
    /// Device operating system version string
    pub const OS_VERSION: &str = "osVersion";
    /// Generic magnitude of numeric records
    pub const VALUE: &str = "value";
    /// Logical data type name, emitted by the write path
    pub const DATA_TYPE: &str = "data_type";
    /// Client-side record identifier, emitted by the write path
    pub const CLIENT_RECORD_ID: &str = "client_record_id";

    // Workout summary fields (present on any record type)
    /// Workout activity kind of the enclosing session
    pub const WORKOUT_TYPE: &str = "workout_type";
    /// Total workout distance
    pub const TOTAL_DISTANCE: &str = "total_distance";
    /// Total workout energy burned
    pub const TOTAL_ENERGY_BURNED: &str = "total_energy_burned";
    /// Total workout steps
    pub const TOTAL_STEPS: &str = "total_steps";

    // Workout value fields
    /// Workout activity kind of a WORKOUT record
    pub const WORKOUT_ACTIVITY_TYPE: &str = "workout_activity_type";
    /// Unit name of `total_distance`
    pub const TOTAL_DISTANCE_UNIT: &str = "total_distance_unit";
    /// Unit name of `total_energy_burned`
    pub const TOTAL_ENERGY_BURNED_UNIT: &str = "total_energy_burned_unit";
    /// Unit name of `total_steps`
    pub const TOTAL_STEPS_UNIT: &str = "total_steps_unit";
    /// Mapping of additional named workout metrics
    pub const EXTENDED_METRICS: &str = "extended_metrics";

    // Electrocardiogram fields
    /// Ordered voltage samples
    pub const VOLTAGE_VALUES: &str = "voltage_values";
    /// Sample voltage
    pub const VOLTAGE: &str = "voltage";
    /// Sample offset from recording start, seconds
    pub const TIME_SINCE_SAMPLE_START: &str = "time_since_sample_start";
    /// Average heart rate during the recording
    pub const AVERAGE_HEART_RATE: &str = "average_heart_rate";
    /// Sampling frequency in hertz
    pub const SAMPLING_FREQUENCY: &str = "sampling_frequency";
    /// ECG classification code
    pub const CLASSIFICATION: &str = "classification";

    // Audiogram fields
    /// Tested frequencies
    pub const FREQUENCIES: &str = "frequencies";
    /// Left ear sensitivities, parallel to `frequencies`
    pub const LEFT_EAR_SENSITIVITIES: &str = "left_ear_sensitivities";
    /// Right ear sensitivities, parallel to `frequencies`
    pub const RIGHT_EAR_SENSITIVITIES: &str = "right_ear_sensitivities";

    // Insulin delivery fields
    /// Delivery reason code
    pub const REASON: &str = "reason";

    // Menstruation fields
    /// Whether the sample starts a cycle
    pub const IS_START_OF_CYCLE: &str = "is_start_of_cycle";
    /// Whether the user entered the sample by hand
    pub const WAS_USER_ENTERED: &str = "was_user_entered";

    // Workout route fields
    /// Nested route sub-record
    pub const ROUTE: &str = "route";
    /// Route location samples
    pub const LOCATIONS: &str = "locations";
    /// Location latitude
    pub const LATITUDE: &str = "latitude";
    /// Location longitude
    pub const LONGITUDE: &str = "longitude";
    /// Location timestamp, epoch milliseconds
    pub const TIMESTAMP: &str = "timestamp";
    /// Location altitude
    pub const ALTITUDE: &str = "altitude";
    /// Horizontal accuracy
    pub const HORIZONTAL_ACCURACY: &str = "horizontal_accuracy";
    /// Vertical accuracy
    pub const VERTICAL_ACCURACY: &str = "vertical_accuracy";

    // Nutrition fields
    /// Meal kind
    pub const MEAL_TYPE: &str = "meal_type";
    /// Meal or food name
    pub const NAME: &str = "name";
}

/// Defaults applied when the native layer omits optional fields
pub mod defaults {
    /// Product type used when the record names no device
    pub const UNKNOWN_DEVICE: &str = "Unknown Device";
    /// OS version used when the record names none
    pub const UNKNOWN_OS: &str = "Unknown OS";
}
