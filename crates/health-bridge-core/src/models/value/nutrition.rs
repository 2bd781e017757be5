// ABOUTME: Nutrition value variant with meal kind and independently-optional nutrients
// ABOUTME: Absent nutrients stay absent; nothing defaults to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::keys;
use crate::errors::HealthDataResult;
use crate::raw::{insert_opt, RawRecord, RawRecordExt};

/// Meal a nutrition entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Lowercase name as written to raw records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Other => "other",
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<MealType> for String {
    fn from(value: MealType) -> Self {
        value.as_str().to_owned()
    }
}

macro_rules! nutrition_value {
    ($( $(#[$doc:meta])* $field:ident, )+) => {
        /// Payload of a NUTRITION record
        ///
        /// Energy is in kilocalories, water in liters, macronutrients in grams and
        /// micronutrients in grams as the native layers report them. Each nutrient
        /// is read from and written to the raw key of the same name.
        #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
        pub struct NutritionValue {
            /// Meal kind
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub meal_type: Option<MealType>,
            /// Food or meal name
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub name: Option<String>,
            $(
                $(#[$doc])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<f64>,
            )+
        }

        impl NutritionValue {
            /// Raw keys of every nutrient field
            pub const NUTRIENT_KEYS: &'static [&'static str] = &[$(stringify!($field)),+];

            fn read_nutrients(raw: &RawRecord) -> HealthDataResult<Self> {
                Ok(Self {
                    meal_type: None,
                    name: None,
                    $($field: raw.optional_f64(stringify!($field))?,)+
                })
            }

            fn write_nutrients(&self, raw: &mut RawRecord) {
                $(insert_opt(raw, stringify!($field), self.$field);)+
            }
        }
    };
}

nutrition_value! {
    // Macronutrients
    /// Energy
    calories,
    /// Protein
    protein,
    /// Total fat
    fat,
    /// Total carbohydrates
    carbs,
    /// Dietary fiber
    fiber,
    /// Sugar
    sugar,
    /// Saturated fat
    fat_saturated,
    /// Monounsaturated fat
    fat_monounsaturated,
    /// Polyunsaturated fat
    fat_polyunsaturated,
    /// Trans fat
    fat_trans_monoenoic,
    /// Unsaturated fat
    fat_unsaturated,
    /// Cholesterol
    cholesterol,
    /// Caffeine
    caffeine,
    /// Water
    water,

    // Vitamins
    /// Vitamin A
    vitamin_a,
    /// Vitamin B1 (thiamine)
    b1_thiamine,
    /// Vitamin B2 (riboflavin)
    b2_riboflavin,
    /// Vitamin B3 (niacin)
    b3_niacin,
    /// Vitamin B5 (pantothenic acid)
    b5_pantothenic_acid,
    /// Vitamin B6 (pyridoxine)
    b6_pyridoxine,
    /// Vitamin B7 (biotin)
    b7_biotin,
    /// Vitamin B9 (folate)
    b9_folate,
    /// Vitamin B12 (cobalamin)
    b12_cobalamin,
    /// Vitamin C
    vitamin_c,
    /// Vitamin D
    vitamin_d,
    /// Vitamin E
    vitamin_e,
    /// Vitamin K
    vitamin_k,

    // Minerals
    /// Calcium
    calcium,
    /// Chloride
    chloride,
    /// Chromium
    chromium,
    /// Copper
    copper,
    /// Iodine
    iodine,
    /// Iron
    iron,
    /// Magnesium
    magnesium,
    /// Manganese
    manganese,
    /// Molybdenum
    molybdenum,
    /// Phosphorus
    phosphorus,
    /// Potassium
    potassium,
    /// Selenium
    selenium,
    /// Sodium
    sodium,
    /// Zinc
    zinc,
}

impl NutritionValue {
    /// Parse the nutrition fields of a raw record
    ///
    /// Keys unrelated to nutrition are ignored.
    ///
    /// # Errors
    /// `InvalidField` when a nutrient, the meal kind or the meal name has the
    /// wrong shape
    pub fn parse(raw: &RawRecord) -> HealthDataResult<Self> {
        Ok(Self {
            meal_type: raw
                .optional_str(keys::MEAL_TYPE)?
                .map(MealType::from_str_lossy),
            name: raw.optional_str(keys::NAME)?.map(str::to_owned),
            ..Self::read_nutrients(raw)?
        })
    }

    /// Write the populated nutrition fields into a raw record
    pub fn write_raw(&self, raw: &mut RawRecord) {
        insert_opt(raw, keys::MEAL_TYPE, self.meal_type.map(MealType::as_str));
        insert_opt(raw, keys::NAME, self.name.as_deref());
        self.write_nutrients(raw);
    }
}
