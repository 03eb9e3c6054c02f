use serde::{Deserialize, Serialize};

/// Defaults applied when a schema leaves a constraint unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Upper string length when `maxLength` is absent.
    pub string_max_length: usize,
    /// Upper array length when `maxItems` is absent.
    pub array_max_items: usize,
    /// Lower integer/number bound when `minimum` is absent.
    pub minimum: i64,
    /// Upper integer/number bound when `maximum` is absent.
    pub maximum: i64,
    /// Largest factor used for `multipleOf` when no bound is given.
    pub multiple_of_max_factor: i64,
    /// Chance of emitting a property that is not listed in `required`.
    pub optional_property_probability: f64,
    /// Consecutive duplicate items tolerated before `uniqueItems` gives up.
    pub unique_items_max_retries: u32,
    /// First year (inclusive) for `date-time`, `date` and `time` formats.
    pub datetime_start_year: i32,
    /// Last year (exclusive) for `date-time`, `date` and `time` formats.
    pub datetime_end_year: i32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            string_max_length: 10,
            array_max_items: 10,
            minimum: 0,
            maximum: 1000,
            multiple_of_max_factor: 100,
            optional_property_probability: 0.5,
            unique_items_max_retries: 100,
            datetime_start_year: 1900,
            datetime_end_year: 2050,
        }
    }
}

impl GenerateOptions {
    /// `optional_property_probability` clamped to `[0, 1]`; NaN counts as 0.5.
    pub fn optional_probability(&self) -> f64 {
        if self.optional_property_probability.is_nan() {
            0.5
        } else {
            self.optional_property_probability.clamp(0.0, 1.0)
        }
    }
}
