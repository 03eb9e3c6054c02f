use serde_json::{Map, Value};

use crate::errors::GenerationError;

/// Read-only view over the keywords of one schema node.
#[derive(Clone, Copy)]
pub struct Keywords<'a> {
    node: &'a Value,
    map: &'a Map<String, Value>,
}

impl<'a> Keywords<'a> {
    /// Wrap a schema node, rejecting anything that is not a JSON object.
    pub fn new(node: &'a Value) -> Result<Self, GenerationError> {
        match node {
            Value::Object(map) => Ok(Self { node, map }),
            _ => Err(GenerationError::unsupported(
                node,
                "schema must be a JSON object",
            )),
        }
    }

    pub fn node(&self) -> &'a Value {
        self.node
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.map.get(key).and_then(|value| {
            value
                .as_u64()
                .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
        })
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.map.get(key).and_then(|value| value.as_f64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.map.get(key).and_then(|value| value.as_bool())
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(|value| value.as_str())
    }

    pub fn get_array(&self, key: &str) -> Option<&'a Vec<Value>> {
        self.map.get(key).and_then(|value| value.as_array())
    }

    pub fn get_object(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.map.get(key).and_then(|value| value.as_object())
    }
}

/// Resolve an inclusive `[min, max]` length range from two keywords.
///
/// An absent upper bound below an explicit lower bound is moved one default
/// span above it.
pub fn length_range(
    keywords: &Keywords<'_>,
    min_key: &str,
    max_key: &str,
    default_max: usize,
) -> Result<(usize, usize), GenerationError> {
    let min = keywords.get_u64(min_key).map(|v| v as usize).unwrap_or(0);
    let max = match keywords.get_u64(max_key) {
        Some(max) => max as usize,
        None if min > default_max => min.saturating_add(default_max),
        None => default_max,
    };
    if min > max {
        return Err(GenerationError::invalid(
            keywords.node(),
            format!("{min_key} exceeds {max_key}"),
        ));
    }
    Ok((min, max))
}

/// One side of a numeric range after exclusivity has been folded in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    pub value: f64,
    pub exclusive: bool,
    pub explicit: bool,
}

/// Lower and upper numeric bounds, honoring both the boolean (draft 4) and
/// numeric (draft 6+) spelling of `exclusiveMinimum`/`exclusiveMaximum`.
pub fn numeric_bounds(
    keywords: &Keywords<'_>,
    default_min: f64,
    default_max: f64,
) -> (Bound, Bound) {
    let lower = bound(keywords, "minimum", "exclusiveMinimum", f64::max);
    let upper = bound(keywords, "maximum", "exclusiveMaximum", f64::min);

    let span = default_max - default_min;
    let lower_default = Bound {
        value: default_min,
        exclusive: false,
        explicit: false,
    };
    let upper_default = Bound {
        value: default_max,
        exclusive: false,
        explicit: false,
    };

    match (lower, upper) {
        (Some(lower), Some(upper)) => (lower, upper),
        (Some(lower), None) if lower.value >= default_max => (
            lower,
            Bound {
                value: lower.value + span,
                ..upper_default
            },
        ),
        (Some(lower), None) => (lower, upper_default),
        (None, Some(upper)) if upper.value <= default_min => (
            Bound {
                value: upper.value - span,
                ..lower_default
            },
            upper,
        ),
        (None, Some(upper)) => (lower_default, upper),
        (None, None) => (lower_default, upper_default),
    }
}

fn bound(
    keywords: &Keywords<'_>,
    inclusive_key: &str,
    exclusive_key: &str,
    stricter: fn(f64, f64) -> f64,
) -> Option<Bound> {
    let inclusive = keywords.get_f64(inclusive_key);
    match keywords.get(exclusive_key) {
        Some(Value::Bool(true)) => inclusive.map(|value| Bound {
            value,
            exclusive: true,
            explicit: true,
        }),
        Some(Value::Number(number)) => {
            let exclusive = number.as_f64()?;
            match inclusive {
                Some(value) if stricter(value, exclusive) == value && value != exclusive => {
                    Some(Bound {
                        value,
                        exclusive: false,
                        explicit: true,
                    })
                }
                _ => Some(Bound {
                    value: exclusive,
                    exclusive: true,
                    explicit: true,
                }),
            }
        }
        _ => inclusive.map(|value| Bound {
            value,
            exclusive: false,
            explicit: true,
        }),
    }
}
