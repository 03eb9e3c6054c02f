use rand::{Rng, RngCore};
use serde_json::{Number, Value};

use crate::errors::GenerationError;
use crate::generators::formats::generate_format;
use crate::keywords::{Bound, Keywords, length_range, numeric_bounds};
use crate::model::GenerateOptions;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn generate_boolean(rng: &mut dyn RngCore) -> Value {
    Value::Bool(rng.random_bool(0.5))
}

pub fn generate_string(
    keywords: &Keywords<'_>,
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    if let Some(format) = keywords.get_str("format")
        && let Some(value) = generate_format(format, options, rng)
    {
        return Ok(Value::String(value));
    }

    let (min_len, max_len) =
        length_range(keywords, "minLength", "maxLength", options.string_max_length)?;
    let len = rng.random_range(min_len..=max_len);
    Ok(Value::String(random_letters(len, rng)))
}

/// Lowercase ASCII letters, each drawn independently.
pub fn random_letters(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(LETTERS[rng.random_range(0..LETTERS.len())]))
        .collect()
}

pub fn generate_integer(
    keywords: &Keywords<'_>,
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    let (lower, upper) = numeric_bounds(keywords, options.minimum as f64, options.maximum as f64);
    let min = integer_lower(keywords, lower)?;
    let max = integer_upper(keywords, upper)?;

    if let Some(multiple) = keywords.get_f64("multipleOf") {
        if multiple <= 0.0 || multiple.fract() != 0.0 {
            return Err(GenerationError::unsupported(
                keywords.node(),
                "multipleOf must be a positive integer for integer schemas",
            ));
        }
        let step = multiple as i64;
        let (k_min, k_max) = if lower.explicit || upper.explicit {
            (div_ceil(min, step), div_floor(max, step))
        } else {
            (0, options.multiple_of_max_factor)
        };
        if k_min > k_max {
            return Err(GenerationError::invalid(
                keywords.node(),
                format!("no multiple of {step} between minimum and maximum"),
            ));
        }
        let value = rng
            .random_range(k_min..=k_max)
            .checked_mul(step)
            .ok_or_else(|| out_of_range(keywords))?;
        return Ok(Value::from(value));
    }

    if min > max {
        return Err(GenerationError::invalid(
            keywords.node(),
            "minimum exceeds maximum",
        ));
    }
    Ok(Value::from(rng.random_range(min..=max)))
}

pub fn generate_number(
    keywords: &Keywords<'_>,
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    let (lower, upper) = numeric_bounds(keywords, options.minimum as f64, options.maximum as f64);

    if let Some(multiple) = keywords.get_f64("multipleOf") {
        if multiple <= 0.0 {
            return Err(GenerationError::invalid(
                keywords.node(),
                "multipleOf must be greater than zero",
            ));
        }
        let (k_min, k_max) = if lower.explicit || upper.explicit {
            multiple_factors(keywords, lower, upper, multiple)?
        } else {
            (0, options.multiple_of_max_factor)
        };
        if k_min > k_max {
            return Err(GenerationError::invalid(
                keywords.node(),
                format!("no multiple of {multiple} between minimum and maximum"),
            ));
        }
        let factor = rng.random_range(k_min..=k_max);
        let integral = keywords
            .get("multipleOf")
            .and_then(Value::as_i64)
            .and_then(|step| step.checked_mul(factor));
        return match integral {
            Some(value) => Ok(Value::from(value)),
            None => float_value(keywords, multiple * factor as f64),
        };
    }

    let min = if lower.exclusive {
        next_up(lower.value)
    } else {
        lower.value
    };
    let max = if upper.exclusive {
        next_down(upper.value)
    } else {
        upper.value
    };
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(GenerationError::invalid(
            keywords.node(),
            "minimum exceeds maximum",
        ));
    }
    let value = if min == max {
        min
    } else if max - min < f64::MAX / 2.0 {
        rng.random_range(min..=max)
    } else {
        // Wide spans are sampled on halves so every step stays finite.
        let half_span = max / 2.0 - min / 2.0;
        ((min / 2.0 + rng.random::<f64>() * half_span) * 2.0).clamp(min, max)
    };
    float_value(keywords, value)
}

fn float_value(keywords: &Keywords<'_>, value: f64) -> Result<Value, GenerationError> {
    Number::from_f64(value).map(Value::Number).ok_or_else(|| {
        GenerationError::invalid(keywords.node(), "bounds produce a non-finite number")
    })
}

fn integer_lower(keywords: &Keywords<'_>, bound: Bound) -> Result<i64, GenerationError> {
    if bound.exclusive {
        to_i64(keywords, bound.value.floor())?
            .checked_add(1)
            .ok_or_else(|| out_of_range(keywords))
    } else {
        to_i64(keywords, bound.value.ceil())
    }
}

fn integer_upper(keywords: &Keywords<'_>, bound: Bound) -> Result<i64, GenerationError> {
    if bound.exclusive {
        to_i64(keywords, bound.value.ceil())?
            .checked_sub(1)
            .ok_or_else(|| out_of_range(keywords))
    } else {
        to_i64(keywords, bound.value.floor())
    }
}

fn multiple_factors(
    keywords: &Keywords<'_>,
    lower: Bound,
    upper: Bound,
    multiple: f64,
) -> Result<(i64, i64), GenerationError> {
    let low = Bound {
        value: lower.value / multiple,
        ..lower
    };
    let high = Bound {
        value: upper.value / multiple,
        ..upper
    };
    Ok((integer_lower(keywords, low)?, integer_upper(keywords, high)?))
}

/// Whole `f64` to `i64`; values outside the `i64` range are rejected.
fn to_i64(keywords: &Keywords<'_>, value: f64) -> Result<i64, GenerationError> {
    // -2^63 and 2^63 are exact in f64.
    const LOW: f64 = -9_223_372_036_854_775_808.0;
    const HIGH: f64 = 9_223_372_036_854_775_808.0;
    if (LOW..HIGH).contains(&value) {
        Ok(value as i64)
    } else {
        Err(out_of_range(keywords))
    }
}

fn out_of_range(keywords: &Keywords<'_>) -> GenerationError {
    GenerationError::invalid(keywords.node(), "bounds exceed integer range")
}

fn div_floor(value: i64, step: i64) -> i64 {
    value.div_euclid(step)
}

fn div_ceil(value: i64, step: i64) -> i64 {
    let quotient = value.div_euclid(step);
    if value.rem_euclid(step) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Smallest `f64` strictly greater than `value`.
fn next_up(value: f64) -> f64 {
    if value.is_nan() || value == f64::INFINITY {
        return value;
    }
    if value == 0.0 {
        return f64::from_bits(1);
    }
    let bits = value.to_bits();
    if value > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Largest `f64` strictly less than `value`.
fn next_down(value: f64) -> f64 {
    -next_up(-value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_up_and_down_bracket_value() {
        for value in [-10.5, -1.0, 0.0, 1.0, 9.0, 1e300] {
            assert!(next_up(value) > value);
            assert!(next_down(value) < value);
        }
    }

    #[test]
    fn integer_bounds_round_inward() {
        let inclusive = |value| Bound {
            value,
            exclusive: false,
            explicit: true,
        };
        let exclusive = |value| Bound {
            value,
            exclusive: true,
            explicit: true,
        };
        let node = serde_json::json!({"type": "integer"});
        let keywords = Keywords::new(&node).expect("object");
        assert_eq!(integer_lower(&keywords, inclusive(9.2)).expect("lower"), 10);
        assert_eq!(integer_lower(&keywords, exclusive(9.0)).expect("lower"), 10);
        assert_eq!(integer_upper(&keywords, inclusive(9.8)).expect("upper"), 9);
        assert_eq!(integer_upper(&keywords, exclusive(10.0)).expect("upper"), 9);
    }

    #[test]
    fn integer_bounds_outside_i64_are_invalid() {
        let node = serde_json::json!({"type": "integer"});
        let keywords = Keywords::new(&node).expect("object");
        let bound = |value| Bound {
            value,
            exclusive: true,
            explicit: true,
        };
        assert!(integer_lower(&keywords, bound(1e19)).is_err());
        assert!(integer_upper(&keywords, bound(-1e19)).is_err());
        assert!(integer_lower(&keywords, bound(f64::NAN)).is_err());
        assert!(integer_upper(&keywords, bound(-9_223_372_036_854_775_808.0)).is_err());
        let floor = Bound {
            exclusive: false,
            ..bound(-9_223_372_036_854_775_808.0)
        };
        assert_eq!(integer_upper(&keywords, floor).expect("upper"), i64::MIN);
    }

    #[test]
    fn euclid_division_helpers() {
        assert_eq!(div_ceil(7, 3), 3);
        assert_eq!(div_ceil(6, 3), 2);
        assert_eq!(div_ceil(-7, 3), -2);
        assert_eq!(div_floor(-7, 3), -3);
    }
}
