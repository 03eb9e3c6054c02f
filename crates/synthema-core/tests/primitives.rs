use jsonschema::JSONSchema;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};

use synthema_core::{GenerateOptions, GenerationError, SchemaGenerator, generate_from_schema};

fn sample(schema: &Value, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let value = generate_from_schema(schema, &mut rng).expect("generate value");
    let compiled = JSONSchema::compile(schema).expect("compile schema");
    assert!(
        compiled.is_valid(&value),
        "value {value} does not satisfy {schema}"
    );
    value
}

#[test]
fn boolean_and_null() {
    for seed in 0..20 {
        assert!(sample(&json!({"type": "boolean"}), seed).is_boolean());
        assert!(sample(&json!({"type": "null"}), seed).is_null());
    }
}

#[test]
fn integer_defaults_to_zero_through_thousand() {
    for seed in 0..100 {
        let value = sample(&json!({"type": "integer"}), seed);
        let value = value.as_i64().expect("integer");
        assert!((0..=1000).contains(&value));
    }
}

#[test]
fn integer_with_equal_bounds_is_fixed() {
    for seed in 0..20 {
        let schema = json!({"type": "integer", "minimum": 9, "maximum": 9});
        assert_eq!(sample(&schema, seed), json!(9));
    }
}

#[test]
fn integer_boolean_exclusive_bounds_shift_inward() {
    let generator = SchemaGenerator::default();
    for seed in 0..20 {
        let schema = json!({
            "type": "integer",
            "minimum": 9,
            "maximum": 10,
            "exclusiveMinimum": true
        });
        let value = generator.generate_seeded(&schema, seed).expect("generate");
        assert_eq!(value, json!(10));

        let schema = json!({
            "type": "integer",
            "minimum": 9,
            "maximum": 10,
            "exclusiveMaximum": true
        });
        let value = generator.generate_seeded(&schema, seed).expect("generate");
        assert_eq!(value, json!(9));
    }
}

#[test]
fn integer_numeric_exclusive_bounds() {
    for seed in 0..20 {
        let schema = json!({"type": "integer", "minimum": 9, "exclusiveMaximum": 10});
        assert_eq!(sample(&schema, seed), json!(9));
        let schema = json!({"type": "integer", "exclusiveMinimum": 9, "maximum": 10});
        assert_eq!(sample(&schema, seed), json!(10));
    }
}

#[test]
fn integer_with_only_large_minimum_stays_valid() {
    for seed in 0..20 {
        let value = sample(&json!({"type": "integer", "minimum": 5000}), seed);
        let value = value.as_i64().expect("integer");
        assert!((5000..=6000).contains(&value));
    }
}

#[test]
fn integer_inverted_bounds_are_invalid() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let schema = json!({"type": "integer", "minimum": 10, "maximum": 2});
    let result = generate_from_schema(&schema, &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidSchema { .. })));
}

#[test]
fn integer_bounds_beyond_i64_are_invalid() {
    for schema in [
        json!({"type": "integer", "exclusiveMinimum": 1e19}),
        json!({"type": "integer", "exclusiveMaximum": -1e19}),
        json!({"type": "integer", "minimum": -1e300, "maximum": 0}),
    ] {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = generate_from_schema(&schema, &mut rng).expect_err("out of range");
        assert!(matches!(err, GenerationError::InvalidSchema { .. }));
        assert_eq!(err.reason(), Some("bounds exceed integer range"));
    }
}

#[test]
fn integer_bounds_at_i64_edges_stay_inside() {
    let schema = json!({"type": "integer", "minimum": 9.2e18, "maximum": 9.2e18});
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let value = generate_from_schema(&schema, &mut rng).expect("generate");
    assert_eq!(value.as_i64(), Some(9_200_000_000_000_000_000));
}

#[test]
fn integer_multiple_of_respects_bounds() {
    for seed in 0..50 {
        let schema = json!({"type": "integer", "multipleOf": 7, "minimum": 10, "maximum": 50});
        let value = sample(&schema, seed).as_i64().expect("integer");
        assert_eq!(value % 7, 0);
        assert!((10..=50).contains(&value));
    }
}

#[test]
fn number_is_float_within_bounds() {
    for seed in 0..50 {
        let value = sample(&json!({"type": "number", "minimum": 10, "maximum": 20}), seed);
        assert!(value.is_f64());
        let value = value.as_f64().expect("number");
        assert!((10.0..=20.0).contains(&value));
    }
}

#[test]
fn number_with_span_wider_than_f64_stays_within_bounds() {
    let schema = json!({"type": "number", "minimum": -1e308, "maximum": 1e308});
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let value = generate_from_schema(&schema, &mut rng).expect("generate");
        let value = value.as_f64().expect("number");
        assert!(value.is_finite());
        assert!((-1e308..=1e308).contains(&value));
    }
}

#[test]
fn number_exclusive_minimum_is_strict() {
    for seed in 0..50 {
        let schema = json!({"type": "number", "exclusiveMinimum": 9, "maximum": 10});
        let value = sample(&schema, seed).as_f64().expect("number");
        assert!(value > 9.0 && value <= 10.0);
    }
}

#[test]
fn number_multiple_of_without_bounds_uses_factor_range() {
    for seed in 0..50 {
        let value = sample(&json!({"type": "number", "multipleOf": 5}), seed);
        let value = value.as_i64().expect("integral multiple");
        assert_eq!(value % 5, 0);
        assert!((0..=500).contains(&value));
    }
}

#[test]
fn number_multiple_of_with_fraction() {
    for seed in 0..50 {
        let schema = json!({"type": "number", "multipleOf": 0.5, "minimum": 1, "maximum": 3});
        let value = sample(&schema, seed).as_f64().expect("number");
        assert!((1.0..=3.0).contains(&value));
        assert_eq!((value * 2.0).fract(), 0.0);
    }
}

#[test]
fn string_with_fixed_length_is_lowercase_letters() {
    for seed in 0..50 {
        let schema = json!({"type": "string", "minLength": 6, "maxLength": 6});
        let value = sample(&schema, seed);
        let value = value.as_str().expect("string");
        assert_eq!(value.len(), 6);
        assert!(value.chars().all(|ch| ch.is_ascii_lowercase()));
    }
}

#[test]
fn string_length_defaults_to_ten() {
    for seed in 0..50 {
        let value = sample(&json!({"type": "string"}), seed);
        assert!(value.as_str().expect("string").len() <= 10);
    }
    for seed in 0..20 {
        let schema = json!({"type": "string", "minLength": 0, "maxLength": 2});
        assert!(sample(&schema, seed).as_str().expect("string").len() <= 2);
    }
}

#[test]
fn string_options_change_default_length() {
    let options = GenerateOptions {
        string_max_length: 3,
        ..GenerateOptions::default()
    };
    let generator = SchemaGenerator::new(options);
    for seed in 0..50 {
        let value = generator
            .generate_seeded(&json!({"type": "string"}), seed)
            .expect("generate");
        assert!(value.as_str().expect("string").len() <= 3);
    }
}

#[test]
fn string_formats_validate() {
    for format in ["date-time", "date", "time", "email", "hostname", "ipv4", "ipv6", "uri"] {
        for seed in 0..10 {
            let value = sample(&json!({"type": "string", "format": format}), seed);
            assert!(value.is_string(), "{format} produced {value}");
        }
    }
}

#[test]
fn unknown_format_falls_back_to_letters() {
    let value = sample(&json!({"type": "string", "format": "color", "minLength": 4}), 3);
    let value = value.as_str().expect("string");
    assert!(value.len() >= 4);
    assert!(value.chars().all(|ch| ch.is_ascii_lowercase()));
}

#[test]
fn enum_picks_listed_values() {
    let choices = json!(["foo", "bar", "ba"]);
    for seed in 0..30 {
        let value = sample(&json!({"type": "string", "enum": choices}), seed);
        assert!(choices.as_array().expect("array").contains(&value));
    }
    let numbers = json!([1, 1.2, 3.3]);
    for seed in 0..30 {
        let value = sample(&json!({"type": "number", "enum": numbers}), seed);
        assert!(numbers.as_array().expect("array").contains(&value));
    }
}

#[test]
fn enum_must_not_be_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = generate_from_schema(&json!({"enum": []}), &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidSchema { .. })));
}

#[test]
fn const_wins_over_everything_else() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let schema = json!({"const": "world", "type": "integer", "enum": [1, 2]});
    let value = generate_from_schema(&schema, &mut rng).expect("generate");
    assert_eq!(value, json!("world"));
}

#[test]
fn falsy_const_values_are_still_const() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for literal in [json!(false), json!(0), json!(""), Value::Null] {
        let schema = json!({"const": literal.clone()});
        let value = generate_from_schema(&schema, &mut rng).expect("generate");
        assert_eq!(value, literal);
    }
}

#[test]
fn single_entry_type_list_is_accepted() {
    let value = sample(&json!({"type": ["boolean"]}), 5);
    assert!(value.is_boolean());
}

#[test]
fn unknown_type_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = generate_from_schema(&json!({"type": "date"}), &mut rng);
    match result {
        Err(GenerationError::UnsupportedType { type_value }) => {
            assert_eq!(type_value, json!("date"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn same_seed_reproduces_value() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "score": {"type": "number"},
            "tags": {"type": "array", "items": {"type": "integer"}}
        }
    });
    let generator = SchemaGenerator::default();
    let a = generator.generate_seeded(&schema, 42).expect("generate a");
    let b = generator.generate_seeded(&schema, 42).expect("generate b");
    assert_eq!(a, b);
}
