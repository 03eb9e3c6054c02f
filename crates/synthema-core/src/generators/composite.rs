use rand::{Rng, RngCore};
use serde_json::{Map, Value, json};
use tracing::warn;

use crate::errors::GenerationError;
use crate::generators::GeneratorContext;
use crate::keywords::{Keywords, length_range};

pub fn generate_array(
    ctx: &GeneratorContext<'_>,
    keywords: &Keywords<'_>,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    let fallback_items = json!({"type": "string"});
    let items = keywords.get("items").unwrap_or(&fallback_items);
    let unique = keywords.get_bool("uniqueItems").unwrap_or(false);
    let (min_items, max_items) =
        length_range(keywords, "minItems", "maxItems", ctx.options.array_max_items)?;
    let target = rng.random_range(min_items..=max_items);

    let mut result: Vec<Value> = Vec::new();
    let mut duplicates = 0_u32;
    while result.len() < target {
        let item = ctx.generate(items, rng)?;
        if unique && result.iter().any(|existing| json_equal(existing, &item)) {
            duplicates += 1;
            if duplicates >= ctx.options.unique_items_max_retries {
                if result.len() >= min_items {
                    warn!(
                        requested = target,
                        generated = result.len(),
                        retries = duplicates,
                        "unique items truncated"
                    );
                    break;
                }
                return Err(GenerationError::UniqueItemsExhausted {
                    requested: target,
                    generated: result.len(),
                });
            }
            continue;
        }
        duplicates = 0;
        result.push(item);
    }

    Ok(Value::Array(result))
}

/// Equality as `uniqueItems` sees it: numbers compare by value, so `1 == 1.0`.
fn json_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b || a.as_f64() == b.as_f64(),
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| json_equal(x, y)))
        }
        _ => left == right,
    }
}

pub fn generate_object(
    ctx: &GeneratorContext<'_>,
    keywords: &Keywords<'_>,
    rng: &mut dyn RngCore,
) -> Result<Value, GenerationError> {
    let required: Vec<&str> = keywords
        .get_array("required")
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let probability = ctx.options.optional_probability();

    let mut object = Map::new();
    if let Some(properties) = keywords.get_object("properties") {
        for (key, schema) in properties {
            if required.contains(&key.as_str()) || rng.random_bool(probability) {
                object.insert(key.clone(), ctx.generate(schema, rng)?);
            }
        }
    }

    Ok(Value::Object(object))
}
