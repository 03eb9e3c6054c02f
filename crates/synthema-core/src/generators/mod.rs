pub mod composite;
pub mod formats;
pub mod primitives;

use rand::{Rng, RngCore};
use serde_json::Value;

use crate::definitions::{Definitions, ref_name};
use crate::errors::GenerationError;
use crate::keywords::Keywords;
use crate::model::GenerateOptions;
use crate::support::check_supported;

/// Value kinds accepted by the `type` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaType {
    Null,
    Boolean,
    String,
    Integer,
    Number,
    Array,
    Object,
}

impl SchemaType {
    /// Interpret a `type` keyword value; a one-element list counts as its element.
    pub fn parse(value: &Value) -> Result<Self, GenerationError> {
        let parsed = match value {
            Value::String(name) => match name.as_str() {
                "null" => Some(SchemaType::Null),
                "boolean" => Some(SchemaType::Boolean),
                "string" => Some(SchemaType::String),
                "integer" => Some(SchemaType::Integer),
                "number" => Some(SchemaType::Number),
                "array" => Some(SchemaType::Array),
                "object" => Some(SchemaType::Object),
                _ => None,
            },
            Value::Array(types) if types.len() == 1 => return SchemaType::parse(&types[0]),
            _ => None,
        };
        parsed.ok_or_else(|| GenerationError::UnsupportedType {
            type_value: value.clone(),
        })
    }
}

/// State shared by every recursive call of one top-level generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub definitions: &'a Definitions,
    pub options: &'a GenerateOptions,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(definitions: &'a Definitions, options: &'a GenerateOptions) -> Self {
        Self {
            definitions,
            options,
        }
    }

    /// Generate a value for one schema node.
    ///
    /// Precedence is fixed: `const`, `enum`, `oneOf`, `anyOf`, `$ref`, then
    /// `type`. Sibling keywords of the first match are ignored.
    pub fn generate(&self, node: &Value, rng: &mut dyn RngCore) -> Result<Value, GenerationError> {
        check_supported(node, self.definitions)?;
        let keywords = Keywords::new(node)?;

        if let Some(value) = keywords.get("const") {
            return Ok(value.clone());
        }

        if let Some(candidates) = keywords.get("enum") {
            return choose(node, "enum", candidates, rng).cloned();
        }

        for combinator in ["oneOf", "anyOf"] {
            if let Some(alternatives) = keywords.get(combinator) {
                let schema = choose(node, combinator, alternatives, rng)?;
                return self.generate(schema, rng);
            }
        }

        if let Some(pointer) = keywords.get_str("$ref") {
            let target = self.definitions.resolve(pointer).ok_or_else(|| {
                GenerationError::invalid(
                    node,
                    format!("{} not present in definitions", ref_name(pointer)),
                )
            })?;
            return self.generate(target, rng);
        }

        let Some(type_value) = keywords.get("type") else {
            return Err(GenerationError::unsupported(node, "type key is required"));
        };

        match SchemaType::parse(type_value)? {
            SchemaType::Null => Ok(Value::Null),
            SchemaType::Boolean => Ok(primitives::generate_boolean(rng)),
            SchemaType::String => primitives::generate_string(&keywords, self.options, rng),
            SchemaType::Integer => primitives::generate_integer(&keywords, self.options, rng),
            SchemaType::Number => primitives::generate_number(&keywords, self.options, rng),
            SchemaType::Array => composite::generate_array(self, &keywords, rng),
            SchemaType::Object => composite::generate_object(self, &keywords, rng),
        }
    }
}

fn choose<'v>(
    node: &Value,
    keyword: &str,
    candidates: &'v Value,
    rng: &mut dyn RngCore,
) -> Result<&'v Value, GenerationError> {
    let Some(candidates) = candidates.as_array() else {
        return Err(GenerationError::invalid(
            node,
            format!("{keyword} must be an array"),
        ));
    };
    if candidates.is_empty() {
        return Err(GenerationError::invalid(
            node,
            format!("{keyword} must not be empty"),
        ));
    }
    Ok(&candidates[rng.random_range(0..candidates.len())])
}
