use serde_json::Value;

use crate::definitions::{Definitions, ref_name};
use crate::errors::GenerationError;
use crate::keywords::Keywords;

/// Keywords that cause a schema node to be rejected outright.
pub const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "allOf",
    "not",
    "if",
    "then",
    "else",
    "pattern",
    "patternProperties",
    "dependencies",
    "maxProperties",
    "minProperties",
];

/// Keywords that tell the generator what to produce.
const DISCRIMINATORS: &[&str] = &["type", "enum", "$ref", "oneOf", "anyOf"];

/// Reject schema nodes the generator cannot honor.
///
/// Checks run in a fixed order: denylisted keywords, `$ref` resolution,
/// `const` short-circuit, discriminator presence, multiple types.
pub fn check_supported(node: &Value, definitions: &Definitions) -> Result<(), GenerationError> {
    let keywords = Keywords::new(node)?;

    if let Some(keyword) = UNSUPPORTED_KEYWORDS
        .iter()
        .find(|keyword| keywords.contains(keyword))
    {
        return Err(GenerationError::unsupported(
            node,
            format!("{keyword} key is not supported"),
        ));
    }

    if let Some(pointer) = keywords.get("$ref") {
        let Some(pointer) = pointer.as_str() else {
            return Err(GenerationError::invalid(node, "$ref must be a string"));
        };
        if definitions.resolve(pointer).is_none() {
            return Err(GenerationError::invalid(
                node,
                format!("{} not present in definitions", ref_name(pointer)),
            ));
        }
    }

    if keywords.contains("const") {
        return Ok(());
    }

    if !DISCRIMINATORS.iter().any(|key| keywords.contains(key)) {
        return Err(GenerationError::unsupported(node, "type key is required"));
    }

    if let Some(types) = keywords.get_array("type")
        && types.len() > 1
    {
        return Err(GenerationError::unsupported(
            node,
            "multiple types not supported yet",
        ));
    }

    Ok(())
}
