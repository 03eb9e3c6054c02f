//! Schema-driven synthetic value generation.
//!
//! Given a JSON Schema tree (`serde_json::Value`), produce a value that
//! validates against it. Supported: `type`, `enum`, `const`, `oneOf`/`anyOf`,
//! `$ref` into the root `definitions`, and the usual string, numeric, array
//! and object refinements. Keywords listed in [`UNSUPPORTED_KEYWORDS`] are
//! rejected instead of being silently ignored.
//!
//! Randomness is always supplied by the caller, so a seeded
//! `rand_chacha::ChaCha8Rng` reproduces any value.

pub mod adapter;
pub mod definitions;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod keywords;
pub mod model;
pub mod support;

use rand::RngCore;
use schemars::JsonSchema;
use serde_json::Value;

pub use adapter::{Model, SchemaInput, SchemaSource};
pub use definitions::{DEFINITIONS_PREFIX, Definitions};
pub use engine::SchemaGenerator;
pub use errors::{GenerationError, Result};
pub use model::GenerateOptions;
pub use support::{UNSUPPORTED_KEYWORDS, check_supported};

/// Generate a value from a schema tree with default options.
pub fn generate_from_schema(schema: &Value, rng: &mut dyn RngCore) -> Result<Value> {
    SchemaGenerator::default().generate(schema, rng)
}

/// Generate a value from the schema of a type deriving `JsonSchema`.
pub fn generate_from_model<T: JsonSchema + ?Sized>(rng: &mut dyn RngCore) -> Result<Value> {
    SchemaGenerator::default().generate_from_model::<T>(rng)
}

/// Generate from either a schema tree or a typed schema source.
pub fn generate_from_any(input: SchemaInput<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    SchemaGenerator::default().generate_from_any(input, rng)
}
