use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use schemars::JsonSchema;
use serde_json::Value;
use tracing::debug;

use crate::adapter::{Model, SchemaInput, SchemaSource};
use crate::definitions::Definitions;
use crate::errors::GenerationError;
use crate::generators::GeneratorContext;
use crate::model::GenerateOptions;

/// Entry point for generating values from schema trees.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    options: GenerateOptions,
}

impl SchemaGenerator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate a value satisfying `schema`.
    ///
    /// The root `definitions` table is captured once here and shared by every
    /// nested node.
    pub fn generate(&self, schema: &Value, rng: &mut dyn RngCore) -> Result<Value, GenerationError> {
        let definitions = Definitions::capture(schema);
        debug!(
            definitions = definitions.len(),
            "schema generation started"
        );
        let ctx = GeneratorContext::new(&definitions, &self.options);
        let result = ctx.generate(schema, rng);
        match &result {
            Ok(_) => debug!("schema generation completed"),
            Err(err) => debug!(kind = err.kind(), error = %err, "schema generation failed"),
        }
        result
    }

    /// Generate with a fresh `ChaCha8Rng` seeded from `seed`.
    pub fn generate_seeded(&self, schema: &Value, seed: u64) -> Result<Value, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(schema, &mut rng)
    }

    /// Ask `source` for its schema tree, then generate from it.
    pub fn generate_from_source(
        &self,
        source: &dyn SchemaSource,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let schema = source.schema_tree()?;
        self.generate(&schema, rng)
    }

    /// Generate a value for a type deriving `JsonSchema`.
    pub fn generate_from_model<T: JsonSchema + ?Sized>(
        &self,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        self.generate_from_source(&Model::<T>::new(), rng)
    }

    pub fn generate_from_any(
        &self,
        input: SchemaInput<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        match input {
            SchemaInput::Tree(schema) => self.generate(schema, rng),
            SchemaInput::Source(source) => self.generate_from_source(source, rng),
        }
    }
}
