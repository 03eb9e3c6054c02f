use std::marker::PhantomData;

use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde_json::Value;

use crate::errors::GenerationError;

/// Anything that can describe itself as a schema tree.
pub trait SchemaSource {
    fn schema_tree(&self) -> Result<Value, GenerationError>;
}

impl SchemaSource for Value {
    fn schema_tree(&self) -> Result<Value, GenerationError> {
        Ok(self.clone())
    }
}

impl SchemaSource for RootSchema {
    fn schema_tree(&self) -> Result<Value, GenerationError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Schema source backed by a Rust type deriving `JsonSchema`.
pub struct Model<T: ?Sized> {
    marker: PhantomData<fn() -> T>,
}

impl<T: JsonSchema + ?Sized> Model<T> {
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T: JsonSchema + ?Sized> Default for Model<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonSchema + ?Sized> SchemaSource for Model<T> {
    fn schema_tree(&self) -> Result<Value, GenerationError> {
        schema_for!(T).schema_tree()
    }
}

/// Input accepted by [`crate::generate_from_any`].
#[derive(Clone, Copy)]
pub enum SchemaInput<'a> {
    /// A schema tree that is already parsed.
    Tree(&'a Value),
    /// A typed source asked for its schema tree first.
    Source(&'a dyn SchemaSource),
}

impl<'a> From<&'a Value> for SchemaInput<'a> {
    fn from(value: &'a Value) -> Self {
        SchemaInput::Tree(value)
    }
}
