use std::env;

use serde_json::json;
use synthema_core::SchemaGenerator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = match env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 0,
    };

    let schema = json!({
        "type": "array",
        "minItems": 1,
        "maxItems": 5,
        "items": {
            "type": "object",
            "required": ["member", "role"],
            "properties": {
                "member": {"$ref": "#/definitions/person"},
                "role": {"$ref": "#/definitions/role"}
            }
        },
        "definitions": {
            "person": {
                "type": "object",
                "required": ["name", "age"],
                "properties": {
                    "name": {"type": "string", "minLength": 3},
                    "age": {"type": "integer", "minimum": 0, "maximum": 99},
                    "birthday": {"type": "string", "format": "date"},
                    "pets": {
                        "type": "array",
                        "maxItems": 2,
                        "items": {"$ref": "#/definitions/pet"}
                    }
                }
            },
            "pet": {
                "type": "object",
                "required": ["kind"],
                "properties": {
                    "kind": {"enum": ["dog", "cat"]},
                    "name": {"type": "string"}
                }
            },
            "role": {
                "type": "string",
                "enum": ["father", "mother", "son", "daughter", "aunt", "grandma", "grandpa"]
            }
        }
    });

    let family = SchemaGenerator::default().generate_seeded(&schema, seed)?;
    println!("{}", serde_json::to_string_pretty(&family)?);
    Ok(())
}
