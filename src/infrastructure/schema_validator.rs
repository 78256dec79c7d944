use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static GRAPH_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/graph_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid graph schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile graph schema")
});

static VERTEX_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/vertex_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid vertex schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile vertex schema")
});

/// Validate the whole graph file against the graph schema
pub fn validate_graph_file(graph: &Value) -> Result<()> {
    match GRAPH_SCHEMA.validate(graph) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Graph file validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate a single vertex entry against the vertex schema
pub fn validate_vertex_item(vertex: &Value) -> Result<()> {
    match VERTEX_SCHEMA.validate(vertex) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Vertex validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

pub fn validate_all_vertex_items(graph: &Value) -> Result<()> {
    let Some(vertices) = graph.get("vertices").and_then(|v| v.as_array()) else {
        return Ok(());
    };
    for (position, vertex) in vertices.iter().enumerate() {
        validate_vertex_item(vertex).map_err(|e| anyhow!("vertex at position {position}: {e}"))?;
    }
    Ok(())
}
