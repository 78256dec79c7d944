use crate::infrastructure::schema_validator::{validate_all_vertex_items, validate_graph_file};
use crate::infrastructure::serde_json_adapter::GraphFileDto;
use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Checks everything the sort takes for granted about a graph file.
pub fn validate_graph(dto: &GraphFileDto) -> Result<()> {
    let graph_value = serde_json::to_value(dto)?;
    validate_graph_file(&graph_value)?;
    validate_all_vertex_items(&graph_value)?;

    // Vertex names are identities.
    let mut owner: BTreeMap<&str, usize> = BTreeMap::new();
    for (position, vertex) in dto.vertices.iter().enumerate() {
        if let Some(first) = owner.insert(vertex.name.as_str(), position) {
            return Err(anyhow!(
                "vertex name must be unique: {} (saw at positions {first} and {position})",
                vertex.name
            ));
        }
    }

    for vertex in dto.vertices.iter() {
        let mut seen_targets: BTreeSet<&str> = BTreeSet::new();
        for target in vertex.edges.iter() {
            if !owner.contains_key(target.as_str()) {
                return Err(anyhow!(
                    "edge from {} targets unknown vertex: {target}",
                    vertex.name
                ));
            }
            if !seen_targets.insert(target.as_str()) {
                return Err(anyhow!("duplicate edge: {} -> {target}", vertex.name));
            }
        }
    }

    Ok(())
}
