use crate::domain::builder::GraphBuilder;
use crate::domain::graph::Vertex;
use crate::infrastructure::serde_json_adapter::GraphFileDto;
use anyhow::{Context, Result};

pub fn build_vertices(dto: &GraphFileDto) -> Result<Vec<Vertex<String>>> {
    let mut builder = GraphBuilder::new();

    for vertex in dto.vertices.iter() {
        builder
            .add_vertex(vertex.name.clone())
            .with_context(|| format!("adding vertex {:?}", vertex.name))?;
    }

    for vertex in dto.vertices.iter() {
        builder
            .add_edges(&vertex.name, &vertex.edges)
            .with_context(|| format!("adding edges of vertex {:?}", vertex.name))?;
    }

    Ok(builder.build())
}
