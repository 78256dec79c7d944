use crate::domain::graph::Vertex;
use crate::infrastructure::serde_json_adapter::{GraphFileDto, VertexDto};
use std::collections::HashMap;

/// Lays the input DTO out in the order of `sorted`, carrying over each
/// vertex's normalized edge order. Extra fields ride along untouched.
pub fn rebuild_dto(input: GraphFileDto, sorted: Vec<Vertex<String>>) -> GraphFileDto {
    let GraphFileDto { vertices, extra } = input;

    let mut by_name: HashMap<String, VertexDto> =
        vertices.into_iter().map(|v| (v.name.clone(), v)).collect();

    let vertices = sorted
        .into_iter()
        .filter_map(|vertex| {
            let mut dto = by_name.remove(&vertex.key)?;
            dto.edges = vertex.edges;
            Some(dto)
        })
        .collect();

    GraphFileDto { vertices, extra }
}
