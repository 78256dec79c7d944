use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphFileDto {
    #[serde(default)]
    pub vertices: Vec<VertexDto>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VertexDto {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl VertexDto {
    pub fn new(name: &str, edges: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            edges: edges.iter().map(|e| e.to_string()).collect(),
            extra: BTreeMap::new(),
        }
    }
}

pub async fn read_graph_file(path: &str) -> Result<GraphFileDto> {
    let raw = fs::read_to_string(path).await?;
    let dto: GraphFileDto = serde_json::from_str(&raw)?;
    Ok(dto)
}

pub async fn write_graph_file(path: &str, dto: &GraphFileDto) -> Result<()> {
    let mut pretty = serde_json::to_string_pretty(dto)?;
    pretty.push('\n');
    fs::write(path, pretty).await?;
    Ok(())
}
