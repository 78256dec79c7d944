//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: pure graph types and the ranking port
//! - usecase: the sort itself, the file pipeline + progress events
//! - infrastructure: Pearce SCC ranker, serde + async IO, schema checks
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    stable_topo_sort::interface::cli::run().await
}
