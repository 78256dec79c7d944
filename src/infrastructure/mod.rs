// Infrastructure layer: algorithm adapters, file I/O, serde, eventing
pub mod double_stack;
pub mod event_ndjson;
pub mod scc_pea;
pub mod schema_validator;
pub mod serde_json_adapter;
