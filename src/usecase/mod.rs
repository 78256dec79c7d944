//! Usecase layer: application workflows + events.

pub mod event;
pub mod stats;
pub mod toposort;
pub mod validate;
