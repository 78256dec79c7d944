use crate::usecase::stats::SortStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    EdgesNormalized {
        vertices: usize,
        edges: usize,
    },

    RanksAssigned {
        vertices: usize,
        components: usize,
        cyclic_components: usize,
        largest_component: usize,
    },

    VerticesMoved {
        moved: usize,
    },

    Finished {
        stats: SortStats,
    },
}
