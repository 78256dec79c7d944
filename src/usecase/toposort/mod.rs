mod build;
pub mod normalize;
pub mod rank_sort;
mod rebuild;

use crate::domain::error::InvalidGraph;
use crate::domain::graph::Vertex;
use crate::domain::traits::SccRanker;
use crate::infrastructure::scc_pea::PeaSccRanker;
use crate::infrastructure::serde_json_adapter::GraphFileDto;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::SortStats;
use anyhow::Result;
use std::hash::Hash;
use tokio::sync::mpsc;

/// Sorts `vertices` in place into stable topological order.
///
/// For every edge whose endpoints lie in different strongly connected
/// components, the source ends up before the target. Each component stays
/// contiguous, and vertices with no ordering constraint between them keep
/// their input order. Sorting an already sorted slice leaves it unchanged.
///
/// Fails with [`InvalidGraph`] when a key appears twice or an edge names a
/// key not present in `vertices`; the slice is untouched in that case.
/// Edge lists are reordered by target position as a side effect.
///
/// Runs in O(V + E) time without recursion, so arbitrarily deep graphs are
/// fine.
pub fn stable_topo_sort<K: Eq + Hash>(vertices: &mut [Vertex<K>]) -> Result<(), InvalidGraph> {
    stable_topo_sort_with(vertices, &PeaSccRanker)
}

/// [`stable_topo_sort`] with a caller-supplied ranker.
pub fn stable_topo_sort_with<K: Eq + Hash>(
    vertices: &mut [Vertex<K>],
    ranker: &dyn SccRanker,
) -> Result<(), InvalidGraph> {
    let graph = normalize::normalize_edges(vertices)?;
    let ranking = ranker.assign_ranks(&graph);
    let dest = rank_sort::reverse_counting_sort(&ranking);
    rank_sort::apply_permutation(vertices, dest);
    Ok(())
}

/// Sorts the vertices of a graph file, reporting each phase on `sink`.
pub async fn sort_graph_file(
    input: GraphFileDto,
    ranker: &dyn SccRanker,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(GraphFileDto, SortStats)> {
    let mut stats = SortStats::default();

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build".into(),
        },
    )
    .await;
    let mut vertices = build::build_vertices(&input)?;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "normalize_edges".into(),
        },
    )
    .await;
    let graph = normalize::normalize_edges(&mut vertices)?;
    stats.vertices = graph.node_count();
    stats.edges = graph.edge_count();
    emit(
        &sink,
        AppEvent::EdgesNormalized {
            vertices: stats.vertices,
            edges: stats.edges,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "normalize_edges".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let ranking = ranker.assign_ranks(&graph);
    stats.components = ranking.component_count();
    stats.cyclic_components = ranking.cyclic_component_count(&graph);
    stats.largest_component = ranking.largest_component();
    emit(
        &sink,
        AppEvent::RanksAssigned {
            vertices: stats.vertices,
            components: stats.components,
            cyclic_components: stats.cyclic_components,
            largest_component: stats.largest_component,
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "rank_sort".into(),
        },
    )
    .await;
    let dest = rank_sort::reverse_counting_sort(&ranking);
    stats.moved = rank_sort::moved_count(&dest);
    rank_sort::apply_permutation(&mut vertices, dest);
    emit(&sink, AppEvent::VerticesMoved { moved: stats.moved }).await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "rank_sort".into(),
        },
    )
    .await;

    let out = rebuild::rebuild_dto(input, vertices);

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((out, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
