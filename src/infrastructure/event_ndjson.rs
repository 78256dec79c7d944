use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::EdgesNormalized { vertices, edges } => {
            json!({"type":"edges_normalized","vertices":vertices,"edges":edges})
        }
        AppEvent::RanksAssigned {
            vertices,
            components,
            cyclic_components,
            largest_component,
        } => {
            json!({"type":"ranks_assigned","vertices":vertices,"components":components,"cyclic_components":cyclic_components,"largest_component":largest_component})
        }
        AppEvent::VerticesMoved { moved } => json!({"type":"vertices_moved","moved":moved}),
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
