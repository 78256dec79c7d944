use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_pea::PeaSccRanker;
use crate::infrastructure::serde_json_adapter::{read_graph_file, write_graph_file};
use crate::usecase::event::AppEvent;
use crate::usecase::toposort::sort_graph_file;
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::GraphSort {
            input,
            output,
            emit_events,
            backup,
            dry_run,
        } => {
            if !dry_run && is_same_file(&input, &output) {
                if !backup {
                    return Err(anyhow!(
                        "refusing to overwrite input without --backup: {input}"
                    ));
                }
                create_timestamped_backup(Path::new(&input))
                    .with_context(|| format!("creating backup for: {input}"))?;
            }

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let dto = read_graph_file(&input)
                .await
                .with_context(|| format!("reading input graph JSON: {input}"))?;

            validate_graph(&dto).with_context(|| format!("validating graph: {input}"))?;

            let ranker = PeaSccRanker;
            let (out, stats) = sort_graph_file(dto, &ranker, Some(tx)).await?;

            if !dry_run {
                write_graph_file(&output, &out)
                    .await
                    .with_context(|| format!("writing output graph JSON: {output}"))?;
            }

            if let Some(handle) = printer {
                handle.await.ok();
            }

            eprintln!(
                "summary: vertices={} edges={} components={} cyclic_components={} largest_component={} moved={}",
                stats.vertices,
                stats.edges,
                stats.components,
                stats.cyclic_components,
                stats.largest_component,
                stats.moved
            );

            Ok(())
        }

        Cli::GraphValidate { input } => {
            let dto = read_graph_file(&input)
                .await
                .with_context(|| format!("reading input graph JSON: {input}"))?;

            validate_graph(&dto).with_context(|| format!("validating graph: {input}"))?;

            eprintln!("ok: graph validated");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    GraphSort {
        input: String,
        output: String,
        emit_events: bool,
        backup: bool,
        dry_run: bool,
    },
    GraphValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph sort --in/--input <graph.json> --out/--output <graph.json> [--emit-events] [--backup] [--dry-run]
        // <bin> graph validate --in/--input <graph.json>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "sort" => Self::parse_sort(args),
            "validate" => Self::parse_validate(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_sort(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_events = false;
        let mut backup = false;
        let mut dry_run = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "--backup" => {
                    backup = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let output = if dry_run {
            // dry-run mode doesn't require an output path
            output.unwrap_or_default()
        } else {
            output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?
        };

        Ok(Cli::GraphSort {
            input,
            output,
            emit_events,
            backup,
            dry_run,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::GraphValidate { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph sort --in/--input <graph.json> --out/--output <graph.json> [--emit-events] [--backup] [--dry-run]\n  graph validate --in/--input <graph.json>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nSafety:\n  If output path equals input path, --backup is required and a timestamped backup is created in the same directory."
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}

fn create_timestamped_backup(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("input file name is not valid UTF-8"))?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let backup_path = input.with_file_name(format!("{file_name}.bak.{ts}"));
    std::fs::copy(input, &backup_path).with_context(|| format!("copying {file_name} to backup"))?;
    Ok(backup_path)
}
