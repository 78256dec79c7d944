use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use cucumber::{given, then, when, World as _};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    output_path_2: Option<PathBuf>,
    last_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_stable-topo-sort")
}

fn run_cmd(args: Vec<String>) -> Output {
    Command::new(exe())
        .args(args)
        .output()
        .expect("failed to run stable-topo-sort binary")
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

fn sort_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "graph".to_string(),
        "sort".to_string(),
        "--in".to_string(),
        input.to_string_lossy().into_owned(),
        "--out".to_string(),
        output.to_string_lossy().into_owned(),
    ]
}

// Initializer-order graph with a1 <-> a2 closed into a cycle.
const CYCLIC_GRAPH: &str = r#"{
  "vertices": [
    { "name": "main", "edges": ["a4", "a1", "b2"] },
    { "name": "a2", "edges": ["a1"] },
    { "name": "a1", "edges": ["a2"] },
    { "name": "b2", "edges": ["b1", "a2"] },
    { "name": "b1" },
    { "name": "a3", "edges": ["b2", "b1"] },
    { "name": "a4", "edges": ["a3"] }
  ]
}"#;

const UNKNOWN_TARGET_GRAPH: &str = r#"{
  "vertices": [
    { "name": "a", "edges": ["b"] },
    { "name": "c" }
  ]
}"#;

fn find_backup_file(dir: &Path, input_file_name: &str) -> Option<PathBuf> {
    let prefix = format!("{input_file_name}.bak.");
    let entries = fs::read_dir(dir).ok()?;
    for ent in entries.flatten() {
        let file_name = ent.file_name();
        let file_name = file_name.to_string_lossy();
        if file_name.starts_with(&prefix) {
            return Some(ent.path());
        }
    }
    None
}

fn write_input(world: &mut TestWorld, json: &str) {
    let dir = world.dir.as_ref().expect("temp dir");
    let input_path = dir.path().join("graph.json");
    fs::write(&input_path, json).expect("write fixture");
    world.input_path = Some(input_path);
}

#[given("a temp graph workspace")]
fn a_temp_graph_workspace(world: &mut TestWorld) {
    world.dir = Some(tempfile::tempdir().expect("tempdir"));
}

#[given("an input graph file with a cycle")]
fn an_input_graph_file_with_a_cycle(world: &mut TestWorld) {
    write_input(world, CYCLIC_GRAPH);
}

#[given("an input graph file with an unknown edge target")]
fn an_input_graph_file_with_an_unknown_edge_target(world: &mut TestWorld) {
    write_input(world, UNKNOWN_TARGET_GRAPH);
}

#[when("I run graph sort to an output file")]
fn i_run_graph_sort_to_an_output_file(world: &mut TestWorld) {
    let dir = world.dir.as_ref().expect("temp dir");
    let input_path = world.input_path.as_ref().expect("input");
    let output_path = dir.path().join("out.json");

    let out = run_cmd(sort_args(input_path, &output_path));

    world.output_path = Some(output_path);
    world.last_cmd = Some(out);
}

#[when("I run graph sort with events to an output file")]
fn i_run_graph_sort_with_events_to_an_output_file(world: &mut TestWorld) {
    let dir = world.dir.as_ref().expect("temp dir");
    let input_path = world.input_path.as_ref().expect("input");
    let output_path = dir.path().join("out.json");

    let mut args = sort_args(input_path, &output_path);
    args.push("--emit-events".to_string());
    let out = run_cmd(args);

    world.output_path = Some(output_path);
    world.last_cmd = Some(out);
}

#[when("I run graph validate on the output file")]
fn i_run_graph_validate_on_the_output_file(world: &mut TestWorld) {
    let output_path = world.output_path.as_ref().expect("output");

    let out = run_cmd(vec![
        "graph".to_string(),
        "validate".to_string(),
        "--in".to_string(),
        output_path.to_string_lossy().into_owned(),
    ]);
    world.last_cmd = Some(out);
}

#[when("I run graph sort twice to two output files")]
fn i_run_graph_sort_twice_to_two_output_files(world: &mut TestWorld) {
    let dir = world.dir.as_ref().expect("temp dir");
    let input_path = world.input_path.as_ref().expect("input");

    let out1 = dir.path().join("out1.json");
    let out2 = dir.path().join("out2.json");

    let r1 = run_cmd(sort_args(input_path, &out1));
    assert!(r1.status.success(), "first sort failed: {}", stderr_string(&r1));

    let r2 = run_cmd(sort_args(input_path, &out2));
    world.output_path = Some(out1);
    world.output_path_2 = Some(out2);
    world.last_cmd = Some(r2);
}

#[when("I run graph sort on the output file into a second file")]
fn i_run_graph_sort_on_the_output_file_into_a_second_file(world: &mut TestWorld) {
    let dir = world.dir.as_ref().expect("temp dir");
    let first = world.output_path.as_ref().expect("output");
    let prev = world.last_cmd.as_ref().expect("last cmd");
    assert!(prev.status.success(), "first sort failed: {}", stderr_string(prev));

    let second = dir.path().join("out2.json");
    let out = run_cmd(sort_args(first, &second));

    world.output_path_2 = Some(second);
    world.last_cmd = Some(out);
}

#[when("I run graph sort in place without backup")]
fn i_run_graph_sort_in_place_without_backup(world: &mut TestWorld) {
    let input_path = world.input_path.as_ref().expect("input");
    let out = run_cmd(sort_args(input_path, input_path));
    world.last_cmd = Some(out);
}

#[when("I run graph sort in place with backup")]
fn i_run_graph_sort_in_place_with_backup(world: &mut TestWorld) {
    let input_path = world.input_path.as_ref().expect("input");
    let mut args = sort_args(input_path, input_path);
    args.push("--backup".to_string());
    let out = run_cmd(args);
    world.last_cmd = Some(out);
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr),
        String::from_utf8_lossy(&out.stdout)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stderr: {}",
        stderr_string(out)
    );
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[then(expr = "stdout has a {string} event")]
fn stdout_has_event(world: &mut TestWorld, event_type: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let found = stdout.lines().any(|line| {
        serde_json::from_str::<serde_json::Value>(line)
            .map(|v| v["type"] == event_type.as_str())
            .unwrap_or(false)
    });
    assert!(found, "no {event_type:?} event in stdout:\n{stdout}");
}

#[then(expr = "the output order is {string}")]
fn the_output_order_is(world: &mut TestWorld, expected: String) {
    let output_path = world.output_path.as_ref().expect("output");
    let raw = fs::read_to_string(output_path).expect("read output");
    let v: serde_json::Value = serde_json::from_str(&raw).expect("parse output json");

    let actual: Vec<String> = v["vertices"]
        .as_array()
        .expect("vertices array")
        .iter()
        .filter_map(|vertex| vertex["name"].as_str().map(str::to_string))
        .collect();

    assert_eq!(actual.join(", "), expected);
}

#[then("the two outputs are identical")]
fn the_two_outputs_are_identical(world: &mut TestWorld) {
    let a = world.output_path.as_ref().expect("out1");
    let b = world.output_path_2.as_ref().expect("out2");

    let a_raw = fs::read_to_string(a).expect("read out1");
    let b_raw = fs::read_to_string(b).expect("read out2");

    assert_eq!(a_raw, b_raw, "sort outputs differed");
}

#[then("a timestamped backup file exists")]
fn a_timestamped_backup_file_exists(world: &mut TestWorld) {
    let dir = world.dir.as_ref().expect("temp dir");
    let input_path = world.input_path.as_ref().expect("input");
    let file_name = input_path
        .file_name()
        .and_then(|s| s.to_str())
        .expect("utf-8 file name");

    let found = find_backup_file(dir.path(), file_name);
    assert!(
        found.is_some(),
        "expected a timestamped backup file like {file_name}.bak.<ts>"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
