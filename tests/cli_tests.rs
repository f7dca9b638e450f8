use std::io::Write;

use assert_cmd::Command;
use inplace_dfs::{
    TraversalEvent, check_dfs_order,
    cli::{CommandLineConfig, OutputFormat, parse_graph},
    validate_sorted,
};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_inplace-dfs"))
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("run binary");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn test_cli_exits_with_success_on_help() {
    bin().arg("--help").assert().success();
}

#[test]
fn test_cli_demo_prints_fixture_order() {
    let stdout = stdout_of(&mut bin());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Entering vertex 2.",
            "Entering vertex 1.",
            "Entering vertex 0.",
            "Entering vertex 4.",
            "Entering vertex 3.",
            "Exiting vertex 3.",
            "Exiting vertex 4.",
            "Exiting vertex 0.",
            "Exiting vertex 1.",
            "Exiting vertex 2.",
        ]
    );
}

#[test]
fn test_cli_traverse_inline_graph_as_json() {
    let stdout = stdout_of(bin().args(["traverse", "--graph", "1,3,0", "--format", "json"]));
    let events: Vec<TraversalEvent> = serde_json::from_str(stdout.trim()).expect("json events");
    assert_eq!(events, vec![TraversalEvent::Enter(0), TraversalEvent::Leave(0)]);
}

#[test]
fn test_cli_traverse_graph_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "[4, 6, 7, 8, 9, 3, 2, 1, 4]").expect("write graph");
    let stdout = stdout_of(bin().args([
        "--command",
        "traverse",
        "--input",
        file.path().to_str().expect("utf8 path"),
        "--start",
        "2",
    ]));
    assert_eq!(stdout, "Entering vertex 2.\nEntering vertex 3.\nExiting vertex 3.\nExiting vertex 2.\n");
}

#[test]
fn test_cli_generate_then_traverse() {
    let stdout = stdout_of(bin().args(["generate", "--vertices", "12", "--edges", "30", "--seed", "42"]));
    let graph: Vec<i64> = serde_json::from_str(stdout.trim()).expect("json graph");
    let summary = validate_sorted(&graph).expect("valid graph");
    assert_eq!(summary.vertices, 12);
    assert_eq!(summary.edges, 30);

    let inline = stdout.trim();
    let stdout = stdout_of(bin().args(["traverse", "--graph", inline, "--format", "json", "--start", "5"]));
    let events: Vec<TraversalEvent> = serde_json::from_str(stdout.trim()).expect("json events");
    assert_eq!(check_dfs_order(&graph, 5, &events), Ok(()));
}

#[test]
fn test_cli_generate_is_reproducible() {
    let args = ["generate", "--vertices", "20", "--forbid", "0,1", "--seed", "7"];
    assert_eq!(stdout_of(bin().args(args)), stdout_of(bin().args(args)));
}

#[test]
fn test_cli_check_reports_summary() {
    let stdout = stdout_of(bin().args(["check", "--graph", "5,7,9,12,14,17,12,2,5,1,3,4,2,4,2,3,5,1,4"]));
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).expect("json");
    assert_eq!(summary["vertices"], 5);
    assert_eq!(summary["edges"], 12);
    assert_eq!(summary["max_degree"], 3);
    assert_eq!(summary["zero_degree"], 0);
}

#[test]
fn test_cli_rejects_invalid_graph() {
    bin().args(["check", "--graph", "2,4,4,1,7"]).assert().failure().code(1);
}

#[test]
fn test_cli_rejects_out_of_range_start() {
    bin().args(["traverse", "--graph", "1,3,0", "--start", "1"]).assert().failure().code(1);
}

#[test]
fn test_cli_rejects_unknown_flag() {
    bin().arg("--bogus").assert().failure().code(2);
}

#[test]
fn test_cli_rejects_unknown_command() {
    bin().arg("explode").assert().failure().code(1);
}

#[test]
fn test_config_from_args() {
    let config = CommandLineConfig::from_args(&[
        "inplace-dfs",
        "generate",
        "--vertices",
        "8",
        "--forbid",
        "0, 2",
        "--loops",
        "--format",
        "json",
        "-v",
    ])
    .expect("config");
    assert_eq!(config.command, "generate");
    assert_eq!(config.vertices, 8);
    assert_eq!(config.forbid, vec![0, 2]);
    assert!(config.loops);
    assert!(config.verbose);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_config_requires_flag_values() {
    assert!(CommandLineConfig::from_args(&["inplace-dfs", "--start"]).is_err());
    assert!(CommandLineConfig::from_args(&["inplace-dfs", "--start", "x"]).is_err());
    assert!(CommandLineConfig::from_args(&["inplace-dfs", "--format", "xml"]).is_err());
}

#[test]
fn test_parse_graph_accepts_brackets() {
    assert_eq!(parse_graph(" [1, 3, 0] ").expect("graph"), vec![1, 3, 0]);
    assert!(parse_graph("1,x,0").is_err());
}
