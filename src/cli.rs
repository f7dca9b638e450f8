use std::{fs, io::Write, path::PathBuf};

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    errors::DfsError,
    generator::{GeneratorConfig, generate_graph},
    order::{TraversalEvent, record_events},
    validate::validate_sorted,
};

/// Graph used by the `demo` command.
pub const DEMO_GRAPH: [i64; 19] = [5, 7, 9, 12, 14, 17, 12, 2, 5, 1, 3, 4, 2, 4, 2, 3, 5, 1, 4];
pub const DEMO_START: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: String,
    pub graph: Option<String>,
    pub input: Option<PathBuf>,
    pub start: Option<usize>,
    pub format: OutputFormat,
    pub vertices: usize,
    pub edges: Option<usize>,
    pub forbid: Vec<usize>,
    pub loops: bool,
    pub seed: u64,
    pub verbose: bool,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self {
            command: String::from("demo"),
            graph: None,
            input: None,
            start: None,
            format: OutputFormat::Text,
            vertices: 10,
            edges: None,
            forbid: Vec::new(),
            loops: false,
            seed: 0xbdea_dbee,
            verbose: false,
        }
    }
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut iter = args.iter().skip(1).copied();
        while let Some(arg) = iter.next() {
            match arg {
                "--command" => {
                    config.command = required(&mut iter, "--command")?.to_string();
                }
                "--graph" => {
                    config.graph = Some(required(&mut iter, "--graph")?.to_string());
                }
                "--input" => {
                    config.input = Some(PathBuf::from(required(&mut iter, "--input")?));
                }
                "--start" => {
                    config.start = Some(number(required(&mut iter, "--start")?, "--start")?);
                }
                "--format" => {
                    config.format = match required(&mut iter, "--format")? {
                        "text" => OutputFormat::Text,
                        "json" => OutputFormat::Json,
                        other => return Err(format!("unknown format {other}")),
                    };
                }
                "--vertices" => {
                    config.vertices = number(required(&mut iter, "--vertices")?, "--vertices")?;
                }
                "--edges" => {
                    config.edges = Some(number(required(&mut iter, "--edges")?, "--edges")?);
                }
                "--forbid" => {
                    config.forbid = required(&mut iter, "--forbid")?
                        .split(',')
                        .map(|degree| number(degree.trim(), "--forbid"))
                        .collect::<Result<Vec<usize>, String>>()?;
                }
                "--seed" => {
                    config.seed = number(required(&mut iter, "--seed")?, "--seed")?;
                }
                "--loops" => config.loops = true,
                "--verbose" | "-v" => config.verbose = true,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    config.command = arg.to_string();
                }
            }
        }
        Ok(config)
    }

    pub fn help() -> &'static str {
        "Usage: inplace-dfs [demo|traverse|generate|check] [options]\n\
         \n\
         demo       traverse the built-in five vertex graph\n\
         traverse   --graph CSV | --input PATH  [--start K] [--format text|json]\n\
         generate   --vertices N [--edges M] [--forbid D,D] [--loops] [--seed S]\n\
         check      --graph CSV | --input PATH\n\
         \n\
         -v, --verbose  log layout conversions\n"
    }
}

fn required<'a, I>(iter: &mut I, flag: &str) -> Result<&'a str, String>
where
    I: Iterator<Item = &'a str>,
{
    iter.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a number, got {value}"))
}

/// Executes the configured command, writing its output to `out`.
pub fn run_command<W: Write>(config: &CommandLineConfig, out: &mut W) -> Result<(), DfsError> {
    match config.command.as_str() {
        "demo" => {
            let mut graph = DEMO_GRAPH.to_vec();
            traverse_and_print(&mut graph, config.start.unwrap_or(DEMO_START), config.format, out)
        }
        "traverse" => {
            let mut graph = load_graph(config)?;
            traverse_and_print(&mut graph, config.start.unwrap_or(0), config.format, out)
        }
        "generate" => {
            let generator = GeneratorConfig::new(config.vertices)
                .forbid_degrees(config.forbid.iter().copied())
                .with_loops(config.loops);
            let generator = match config.edges {
                Some(edges) => generator.with_edges(edges),
                None => generator,
            };
            let mut rng = StdRng::seed_from_u64(config.seed);
            let graph = generate_graph(&generator, &mut rng)?;
            write_json(out, &graph)
        }
        "check" => {
            let graph = load_graph(config)?;
            let summary = validate_sorted(&graph)?;
            write_json(out, &summary)
        }
        other => Err(DfsError::invalid_argument(format!("unknown command {other}"))),
    }
}

fn traverse_and_print<W: Write>(
    graph: &mut [i64],
    start: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), DfsError> {
    let events = record_events(graph, start)?;
    info!("traversal from {start} produced {} events", events.len());
    match format {
        OutputFormat::Json => write_json(out, &events),
        OutputFormat::Text => {
            for event in &events {
                let line = match event {
                    TraversalEvent::Enter(vertex) => format!("Entering vertex {vertex}."),
                    TraversalEvent::Leave(vertex) => format!("Exiting vertex {vertex}."),
                };
                writeln!(out, "{line}").map_err(|e| DfsError::io(e.to_string()))?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), DfsError> {
    serde_json::to_writer(&mut *out, value).map_err(|e| DfsError::io(e.to_string()))?;
    writeln!(out).map_err(|e| DfsError::io(e.to_string()))
}

/// Reads a sorted-layout graph from `--graph` or `--input`.
pub fn load_graph(config: &CommandLineConfig) -> Result<Vec<i64>, DfsError> {
    match (&config.graph, &config.input) {
        (Some(inline), _) => parse_graph(inline),
        (None, Some(path)) => {
            let text = fs::read_to_string(path)
                .map_err(|e| DfsError::io(format!("{}: {e}", path.display())))?;
            serde_json::from_str(&text).map_err(|e| DfsError::parse(e.to_string()))
        }
        (None, None) => Err(DfsError::invalid_argument("--graph or --input is required")),
    }
}

/// Parses a comma separated list of cells, e.g. `1,3,0`.
pub fn parse_graph(text: &str) -> Result<Vec<i64>, DfsError> {
    text.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|cell| {
            let cell = cell.trim();
            cell.parse::<i64>()
                .map_err(|_| DfsError::parse(format!("not an integer: {cell:?}")))
        })
        .collect()
}
