use std::{env, io, process};

use inplace_dfs::cli::{CommandLineConfig, run_command};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let level = if config.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .init();

    let stdout = io::stdout();
    if let Err(err) = run_command(&config, &mut stdout.lock()) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}
