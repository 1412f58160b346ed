use std::{
    env,
    fs::File,
    io::{self, BufReader},
    process,
};

use serde_json::json;
use tracing::info;

use costargraph::{
    GraphError, ScriptConfig, ScriptDriver,
    builder::build_graph,
    config::CommandLineConfig,
    dataset::{load_graph, parse_groups},
    find_path,
    interactive::InteractiveSession,
    logging::init_tracing,
};

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
            eprint!("{}", CommandLineConfig::help());
            process::exit(2);
        }
    };
    if let Err(err) = init_tracing(config.verbose, config.log_level.as_deref()) {
        eprintln!("error: unable to initialise logging: {err}");
        process::exit(2);
    }

    if let Err(err) = run_command(&config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run_command(config: &CommandLineConfig) -> Result<(), GraphError> {
    info!(command = %config.command, "starting");
    match config.command.as_str() {
        "interactive" => {
            let graph = load_graph(&config.dataset)?;
            let stdin = io::stdin();
            let mut session = InteractiveSession::new(&graph, stdin.lock(), io::stdout());
            session.run()
        }
        "path" => run_path(config),
        "script" => run_script(config),
        "status" => {
            let groups = parse_groups(&config.dataset)?;
            let graph = build_graph(&groups);
            println!(
                "{}",
                json!({
                    "dataset": config.dataset.display().to_string(),
                    "groups": groups.len(),
                    "nodes": graph.size(),
                    "edges": graph.edge_count(),
                })
            );
            Ok(())
        }
        other => Err(GraphError::command(format!("unknown command {other}"))),
    }
}

fn run_path(config: &CommandLineConfig) -> Result<(), GraphError> {
    let [from, to] = config.command_args.as_slice() else {
        return Err(GraphError::command("path expects FROM and TO"));
    };
    let graph = load_graph(&config.dataset)?;
    let path = find_path(&graph, from, to)?;
    if config.json {
        println!(
            "{}",
            json!({
                "from": from,
                "to": to,
                "found": path.is_some(),
                "path": path.unwrap_or_default(),
            })
        );
        return Ok(());
    }
    match path {
        None => println!("no path found from {from} to {to}"),
        Some(path) if path.is_empty() => println!("{from} is connected to itself"),
        Some(path) => {
            println!("path from {from} to {to}:");
            for edge in path {
                println!("{} to {} via {}", edge.from, edge.to, edge.label);
            }
        }
    }
    Ok(())
}

fn run_script(config: &CommandLineConfig) -> Result<(), GraphError> {
    let script_config = ScriptConfig {
        data_dir: config.data_dir.clone(),
    };
    match config.command_args.as_slice() {
        [] => {
            let stdin = io::stdin();
            ScriptDriver::new(stdin.lock(), io::stdout(), script_config).run()
        }
        [file] => {
            let reader = File::open(file)
                .map(BufReader::new)
                .map_err(|e| GraphError::command(format!("cannot read from {file}: {e}")))?;
            ScriptDriver::new(reader, io::stdout(), script_config).run()
        }
        _ => Err(GraphError::command("script expects at most one FILE")),
    }
}
