//! Line-oriented test script interpreter.
//!
//! Blank lines and `#` comments are echoed. Every other line is a command
//! name followed by whitespace separated arguments. Graphs created by a
//! script live in a [`ScriptContext`] owned by the driver, so independent
//! runs never share state.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::{
    bfs::find_path,
    dataset::load_graph,
    errors::GraphError,
    graph::LabeledMultigraph,
};

pub type StringGraph = LabeledMultigraph<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Directory `LoadGraph` file names are resolved against.
    pub data_dir: PathBuf,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScriptContext {
    graphs: AHashMap<String, StringGraph>,
}

impl ScriptContext {
    pub fn graph(&self, name: &str) -> Option<&StringGraph> {
        self.graphs.get(name)
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    fn require(&self, name: &str) -> Result<&StringGraph, GraphError> {
        self.graphs
            .get(name)
            .ok_or_else(|| GraphError::command(format!("unknown graph {name}")))
    }

    fn require_mut(&mut self, name: &str) -> Result<&mut StringGraph, GraphError> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| GraphError::command(format!("unknown graph {name}")))
    }
}

pub struct ScriptDriver<R, W> {
    input: R,
    output: W,
    config: ScriptConfig,
    context: ScriptContext,
}

impl<R: BufRead, W: Write> ScriptDriver<R, W> {
    pub fn new(input: R, output: W, config: ScriptConfig) -> Self {
        Self {
            input,
            output,
            config,
            context: ScriptContext::default(),
        }
    }

    pub fn context(&self) -> &ScriptContext {
        &self.context
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs every line of the input. Only I/O failures abort the run;
    /// command failures are reported inline as `Exception: ...`.
    pub fn run(&mut self) -> Result<(), GraphError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim_end_matches(['\n', '\r']);
            if text.trim().is_empty() || text.starts_with('#') {
                writeln!(self.output, "{text}")?;
            } else {
                let mut tokens = text.split_whitespace();
                if let Some(command) = tokens.next() {
                    let args: Vec<&str> = tokens.collect();
                    self.execute(command, &args)?;
                }
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: &str, args: &[&str]) -> Result<(), GraphError> {
        debug!(command, ?args, "script command");
        let outcome = match command {
            "CreateGraph" => self.create_graph(args),
            "AddNode" => self.add_node(args),
            "AddEdge" => self.add_edge(args),
            "ListNodes" => self.list_nodes(args),
            "ListChildren" => self.list_children(args),
            "LoadGraph" => self.load_graph(args),
            "FindPath" => self.find_path(args),
            other => {
                writeln!(self.output, "Unrecognized command: {other}")?;
                return Ok(());
            }
        };
        match outcome {
            Err(GraphError::Io(err)) => Err(GraphError::Io(err)),
            Err(err) => {
                warn!(command, error = %err, "script command failed");
                writeln!(self.output, "Exception: {err}")?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn create_graph(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("CreateGraph", args, 1)?;
        let name = args[0];
        if self.context.graphs.contains_key(name) {
            writeln!(self.output)?;
            return Ok(());
        }
        self.context.graphs.insert(name.to_string(), StringGraph::new());
        writeln!(self.output, "created graph {name}")?;
        Ok(())
    }

    fn add_node(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("AddNode", args, 2)?;
        let (name, node) = (args[0], args[1]);
        self.context.require_mut(name)?.add_node(node.to_string());
        writeln!(self.output, "added node {node} to {name}")?;
        Ok(())
    }

    fn add_edge(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("AddEdge", args, 4)?;
        let (name, parent, child, label) = (args[0], args[1], args[2], args[3]);
        self.context.require_mut(name)?.add_edge(
            &parent.to_string(),
            &child.to_string(),
            label.to_string(),
        )?;
        writeln!(
            self.output,
            "added edge {label} from {parent} to {child} in {name}"
        )?;
        Ok(())
    }

    fn list_nodes(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("ListNodes", args, 1)?;
        let name = args[0];
        let listing: String = self
            .context
            .require(name)?
            .list_nodes()
            .map(|node| format!(" {node}"))
            .collect();
        writeln!(self.output, "{name} contains:{listing}")?;
        Ok(())
    }

    fn list_children(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("ListChildren", args, 2)?;
        let (name, parent) = (args[0], args[1]);
        let mut children = self
            .context
            .require(name)?
            .list_children(&parent.to_string())?;
        children.sort_by(|a, b| a.to.cmp(&b.to).then_with(|| a.label.cmp(&b.label)));
        let listing: String = children
            .iter()
            .map(|edge| format!(" {}({})", edge.to, edge.label))
            .collect();
        writeln!(
            self.output,
            "the children of {parent} in {name} are:{listing}"
        )?;
        Ok(())
    }

    fn load_graph(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("LoadGraph", args, 2)?;
        let (name, file) = (args[0], args[1]);
        if self.context.graphs.contains_key(name) {
            writeln!(self.output)?;
            return Ok(());
        }
        let graph = load_graph(self.config.data_dir.join(file))?;
        self.context.graphs.insert(name.to_string(), graph);
        writeln!(self.output, "loaded graph {name}")?;
        Ok(())
    }

    fn find_path(&mut self, args: &[&str]) -> Result<(), GraphError> {
        expect_args("FindPath", args, 3)?;
        let name = args[0];
        let from = args[1].replace('_', " ");
        let to = args[2].replace('_', " ");
        let graph = self.context.require(name)?;

        let mut unknown = false;
        for node in [&from, &to] {
            if !graph.contains_node(node) {
                writeln!(self.output, "unknown character {node}")?;
                unknown = true;
            }
        }
        if unknown {
            return Ok(());
        }

        writeln!(self.output, "path from {from} to {to}:")?;
        match find_path(graph, &from, &to)? {
            None => writeln!(self.output, "no path found")?,
            Some(path) => {
                for edge in path {
                    writeln!(self.output, "{} to {} via {}", edge.from, edge.to, edge.label)?;
                }
            }
        }
        Ok(())
    }
}

fn expect_args(command: &str, args: &[&str], count: usize) -> Result<(), GraphError> {
    if args.len() != count {
        return Err(GraphError::command(format!(
            "Bad arguments to {command}: {args:?}"
        )));
    }
    Ok(())
}
