//! Script interpreter.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use tracing::trace;
use wf_core::Cost;
use wf_graph::Graph;
use wf_path::find_path;

use crate::error::{ScriptError, ScriptResult};

type NamedGraph = Graph<String, Cost>;

/// Reads commands from `input` and writes their results to `output`.
///
/// Weights and costs print with three decimals via `{:.3}`. Exact binary
/// ties round to even, so `0.0625` prints as `0.062`.
pub struct ScriptDriver<R, W> {
    graphs: HashMap<String, NamedGraph>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ScriptDriver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            graphs: HashMap::new(),
            input,
            output,
        }
    }

    /// Run every line of the input.
    ///
    /// Command failures are written to the output; only I/O errors stop the run.
    pub fn run(&mut self) -> ScriptResult<()> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);

            if line.trim().is_empty() || line.starts_with('#') {
                writeln!(self.output, "{}", line)?;
            } else {
                let mut tokens = line.split_whitespace();
                if let Some(command) = tokens.next() {
                    let args: Vec<&str> = tokens.collect();
                    self.execute(command, &args)?;
                }
            }
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn graph(&self, name: &str) -> Option<&NamedGraph> {
        self.graphs.get(name)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn execute(&mut self, command: &str, args: &[&str]) -> ScriptResult<()> {
        trace!(command, ?args, "script command");
        let result = match command {
            "CreateGraph" => self.create_graph(args),
            "AddNode" => self.add_node(args),
            "AddEdge" => self.add_edge(args),
            "FindPath" => self.find_path(args),
            _ => {
                writeln!(self.output, "Unrecognized command: {}", command)?;
                Ok(())
            }
        };

        match result {
            Err(ScriptError::Io(err)) => Err(ScriptError::Io(err)),
            Err(err) => {
                let mut formatted = command.to_string();
                for arg in args {
                    formatted.push(' ');
                    formatted.push_str(arg);
                }
                writeln!(self.output, "Exception while running command: {}", formatted)?;
                writeln!(self.output, "{}", err)?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn create_graph(&mut self, args: &[&str]) -> ScriptResult<()> {
        let [name] = expect_args::<1>("CreateGraph", args)?;
        self.graphs.insert(name.to_string(), Graph::new());
        writeln!(self.output, "created graph {}", name)?;
        Ok(())
    }

    fn add_node(&mut self, args: &[&str]) -> ScriptResult<()> {
        let [graph_name, node] = expect_args::<2>("AddNode", args)?;
        self.graph_mut(graph_name)?.add_node_value(node.to_string());
        writeln!(self.output, "added node {} to {}", node, graph_name)?;
        Ok(())
    }

    fn add_edge(&mut self, args: &[&str]) -> ScriptResult<()> {
        let [graph_name, parent, child, raw] = expect_args::<4>("AddEdge", args)?;
        let weight: f64 = raw.parse().map_err(|_| ScriptError::InvalidWeight {
            raw: raw.to_string(),
        })?;
        let label = Cost::new(weight)?;

        // Dangling edges are dropped by the graph but still acknowledged here.
        self.graph_mut(graph_name)?
            .add_edge_between(parent.to_string(), child.to_string(), label);
        writeln!(
            self.output,
            "added edge {:.3} from {} to {} in {}",
            weight, parent, child, graph_name
        )?;
        Ok(())
    }

    fn find_path(&mut self, args: &[&str]) -> ScriptResult<()> {
        let [graph_name, start, end] = expect_args::<3>("FindPath", args)?;
        let graph = self
            .graphs
            .get(graph_name)
            .ok_or_else(|| ScriptError::UnknownGraph {
                name: graph_name.to_string(),
            })?;

        let start = start.to_string();
        let end = end.to_string();
        let has_start = graph.contains_value(&start);
        let has_end = graph.contains_value(&end);
        if !has_start || !has_end {
            if !has_start {
                writeln!(self.output, "unknown: {}", start)?;
            }
            if !has_end {
                writeln!(self.output, "unknown: {}", end)?;
            }
            return Ok(());
        }

        writeln!(self.output, "path from {} to {}:", start, end)?;
        match find_path(graph, &start, &end) {
            None => writeln!(self.output, "no path found")?,
            Some(path) => {
                for seg in &path {
                    writeln!(
                        self.output,
                        "{} to {} with weight {:.3}",
                        seg.start(),
                        seg.end(),
                        seg.cost()
                    )?;
                }
                writeln!(self.output, "total cost: {:.3}", path.cost())?;
            }
        }
        Ok(())
    }

    fn graph_mut(&mut self, name: &str) -> ScriptResult<&mut NamedGraph> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| ScriptError::UnknownGraph {
                name: name.to_string(),
            })
    }
}

fn expect_args<'a, const K: usize>(
    command: &'static str,
    args: &[&'a str],
) -> ScriptResult<[&'a str; K]> {
    <[&str; K]>::try_from(args).map_err(|_| ScriptError::BadArguments {
        command,
        args: args.iter().map(|s| s.to_string()).collect(),
    })
}

/// Run a whole script held in memory and return what it printed.
pub fn run_script(script: &str) -> ScriptResult<String> {
    let mut driver = ScriptDriver::new(script.as_bytes(), Vec::new());
    driver.run()?;
    Ok(String::from_utf8_lossy(&driver.into_output()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_comments_and_blanks() {
        let out = run_script("# header\n\n   \n").unwrap();
        assert_eq!(out, "# header\n\n   \n");
    }

    #[test]
    fn builds_graph_and_finds_path() {
        let script = "\
CreateGraph g
AddNode g A
AddNode g B
AddNode g C
AddEdge g A B 2
AddEdge g B C 3
AddEdge g A C 10
FindPath g A C
";
        let out = run_script(script).unwrap();
        let expected = "\
created graph g
added node A to g
added node B to g
added node C to g
added edge 2.000 from A to B in g
added edge 3.000 from B to C in g
added edge 10.000 from A to C in g
path from A to C:
A to B with weight 2.000
B to C with weight 3.000
total cost: 5.000
";
        assert_eq!(out, expected);
    }

    #[test]
    fn unknown_endpoints_are_reported() {
        let out = run_script("CreateGraph g\nAddNode g A\nFindPath g X Y\n").unwrap();
        assert!(out.ends_with("unknown: X\nunknown: Y\n"));
    }

    #[test]
    fn bad_arguments_do_not_stop_the_script() {
        let out = run_script("CreateGraph\nCreateGraph g\n").unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Exception while running command: CreateGraph");
        assert_eq!(lines[1], "Bad arguments to CreateGraph: []");
        assert_eq!(lines[2], "created graph g");
    }

    #[test]
    fn negative_weight_is_rejected() {
        let out = run_script("CreateGraph g\nAddNode g A\nAddEdge g A A -1\n").unwrap();
        assert!(out.contains("Exception while running command: AddEdge g A A -1"));
        assert!(out.contains("Negative cost"));
    }

    #[test]
    fn dangling_edge_is_acknowledged_but_dropped() {
        let mut driver = ScriptDriver::new(
            "CreateGraph g\nAddNode g A\nAddEdge g A B 1\n".as_bytes(),
            Vec::new(),
        );
        driver.run().unwrap();
        assert_eq!(driver.graph("g").unwrap().edge_count(), 0);
        let out = String::from_utf8(driver.into_output()).unwrap();
        assert!(out.ends_with("added edge 1.000 from A to B in g\n"));
    }

    #[test]
    fn unrecognized_command() {
        let out = run_script("Frobnicate x\n").unwrap();
        assert_eq!(out, "Unrecognized command: Frobnicate\n");
    }
}
