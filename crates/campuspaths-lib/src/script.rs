//! Line-oriented command scripts for exercising graphs and the shortest-path
//! engine outside the campus domain.
//!
//! Each non-blank, non-comment line is a command followed by
//! whitespace-separated arguments:
//!
//! ```text
//! CreateGraph <graph>
//! AddNode <graph> <node>
//! AddEdge <graph> <parent> <child> <weight>
//! ListNodes <graph>
//! ListChildren <graph> <parent>
//! FindPath <graph> <start> <end>
//! ```
//!
//! Blank lines and lines starting with `#` are echoed unchanged. Every other
//! line produces deterministic output so transcripts can be compared verbatim.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::error::Error as GraphError;
use crate::multigraph::{Edge, EdgeSetGraph, Multigraph};
use crate::search::shortest_path;

type ScriptGraph = EdgeSetGraph<String, f64>;

/// Failure of a single script command. Reported inline, never fatal.
#[derive(Debug, Error)]
enum CommandError {
    #[error("Bad arguments to {command}: {arguments:?}")]
    BadArguments {
        command: &'static str,
        arguments: Vec<String>,
    },

    #[error("no graph named {0}")]
    UnknownGraph(String),

    #[error("invalid edge weight {0:?}")]
    InvalidWeight(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Interpreter holding the named graphs created by a script.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    graphs: HashMap<String, ScriptGraph>,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute every line of `input`, writing results to `output`.
    ///
    /// Only I/O failures abort the run.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                writeln!(output, "{line}")?;
                continue;
            }

            let mut tokens = line.split_whitespace();
            if let Some(command) = tokens.next() {
                let arguments: Vec<String> = tokens.map(str::to_string).collect();
                self.execute(command, &arguments, output)?;
            }
            output.flush()?;
        }
        Ok(())
    }

    /// Convenience wrapper returning the transcript for an in-memory script.
    pub fn run_to_string(&mut self, script: &str) -> String {
        let mut output = Vec::new();
        self.run(script.as_bytes(), &mut output)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&output).into_owned()
    }

    fn execute<W: Write>(
        &mut self,
        command: &str,
        arguments: &[String],
        output: &mut W,
    ) -> std::io::Result<()> {
        let result = match command {
            "CreateGraph" => self.create_graph(arguments),
            "AddNode" => self.add_node(arguments),
            "AddEdge" => self.add_edge(arguments),
            "ListNodes" => self.list_nodes(arguments),
            "ListChildren" => self.list_children(arguments),
            "FindPath" => self.find_path(arguments),
            other => Ok(vec![format!("Unrecognized command: {other}")]),
        };

        match result {
            Ok(lines) => {
                for line in lines {
                    writeln!(output, "{line}")?;
                }
            }
            Err(error) => {
                let mut formatted = command.to_string();
                for argument in arguments {
                    formatted.push(' ');
                    formatted.push_str(argument);
                }
                writeln!(output, "Exception while running command: {formatted}")?;
                writeln!(output, "{error}")?;
            }
        }
        Ok(())
    }

    fn graph(&self, name: &str) -> Result<&ScriptGraph, CommandError> {
        self.graphs
            .get(name)
            .ok_or_else(|| CommandError::UnknownGraph(name.to_string()))
    }

    fn graph_mut(&mut self, name: &str) -> Result<&mut ScriptGraph, CommandError> {
        self.graphs
            .get_mut(name)
            .ok_or_else(|| CommandError::UnknownGraph(name.to_string()))
    }

    fn create_graph(&mut self, arguments: &[String]) -> Result<Vec<String>, CommandError> {
        let [name] = expect_arguments::<1>("CreateGraph", arguments)?;
        self.graphs.insert(name.clone(), ScriptGraph::new());
        Ok(vec![format!("created graph {name}")])
    }

    fn add_node(&mut self, arguments: &[String]) -> Result<Vec<String>, CommandError> {
        let [graph_name, node] = expect_arguments::<2>("AddNode", arguments)?;
        self.graph_mut(graph_name)?.add_node(node.clone());
        Ok(vec![format!("added node {node} to {graph_name}")])
    }

    fn add_edge(&mut self, arguments: &[String]) -> Result<Vec<String>, CommandError> {
        let [graph_name, parent, child, weight] = expect_arguments::<4>("AddEdge", arguments)?;
        let weight: f64 = weight
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite())
            .ok_or_else(|| CommandError::InvalidWeight(weight.clone()))?;
        self.graph_mut(graph_name)?
            .add_edge(Edge::new(parent.clone(), child.clone(), weight))?;
        Ok(vec![format!(
            "added edge {weight:.3} from {parent} to {child} in {graph_name}"
        )])
    }

    fn list_nodes(&self, arguments: &[String]) -> Result<Vec<String>, CommandError> {
        let [graph_name] = expect_arguments::<1>("ListNodes", arguments)?;
        let mut nodes = self.graph(graph_name)?.list_nodes();
        nodes.sort();

        let mut line = format!("{graph_name} contains:");
        for node in nodes {
            line.push(' ');
            line.push_str(node);
        }
        Ok(vec![line])
    }

    fn list_children(&self, arguments: &[String]) -> Result<Vec<String>, CommandError> {
        let [graph_name, parent] = expect_arguments::<2>("ListChildren", arguments)?;
        let mut edges = self.graph(graph_name)?.list_child_edges(parent)?;
        edges.sort_by(|a, b| {
            a.to()
                .cmp(b.to())
                .then_with(|| a.weight().total_cmp(b.weight()))
        });

        let mut line = format!("the children of {parent} in {graph_name} are:");
        for edge in edges {
            line.push_str(&format!(" {}({:.3})", edge.to(), edge.weight()));
        }
        Ok(vec![line])
    }

    fn find_path(&self, arguments: &[String]) -> Result<Vec<String>, CommandError> {
        let [graph_name, start, end] = expect_arguments::<3>("FindPath", arguments)?;
        let graph = self.graph(graph_name)?;

        let unknown: Vec<String> = [start, end]
            .into_iter()
            .filter(|node| !graph.contains_node(node))
            .map(|node| format!("unknown: {node}"))
            .collect();
        if !unknown.is_empty() {
            return Ok(unknown);
        }

        let mut lines = vec![format!("path from {start} to {end}:")];
        match shortest_path(graph, start, end) {
            Ok(path) => {
                for segment in &path {
                    lines.push(format!(
                        "{} to {} with weight {:.3}",
                        segment.start(),
                        segment.end(),
                        segment.cost()
                    ));
                }
                lines.push(format!("total cost: {:.3}", path.cost()));
            }
            Err(GraphError::PathNotFound { .. }) => lines.push("no path found".to_string()),
            Err(other) => return Err(other.into()),
        }
        Ok(lines)
    }
}

fn expect_arguments<'a, const N: usize>(
    command: &'static str,
    arguments: &'a [String],
) -> Result<&'a [String; N], CommandError> {
    arguments
        .try_into()
        .map_err(|_| CommandError::BadArguments {
            command,
            arguments: arguments.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        ScriptRunner::new().run_to_string(script)
    }

    #[test]
    fn echoes_comments_and_blank_lines() {
        let transcript = run("# heading\n\nCreateGraph g\n");
        assert_eq!(transcript, "# heading\n\ncreated graph g\n");
    }

    #[test]
    fn builds_and_lists_a_graph() {
        let transcript = run(concat!(
            "CreateGraph g\n",
            "AddNode g b\n",
            "AddNode g a\n",
            "AddEdge g a b 2\n",
            "AddEdge g a b 1.5\n",
            "AddEdge g a a 0.25\n",
            "ListNodes g\n",
            "ListChildren g a\n",
        ));
        assert_eq!(
            transcript,
            concat!(
                "created graph g\n",
                "added node b to g\n",
                "added node a to g\n",
                "added edge 2.000 from a to b in g\n",
                "added edge 1.500 from a to b in g\n",
                "added edge 0.250 from a to a in g\n",
                "g contains: a b\n",
                "the children of a in g are: a(0.250) b(1.500) b(2.000)\n",
            )
        );
    }

    #[test]
    fn finds_cheapest_path() {
        let transcript = run(concat!(
            "CreateGraph g\n",
            "AddNode g A\n",
            "AddNode g B\n",
            "AddNode g C\n",
            "AddNode g D\n",
            "AddEdge g A B 1\n",
            "AddEdge g B C 1\n",
            "AddEdge g A C 5\n",
            "FindPath g A C\n",
            "FindPath g A A\n",
            "FindPath g A D\n",
            "FindPath g X Y\n",
        ));
        let tail: Vec<&str> = transcript.lines().skip(8).collect();
        assert_eq!(
            tail,
            vec![
                "path from A to C:",
                "A to B with weight 1.000",
                "B to C with weight 1.000",
                "total cost: 2.000",
                "path from A to A:",
                "total cost: 0.000",
                "path from A to D:",
                "no path found",
                "unknown: X",
                "unknown: Y",
            ]
        );
    }

    #[test]
    fn reports_failures_inline() {
        let transcript = run(concat!(
            "CreateGraph g\n",
            "AddEdge g a b 1\n",
            "AddNode g\n",
            "AddNode missing x\n",
            "Frobnicate g\n",
            "ListNodes g\n",
        ));
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines[1], "Exception while running command: AddEdge g a b 1");
        assert_eq!(lines[2], "node \"a\" is not in the graph");
        assert_eq!(lines[3], "Exception while running command: AddNode g");
        assert_eq!(lines[4], "Bad arguments to AddNode: [\"g\"]");
        assert_eq!(lines[5], "Exception while running command: AddNode missing x");
        assert_eq!(lines[6], "no graph named missing");
        assert_eq!(lines[7], "Unrecognized command: Frobnicate");
        assert_eq!(lines[8], "g contains:");
    }

    #[test]
    fn rejects_non_finite_weights() {
        let transcript = run(concat!(
            "CreateGraph g\n",
            "AddNode g a\n",
            "AddEdge g a a NaN\n",
            "AddEdge g a a NaN\n",
            "AddEdge g a a inf\n",
            "ListChildren g a\n",
        ));
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines[2], "Exception while running command: AddEdge g a a NaN");
        assert_eq!(lines[3], "invalid edge weight \"NaN\"");
        assert_eq!(lines[7], "invalid edge weight \"inf\"");
        assert_eq!(lines[8], "the children of a in g are:");
    }

    #[test]
    fn rejects_non_numeric_weights() {
        let transcript = run("CreateGraph g\nAddNode g a\nAddEdge g a a heavy\n");
        assert!(transcript.contains("invalid edge weight \"heavy\""));
    }
}
