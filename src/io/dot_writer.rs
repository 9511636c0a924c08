use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    matrix::*,
    utils::{Tour, city_label},
};

/// Produces a Graphviz description of a tour: every city becomes a labelled node and
/// every leg of the tour a red directed edge annotated with its cost.
pub trait DotWriter {
    fn try_write_dot<W: Write>(&self, matrix: &DistanceMatrix, writer: W)
    -> Result<(), std::io::Error>;

    fn try_write_dot_file<P: AsRef<Path>>(
        &self,
        matrix: &DistanceMatrix,
        path: P,
    ) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(matrix, writer)
    }
}

impl DotWriter for Tour {
    fn try_write_dot<W: Write>(
        &self,
        matrix: &DistanceMatrix,
        mut writer: W,
    ) -> Result<(), std::io::Error> {
        writeln!(writer, "digraph TSP_Solution {{")?;
        writeln!(writer, "    rankdir=LR;")?;
        writeln!(
            writer,
            "    node [shape=circle, style=filled, fillcolor=white];"
        )?;
        writeln!(writer, "    edge [fontsize=10];")?;

        for u in matrix.vertices() {
            writeln!(writer, "    {u} [label=\"{}\"];", city_label(u))?;
        }

        for edge in self.edges() {
            let Edge(u, v) = edge;
            writeln!(
                writer,
                "    {u} -> {v} [label=\"{}\", color=red, penwidth=2];",
                matrix.cost_of_edge(edge)
            )?;
        }

        writeln!(writer, "}}")?;
        writer.flush()
    }
}
