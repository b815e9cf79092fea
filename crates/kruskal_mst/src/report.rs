use std::{fmt, io};

use crate::kruskal::MstResult;

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Edges in the Minimum Spanning Tree:")?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        writeln!(f, "Total weight of MST: {}", self.total_weight)
    }
}

pub fn write_report<W: io::Write>(out: &mut W, result: &MstResult) -> io::Result<()> {
    write!(out, "{result}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{Edge, Graph, sample_graph},
        kruskal::compute_mst,
    };

    #[test]
    fn test_sample_report() {
        let result = compute_mst(&sample_graph()).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &result).unwrap();
        let report = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(report, @r"
        Edges in the Minimum Spanning Tree:
        2 -- 3 == 4
        0 -- 3 == 5
        0 -- 1 == 10
        Total weight of MST: 19
        ");
    }

    #[test]
    fn test_report_is_byte_exact() {
        let result = compute_mst(&sample_graph()).unwrap();
        assert_eq!(
            result.to_string(),
            "Edges in the Minimum Spanning Tree:\n\
             2 -- 3 == 4\n\
             0 -- 3 == 5\n\
             0 -- 1 == 10\n\
             Total weight of MST: 19\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let graph = Graph::from_edges(1, vec![Edge::new(0, 0, 1)]).unwrap();
        let result = compute_mst(&graph).unwrap();
        assert_eq!(
            result.to_string(),
            "Edges in the Minimum Spanning Tree:\nTotal weight of MST: 0\n"
        );
    }
}
