//! 算法子命令
//!
//! 每个子命令对应一个算法，执行结果交给打印器渲染

use super::printer::Printer;
use crate::algorithm::{kruskal, prim, BellmanFord, Dijkstra, FloydWarshall, Traverser};
use crate::error::Result;
use crate::graph::Graph;
use crate::trace::BellmanFordRow;
use clap::Subcommand;
use std::time::Instant;

/// 子命令
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmCommand {
    /// 广度优先遍历
    Bfs { start: String },
    /// 深度优先遍历
    Dfs { start: String },
    /// Kruskal 最小生成树
    Kruskal,
    /// Prim 最小生成树
    Prim { start: String },
    /// Dijkstra 最短路径；不给终点时输出所有距离
    Dijkstra { start: String, end: Option<String> },
    /// Dijkstra 逐步执行表
    DijkstraTable { start: String },
    /// Floyd-Warshall 最短路径；不给起终点时输出两个矩阵
    Floyd {
        start: Option<String>,
        end: Option<String>,
    },
    /// Bellman-Ford 最短路径；不给终点时输出所有距离
    BellmanFord { start: String, end: Option<String> },
    /// Bellman-Ford（队列版本）执行表
    BellmanFordTable { start: String },
    /// 图统计信息
    Stats,
}

/// 执行子命令，返回渲染好的输出
pub fn execute(graph: &Graph, command: &AlgorithmCommand, printer: &Printer) -> Result<String> {
    let started = Instant::now();
    let elapsed = || started.elapsed().as_millis() as u64;

    let output = match command {
        AlgorithmCommand::Bfs { start } | AlgorithmCommand::Dfs { start } => {
            let traverser = Traverser::new(graph);
            let result = if matches!(command, AlgorithmCommand::Bfs { .. }) {
                traverser.bfs(start)?
            } else {
                traverser.dfs(start)?
            };
            let order: Vec<String> = result
                .order
                .iter()
                .map(|&v| graph.name(v).to_string())
                .collect();

            let mut output = printer.print_order(&order, elapsed());
            output.push_str(&printer.print_edges(&graph.named_edges(&result.edges), None, elapsed()));
            output
        }
        AlgorithmCommand::Kruskal => {
            let tree = kruskal(graph);
            printer.print_edges(&graph.named_edges(&tree.edges), Some(tree.total_weight), elapsed())
        }
        AlgorithmCommand::Prim { start } => {
            let tree = prim(graph, start)?;
            printer.print_edges(&graph.named_edges(&tree.edges), Some(tree.total_weight), elapsed())
        }
        AlgorithmCommand::Dijkstra { start, end } => {
            let dijkstra = Dijkstra::new(graph);
            match end {
                Some(end) => {
                    let path = dijkstra.path(start, end)?;
                    printer.print_edges(&graph.named_edges(&path), Some(Graph::total_weight(&path)), elapsed())
                }
                None => printer.print_distances(&dijkstra.distances(start)?, elapsed()),
            }
        }
        AlgorithmCommand::DijkstraTable { start } => {
            printer.print_trace(&Dijkstra::new(graph).table(start)?, elapsed())
        }
        AlgorithmCommand::Floyd { start, end } => {
            let floyd = FloydWarshall::new(graph);
            match (start, end) {
                (Some(start), Some(end)) => {
                    let path = floyd.path(start, end)?;
                    printer.print_edges(&graph.named_edges(&path), Some(Graph::total_weight(&path)), elapsed())
                }
                _ => {
                    let matrices = floyd.matrices();
                    let mut output = printer.print_trace(&matrices.distance_table()?, elapsed());
                    output.push_str(&printer.print_trace(&matrices.next_table()?, elapsed()));
                    output
                }
            }
        }
        AlgorithmCommand::BellmanFord { start, end } => {
            let bellman_ford = BellmanFord::new(graph);
            match end {
                Some(end) => {
                    let path = bellman_ford.path(start, end)?;
                    printer.print_edges(&graph.named_edges(&path), Some(Graph::total_weight(&path)), elapsed())
                }
                None => printer.print_distances(&bellman_ford.distances(start)?, elapsed()),
            }
        }
        AlgorithmCommand::BellmanFordTable { start } => {
            let rows = BellmanFord::new(graph).table(start)?;
            printer.print_trace(&BellmanFordRow::to_table(&rows)?, elapsed())
        }
        AlgorithmCommand::Stats => printer.print_stats(graph),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::GraphBuilder;

    fn create_test_graph() -> Graph {
        GraphBuilder::new()
            .vertices(["A", "B", "C", "D"])
            .edge("A", "B", 1)
            .edge("B", "C", 2)
            .edge("A", "C", 4)
            .edge("C", "D", 1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_execute_commands() {
        let graph = create_test_graph();
        let printer = Printer::default();

        let output = execute(&graph, &AlgorithmCommand::Kruskal, &printer).unwrap();
        assert!(output.contains("Total weight: 4"));

        let output = execute(
            &graph,
            &AlgorithmCommand::Dijkstra {
                start: "A".into(),
                end: Some("D".into()),
            },
            &printer,
        )
        .unwrap();
        assert!(output.contains("Total weight: 4"));

        let output = execute(
            &graph,
            &AlgorithmCommand::DijkstraTable { start: "A".into() },
            &printer,
        )
        .unwrap();
        assert!(output.contains("(C, 4)"));

        let output = execute(
            &graph,
            &AlgorithmCommand::Floyd {
                start: None,
                end: None,
            },
            &printer,
        )
        .unwrap();
        assert!(output.contains("4 row(s) in set"));

        let output = execute(
            &graph,
            &AlgorithmCommand::BellmanFordTable { start: "A".into() },
            &printer,
        )
        .unwrap();
        assert!(output.contains("Choice"));
    }

    #[test]
    fn test_execute_propagates_errors() {
        let graph = create_test_graph();
        let result = execute(
            &graph,
            &AlgorithmCommand::Bfs { start: "Z".into() },
            &Printer::default(),
        );
        assert!(matches!(result, Err(Error::VertexNotFound(_))));
    }
}
