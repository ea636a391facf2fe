// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use adj_graph::{connected_components, explore, Graph, GraphConfig};
use std::collections::BTreeSet;

fn five_node_graph() -> Graph {
    Graph::from_edges(5, [(0, 1), (1, 2), (0, 3)]).unwrap()
}

#[test]
fn test_explore_leaves_isolated_vertex_unvisited() {
    let g = five_node_graph();
    let mut visited = vec![false; g.node_count()];
    explore(&g, 0, &mut visited).unwrap();
    assert_eq!(visited, vec![true, true, true, true, false]);
}

#[test]
fn test_explore_reaches_everything_after_bridge_edge() {
    let mut g = five_node_graph();
    g.add_edge(2, 4).unwrap();

    let mut visited = vec![false; g.node_count()];
    explore(&g, 0, &mut visited).unwrap();
    assert!(visited.iter().all(|&v| v));
}

#[test]
fn test_two_components() {
    let g = five_node_graph();
    let cc = connected_components(&g).unwrap();

    assert_eq!(cc.count(), 2);
    assert_eq!(cc.labels(), &[1, 1, 1, 1, 2]);
    assert_eq!(cc.members(1), vec![0, 1, 2, 3]);
    assert_eq!(cc.members(2), vec![4]);
}

#[test]
fn test_edge_round_trip() {
    let mut g = five_node_graph();
    g.add_edge(3, 4).unwrap();
    assert!(g.neighbors(3).unwrap().contains(&4));
    assert!(g.neighbors(4).unwrap().contains(&3));

    g.remove_edge(3, 4).unwrap();
    assert_eq!(g.neighbors(3).unwrap(), BTreeSet::from([0]));
    assert!(g.neighbors(4).unwrap().is_empty());
    assert_eq!(g, five_node_graph());
}

#[test]
fn test_default_config_is_example_graph() {
    let g = GraphConfig::default().build().unwrap();
    assert_eq!(g, five_node_graph());

    let bridged = GraphConfig::default().with_edges([(2, 4)]).build().unwrap();
    assert!(connected_components(&bridged).unwrap().is_connected());
}

#[test]
fn test_traversal_does_not_mutate_graph() {
    let g = five_node_graph();
    let before = g.clone();
    let _ = connected_components(&g).unwrap();
    let mut visited = vec![false; 5];
    explore(&g, 4, &mut visited).unwrap();
    assert_eq!(g, before);
    assert_eq!(visited, vec![false, false, false, false, true]);
}
