// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use assert_cmd::Command;
use predicates::prelude::*;

fn adj_graph() -> Command {
    let mut cmd = Command::cargo_bin("adj-graph").unwrap();
    cmd.env_remove("ADJ_GRAPH_NODES").env_remove("ADJ_GRAPH_EDGES");
    cmd
}

#[test]
fn test_components_of_default_graph() {
    adj_graph()
        .arg("components")
        .assert()
        .success()
        .stdout("[1, 1, 1, 1, 2]\n");
}

#[test]
fn test_edge_flags_pair_up() {
    adj_graph()
        .args(["--edge", "2", "4", "components"])
        .assert()
        .success()
        .stdout("[1, 1, 1, 1, 1]\n");

    adj_graph()
        .args(["--edge", "3", "4", "--edge", "1", "4", "explore", "--start", "4"])
        .assert()
        .success()
        .stdout("[1, 1, 1, 1, 1]\n");

    adj_graph().args(["--edge", "2", "components"]).assert().failure();
}

#[test]
fn test_explore() {
    adj_graph()
        .arg("explore")
        .assert()
        .success()
        .stdout("[1, 1, 1, 1, 0]\n");

    adj_graph()
        .args(["explore", "--start", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn test_explore_trace_prints_each_discovery_then_result() {
    adj_graph()
        .args(["--edge", "2", "4", "explore", "--trace"])
        .assert()
        .success()
        .stdout(
            "[1, 1, 0, 0, 0]\n\
             [1, 1, 1, 0, 0]\n\
             [1, 1, 1, 0, 1]\n\
             [1, 1, 1, 1, 1]\n\
             [1, 1, 1, 1, 1]\n",
        );
}

#[test]
fn test_walks_reports_overflow() {
    adj_graph()
        .args(["walks", "--length", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("SqMatrix of size 5x5:"));

    adj_graph()
        .args(["--edge", "2", "4", "walks", "--length", "100"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Arithmetic overflow in pow"));

    adj_graph()
        .args(["walks", "--length", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be a non-negative integer"));
}
