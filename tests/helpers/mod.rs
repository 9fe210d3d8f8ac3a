//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use externgen::model::load;
use externgen::{DeclGraph, Walker};

/// Load a declaration surface from JSON text, panicking on errors.
pub fn load_graph(text: &str) -> DeclGraph {
    load::load_str(text).expect("fixture surface should load")
}

/// Walk a graph from its declared roots and collect the emitted lines.
pub fn walk_lines(graph: &DeclGraph) -> Vec<String> {
    let mut lines = Vec::new();
    Walker::new(graph).run(graph.roots(), &mut lines);
    lines
}

/// Write a surface file into `dir` and return its path.
pub fn write_surface(dir: &std::path::Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("fixture surface should write");
    path
}

/// An angular-flavored declaration surface: a module exporting an
/// interface, plus a global variable typed by that interface.
pub const ANGULAR_SURFACE: &str = r#"{
  "roots": ["angular", "ng"],
  "declarations": [
    { "id": "angular", "kind": "variable",
      "type": { "kind": "structured", "target": "ng.IAngularStatic" } },
    { "id": "ng", "kind": "module", "exports": ["ng.IAngularStatic"] },
    { "id": "ng.IAngularStatic", "kind": "interface",
      "members": ["ng.IAngularStatic.config", "ng.IAngularStatic.version"] },
    { "id": "ng.IAngularStatic.config", "kind": "method",
      "type": { "kind": "function" } },
    { "id": "ng.IAngularStatic.version", "kind": "property",
      "type": { "kind": "primitive", "name": "string" } }
  ]
}"#;
