#![allow(clippy::unwrap_used)]

use crate::base::{Accessibility, DeclKind};
use crate::error::ExternError;

use super::decl::TypeRef;
use super::graph::DeclGraph;
use super::load;
use super::SemanticModel;

#[test]
fn effective_name_prefers_alias_target() {
    let mut graph = DeclGraph::new();
    assert!(graph.is_empty());

    let m = graph.declare(DeclKind::Module, "__module");
    graph.set_alias(m, "angular");

    assert_eq!(graph.own_name(m), "angular");
    assert_eq!(graph.get(m).name, "__module");
}

#[test]
fn only_variables_and_properties_are_values() {
    assert!(DeclKind::Variable.is_value());
    assert!(DeclKind::Property.is_value());
    assert!(!DeclKind::Function.is_value());
    assert!(!DeclKind::Interface.is_value());
    assert!(!DeclKind::Module.is_value());
}

#[test]
fn declared_type_unwraps_one_array_level() {
    let mut graph = DeclGraph::new();
    let c = graph.declare(DeclKind::Class, "C");
    let v = graph.declare(DeclKind::Variable, "v");
    graph.set_declared_type(v, TypeRef::array(TypeRef::Structured(c)));

    assert_eq!(graph.declared_type_of(v), Some(&TypeRef::Structured(c)));

    // Exactly one level: a nested array stays an array after unwrapping.
    let vv = graph.declare(DeclKind::Variable, "vv");
    graph.set_declared_type(vv, TypeRef::array(TypeRef::array(TypeRef::Structured(c))));
    assert_eq!(
        graph.declared_type_of(vv),
        Some(&TypeRef::array(TypeRef::Structured(c)))
    );
}

#[test]
fn properties_include_inherited_members() {
    let mut graph = DeclGraph::new();
    let base = graph.declare(DeclKind::Interface, "Base");
    let derived = graph.declare(DeclKind::Interface, "Derived");
    let own = graph.declare(DeclKind::Property, "own");
    let inherited = graph.declare(DeclKind::Property, "inherited");
    graph.add_member(derived, own);
    graph.add_member(base, inherited);
    graph.add_extends(derived, base);

    let props = graph.public_properties_of(&TypeRef::Structured(derived));
    assert_eq!(props, vec![own, inherited]);
}

#[test]
fn properties_tolerate_extends_cycles() {
    let mut graph = DeclGraph::new();
    let a = graph.declare(DeclKind::Interface, "A");
    let b = graph.declare(DeclKind::Interface, "B");
    let x = graph.declare(DeclKind::Property, "x");
    graph.add_member(a, x);
    graph.add_extends(a, b);
    graph.add_extends(b, a);

    let props = graph.public_properties_of(&TypeRef::Structured(a));
    assert_eq!(props, vec![x]);
}

#[test]
fn properties_of_non_structured_types_are_empty() {
    let graph = DeclGraph::new();
    assert!(graph.public_properties_of(&TypeRef::Function).is_empty());
    assert!(
        graph
            .public_properties_of(&TypeRef::primitive("string"))
            .is_empty()
    );
}

// ============================================================
// Surface loading
// ============================================================

const NG_SURFACE: &str = r#"{
  "roots": ["ng"],
  "declarations": [
    { "id": "ng", "kind": "module", "exports": ["ng.IStatic"] },
    { "id": "ng.IStatic", "name": "IStatic", "kind": "interface",
      "members": ["ng.IStatic.config"] },
    { "id": "ng.IStatic.config", "kind": "property",
      "type": { "kind": "function" } }
  ]
}"#;

#[test]
fn load_builds_graph_with_resolved_edges() {
    let graph = load::load_str(NG_SURFACE).unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.roots().len(), 1);

    let ng = graph.roots()[0];
    assert_eq!(graph.own_name(ng), "ng");
    let statics = graph.exports_of(ng);
    assert_eq!(statics.len(), 1);
    assert_eq!(graph.own_name(statics[0]), "IStatic");
    assert_eq!(graph.members_of(statics[0]).len(), 1);
}

#[test]
fn load_defaults_name_to_id_tail() {
    let graph = load::load_str(NG_SURFACE).unwrap();
    let ng = graph.roots()[0];
    let statics = graph.exports_of(ng)[0];
    let config = graph.members_of(statics)[0];
    assert_eq!(graph.own_name(config), "config");
}

#[test]
fn load_parses_accessibility_alias_and_prototype() {
    let graph = load::load_str(
        r#"{
          "roots": ["c"],
          "declarations": [
            { "id": "c", "kind": "class", "members": ["c.p", "c.proto"],
              "aliasOf": "Widget" },
            { "id": "c.p", "kind": "property", "accessibility": "private" },
            { "id": "c.proto", "kind": "property", "prototype": true }
          ]
        }"#,
    )
    .unwrap();

    let c = graph.roots()[0];
    assert_eq!(graph.own_name(c), "Widget");
    let members = graph.members_of(c);
    assert_eq!(graph.accessibility_of(members[0]), Accessibility::Private);
    assert!(graph.is_prototype_artifact(members[1]));
}

#[test]
fn load_resolves_structured_and_array_types() {
    let graph = load::load_str(
        r#"{
          "roots": ["v"],
          "declarations": [
            { "id": "C", "kind": "class" },
            { "id": "v", "kind": "variable",
              "type": { "kind": "array",
                        "element": { "kind": "structured", "target": "C" } } }
          ]
        }"#,
    )
    .unwrap();

    let v = graph.roots()[0];
    let ty = graph.declared_type_of(v).unwrap();
    assert!(graph.is_structured(ty));
}

#[test]
fn load_rejects_duplicate_ids() {
    let err = load::load_str(
        r#"{
          "roots": [],
          "declarations": [
            { "id": "a", "kind": "module" },
            { "id": "a", "kind": "module" }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ExternError::DuplicateId(id) if id == "a"));
}

#[test]
fn load_rejects_unresolved_references() {
    let err = load::load_str(
        r#"{
          "roots": [],
          "declarations": [
            { "id": "a", "kind": "module", "exports": ["missing"] }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ExternError::UnresolvedReference(id) if id == "missing"));
}

#[test]
fn load_rejects_unresolved_roots() {
    let err = load::load_str(r#"{ "roots": ["ghost"], "declarations": [] }"#).unwrap_err();
    assert!(matches!(err, ExternError::UnresolvedReference(id) if id == "ghost"));
}

#[test]
fn load_rejects_empty_ids() {
    let err = load::load_str(
        r#"{
          "roots": [],
          "declarations": [ { "id": "", "kind": "module" } ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ExternError::Invalid { kind: "entry", .. }));
}

#[test]
fn load_rejects_malformed_json() {
    let err = load::load_str("{ not json").unwrap_err();
    assert!(matches!(err, ExternError::Json(_)));
}

#[test]
fn load_rejects_unknown_fields() {
    let err = load::load_str(
        r#"{
          "roots": [],
          "declarations": [
            { "id": "a", "kind": "module", "bogus": true }
          ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ExternError::Json(_)));
}
