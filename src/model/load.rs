//! Declaration-surface loading.
//!
//! The external semantic resolver hands the core a fully bound declaration
//! surface as a JSON object graph. This module deserializes that file into
//! a [`DeclGraph`]; it performs reference resolution only, no validation of
//! the surface's semantics.
//!
//! # Format
//!
//! ```json
//! {
//!   "roots": ["ng"],
//!   "declarations": [
//!     { "id": "ng", "name": "ng", "kind": "module",
//!       "exports": ["ng.IStatic"] },
//!     { "id": "ng.IStatic", "name": "IStatic", "kind": "interface",
//!       "members": ["ng.IStatic.config"] },
//!     { "id": "ng.IStatic.config", "kind": "property",
//!       "type": { "kind": "function" } }
//!   ]
//! }
//! ```
//!
//! Entry `name` defaults to the last dotted segment of `id`. Type values
//! are tagged objects: `primitive`, `function`, `union`, `structured`
//! (with a `target` declaration id), or `array` (with an `element` type).

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::base::{Accessibility, DeclKind, NodeId};
use crate::error::{ExternError, ExternResult};

use super::decl::TypeRef;
use super::graph::DeclGraph;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SurfaceFile {
    roots: Vec<String>,
    declarations: Vec<SurfaceDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SurfaceDecl {
    id: String,
    #[serde(default)]
    name: Option<String>,
    kind: SurfaceKind,
    #[serde(default)]
    alias_of: Option<String>,
    #[serde(default)]
    accessibility: SurfaceAccess,
    #[serde(default)]
    prototype: bool,
    #[serde(default)]
    exports: Vec<String>,
    #[serde(default)]
    members: Vec<String>,
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default, rename = "type")]
    ty: Option<SurfaceType>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SurfaceKind {
    Module,
    Variable,
    Function,
    Class,
    Interface,
    Property,
    Method,
}

impl From<SurfaceKind> for DeclKind {
    fn from(kind: SurfaceKind) -> Self {
        match kind {
            SurfaceKind::Module => DeclKind::Module,
            SurfaceKind::Variable => DeclKind::Variable,
            SurfaceKind::Function => DeclKind::Function,
            SurfaceKind::Class => DeclKind::Class,
            SurfaceKind::Interface => DeclKind::Interface,
            SurfaceKind::Property => DeclKind::Property,
            SurfaceKind::Method => DeclKind::Method,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum SurfaceAccess {
    #[default]
    Public,
    Private,
    Protected,
}

impl From<SurfaceAccess> for Accessibility {
    fn from(access: SurfaceAccess) -> Self {
        match access {
            SurfaceAccess::Public => Accessibility::Public,
            SurfaceAccess::Private => Accessibility::Private,
            SurfaceAccess::Protected => Accessibility::Protected,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum SurfaceType {
    Primitive { name: String },
    Function,
    Union,
    Structured { target: String },
    Array { element: Box<SurfaceType> },
}

/// Load a declaration surface from a JSON file.
pub fn load_file(path: &Path) -> ExternResult<DeclGraph> {
    let text = std::fs::read_to_string(path)?;
    load_str(&text)
}

/// Load a declaration surface from JSON text.
pub fn load_str(text: &str) -> ExternResult<DeclGraph> {
    let surface: SurfaceFile =
        serde_json::from_str(text).map_err(|e| ExternError::json(e.to_string()))?;
    build_graph(surface)
}

fn build_graph(surface: SurfaceFile) -> ExternResult<DeclGraph> {
    let mut graph = DeclGraph::new();
    let mut ids: FxHashMap<String, NodeId> = FxHashMap::default();

    // First pass: allocate every node so forward references resolve.
    for entry in &surface.declarations {
        if entry.id.is_empty() {
            return Err(ExternError::invalid_entry("declaration with empty id"));
        }
        let name = entry
            .name
            .clone()
            .unwrap_or_else(|| tail_of(&entry.id).to_string());
        let node = graph.declare(entry.kind.into(), name);
        if ids.insert(entry.id.clone(), node).is_some() {
            return Err(ExternError::DuplicateId(entry.id.clone()));
        }
        if let Some(target) = &entry.alias_of {
            graph.set_alias(node, target.as_str());
        }
        graph.set_accessibility(node, entry.accessibility.into());
        if entry.prototype {
            graph.mark_prototype(node);
        }
    }

    // Second pass: wire edges and types.
    for entry in &surface.declarations {
        let node = resolve(&ids, &entry.id)?;
        for target in &entry.exports {
            let child = resolve(&ids, target)?;
            graph.add_export(node, child);
        }
        for target in &entry.members {
            let child = resolve(&ids, target)?;
            graph.add_member(node, child);
        }
        for target in &entry.extends {
            let base = resolve(&ids, target)?;
            graph.add_extends(node, base);
        }
        if let Some(ty) = &entry.ty {
            let type_ref = resolve_type(&ids, ty)?;
            graph.set_declared_type(node, type_ref);
        }
    }

    for root in &surface.roots {
        let node = resolve(&ids, root)?;
        graph.add_root(node);
    }

    Ok(graph)
}

fn resolve(ids: &FxHashMap<String, NodeId>, id: &str) -> ExternResult<NodeId> {
    ids.get(id).copied().ok_or_else(|| ExternError::unresolved(id))
}

fn resolve_type(ids: &FxHashMap<String, NodeId>, ty: &SurfaceType) -> ExternResult<TypeRef> {
    Ok(match ty {
        SurfaceType::Primitive { name } => TypeRef::primitive(name.as_str()),
        SurfaceType::Function => TypeRef::Function,
        SurfaceType::Union => TypeRef::Union,
        SurfaceType::Structured { target } => TypeRef::Structured(resolve(ids, target)?),
        SurfaceType::Array { element } => TypeRef::array(resolve_type(ids, element)?),
    })
}

fn tail_of(id: &str) -> &str {
    id.rsplit('.').next().unwrap_or(id)
}
