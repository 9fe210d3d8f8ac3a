//! Declaration nodes and type references.

use smol_str::SmolStr;

use crate::base::{Accessibility, DeclKind, NodeId};

/// A named entity of the declaration surface: a variable, function, class,
/// interface, module, or member.
///
/// Edges (`exports`, `members`, `extends`) are stored as [`NodeId`] lists so
/// a class or interface referenced from several places stays one identity
/// with multiple addresses.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Declared local name.
    pub name: SmolStr,
    /// For an export-equals alias declaration, the aliased target's name.
    pub alias_of: Option<SmolStr>,
    pub kind: DeclKind,
    /// Relevant only for members reached through a structured type's
    /// property set.
    pub accessibility: Accessibility,
    /// Synthetic constructor/prototype-linkage entry; never emitted.
    pub is_prototype: bool,
    /// Direct exported members of a module-like declaration.
    pub exports: Vec<NodeId>,
    /// Direct structural members of a class/interface body.
    pub members: Vec<NodeId>,
    /// Base structured types; feeds the inherited part of the
    /// type-property query.
    pub extends: Vec<NodeId>,
    /// Declared or inferred value type.
    pub declared_type: Option<TypeRef>,
}

impl Declaration {
    pub fn new(kind: DeclKind, name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            alias_of: None,
            kind,
            accessibility: Accessibility::default(),
            is_prototype: false,
            exports: Vec::new(),
            members: Vec::new(),
            extends: Vec::new(),
            declared_type: None,
        }
    }

    /// The name traversal uses: the aliased target's name for an
    /// export-equals declaration, the declared name otherwise.
    pub fn effective_name(&self) -> &str {
        self.alias_of.as_deref().unwrap_or(&self.name)
    }
}

/// A declared value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(SmolStr),
    Function,
    Union,
    /// A class or interface type, identified with its declaration node so
    /// shared references preserve identity.
    Structured(NodeId),
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn primitive(name: impl Into<SmolStr>) -> Self {
        Self::Primitive(name.into())
    }

    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns true for class/interface types, as opposed to
    /// primitive/function/union types.
    pub fn is_structured(&self) -> bool {
        matches!(self, TypeRef::Structured(_))
    }
}
