//! Lexical scope management.
//!
//! The emitter keeps a stack of scopes: one global scope for the file,
//! one per procedure or function body, and one per `with` statement.
//! Bindings map identifiers (case-insensitively, via [`NameId`]) to the
//! type spec they were declared with. `with` scopes additionally carry
//! the Go name of the record they expose, so that bare field references
//! can be prefixed on emission.

use pasgo_ast::TypeSpec;
use pasgo_core::{NameId, TranslateError};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Result;

/// What kind of region a scope covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// File level: program or unit declarations plus the predefined names.
    Global,
    /// A procedure or function body, including its parameters.
    Routine,
    /// A `with` statement body exposing a record's fields.
    With,
}

/// Result of a successful name lookup.
#[derive(Debug, Clone, Copy)]
pub struct VarBinding<'ast> {
    /// Kind of the scope the name was found in.
    pub kind: ScopeKind,
    /// For `With` scopes, the emitted name of the record being exposed.
    pub with_base: Option<&'ast str>,
    /// The declared type spec of the binding.
    pub spec: TypeSpec<'ast>,
}

#[derive(Debug)]
struct Scope<'ast> {
    kind: ScopeKind,
    with_base: Option<&'ast str>,
    vars: FxHashMap<NameId, TypeSpec<'ast>>,
    ref_params: FxHashSet<NameId>,
}

impl<'ast> Scope<'ast> {
    fn new(kind: ScopeKind, with_base: Option<&'ast str>) -> Self {
        Self {
            kind,
            with_base,
            vars: FxHashMap::default(),
            ref_params: FxHashSet::default(),
        }
    }
}

/// Stack of lexical scopes, innermost last.
#[derive(Debug, Default)]
pub struct ScopeStack<'ast> {
    scopes: Vec<Scope<'ast>>,
}

impl<'ast> ScopeStack<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost scope. `with_base` is only meaningful for
    /// [`ScopeKind::With`].
    pub fn push(&mut self, kind: ScopeKind, with_base: Option<&'ast str>) {
        self.scopes.push(Scope::new(kind, with_base));
    }

    /// Close the innermost scope. Every push must be matched by exactly
    /// one pop; a pop with nothing open reports an internal error.
    pub fn pop(&mut self) -> Result<()> {
        match self.scopes.pop() {
            Some(_) => Ok(()),
            None => Err(TranslateError::Internal {
                message: "scope stack underflow".to_string(),
            }),
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Bind `name` in the innermost scope, shadowing any outer binding.
    pub fn define_var(&mut self, name: &str, spec: TypeSpec<'ast>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.vars.insert(NameId::of(name), spec);
        }
    }

    /// Bind `name` in the nearest enclosing scope that is not a `with`
    /// scope. Synthesized `with` aliases live in the surrounding routine
    /// so that sibling and nested `with` statements can see them.
    pub fn define_above_with(&mut self, name: &str, spec: TypeSpec<'ast>) {
        for scope in self.scopes.iter_mut().rev() {
            if scope.kind != ScopeKind::With {
                scope.vars.insert(NameId::of(name), spec);
                return;
            }
        }
    }

    /// Bind a routine parameter, marking it when it is passed by
    /// reference. Reference parameters emit as pointers.
    pub fn define_param(&mut self, name: &str, spec: TypeSpec<'ast>, by_ref: bool) {
        if let Some(scope) = self.scopes.last_mut() {
            let id = NameId::of(name);
            scope.vars.insert(id, spec);
            if by_ref {
                scope.ref_params.insert(id);
            }
        }
    }

    /// Find `name`, innermost scope first.
    pub fn lookup(&self, name: &str) -> Option<VarBinding<'ast>> {
        let id = NameId::of(name);
        for scope in self.scopes.iter().rev() {
            if let Some(&spec) = scope.vars.get(&id) {
                return Some(VarBinding {
                    kind: scope.kind,
                    with_base: scope.with_base,
                    spec,
                });
            }
        }
        None
    }

    /// True if `name` was declared as a reference parameter in any open
    /// scope.
    pub fn is_ref_param(&self, name: &str) -> bool {
        let id = NameId::of(name);
        self.scopes.iter().any(|scope| scope.ref_params.contains(&id))
    }
}
