//! Scoped symbol tables.
//!
//! A `SymbolTable` is a persistent chain of frames. [`SymbolTable::concat`]
//! returns a new table with one more frame on top and leaves the receiver
//! untouched, so pushing a scope is allocating a frame and popping it is
//! restoring the previous handle.
//!
//! The `AnyFallback` table resolves every name to `any`. It is the member
//! table of the `any` type, which makes `any.whatever` type-check silently.

use crate::types::{Type, TypeKind, intrinsic_type};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// A named, typed binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    ty: Type,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Symbol {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

#[derive(Debug)]
struct Frame {
    symbols: FxHashMap<String, Symbol>,
    parent: Option<Arc<Frame>>,
}

#[derive(Clone, Debug)]
enum TableRepr {
    /// `None` is the empty table.
    Simple(Option<Arc<Frame>>),
    AnyFallback,
}

/// Immutable, scope-layered name lookup.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    repr: TableRepr,
}

impl SymbolTable {
    /// A table with no frames.
    pub fn empty() -> Self {
        SymbolTable {
            repr: TableRepr::Simple(None),
        }
    }

    /// The absorbing table: every name resolves to `any`.
    pub fn any_fallback() -> Self {
        SymbolTable {
            repr: TableRepr::AnyFallback,
        }
    }

    /// A single-frame table. Later duplicates win.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        SymbolTable::empty().concat(symbols)
    }

    pub fn is_any_fallback(&self) -> bool {
        matches!(self.repr, TableRepr::AnyFallback)
    }

    /// Resolve `name`, innermost frame first.
    pub fn get_by_name(&self, name: &str) -> Option<Symbol> {
        match &self.repr {
            TableRepr::AnyFallback => {
                let any = intrinsic_type(TypeKind::Any)?;
                Some(Symbol::new(name, any))
            }
            TableRepr::Simple(top) => {
                let mut frame = top.as_deref();
                while let Some(current) = frame {
                    if let Some(symbol) = current.symbols.get(name) {
                        return Some(symbol.clone());
                    }
                    frame = current.parent.as_deref();
                }
                None
            }
        }
    }

    /// Layer `symbols` over this table as one new frame.
    ///
    /// The new frame is pushed even when `symbols` is empty, so a caller that
    /// pairs every `concat` with restoring the previous handle stays
    /// balanced. On the `AnyFallback` table this returns `AnyFallback`.
    pub fn concat(&self, symbols: impl IntoIterator<Item = Symbol>) -> SymbolTable {
        let parent = match &self.repr {
            TableRepr::AnyFallback => return SymbolTable::any_fallback(),
            TableRepr::Simple(top) => top.clone(),
        };
        let mut map = FxHashMap::default();
        for symbol in symbols {
            map.insert(symbol.name.clone(), symbol);
        }
        SymbolTable {
            repr: TableRepr::Simple(Some(Arc::new(Frame {
                symbols: map,
                parent,
            }))),
        }
    }

    /// Visible names, sorted, each reported once. Empty for `AnyFallback`.
    pub fn names(&self) -> Vec<String> {
        let TableRepr::Simple(top) = &self.repr else {
            return Vec::new();
        };
        let mut seen = FxHashSet::default();
        let mut frame = top.as_deref();
        while let Some(current) = frame {
            seen.extend(current.symbols.keys().map(String::as_str));
            frame = current.parent.as_deref();
        }
        let mut names: Vec<String> = seen.into_iter().map(str::to_owned).collect();
        names.sort_unstable();
        names
    }

    /// Number of frames in the chain (0 for the empty and `AnyFallback` tables).
    pub fn frame_count(&self) -> usize {
        let TableRepr::Simple(top) = &self.repr else {
            return 0;
        };
        let mut count = 0;
        let mut frame = top.as_deref();
        while let Some(current) = frame {
            count += 1;
            frame = current.parent.as_deref();
        }
        count
    }

    /// Whether both handles share the same frame chain (or are both
    /// `AnyFallback`).
    pub fn same_scope(&self, other: &SymbolTable) -> bool {
        match (&self.repr, &other.repr) {
            (TableRepr::AnyFallback, TableRepr::AnyFallback) => true,
            (TableRepr::Simple(None), TableRepr::Simple(None)) => true,
            (TableRepr::Simple(Some(a)), TableRepr::Simple(Some(b))) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::empty()
    }
}

impl FromIterator<Symbol> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        SymbolTable::from_symbols(iter)
    }
}

#[cfg(test)]
#[path = "../tests/symbols_tests.rs"]
mod symbols_tests;
