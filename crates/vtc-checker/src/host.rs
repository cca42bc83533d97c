//! The component whose template is being checked.
//!
//! A host is the set of names a template can refer to: the properties of
//! the component's instance type (props, data, computed values, methods).
//! Its member table is the initial scope of a template check.

use vtc_solver::{Symbol, SymbolTable, Type, is_any};

#[derive(Clone, Debug, Default)]
pub struct ComponentHost {
    members: SymbolTable,
}

impl ComponentHost {
    pub fn from_properties(properties: impl IntoIterator<Item = Symbol>) -> Self {
        ComponentHost {
            members: SymbolTable::from_symbols(properties),
        }
    }

    /// Host exposing the members of an instance type. An `any` instance
    /// resolves every name.
    pub fn from_type(instance: &Type) -> Self {
        let members = if is_any(instance) {
            SymbolTable::any_fallback()
        } else {
            instance.members().clone()
        };
        ComponentHost { members }
    }

    pub fn members(&self) -> &SymbolTable {
        &self.members
    }

    pub fn into_members(self) -> SymbolTable {
        self.members
    }
}
