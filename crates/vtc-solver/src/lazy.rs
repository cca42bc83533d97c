//! Host-backed types populated on demand.
//!
//! A host compiler can expose thousands of members per type, and most of
//! them are never looked at by a template. [`LazyType`] asks its
//! [`HostShape`] for members and call signatures only on first access and
//! caches the answer for the lifetime of the type.

use crate::symbols::{Symbol, SymbolTable};
use crate::types::{CallSignature, TypeKind, TypeShape};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Boundary a host adapter implements to describe one of its types.
pub trait HostShape: Send + Sync + 'static {
    /// Declared name, `None` for anonymous shapes.
    fn name(&self) -> Option<String>;
    fn kind(&self) -> TypeKind;
    fn properties(&self) -> Vec<Symbol>;
    fn call_signatures(&self) -> Vec<CallSignature>;
}

/// A [`TypeShape`] whose members and signatures come from a [`HostShape`].
pub struct LazyType<P: HostShape> {
    provider: P,
    name: String,
    kind: TypeKind,
    members: OnceLock<SymbolTable>,
    call_signatures: OnceLock<Vec<CallSignature>>,
}

impl<P: HostShape> LazyType<P> {
    pub fn new(provider: P) -> Self {
        let name = provider.name().unwrap_or_else(|| "<anonymous>".to_string());
        let kind = provider.kind();
        LazyType {
            provider,
            name,
            kind,
            members: OnceLock::new(),
            call_signatures: OnceLock::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Whether members have been requested yet.
    pub fn is_populated(&self) -> bool {
        self.members.get().is_some()
    }
}

impl<P: HostShape> TypeShape for LazyType<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> TypeKind {
        self.kind
    }

    fn members(&self) -> &SymbolTable {
        self.members.get_or_init(|| {
            if self.kind.is_nullish() {
                return SymbolTable::empty();
            }
            if self.kind == TypeKind::Any {
                return SymbolTable::any_fallback();
            }
            let properties = self.provider.properties();
            debug!(name = %self.name, count = properties.len(), "populating host members");
            SymbolTable::from_symbols(properties)
        })
    }

    fn call_signatures(&self) -> &[CallSignature] {
        self.call_signatures.get_or_init(|| {
            if self.kind.is_nullish() {
                return Vec::new();
            }
            let signatures = self.provider.call_signatures();
            debug!(name = %self.name, count = signatures.len(), "populating host call signatures");
            signatures
        })
    }
}

impl<P: HostShape> fmt::Debug for LazyType<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyType")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("populated", &self.is_populated())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/lazy_tests.rs"]
mod lazy_tests;
