//! Checker state and the recursive `type_of` entry.
//!
//! `CheckerState` owns everything that changes while a tree is walked: the
//! diagnostic accumulator, the current scope handle and the nesting depth.
//! The arena, the repository and the initial scope are shared and never
//! modified, so several checkers can run over the same inputs at once.

use crate::context::CheckerOptions;
use crate::dispatch::ExpressionDispatcher;
use crate::error::CheckError;
use tracing::{debug, trace};
use vtc_ast::{Node, NodeArena, NodeIndex};
use vtc_common::{Diagnostic, Span, diagnostic_messages, limits};
use vtc_solver::{Symbol, SymbolTable, Type, TypeKind, TypeRepository};

pub struct CheckerState<'a> {
    pub(crate) arena: &'a NodeArena,
    repository: &'a dyn TypeRepository,
    initial_scope: SymbolTable,
    pub(crate) scope: SymbolTable,
    diagnostics: Vec<Diagnostic>,
    depth: u32,
    depth_limit_reported: bool,
    pub(crate) options: CheckerOptions,
}

impl<'a> CheckerState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        repository: &'a dyn TypeRepository,
        scope: SymbolTable,
        options: CheckerOptions,
    ) -> Self {
        CheckerState {
            arena,
            repository,
            initial_scope: scope.clone(),
            scope,
            diagnostics: Vec::new(),
            depth: 0,
            depth_limit_reported: false,
            options,
        }
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    /// Diagnostics recorded since the last [`check`](Self::check) started.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The scope identifiers currently resolve against.
    pub fn scope(&self) -> &SymbolTable {
        &self.scope
    }

    /// Type-check the tree rooted at `root` and return its diagnostics in
    /// traversal order.
    ///
    /// Every call starts from the initial scope with an empty accumulator.
    /// On `Err` the diagnostics gathered so far are discarded.
    pub fn check(&mut self, root: NodeIndex) -> Result<Vec<Diagnostic>, CheckError> {
        self.reset();
        debug!(?root, mode = ?self.options.mode, "checking");
        self.type_of(root)?;
        let diagnostics = std::mem::take(&mut self.diagnostics);
        debug!(count = diagnostics.len(), "check finished");
        Ok(diagnostics)
    }

    fn reset(&mut self) {
        self.scope = self.initial_scope.clone();
        self.diagnostics.clear();
        self.depth = 0;
        self.depth_limit_reported = false;
    }

    /// Infer the type of `idx`, recording diagnostics along the way.
    pub fn type_of(&mut self, idx: NodeIndex) -> Result<Type, CheckError> {
        let node = self.node(idx)?;

        if self.depth >= self.options.max_depth {
            if !self.depth_limit_reported {
                self.depth_limit_reported = true;
                self.error(node.span, diagnostic_messages::EXPRESSION_TOO_DEEPLY_NESTED);
            }
            return Ok(self.any());
        }

        self.depth += 1;
        trace!(?idx, kind = node.kind_name(), depth = self.depth, "type_of");
        let result = stacker::maybe_grow(limits::STACK_RED_ZONE, limits::STACK_GROWTH, || {
            ExpressionDispatcher::new(self).dispatch_type_computation(idx, node)
        });
        self.depth -= 1;
        result
    }

    /// Resolve `idx` or fail with [`CheckError::MissingNode`].
    pub(crate) fn node(&self, idx: NodeIndex) -> Result<&'a Node, CheckError> {
        self.arena
            .get(idx)
            .ok_or(CheckError::MissingNode { index: idx })
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub(crate) fn error(&mut self, span: Span, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(span, message));
    }

    pub(crate) fn error_at_node(&mut self, idx: NodeIndex, message: impl Into<String>) {
        if let Some(span) = self.arena.span(idx) {
            self.error(span, message);
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub(crate) fn get_type(&self, kind: TypeKind) -> Type {
        self.repository.get_type_by_kind(kind)
    }

    pub(crate) fn any(&self) -> Type {
        self.get_type(TypeKind::Any)
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    /// Run `f` with `symbols` layered over the current scope.
    ///
    /// The previous scope is restored afterwards, also when `f` fails.
    pub(crate) fn with_scope<R>(
        &mut self,
        symbols: impl IntoIterator<Item = Symbol>,
        f: impl FnOnce(&mut Self) -> Result<R, CheckError>,
    ) -> Result<R, CheckError> {
        let pushed = self.scope.concat(symbols);
        let previous = std::mem::replace(&mut self.scope, pushed);
        trace!(frames = self.scope.frame_count(), "push scope");
        let result = f(self);
        self.scope = previous;
        trace!(frames = self.scope.frame_count(), "pop scope");
        result
    }
}
