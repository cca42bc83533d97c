//! Centralized limits and thresholds for the template checker.
//!
//! Keeping these values in one place prevents duplicate definitions with
//! inconsistent values across crates and makes them easy to tune.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum depth for expression and markup type checking.
///
/// Each nested node adds a few frames to the call stack while the checker
/// recurses. Past this depth the checker reports the node once and types it
/// as `any` instead of descending further.
///
/// # Example
///
/// ```text
/// {{ ((((((((((((((((((((1 + 2) + 3) + 4) /* ... 500 levels ... */)))) }}
/// <div><div><div> <!-- ... 500 nested elements ... --> </div></div></div>
/// ```
pub const MAX_EXPR_CHECK_DEPTH: u32 = 500;

/// Remaining stack below which a recursive `type_of` switches to a fresh
/// stack segment.
///
/// Nested elements cost several frames per level (element, scope closure,
/// dispatch), so the depth limit alone does not bound stack use.
pub const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
pub const STACK_GROWTH: usize = 2 * 1024 * 1024;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for bindings collected from a single parameter list or
/// loop pattern before spilling to the heap.
pub const INLINE_PATTERN_BINDINGS: usize = 4;
