//! Common types and utilities for the vtc template checker.
//!
//! This crate provides foundational types used across all vtc crates:
//! - Source spans (`Span`)
//! - Diagnostics and their message templates
//! - Checker limits and thresholds

// Span - Source location tracking (half-open offset ranges)
pub mod span;
pub use span::Span;

// Diagnostics reported by the checker
pub mod diagnostics;
pub use diagnostics::{Diagnostic, diagnostic_messages, format_message};

// Centralized limits and thresholds
pub mod limits;
