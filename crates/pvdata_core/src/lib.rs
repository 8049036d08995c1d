//! Self-describing structured data: immutable field descriptors and the
//! mutable, type-checked value trees built from them.

/// Schema descriptors, value trees, field paths, and schema expressions.
pub mod data;
