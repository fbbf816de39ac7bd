//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece destination sets and blocking
//! - `explosions.rs` - Captures, blast radius and win detection through `Game`
//! - `proptest.rs` - Property-based tests over random playouts
