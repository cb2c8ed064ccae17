//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-kind movement rules
//! - `attacks.rs` - Attack and check detection
//! - `perft.rs` - Node counts over the legal move generator
//! - `edge_cases.rs` - Promotion, stalemate and other special positions
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
