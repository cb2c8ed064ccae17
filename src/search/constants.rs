//! Search constants.

// ============================================================================
// SCORE BOUNDS
// ============================================================================

/// Window bound, larger than any reachable score including depth-adjusted
/// mates, and far enough from `i32` limits that negation never overflows
pub const INFINITY: i32 = 1_000_000;

/// Shallowest search the engine will run
pub const MIN_DEPTH: u32 = 1;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores are tried earlier.

/// Every capture sorts ahead of every quiet move under MVV-LVA
pub const CAPTURE_SCORE: i32 = 1 << 20;

/// Weight of the victim relative to the attacker in MVV-LVA
pub const VICTIM_WEIGHT: i32 = 10;
