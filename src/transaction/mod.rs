// ============================================================================
// Transaction Module
// ============================================================================
//
// Writes run against a copy-on-write clone of the store state and are
// published by swapping the whole state in one assignment. A failed write
// drops its copy, so readers only ever see pre- or post-write state.
//
// ============================================================================

pub mod change;
pub mod tx;

pub use change::{Change, ChangeSet};
pub use tx::StoreTx;
