//! # consolidate-engine
//!
//! Order-preserving grouped reduce. Each group's elements are folded, left to
//! right, into a single representative that sits where the group first appeared.
//!
//! Three ways to say "same group": a pairwise predicate, a key accessor, or a
//! key the element declares itself via [`Consolidatable`]. A single-result
//! variant fails unless everything collapses into one group.
//!
//! ```
//! use consolidate_engine::consolidate_by_key;
//!
//! let totals = consolidate_by_key(
//!     vec![("import", 300), ("sales", 175), ("import", 230)],
//!     |(name, _)| *name,
//!     |(name, a), (_, b)| (name, a + b),
//! );
//! assert_eq!(totals, vec![("import", 530), ("sales", 175)]);
//! ```

pub mod algorithms;
pub mod api;
pub mod consolidated;
pub mod consolidator;
pub mod ext;

pub use api::{
    consolidate_by_hashed_key, consolidate_by_key, consolidate_by_predicate,
    consolidate_by_self_equivalence, consolidate_to_single, try_consolidate_by_key,
    try_consolidate_by_predicate,
};
pub use consolidate_core::{
    Consolidatable, ConsolidationConfig, ConsolidationError, ConsolidationReport,
    ConsolidationResult, IndexStrategy,
};
pub use consolidated::Consolidated;
pub use consolidator::Consolidator;
pub use ext::ConsolidateExt;
