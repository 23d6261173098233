//! The category hierarchy engine: slug derivation, tree reconstruction,
//! ancestry checks and breadcrumb materialization. Everything here is either
//! a pure function over already-fetched data or a bounded walk against the
//! category store; no locking, no shared state.

mod ancestry;
mod path;
mod slug;
mod tree;

pub use ancestry::is_descendant_of;
pub use path::build_path;
pub use slug::slugify;
pub use tree::build_tree;
