//! Chronicle Changelog - incremental changelog maintenance
//!
//! This crate owns the changelog document model (an arena-backed heading
//! tree with byte-faithful parsing and serialization) and the machinery
//! that folds declared changes from commit bodies into it.

pub mod classify;
pub mod document;
pub mod merge;
pub mod updater;
pub mod walker;

pub use classify::{Change, Classifier};
pub use document::{Document, Line, Node};
pub use updater::{ChangelogUpdater, DEFAULT_RELEASE};
pub use walker::CommitWalker;
