//! # Occurrence Highlighting Tests
//!
//! - `scenarios/` - resolution over parsed sources, caret conventions and invariants
//! - `finder/` - the stateful finder and its configuration
//! - `document/` - snapshot swapping on edits

pub use common::*;

pub mod finder;
pub mod scenarios;
