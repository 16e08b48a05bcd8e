//! Shared low-level helpers.
//!
//! - [`scanner`] - Character and bracket scanning over identifier strings

pub mod scanner;
