//! Transmark - find JSX/JS strings that are not marked for translation
//!
//! Transmark parses JavaScript and TypeScript sources (with JSX), lowers them
//! into a small arena syntax tree, and runs the
//! `string-is-marked-for-translation` rule over it. The rule reports
//! user-facing string and template literals that sit outside a localization
//! call, unless an ignore list (attributes, tags, functions) covers them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, lowering, arena tree and traversal driver
//! - `issues`: Issue types for reporting
//! - `rules`: The translation-marking rule and its runner
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
