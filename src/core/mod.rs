//! Core pipeline: parse, lower into the arena tree, and drive rule handlers.
//!
//! ## Module Structure
//!
//! - `parsers`: swc parsing of JS/JSX/TS/TSX sources
//! - `lower`: swc AST → [`SyntaxTree`]
//! - `tree`: arena syntax tree with parent links
//! - `driver`: depth-first dispatch to rule handlers
//! - `file_scanner`: source file discovery
//! - `context`: per-run state (config, files, parsed trees)

pub mod context;
pub mod driver;
pub mod file_scanner;
pub mod lower;
pub mod parsers;
pub mod tree;

pub use context::{CheckContext, LoweredFile};
pub use driver::{Finding, HandlerKind, Handlers, ReportSink, run};
pub use lower::lower_module;
pub use parsers::jsx::{ParsedSource, parse_source};
pub use tree::{LiteralValue, Node, NodeId, NodeKind, SyntaxTree, TreeBuilder};
