//! Connector picker for diagram lifelines.
//!
//! This module holds the logic behind the "add endpoint" control of the
//! diagram editor:
//!
//! - [`candidates`] – Filtered, deduplicated suggestion list for a query
//! - [`resolve`] – Selection to effects (imports, endpoint nodes)
//! - [`import`] – `import <org>/<package>;` fragments and their parser
//! - [`operations`] – Applying effects to a document
//! - [`state`] – Search box state and the one-interaction picker

pub mod candidates;
pub mod import;
pub mod operations;
pub mod resolve;
pub mod state;

pub use candidates::{Candidate, build_candidates, candidate_key, list_all};
pub use import::{FragmentParser, ImportParseError, ImportStatementParser, import_statement};
pub use operations::{DefaultNodeFactory, DocumentSink, NodeFactory, apply_effects};
pub use resolve::{Effect, SelectionResolver, resolve_selection};
pub use state::{ConnectorPicker, PickerPhase, QueryState};
