//! Option lists for search pane filter widgets.
//!
//! A pane lists the distinct values of one column together with the number
//! of rows holding each value (`total`) and the number of rows that would
//! remain under every other active pane filter (`count`).

pub mod assemble;
pub mod config;
pub mod editor;
pub mod entry;
pub mod error;
pub mod exec;
pub mod field;
pub mod merge;
pub mod options;
pub mod query;
pub mod request;
pub mod resolve;

pub use editor::{Editor, EditorContext};
pub use entry::PaneOption;
pub use error::PaneError;
pub use field::{Field, FieldAction, PaneField};
pub use options::{LeftJoin, ManualOption, Predicate, SearchPaneOptions};
pub use request::SearchPanesRequest;
