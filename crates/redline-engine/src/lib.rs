//! # redline-engine
//!
//! Patch verification and document-position mapping for Redline.
//!
//! The engine is pure and synchronous apart from the [`service`] layer:
//! - [`sections`]: index a plain-text document by its `## ` headings
//! - [`parser`]: recover a patch plan from untrusted generated text
//! - [`lint`]: keep only patches whose section and original line exist
//! - [`flatten`]: map flat-text offsets of a structured document back to
//!   native indices
//! - [`range_patch`]: build the strike/insert/style batch for one edit
//! - [`controls`] and [`prompt`]: prepare the text producer's input
//! - [`service`]: plan generation and edit application over the
//!   [`collaborators`] traits

pub mod collaborators;
pub mod controls;
pub mod error;
pub mod flatten;
pub mod lint;
pub mod parser;
pub mod prompt;
pub mod range_patch;
pub mod sections;
pub mod service;

pub use collaborators::{DocumentEditor, DocumentFetcher, FetchedDocument, TextProducer};
pub use error::ServiceError;
pub use flatten::{FlatDocument, LocateError, locate_segment};
pub use lint::{PlanVerifier, lint_plan};
pub use parser::{parse_plan, recover_plan};
pub use range_patch::{RangePatch, build_range_patch};
pub use sections::{
    SectionIndex, index_sections, line_exists_in_section, section_range_for, split_lines,
};
pub use service::{ApplyOptions, PlanRequest, apply_edit, generate_plan, locate_edit};
