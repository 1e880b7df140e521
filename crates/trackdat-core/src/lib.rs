//! Trackdat Core Library
//!
//! This crate provides the core of the trackdat design-file compiler:
//! - The canonical data-type vocabulary and its validation rules
//! - Identifier sanitization for generated code
//! - Type-directed coercion of default values
//! - The design-file parser producing the validated schema model
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Design file │────▶│   Parser    │────▶│   Design    │
//! │   (CSV)     │     │ (validate)  │     │ (relations) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use trackdat_core::Parser;
//!
//! let parsed = Parser::new(false).parse_file("design.csv")?;
//! for relation in &parsed.design.relations {
//!     println!("Relation: {}", relation.name);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod advisory;
pub mod coerce;
pub mod datatype;
pub mod error;
pub mod ident;
pub mod parser;
pub mod schema;

pub use advisory::{Advisories, Advisory};
pub use coerce::DefaultValue;
pub use datatype::DataType;
pub use error::{Error, Result};
pub use parser::{Parsed, Parser};
pub use schema::{Design, Field, IdType, Relation, TypeParams};
