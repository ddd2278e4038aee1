//! Error reporting and diagnostic messages for MDX code props.
//!
//! Diagnostics follow the tidyverse structure used across the toolchain:
//! a short title, a problem statement, bulleted details and hints ending in `?`.
//!
//! - [`DiagnosticMessage`]: The main error message structure
//! - [`DiagnosticMessageBuilder`]: Builder encoding the message guidelines
//! - [`SourceSnippet`]: The text a diagnostic's byte span points into
//! - [`catalog`]: Error codes (`M-<subsystem>-<number>`) and their metadata
//!
//! # Example
//!
//! ```
//! use mdx_error_reporting::{DiagnosticMessageBuilder, SourceSnippet, SourceSpan};
//!
//! let msg = DiagnosticMessageBuilder::error("Invalid Code Meta")
//!     .with_code("M-2-1")
//!     .problem("Unterminated string constant")
//!     .with_location(SourceSpan::new(6, 7))
//!     .build();
//!
//! let snippet = SourceSnippet::new("code meta", r#"title="oops"#);
//! let text = msg.to_text(Some(&snippet));
//! assert!(text.contains("M-2-1"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;
pub mod source;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage};
pub use source::{SourceSnippet, SourceSpan};
