/*
 * lib.rs
 * Copyright (c) 2026 Posit, PBC
 */

//! Turn code fence meta strings into JSX props.
//!
//! In MDX, the text after a code fence's language tag is kept as a `meta`
//! string on the `code` element. This crate reads that string as JSX
//! attributes and attaches them to the `code` element, or to the `pre`
//! element wrapping it, by replacing the element with an expression node
//! that carries a JSX element:
//!
//! ````markdown
//! ```js onClick={props.onClick}
//! console.log('Hello World!')
//! ```
//! ````
//!
//! becomes
//!
//! ```jsx
//! <pre onClick={props.onClick}><code className="language-js">...</code></pre>
//! ```
//!
//! The existing element properties are normalized first (React or HTML
//! attribute names, list and number values rendered as strings, `style`
//! parsed into an object), followed by the meta attributes in the order
//! they were written.

pub mod attributes;
pub mod error;
pub mod meta;
pub mod options;
pub mod style;
pub mod synthesize;
pub mod transform;
pub mod writer;

pub use error::{CodePropsError, ConfigError, MetaSyntaxError, Result, StyleSyntaxError};
pub use meta::parse_meta;
pub use options::{AttributeNameCase, CodePropsOptions, TagName};
pub use transform::CodeProps;
pub use writer::{JsxWriter, write_jsx};
