//! HTML property schema lookup.
//!
//! Element properties in the tree are keyed by their hast property names
//! (`className`, `htmlFor`, `dataLineNumbers`). Rendering them as JSX needs
//! two facts per property: which attribute name to emit for the selected
//! casing, and how to encode the value (boolean, list, number).
//!
//! # Example
//!
//! ```rust
//! use mdx_property_info::{HtmlPropertyTable, PropertyLookup};
//!
//! let table = HtmlPropertyTable::new();
//! let info = table.find("className");
//!
//! assert_eq!(info.attribute, "class");
//! assert_eq!(info.react_alias.as_deref(), Some("className"));
//! assert!(info.space_separated);
//! ```

pub mod case;
pub mod html;
pub mod info;

pub use html::HtmlPropertyTable;
pub use info::PropertyInfo;

/// Lookup capability the attribute merge depends on.
///
/// Implementations must accept both property names and attribute names,
/// so that looking up an already-resolved name is stable.
pub trait PropertyLookup {
    fn find(&self, name: &str) -> PropertyInfo;
}
