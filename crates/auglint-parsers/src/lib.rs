//! Python source extraction for auglint.
//!
//! - [`walker`] — Discovers `.py`/`.pyi` files under the scan root
//! - [`treesitter`] — Thin wrapper around the tree-sitter Python grammar
//! - [`python`] — Extracts classes, bases, methods, and parameter defaults
//! - [`hierarchy`] — Resolves the transform family from inheritance edges

pub mod hierarchy;
pub mod python;
pub mod treesitter;
pub mod walker;
