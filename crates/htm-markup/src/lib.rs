//! # htm-markup
//!
//! A small HTML node type that knows how to serialize itself.
//!
//! [`Html`] holds a tag name, an ordered attribute map and child nodes, and
//! renders to a markup string, an opening tag or a closing tag. Text content
//! and attribute values are escaped on output; raw markup is inserted as is.
//!
//! ## Example
//!
//! ```
//! use htm_markup::Html;
//!
//! let mut div = Html::el("div");
//! div.set_attribute("class", "card")
//!     .set_data("id", "42")
//!     .set_text("Hello <world>");
//!
//! assert_eq!(
//!     div.to_markup(),
//!     "<div class=\"card\" data-id=\"42\">Hello &lt;world&gt;</div>"
//! );
//! ```

pub mod html;
pub mod util;
pub mod value;

pub use html::{Html, Node};
pub use value::{AttributeValue, Attributes};

/// Errors raised while building markup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to encode query string: {0}")]
	Query(#[from] serde_urlencoded::ser::Error),
}
