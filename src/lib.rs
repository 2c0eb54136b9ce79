//! # htm-element
//!
//! Fluent builders for single HTML elements.
//!
//! An [`Element`] collects a tag name, attributes, data attributes, text,
//! classes, a title and a visibility flag through chained setters, then
//! copies that configuration onto an [`Html`] node and serializes it when
//! rendered. [`LinkElement`] specializes it for `<a>` tags with a default
//! `href`, a `target="_blank"` toggle and JavaScript confirmation dialogs.
//!
//! All setters and render methods live on the [`HtmlComponent`] trait, so
//! bring it into scope through the [`prelude`].
//!
//! ## Example
//!
//! ```
//! use htm_element::prelude::*;
//!
//! let mut list = Element::build(Some("ul"), [("class", "nav")], None);
//! list.add_child(
//!     Element::with_tag("li").add_child(
//!         LinkElement::new()
//!             .set_href("/home")
//!             .set_text_content(Some("Home"))
//!             .set_confirmation_on_click("Leave this page?"),
//!     ),
//! );
//!
//! assert_eq!(
//!     list.to_text(),
//!     "<ul class=\"nav\"><li><a href=\"/home\" onclick=\"return confirm('Leave this page?');\">Home</a></li></ul>"
//! );
//! ```
//!
//! ## Hidden elements
//!
//! A hidden element renders as `None`, not as an empty element. Check the
//! result before splicing it into larger markup, or use
//! [`HtmlComponent::to_text`], which yields an empty string instead.
//!
//! ## Logging
//!
//! Render steps emit `tracing` events at `trace` and `debug` level. The crate
//! installs no subscriber.

pub mod component;
pub mod confirmation;
pub mod element;
pub mod error;
pub mod link;
pub mod options;

pub use component::HtmlComponent;
pub use confirmation::Confirmation;
pub use element::Element;
pub use error::{Error, Result};
pub use link::LinkElement;
pub use options::{ElementOptions, LinkOptions};

pub use htm_markup::{AttributeValue, Attributes, Html, Node};

/// Everything needed to build and render elements.
pub mod prelude {
	pub use crate::component::HtmlComponent;
	pub use crate::confirmation::Confirmation;
	pub use crate::element::Element;
	pub use crate::link::LinkElement;
	pub use crate::options::{ElementOptions, LinkOptions};
	pub use htm_markup::{AttributeValue, Html};
}
