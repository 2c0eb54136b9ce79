//! Anchor elements.

use serde::Serialize;

use crate::component::HtmlComponent;
use crate::confirmation::Confirmation;
use crate::element::Element;
use crate::error::Result;

/// Tag name of every [`LinkElement`].
pub const LINK_TAG: &str = "a";

/// `href` used when none has been set.
pub const DEFAULT_HREF: &str = "#";

/// Attribute that receives a confirmation unless another one is named.
pub const DEFAULT_CONFIRMATION_ATTRIBUTE: &str = "onclick";

/// An `<a>` element with href, target and confirmation helpers.
///
/// All [`HtmlComponent`] setters are available and chain with the link
/// specific ones in any order. The tag name stays `a`: a name passed to
/// [`HtmlComponent::set_tag_name`] is replaced on render.
///
/// ## Example
///
/// ```
/// use htm_element::prelude::*;
///
/// let mut link = LinkElement::new();
/// link.set_href_with_query("https://www.google.com", &[("q", "searchtext")])?
///     .set_text_content(Some("link"))
///     .set_target_blank(true);
///
/// assert_eq!(
///     link.to_text(),
///     "<a href=\"https://www.google.com?q=searchtext\" target=\"_blank\">link</a>"
/// );
/// # Ok::<(), htm_element::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinkElement {
	element: Element,
	href: String,
	target_blank: bool,
}

impl LinkElement {
	pub fn new() -> Self {
		Self {
			element: Element::with_tag(LINK_TAG),
			href: DEFAULT_HREF.to_string(),
			target_blank: false,
		}
	}

	/// Creates a link from initial attributes and text. The tag is always `a`.
	pub fn build<K, V>(attributes: impl IntoIterator<Item = (K, V)>, text: Option<&str>) -> Self
	where
		K: Into<String>,
		V: Into<htm_markup::AttributeValue>,
	{
		Self {
			element: Element::build(Some(LINK_TAG), attributes, text),
			..Self::new()
		}
	}

	/// The href applied at render time when the node has none.
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Sets the link target.
	pub fn set_href(&mut self, url: &str) -> &mut Self {
		self.element.node.set_attribute("href", url);
		self.href = url.to_string();
		self
	}

	/// Sets the link target with `query` appended as a url-encoded query
	/// string.
	///
	/// `query` is anything serde can flatten into key/value pairs: a slice of
	/// tuples, a map or a struct.
	///
	/// # Errors
	///
	/// Returns an error if `query` does not serialize to flat pairs.
	pub fn set_href_with_query<Q>(&mut self, url: &str, query: &Q) -> Result<&mut Self>
	where
		Q: Serialize + ?Sized,
	{
		self.element.node.set_href(url, Some(query))?;
		if let Some(href) = self.element.node.attribute("href") {
			self.href = href.to_string();
		}
		Ok(self)
	}

	/// Adds `target="_blank"`, or removes the target when `false`.
	pub fn set_target_blank(&mut self, target_blank: bool) -> &mut Self {
		self.target_blank = target_blank;
		if target_blank {
			self.element.attributes.insert("target", "_blank");
		} else {
			self.element.attributes.remove("target");
			self.element.node.remove_attribute("target");
		}
		self
	}

	pub fn is_target_blank(&self) -> bool {
		self.target_blank
	}

	/// Asks for confirmation through `attribute` (`onclick`, `onmousedown`, ...).
	pub fn set_confirmation(&mut self, message: &str, attribute: &str) -> &mut Self {
		self.element
			.attributes
			.insert(attribute, Confirmation::new(message));
		self
	}

	/// Asks for confirmation on click.
	pub fn set_confirmation_on_click(&mut self, message: &str) -> &mut Self {
		self.set_confirmation(message, DEFAULT_CONFIRMATION_ATTRIBUTE)
	}
}

impl Default for LinkElement {
	fn default() -> Self {
		Self::new()
	}
}

impl HtmlComponent for LinkElement {
	fn base(&self) -> &Element {
		&self.element
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.element
	}

	fn before_render(&mut self) {
		if self.element.tag_name.as_deref() != Some(LINK_TAG) {
			tracing::debug!(tag = ?self.element.tag_name, "link tag name is fixed to `a`");
			self.element.tag_name = Some(LINK_TAG.to_string());
		}
		if !self.element.node.has_attribute("href") {
			tracing::trace!(href = %self.href, "applying default href");
			self.element.node.set_attribute("href", self.href.clone());
		}
	}
}
