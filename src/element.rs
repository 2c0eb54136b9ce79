//! The configurable element.

use htm_markup::{AttributeValue, Attributes, Html};

use crate::component::HtmlComponent;

/// A mutable builder for one HTML element.
///
/// Configuration is collected through the [`HtmlComponent`] setters and
/// copied onto an underlying [`Html`] node when the element is rendered.
///
/// The final `class` attribute is assembled from four segments, in order:
/// the `class` entry of the attribute map, the default class, the explicit
/// class and the additional classes. Empty segments are skipped and nothing
/// is deduplicated.
///
/// ## Example
///
/// ```
/// use htm_element::prelude::*;
///
/// let mut link = Element::with_tag("a");
/// let html = link
///     .set_attributes([("href", "seznam.cz")])
///     .set_text_content(Some("text"))
///     .render();
///
/// assert_eq!(html.unwrap().to_markup(), "<a href=\"seznam.cz\">text</a>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Element {
	pub(crate) node: Html,
	pub(crate) tag_name: Option<String>,
	pub(crate) attributes: Attributes,
	pub(crate) data_attributes: Attributes,
	pub(crate) text_content: Option<String>,
	pub(crate) class: String,
	pub(crate) additional_classes: Vec<String>,
	pub(crate) default_class: String,
	pub(crate) title: Option<String>,
	pub(crate) hidden: bool,
	pub(crate) span_class: Option<String>,
	pub(crate) icon_class: Option<String>,
	/// Whether the span/icon child currently sits on `node`.
	pub(crate) decoration_applied: bool,
	rendered: Option<Html>,
}

impl Element {
	/// Creates an element without a tag name.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_tag(tag: impl Into<String>) -> Self {
		let tag = tag.into();
		Self {
			node: Html::el(tag.clone()),
			tag_name: Some(tag),
			..Self::default()
		}
	}

	/// Creates an element from a tag name, initial attributes and text.
	pub fn build<K, V>(
		tag: Option<&str>,
		attributes: impl IntoIterator<Item = (K, V)>,
		text: Option<&str>,
	) -> Self
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		let mut element = match tag {
			Some(tag) => Self::with_tag(tag),
			None => Self::new(),
		};
		element.attributes.extend(attributes);
		element.text_content = text.map(str::to_string);
		element
	}

	pub fn tag_name(&self) -> Option<&str> {
		self.tag_name.as_deref()
	}

	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	pub fn data_attributes(&self) -> &Attributes {
		&self.data_attributes
	}

	pub fn text_content(&self) -> Option<&str> {
		self.text_content.as_deref()
	}

	pub fn class(&self) -> &str {
		&self.class
	}

	pub fn additional_classes(&self) -> &[String] {
		&self.additional_classes
	}

	pub fn default_class(&self) -> &str {
		&self.default_class
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Snapshot produced by the most recent successful render.
	pub fn last_render(&self) -> Option<&Html> {
		self.rendered.as_ref()
	}

	/// The class string a render would write.
	pub fn element_class(&self) -> String {
		let attribute_class = self
			.attributes
			.get("class")
			.map(ToString::to_string)
			.unwrap_or_default();

		[
			attribute_class.as_str(),
			self.default_class.as_str(),
			self.class.as_str(),
		]
		.into_iter()
		.chain(self.additional_classes.iter().map(String::as_str))
		.filter(|segment| !segment.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
		.trim()
		.to_string()
	}

	pub(crate) fn render_node(&mut self) -> Option<Html> {
		if self.hidden {
			tracing::debug!(tag = ?self.tag_name, "element is hidden, skipping render");
			return None;
		}

		if let Some(name) = &self.tag_name {
			self.node.set_name(name.clone());
		}

		// Composed class and title go to a copy so repeated renders do not
		// feed them back into the class composition.
		let mut attributes = self.attributes.clone();
		let class = self.element_class();
		if !class.is_empty() {
			attributes.insert("class", class);
		}
		if let Some(title) = &self.title {
			attributes.insert("title", title.clone());
		}
		for (name, value) in attributes {
			self.node.set_attribute(name, value);
		}
		for (name, value) in self.data_attributes.iter() {
			self.node.set_data(name, value.clone());
		}

		if let Some(text) = &self.text_content {
			self.node.set_text(text.clone());
			self.decoration_applied = false;
		}
		let decoration = if self.decoration_applied {
			None
		} else {
			self.decoration()
		};
		if let Some(decoration) = decoration {
			self.node.add_html(decoration);
			self.decoration_applied = true;
		}

		tracing::trace!(
			tag = ?self.node.name(),
			attributes = self.node.attrs().len(),
			"rendered element"
		);
		self.rendered = Some(self.node.clone());
		self.rendered.clone()
	}

	pub(crate) fn reset_node(&mut self) {
		self.node = Html::empty();
		self.decoration_applied = false;
	}

	fn decoration(&self) -> Option<Html> {
		let (tag, class) = match (&self.span_class, &self.icon_class) {
			(Some(class), _) => ("span", class),
			(None, Some(class)) => ("i", class),
			(None, None) => return None,
		};
		let mut html = Html::el(tag);
		html.set_attribute("class", class.clone());
		Some(html)
	}
}

impl HtmlComponent for Element {
	fn base(&self) -> &Element {
		self
	}

	fn base_mut(&mut self) -> &mut Element {
		self
	}
}
