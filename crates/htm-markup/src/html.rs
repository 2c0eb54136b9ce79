//! The HTML node and its serializer.
//!
//! ## Example
//!
//! ```
//! use htm_markup::Html;
//!
//! let mut link = Html::el("a");
//! link.set_attribute("href", "/docs").set_text("Docs");
//!
//! assert_eq!(link.to_markup(), "<a href=\"/docs\">Docs</a>");
//! assert_eq!(link.start_tag(), "<a href=\"/docs\">");
//! assert_eq!(link.end_tag(), "</a>");
//! ```

use std::fmt;

use serde::Serialize;

use crate::Error;
use crate::util::{escape_attribute, escape_text, is_void_element};
use crate::value::{AttributeValue, Attributes};

/// A child of an [`Html`] node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// A nested element.
	Element(Html),
	/// Text, escaped on serialization.
	Text(String),
	/// Markup inserted verbatim.
	Raw(String),
}

impl Node {
	fn write_markup(&self, output: &mut String) {
		match self {
			Node::Element(html) => html.write_markup(output),
			Node::Text(text) => output.push_str(&escape_text(text)),
			Node::Raw(markup) => output.push_str(markup),
		}
	}
}

impl From<Html> for Node {
	fn from(html: Html) -> Self {
		Node::Element(html)
	}
}

/// Strings are treated as ready-made markup.
impl From<&str> for Node {
	fn from(markup: &str) -> Self {
		Node::Raw(markup.to_string())
	}
}

impl From<String> for Node {
	fn from(markup: String) -> Self {
		Node::Raw(markup)
	}
}

/// A single HTML element.
///
/// A node without a name serializes its children only, without any tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Html {
	/// The tag name (e.g., "div", "a").
	name: Option<String>,
	/// HTML attributes, in insertion order.
	attrs: Attributes,
	/// Child nodes.
	children: Vec<Node>,
}

impl Html {
	/// Creates an element with the given tag name.
	pub fn el(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Creates a nameless container.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = Some(name.into());
		self
	}

	/// Returns `true` if this element has no content or closing tag.
	pub fn is_void(&self) -> bool {
		self.name.as_deref().is_some_and(is_void_element)
	}

	pub fn attrs(&self) -> &Attributes {
		&self.attrs
	}

	pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
		self.attrs.get(name)
	}

	pub fn has_attribute(&self, name: &str) -> bool {
		self.attrs.contains(name)
	}

	/// Sets an attribute, replacing any previous value.
	pub fn set_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> &mut Self {
		self.attrs.insert(name, value);
		self
	}

	pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
		self.attrs.remove(name);
		self
	}

	/// Sets `data-<name>`.
	pub fn set_data(&mut self, name: &str, value: impl Into<AttributeValue>) -> &mut Self {
		self.attrs.insert(format!("data-{name}"), value);
		self
	}

	/// Sets `href`, appending `query` as a url-encoded query string.
	///
	/// An empty query leaves `path` untouched. If `path` already carries a
	/// query string the new pairs are joined with `&`.
	///
	/// # Errors
	///
	/// Returns [`Error::Query`] if `query` does not serialize to flat
	/// key/value pairs.
	pub fn set_href<Q>(&mut self, path: &str, query: Option<&Q>) -> Result<&mut Self, Error>
	where
		Q: Serialize + ?Sized,
	{
		let mut href = path.to_string();
		if let Some(query) = query {
			let encoded = serde_urlencoded::to_string(query)?;
			if !encoded.is_empty() {
				href.push(if path.contains('?') { '&' } else { '?' });
				href.push_str(&encoded);
			}
		}
		self.attrs.insert("href", href);
		Ok(self)
	}

	/// Replaces all children with a single text node.
	pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.remove_children().add_text(text)
	}

	/// Appends a child element or raw markup.
	pub fn add_html(&mut self, child: impl Into<Node>) -> &mut Self {
		self.children.push(child.into());
		self
	}

	/// Appends a text child.
	pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.children.push(Node::Text(text.into()));
		self
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	pub fn remove_children(&mut self) -> &mut Self {
		self.children.clear();
		self
	}

	/// Serializes the attribute list, each attribute preceded by a space.
	pub fn attributes_markup(&self) -> String {
		let mut output = String::new();
		self.write_attributes(&mut output);
		output
	}

	/// Serializes the opening tag. Empty for a nameless node.
	pub fn start_tag(&self) -> String {
		let mut output = String::new();
		self.write_start_tag(&mut output);
		output
	}

	/// Serializes the closing tag. Empty for void and nameless nodes.
	pub fn end_tag(&self) -> String {
		match self.name.as_deref() {
			Some(name) if !self.is_void() => format!("</{name}>"),
			_ => String::new(),
		}
	}

	/// Serializes the children without the surrounding tags.
	pub fn inner_markup(&self) -> String {
		let mut output = String::new();
		self.write_inner(&mut output);
		output
	}

	/// Serializes the whole element.
	pub fn to_markup(&self) -> String {
		let mut output = String::new();
		self.write_markup(&mut output);
		output
	}

	fn write_attributes(&self, output: &mut String) {
		for (name, value) in self.attrs.iter() {
			let Some(resolved) = value.resolve() else {
				continue;
			};
			output.push(' ');
			output.push_str(name);
			if matches!(value, AttributeValue::Bool(true)) {
				continue;
			}
			output.push_str("=\"");
			output.push_str(&escape_attribute(&resolved));
			output.push('"');
		}
	}

	fn write_start_tag(&self, output: &mut String) {
		let Some(name) = self.name.as_deref() else {
			return;
		};
		output.push('<');
		output.push_str(name);
		self.write_attributes(output);
		if self.is_void() {
			output.push_str(" />");
		} else {
			output.push('>');
		}
	}

	fn write_markup(&self, output: &mut String) {
		self.write_start_tag(output);
		if self.is_void() {
			return;
		}
		self.write_inner(output);
		output.push_str(&self.end_tag());
	}

	fn write_inner(&self, output: &mut String) {
		for child in &self.children {
			child.write_markup(output);
		}
	}
}

impl fmt::Display for Html {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_markup())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_render_simple_element() {
		assert_eq!(Html::el("div").to_markup(), "<div></div>");
	}

	#[rstest]
	fn test_render_element_with_attrs() {
		let mut html = Html::el("div");
		html.set_attribute("class", "container")
			.set_attribute("id", "main");
		assert_eq!(
			html.to_markup(),
			"<div class=\"container\" id=\"main\"></div>"
		);
	}

	#[rstest]
	fn test_render_void_element() {
		let mut html = Html::el("br");
		html.add_text("ignored");
		assert_eq!(html.to_markup(), "<br />");
		assert_eq!(html.end_tag(), "");
	}

	#[rstest]
	fn test_render_nested() {
		let mut strong = Html::el("strong");
		strong.set_text("World");
		let mut div = Html::el("div");
		div.add_text("Hello, ").add_html(strong);
		assert_eq!(div.to_markup(), "<div>Hello, <strong>World</strong></div>");
	}

	#[rstest]
	fn test_set_text_replaces_children() {
		let mut div = Html::el("div");
		div.add_html(Html::el("span")).add_html("<b>raw</b>");
		div.set_text("only text");
		assert_eq!(div.to_markup(), "<div>only text</div>");
	}

	#[rstest]
	fn test_text_is_escaped_raw_is_not() {
		let mut div = Html::el("div");
		div.add_text("<script>").add_html("<em>x</em>");
		assert_eq!(div.to_markup(), "<div>&lt;script&gt;<em>x</em></div>");
	}

	#[rstest]
	fn test_attribute_value_is_escaped() {
		let mut input = Html::el("input");
		input.set_attribute("value", "\"quoted\" & more");
		assert_eq!(
			input.to_markup(),
			"<input value=\"&quot;quoted&quot; &amp; more\" />"
		);
	}

	#[rstest]
	fn test_boolean_attributes() {
		let mut button = Html::el("button");
		button
			.set_attribute("disabled", true)
			.set_attribute("hidden", false);
		assert_eq!(button.to_markup(), "<button disabled></button>");
	}

	#[rstest]
	fn test_data_attribute() {
		let mut div = Html::el("div");
		div.set_data("ajax", "false");
		assert_eq!(div.to_markup(), "<div data-ajax=\"false\"></div>");
	}

	#[rstest]
	fn test_nameless_node_renders_children_only() {
		let mut fragment = Html::empty();
		fragment.add_text("a").add_html(Html::el("hr"));
		assert_eq!(fragment.start_tag(), "");
		assert_eq!(fragment.end_tag(), "");
		assert_eq!(fragment.to_markup(), "a<hr />");
	}

	#[rstest]
	#[case("https://x.test", Some(vec![("q", "v")]), "https://x.test?q=v")]
	#[case("https://x.test?a=1", Some(vec![("b", "2")]), "https://x.test?a=1&b=2")]
	#[case("/search", Some(vec![("q", "with text")]), "/search?q=with+text")]
	#[case("/search", Some(vec![]), "/search")]
	#[case("/plain", None, "/plain")]
	fn test_set_href(
		#[case] path: &str,
		#[case] query: Option<Vec<(&str, &str)>>,
		#[case] expected: &str,
	) {
		let mut a = Html::el("a");
		a.set_href(path, query.as_ref()).unwrap();
		assert_eq!(a.attribute("href").unwrap().to_string(), expected);
	}

	#[rstest]
	fn test_attributes_markup() {
		let mut a = Html::el("a");
		a.set_attribute("href", "#").set_attribute("target", "_blank");
		assert_eq!(a.attributes_markup(), " href=\"#\" target=\"_blank\"");
	}

	#[rstest]
	fn test_inner_markup_excludes_own_tags() {
		let mut list = Html::el("ul");
		let mut item = Html::el("li");
		item.add_text("a & b");
		list.add_html(item).add_html("<li>raw</li>");
		assert_eq!(list.inner_markup(), "<li>a &amp; b</li><li>raw</li>");
		assert_eq!(
			list.to_markup(),
			format!("{}{}{}", list.start_tag(), list.inner_markup(), list.end_tag())
		);
	}

	#[rstest]
	fn test_remove_children_empties_node() {
		let mut div = Html::el("div");
		div.add_text("one").add_html(Html::el("br"));
		assert_eq!(div.children().len(), 2);

		div.remove_children();
		assert!(div.children().is_empty());
		assert_eq!(div.to_markup(), "<div></div>");
	}

	#[rstest]
	fn test_set_text_drops_element_children() {
		let mut div = Html::el("div");
		div.add_html(Html::el("hr")).set_text("only");
		assert_eq!(div.children().len(), 1);
		assert_eq!(div.inner_markup(), "only");
	}
}
