//! The fluent capability set shared by every element type.
//!
//! [`HtmlComponent`] carries all setters and render methods. A type only has
//! to expose its underlying [`Element`]; the trait does the rest. Every
//! setter returns `&mut Self`, so calls chain on any implementor and link
//! specific setters stay reachable after generic ones.
//!
//! ## Example
//!
//! ```
//! use htm_element::prelude::*;
//!
//! let mut card = Element::with_tag("div");
//! card.set_default_class("card")
//!     .add_class("shadow")
//!     .set_data_attribute("id", "7")
//!     .set_text_content(Some("Hello"));
//!
//! assert_eq!(
//!     card.to_text(),
//!     "<div class=\"card shadow\" data-id=\"7\">Hello</div>"
//! );
//! ```

use std::io;

use htm_markup::{AttributeValue, Html, Node};

use crate::element::Element;
use crate::error::Result;

/// Fluent configuration and rendering for a single HTML element.
pub trait HtmlComponent {
	/// The element holding this component's configuration.
	fn base(&self) -> &Element;

	fn base_mut(&mut self) -> &mut Element;

	/// Hook run at the start of every [`render`](Self::render).
	fn before_render(&mut self) {}

	/// Copies the configuration onto the underlying node and returns a
	/// snapshot of it, or `None` when the element is hidden.
	///
	/// The underlying node persists between renders. Attributes written by
	/// an earlier render stay on it; use [`render_fresh`](Self::render_fresh)
	/// to start from an empty node.
	fn render(&mut self) -> Option<Html> {
		self.before_render();
		self.base_mut().render_node()
	}

	/// Resets the underlying node, then renders.
	fn render_fresh(&mut self) -> Option<Html> {
		self.base_mut().reset_node();
		self.render()
	}

	/// Opening tag of the last render, rendering first if there is none.
	fn render_start_tag(&mut self) -> Option<String> {
		cached_or_render(self).map(|html| html.start_tag())
	}

	/// Closing tag of the last render, rendering first if there is none.
	fn render_end_tag(&mut self) -> Option<String> {
		cached_or_render(self).map(|html| html.end_tag())
	}

	/// Attribute list of the last render, e.g. ` id="a" class="b"`.
	///
	/// `None` when hidden or when the element has no attributes.
	fn attributes_markup(&mut self) -> Option<String> {
		cached_or_render(self)
			.map(|html| html.attributes_markup())
			.filter(|markup| !markup.is_empty())
	}

	/// Renders and writes the markup to `out`. Writes nothing when hidden.
	fn render_print<W>(&mut self, out: &mut W) -> Result<()>
	where
		W: io::Write + ?Sized,
	{
		if let Some(html) = self.render() {
			out.write_all(html.to_markup().as_bytes())?;
		}
		Ok(())
	}

	fn render_print_start_tag<W>(&mut self, out: &mut W) -> Result<()>
	where
		W: io::Write + ?Sized,
	{
		if let Some(tag) = self.render_start_tag() {
			out.write_all(tag.as_bytes())?;
		}
		Ok(())
	}

	fn render_print_end_tag<W>(&mut self, out: &mut W) -> Result<()>
	where
		W: io::Write + ?Sized,
	{
		if let Some(tag) = self.render_end_tag() {
			out.write_all(tag.as_bytes())?;
		}
		Ok(())
	}

	/// Rendered markup, or an empty string when hidden.
	fn to_text(&mut self) -> String {
		self.render()
			.map(|html| html.to_markup())
			.unwrap_or_default()
	}

	/// Sets the tag name. `None` keeps whatever name the node already has.
	fn set_tag_name(&mut self, name: Option<&str>) -> &mut Self {
		self.base_mut().tag_name = name.map(str::to_string);
		self
	}

	/// Replaces the whole attribute map.
	fn set_attributes<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> &mut Self
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		let base = self.base_mut();
		base.attributes.clear();
		base.attributes.extend(attributes);
		self
	}

	fn set_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> &mut Self {
		self.base_mut().attributes.insert(name, value);
		self
	}

	/// Merges attributes, overwriting existing keys.
	fn add_attributes<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> &mut Self
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		self.base_mut().attributes.extend(attributes);
		self
	}

	fn remove_attribute(&mut self, name: &str) -> &mut Self {
		self.base_mut().attributes.remove(name);
		self
	}

	/// Sets the text body. Applied at render time, it replaces any children
	/// added before.
	fn set_text_content(&mut self, text: Option<&str>) -> &mut Self {
		self.base_mut().text_content = text.map(str::to_string);
		self
	}

	/// Replaces the explicit class.
	fn set_class(&mut self, class: &str) -> &mut Self {
		self.base_mut().class = class.to_string();
		self
	}

	/// Appends to the explicit class, separated by a single space.
	fn add_class(&mut self, class: &str) -> &mut Self {
		let base = self.base_mut();
		if !base.class.is_empty() {
			base.class.push(' ');
		}
		base.class.push_str(class);
		self
	}

	/// Replaces the list of supplementary classes appended after the
	/// explicit class.
	fn set_additional_classes<S>(&mut self, classes: impl IntoIterator<Item = S>) -> &mut Self
	where
		S: Into<String>,
	{
		self.base_mut().additional_classes = classes.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the class segment that [`set_class`](Self::set_class) cannot
	/// remove.
	fn set_default_class(&mut self, class: &str) -> &mut Self {
		self.base_mut().default_class = class.to_string();
		self
	}

	fn set_title(&mut self, title: Option<&str>) -> &mut Self {
		self.base_mut().title = title.map(str::to_string);
		self
	}

	/// Replaces all data attributes. Keys are given without the `data-`
	/// prefix.
	fn set_data_attributes<K, V>(
		&mut self,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> &mut Self
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		let base = self.base_mut();
		base.data_attributes.clear();
		base.data_attributes.extend(attributes);
		self
	}

	fn set_data_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeValue>,
	) -> &mut Self {
		self.base_mut().data_attributes.insert(name, value);
		self
	}

	fn add_data_attributes<K, V>(
		&mut self,
		attributes: impl IntoIterator<Item = (K, V)>,
	) -> &mut Self
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		self.base_mut().data_attributes.extend(attributes);
		self
	}

	/// Hides the element; render then yields `None`.
	fn set_hidden(&mut self, hidden: bool) -> &mut Self {
		self.base_mut().hidden = hidden;
		self
	}

	fn is_hidden(&self) -> bool {
		self.base().hidden
	}

	/// Appends an empty `<span class="...">` after the text content.
	/// Takes precedence over [`set_icon_class`](Self::set_icon_class).
	fn set_span_class(&mut self, class: Option<&str>) -> &mut Self {
		let base = self.base_mut();
		base.span_class = class.map(str::to_string);
		base.decoration_applied = false;
		self
	}

	/// Appends an empty `<i class="...">` after the text content.
	fn set_icon_class(&mut self, class: Option<&str>) -> &mut Self {
		let base = self.base_mut();
		base.icon_class = class.map(str::to_string);
		base.decoration_applied = false;
		self
	}

	/// Renders `child` now and appends a copy of its markup.
	///
	/// Later changes to `child` do not reach this element. A hidden child
	/// adds nothing.
	fn add_child<C>(&mut self, child: &mut C) -> &mut Self
	where
		C: HtmlComponent + ?Sized,
	{
		if let Some(html) = child.render() {
			self.base_mut().node.add_html(html);
		}
		self
	}

	/// Appends a node or raw markup to the underlying element.
	fn add_html(&mut self, html: impl Into<Node>) -> &mut Self {
		self.base_mut().node.add_html(html);
		self
	}

	/// The underlying node.
	fn element(&self) -> &Html {
		&self.base().node
	}

	fn element_mut(&mut self) -> &mut Html {
		&mut self.base_mut().node
	}

	/// Replaces the underlying node.
	fn set_element(&mut self, html: Html) -> &mut Self {
		let base = self.base_mut();
		base.node = html;
		base.decoration_applied = false;
		self
	}
}

fn cached_or_render<C>(component: &mut C) -> Option<Html>
where
	C: HtmlComponent + ?Sized,
{
	if component.is_hidden() {
		return None;
	}
	if let Some(html) = component.base().last_render().cloned() {
		return Some(html);
	}
	tracing::trace!("no cached render, rendering implicitly");
	component.render()
}
