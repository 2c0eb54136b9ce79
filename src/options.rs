//! Declarative element configuration.
//!
//! [`ElementOptions`] and [`LinkOptions`] describe an element as data, so it
//! can live in a JSON settings file instead of code. Every field is optional.
//!
//! ## Example
//!
//! ```
//! use htm_element::prelude::*;
//!
//! let mut badge = Element::from_json(
//!     r#"{ "tag": "span", "default_class": "badge", "class": "bg-info", "text": "new" }"#,
//! )?;
//!
//! assert_eq!(badge.to_text(), "<span class=\"badge bg-info\">new</span>");
//! # Ok::<(), htm_element::Error>(())
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::component::HtmlComponent;
use crate::element::Element;
use crate::error::Result;
use crate::link::{DEFAULT_CONFIRMATION_ATTRIBUTE, LINK_TAG, LinkElement};

/// Settings for an [`Element`].
///
/// Map fields are ordered by key, which fixes the attribute order of the
/// rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementOptions {
	pub tag: Option<String>,
	pub attributes: BTreeMap<String, String>,
	pub data: BTreeMap<String, String>,
	pub text: Option<String>,
	pub class: String,
	pub additional_classes: Vec<String>,
	pub default_class: String,
	pub title: Option<String>,
	pub hidden: bool,
	pub span_class: Option<String>,
	pub icon_class: Option<String>,
}

impl ElementOptions {
	fn apply<C: HtmlComponent>(self, component: &mut C) {
		component
			.add_attributes(self.attributes)
			.set_data_attributes(self.data)
			.set_text_content(self.text.as_deref())
			.set_class(&self.class)
			.set_additional_classes(self.additional_classes)
			.set_default_class(&self.default_class)
			.set_title(self.title.as_deref())
			.set_hidden(self.hidden)
			.set_span_class(self.span_class.as_deref())
			.set_icon_class(self.icon_class.as_deref());
	}
}

/// Settings for a [`LinkElement`]. The `tag` of the nested element options
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
	#[serde(flatten)]
	pub element: ElementOptions,
	pub href: Option<String>,
	pub query: BTreeMap<String, String>,
	pub target_blank: bool,
	pub confirmation: Option<String>,
	pub confirmation_attribute: Option<String>,
}

impl Element {
	pub fn from_options(options: ElementOptions) -> Self {
		let mut element = match options.tag.as_deref() {
			Some(tag) => Element::with_tag(tag),
			None => Element::new(),
		};
		options.apply(&mut element);
		element
	}

	/// Parses [`ElementOptions`] from JSON and builds the element.
	///
	/// # Errors
	///
	/// Returns [`Error::Options`](crate::Error::Options) if the JSON is
	/// malformed or has fields of the wrong type.
	pub fn from_json(json: &str) -> Result<Self> {
		let options: ElementOptions = serde_json::from_str(json)?;
		Ok(Self::from_options(options))
	}
}

impl LinkElement {
	/// # Errors
	///
	/// Returns an error if the query cannot be encoded.
	pub fn from_options(options: LinkOptions) -> Result<Self> {
		if options.element.tag.as_deref().is_some_and(|tag| tag != LINK_TAG) {
			tracing::debug!(tag = ?options.element.tag, "ignoring tag for link element");
		}

		let mut link = LinkElement::new();
		options.element.apply(&mut link);
		if let Some(href) = options.href.as_deref() {
			if options.query.is_empty() {
				link.set_href(href);
			} else {
				link.set_href_with_query(href, &options.query)?;
			}
		}
		link.set_target_blank(options.target_blank);
		if let Some(message) = options.confirmation.as_deref() {
			let attribute = options
				.confirmation_attribute
				.as_deref()
				.unwrap_or(DEFAULT_CONFIRMATION_ATTRIBUTE);
			link.set_confirmation(message, attribute);
		}
		Ok(link)
	}

	/// Parses [`LinkOptions`] from JSON and builds the link.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or the query cannot be
	/// encoded.
	pub fn from_json(json: &str) -> Result<Self> {
		let options: LinkOptions = serde_json::from_str(json)?;
		Self::from_options(options)
	}
}
