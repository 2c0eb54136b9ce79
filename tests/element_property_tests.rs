//! Property-based tests for element rendering
//!
//! Uses proptest to verify:
//! 1. Hidden elements never produce output
//! 2. Appended classes keep their order
//! 3. The default class survives any explicit class
//! 4. Rendering twice without changes is stable
//! 5. Text content is always escaped

use htm_element::prelude::*;
use proptest::prelude::*;

fn class_name() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9-]{0,11}"
}

fn tag_name() -> impl Strategy<Value = String> {
	prop::sample::select(vec!["div", "span", "p", "section", "a", "li"]).prop_map(String::from)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	/// Property: a hidden element renders nothing, whatever its configuration
	#[test]
	fn test_hidden_never_renders(
		tag in tag_name(),
		class in class_name(),
		text in "[a-zA-Z0-9 ]{0,40}",
	) {
		let mut element = Element::with_tag(tag);
		element
			.set_class(&class)
			.set_text_content(Some(text.as_str()))
			.set_hidden(true);

		prop_assert!(element.render().is_none());
		prop_assert!(element.render_start_tag().is_none());
		prop_assert!(element.render_end_tag().is_none());
		prop_assert_eq!(element.to_text(), "");
	}

	/// Property: classes appended one by one appear in order
	#[test]
	fn test_add_class_preserves_order(classes in prop::collection::vec(class_name(), 1..6)) {
		let mut element = Element::with_tag("div");
		for class in &classes {
			element.add_class(class);
		}

		let expected = classes.join(" ");
		let attribute = format!("class=\"{}\"", expected);
		prop_assert!(element.element_class().contains(&expected));
		prop_assert!(element.to_text().contains(&attribute));
	}

	/// Property: the default class is never dropped by set_class
	#[test]
	fn test_default_class_survives(default in class_name(), explicit in class_name()) {
		let mut element = Element::with_tag("div");
		element.set_default_class(&default).set_class(&explicit);

		let class = element.element_class();
		prop_assert!(class.split(' ').any(|segment| segment == default));
		prop_assert!(class.split(' ').any(|segment| segment == explicit));
	}

	/// Property: two renders without intervening changes are identical
	#[test]
	fn test_render_is_stable(
		tag in tag_name(),
		default in class_name(),
		explicit in class_name(),
		title in proptest::option::of("[a-z ]{1,10}"),
		text in proptest::option::of("[a-z<>& ]{0,20}"),
		icon in proptest::option::of(class_name()),
	) {
		let mut element = Element::build(Some(tag.as_str()), [("class", "base")], text.as_deref());
		element
			.set_default_class(&default)
			.add_class(&explicit)
			.set_title(title.as_deref())
			.set_icon_class(icon.as_deref())
			.set_data_attribute("k", "v");

		let first = element.render();
		let second = element.render();
		prop_assert_eq!(first, second);
	}

	/// Property: text never leaks raw angle brackets into the markup body
	#[test]
	fn test_text_is_escaped(text in "[a-z<>&]{1,30}") {
		let mut element = Element::with_tag("p");
		element.set_text_content(Some(text.as_str()));

		let markup = element.to_text();
		let body = &markup["<p>".len()..markup.len() - "</p>".len()];
		prop_assert!(!body.contains('<'));
		prop_assert!(!body.contains('>'));
	}

	/// Property: a link without an explicit href always points at "#"
	#[test]
	fn test_link_default_href(text in "[a-zA-Z ]{0,20}") {
		let mut anchor = LinkElement::new();
		anchor.set_text_content(Some(text.as_str()));

		let html = anchor.render().unwrap();
		prop_assert_eq!(html.attribute("href").map(ToString::to_string), Some("#".to_string()));
	}
}
