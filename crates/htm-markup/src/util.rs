//! Escaping helpers used during serialization.

use std::borrow::Cow;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Returns `true` if `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Escapes text content.
///
/// Replaces `&`, `<` and `>`. Quotes are left alone because text nodes are
/// never placed inside an attribute.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn escape_text(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Escapes a value for use inside a double-quoted attribute.
///
/// Replaces `&`, `"` and `<`. Single quotes pass through so inline scripts
/// such as `return confirm('...');` stay readable.
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '"', '<']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'"' => escaped.push_str("&quot;"),
				'<' => escaped.push_str("&lt;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_text_no_special_chars() {
		assert_eq!(escape_text("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	fn test_escape_text_angle_brackets() {
		assert_eq!(
			escape_text("<script>a & b</script>"),
			Cow::<str>::Owned("&lt;script&gt;a &amp; b&lt;/script&gt;".to_string())
		);
	}

	#[rstest]
	fn test_escape_text_keeps_quotes() {
		assert_eq!(escape_text("\"it's\""), Cow::Borrowed("\"it's\""));
	}

	#[rstest]
	fn test_escape_attribute_quotes() {
		assert_eq!(
			escape_attribute("say \"hi\" & <go>"),
			Cow::<str>::Owned("say &quot;hi&quot; &amp; &lt;go>".to_string())
		);
	}

	#[rstest]
	fn test_escape_attribute_keeps_single_quotes() {
		assert_eq!(
			escape_attribute("return confirm('ok');"),
			Cow::Borrowed("return confirm('ok');")
		);
	}

	#[rstest]
	#[case("br", true)]
	#[case("IMG", true)]
	#[case("div", false)]
	#[case("a", false)]
	fn test_is_void_element(#[case] tag: &str, #[case] expected: bool) {
		assert_eq!(is_void_element(tag), expected);
	}
}
