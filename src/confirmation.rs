//! JavaScript confirmation dialogs for event attributes.

use std::fmt;

use htm_markup::AttributeValue;

/// An inline `confirm()` call, stringified when the element is serialized.
///
/// The message is inserted as is. A single quote inside it ends the
/// JavaScript string literal, so callers must keep messages free of `'`.
///
/// ## Example
///
/// ```
/// use htm_element::Confirmation;
///
/// let confirmation = Confirmation::new("Delete this item?");
/// assert_eq!(confirmation.to_string(), "return confirm('Delete this item?');");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
	message: String,
}

impl Confirmation {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for Confirmation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "return confirm('{}');", self.message)
	}
}

impl From<Confirmation> for AttributeValue {
	fn from(confirmation: Confirmation) -> Self {
		AttributeValue::deferred(confirmation)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Are you sure?", "return confirm('Are you sure?');")]
	#[case("", "return confirm('');")]
	fn test_display(#[case] message: &str, #[case] expected: &str) {
		assert_eq!(Confirmation::new(message).to_string(), expected);
	}

	#[rstest]
	fn test_single_quotes_are_not_escaped() {
		assert_eq!(
			Confirmation::new("it's gone").to_string(),
			"return confirm('it's gone');"
		);
	}

	#[rstest]
	fn test_into_attribute_value_is_deferred() {
		let value: AttributeValue = Confirmation::new("ok?").into();
		assert!(matches!(value, AttributeValue::Deferred(_)));
		assert_eq!(value.to_string(), "return confirm('ok?');");
	}
}
