//! Attribute values and the ordered attribute map.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// The value of a single HTML attribute.
///
/// `Deferred` values are stringified only when the owning node is
/// serialized, so anything implementing [`fmt::Display`] can be stored and
/// formatted late.
#[derive(Clone)]
pub enum AttributeValue {
	/// A plain string value.
	Text(String),
	/// A boolean attribute. `true` renders the bare name, `false` omits it.
	Bool(bool),
	/// A value formatted at serialization time.
	Deferred(Arc<dyn fmt::Display + Send + Sync>),
}

impl AttributeValue {
	/// Wraps a displayable value for late stringification.
	pub fn deferred(value: impl fmt::Display + Send + Sync + 'static) -> Self {
		AttributeValue::Deferred(Arc::new(value))
	}

	/// Resolves the value to the string that ends up in markup.
	///
	/// Returns `None` for `Bool(false)`, which means "omit the attribute".
	pub fn resolve(&self) -> Option<Cow<'_, str>> {
		match self {
			AttributeValue::Text(text) => Some(Cow::Borrowed(text)),
			AttributeValue::Bool(true) => Some(Cow::Borrowed("")),
			AttributeValue::Bool(false) => None,
			AttributeValue::Deferred(value) => Some(Cow::Owned(value.to_string())),
		}
	}

	/// Returns `true` if the resolved value is empty or the attribute is omitted.
	pub fn is_empty(&self) -> bool {
		self.resolve().is_none_or(|value| value.is_empty())
	}
}

impl fmt::Debug for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
			AttributeValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
			AttributeValue::Deferred(value) => f
				.debug_tuple("Deferred")
				.field(&value.to_string())
				.finish(),
		}
	}
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.resolve() {
			Some(value) => f.write_str(&value),
			None => Ok(()),
		}
	}
}

impl PartialEq for AttributeValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(AttributeValue::Bool(a), AttributeValue::Bool(b)) => a == b,
			(AttributeValue::Bool(_), _) | (_, AttributeValue::Bool(_)) => false,
			_ => self.resolve() == other.resolve(),
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::Text(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		AttributeValue::Text(value.clone())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Bool(value)
	}
}

/// Ordered attribute map.
///
/// Keys keep the position of their first insertion; inserting an existing key
/// replaces its value in place. This keeps serialized output deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces `name`.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Merges `other` into this map, overwriting on key collision.
	pub fn extend<K, V>(&mut self, other: impl IntoIterator<Item = (K, V)>)
	where
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		for (name, value) in other {
			self.insert(name, value);
		}
	}

	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Removes `name`, returning its value if present.
	pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
		let index = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(index).1)
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Attributes::new();
		attributes.extend(iter);
		attributes
	}
}

impl IntoIterator for Attributes {
	type Item = (String, AttributeValue);
	type IntoIter = std::vec::IntoIter<(String, AttributeValue)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
