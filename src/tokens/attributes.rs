use super::Serialize;
use crate::html::escape_attribute_value;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Serialize for Attribute {
    #[inline]
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        output_handler(&self.name);
        output_handler("=\"");
        escape_attribute_value(&self.value, output_handler);
        output_handler("\"");
    }
}

/// Ordered attribute list of a tag.
///
/// Names are compared exactly as the tokenizer emitted them. Duplicated names
/// are not rejected here: lookups and in-place updates act on the first
/// attribute with the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|attr| attr.name == name)
            .map(Attribute::value)
    }

    /// Returns `true` if the first attribute called `name` has exactly `value`.
    /// A missing attribute never matches.
    #[inline]
    pub fn has(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    /// Overwrites the value of an existing attribute keeping its position,
    /// or appends a new attribute to the end of the list.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.items.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => {
                if attr.value != value {
                    value.clone_into(&mut attr.value);
                }
            }
            None => self.items.push(Attribute::new(name, value)),
        }
    }

    /// Removes the first attribute called `name`. Returns `true` if
    /// an attribute has been removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.items.iter().position(|attr| attr.name == name) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl Deref for Attributes {
    type Target = [Attribute];

    #[inline]
    fn deref(&self) -> &[Attribute] {
        &self.items
    }
}

impl From<Vec<Attribute>> for Attributes {
    #[inline]
    fn from(items: Vec<Attribute>) -> Self {
        Attributes { items }
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Attributes {
            items: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Attributes {
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        for attr in &self.items {
            output_handler(" ");
            attr.to_html(output_handler);
        }
    }
}
