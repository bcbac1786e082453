use super::{Attribute, Attributes, Serialize};
use std::fmt::{self, Debug};

/// Start tag, possibly self-closing.
#[derive(Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: Attributes,
    self_closing: bool,
}

impl Tag {
    pub fn new(name: impl Into<String>, attributes: Attributes, self_closing: bool) -> Self {
        Tag {
            name: name.into(),
            attributes,
            self_closing,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[inline]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    #[inline]
    pub fn has_attribute(&self, name: &str, value: &str) -> bool {
        self.attributes.has(name, value)
    }

    #[inline]
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    #[inline]
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    #[inline]
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }
}

impl Serialize for Tag {
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        output_handler("<");
        output_handler(&self.name);

        // NOTE: attribute values are always quoted, so the solidus can
        // follow the last attribute without a separating space.
        self.attributes.to_html(output_handler);

        if self.self_closing {
            output_handler("/>");
        } else {
            output_handler(">");
        }
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("attributes", &self.attributes())
            .field("self_closing", &self.self_closing)
            .finish()
    }
}
