mod escape;
mod text_type;

pub(crate) use self::escape::{escape_attribute_value, escape_text};
pub use self::text_type::TextType;
