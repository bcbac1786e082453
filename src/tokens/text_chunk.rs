use super::Serialize;
use crate::html::{escape_text, TextType};

/// Character data between two other tokens.
///
/// The text is stored decoded; character references are produced again on
/// serialization if the content model allows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    text: String,
    text_type: TextType,
}

impl TextChunk {
    #[inline]
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        TextChunk {
            text: text.into(),
            text_type,
        }
    }

    #[inline]
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    #[inline]
    pub(crate) fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl Serialize for TextChunk {
    #[inline]
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        if self.text_type.allows_text_entitites() {
            escape_text(&self.text, output_handler);
        } else if !self.text.is_empty() {
            output_handler(&self.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization() {
        let text = "if (a < b && c > d) {}";

        assert_eq!(
            TextChunk::new(text, TextType::Data).to_html_string(),
            "if (a &lt; b &amp;&amp; c &gt; d) {}"
        );
        assert_eq!(
            TextChunk::new(text, TextType::RCData).to_html_string(),
            "if (a &lt; b &amp;&amp; c &gt; d) {}"
        );
        assert_eq!(TextChunk::new(text, TextType::ScriptData).to_html_string(), text);
        assert_eq!(TextChunk::new(text, TextType::RawText).to_html_string(), text);
    }

    #[test]
    fn set_text() {
        let mut chunk = TextChunk::new("old", TextType::RCData);

        chunk.set_text("new & improved");

        assert_eq!(chunk, TextChunk::new("new & improved", TextType::RCData));
        assert_eq!(chunk.to_html_string(), "new &amp; improved");
    }
}
