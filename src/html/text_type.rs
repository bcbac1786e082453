/// Tokenizer state the text content was lexed in.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextType {
    PlainText,
    RCData,
    RawText,
    ScriptData,
    Data,
}

impl TextType {
    /// Text type of the content that follows a start tag with the given name.
    ///
    /// NOTE: there is no tree builder behind the tokenizer, so we mirror
    /// the content model switches it would otherwise perform.
    pub fn for_start_tag(tag_name: &str) -> Self {
        match tag_name {
            "textarea" | "title" => TextType::RCData,
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => TextType::RawText,
            "script" => TextType::ScriptData,
            "plaintext" => TextType::PlainText,
            _ => TextType::Data,
        }
    }

    #[inline]
    pub fn allows_text_entitites(self) -> bool {
        self == TextType::Data || self == TextType::RCData
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_model_switches() {
        assert_eq!(TextType::for_start_tag("textarea"), TextType::RCData);
        assert_eq!(TextType::for_start_tag("title"), TextType::RCData);
        assert_eq!(TextType::for_start_tag("style"), TextType::RawText);
        assert_eq!(TextType::for_start_tag("script"), TextType::ScriptData);
        assert_eq!(TextType::for_start_tag("plaintext"), TextType::PlainText);
        assert_eq!(TextType::for_start_tag("span"), TextType::Data);
        assert_eq!(TextType::for_start_tag("select"), TextType::Data);
    }

    #[test]
    fn entities() {
        assert!(TextType::Data.allows_text_entitites());
        assert!(TextType::RCData.allows_text_entitites());
        assert!(!TextType::RawText.allows_text_entitites());
        assert!(!TextType::ScriptData.allows_text_entitites());
        assert!(!TextType::PlainText.allows_text_entitites());
    }
}
