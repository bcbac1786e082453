mod token_collector;

use self::token_collector::TokenCollector;
use crate::errors::ParseError;
use crate::tokens::Token;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use html5ever::TokenizerResult;

/// Splits `html` into a sequence of tokens in document order.
///
/// In `strict` mode the first diagnostic reported by the tokenizer fails
/// the whole document. Otherwise only the end of input inside of a tag,
/// comment or doctype does, and the tokenizer's recovery is trusted for
/// everything else.
pub(crate) fn tokenize(html: &str, strict: bool) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::default();
    let mut first_error = None;
    let input = BufferQueue::default();

    input.push_back(StrTendril::from(html));

    {
        let tokenizer = Tokenizer::new(
            TokenCollector::new(&mut tokens, &mut first_error, strict),
            TokenizerOpts {
                exact_errors: true,
                discard_bom: false,
                ..TokenizerOpts::default()
            },
        );

        while let TokenizerResult::Script(_) = tokenizer.feed(&input) {
            // NOTE: the collector never hands out script handles.
        }

        tokenizer.end();
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::TextType;
    use crate::tokens::{Attribute, Comment, Doctype, EndTag, Tag, TextChunk};

    fn tag(name: &str, attrs: &[(&str, &str)], self_closing: bool) -> Token {
        let attributes = attrs.iter().map(|&(n, v)| Attribute::new(n, v)).collect();

        Token::StartTag(Tag::new(name, attributes, self_closing))
    }

    fn end(name: &str) -> Token {
        Token::EndTag(EndTag::new(name))
    }

    fn text(text: &str, text_type: TextType) -> Token {
        Token::Text(TextChunk::new(text, text_type))
    }

    #[test]
    fn tags_and_text() {
        assert_eq!(
            tokenize(r#"<form action=""><INPUT Name="city"/>Hi</form>"#, true).unwrap(),
            vec![
                tag("form", &[("action", "")], false),
                tag("input", &[("name", "city")], true),
                text("Hi", TextType::Data),
                end("form"),
            ]
        );
    }

    #[test]
    fn coalesced_text() {
        assert_eq!(
            tokenize("<span>Fish &amp; Chips\n&lt;3</span>", true).unwrap(),
            vec![
                tag("span", &[], false),
                text("Fish & Chips\n<3", TextType::Data),
                end("span"),
            ]
        );
    }

    #[test]
    fn rcdata_content() {
        assert_eq!(
            tokenize("<textarea name=\"t\"><b>&amp;</b></textarea><i></i>", true).unwrap(),
            vec![
                tag("textarea", &[("name", "t")], false),
                text("<b>&</b>", TextType::RCData),
                end("textarea"),
                tag("i", &[], false),
                end("i"),
            ]
        );
    }

    #[test]
    fn script_content() {
        assert_eq!(
            tokenize("<script>if (a<b) { x = '<span>'; }</script>", true).unwrap(),
            vec![
                tag("script", &[], false),
                text("if (a<b) { x = '<span>'; }", TextType::ScriptData),
                end("script"),
            ]
        );
    }

    #[test]
    fn comments_and_doctype() {
        assert_eq!(
            tokenize("<!DOCTYPE html><!-- form -->", true).unwrap(),
            vec![
                Token::Doctype(Doctype::new(Some("html".into()), None, None)),
                Token::Comment(Comment::new(" form ")),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokenize("", true).unwrap(), vec![]);
    }

    #[test]
    fn parse_errors() {
        let err = tokenize("<p>\n<input name=\"a\" name=\"b\">", true).unwrap_err();

        assert_eq!(err.line(), 2);
        assert!(!err.message().is_empty());

        assert!(tokenize("<input name=\"city\"", true).is_err());
    }

    #[test]
    fn parse_errors_are_recovered_in_lenient_mode() {
        assert_eq!(
            tokenize("<input name=\"a\" name=\"b\">", false).unwrap(),
            vec![tag("input", &[("name", "a")], false)]
        );
    }

    #[test]
    fn lenient_mode_recovers_text() {
        assert_eq!(
            tokenize("<p>5 < 6 &copy 2024</p>", false).unwrap(),
            vec![
                tag("p", &[], false),
                text("5 < 6 \u{a9} 2024", TextType::Data),
                end("p"),
            ]
        );

        assert!(tokenize("<p>5 < 6</p>", true).is_err());
    }

    #[test]
    fn end_of_input_inside_of_markup() {
        for html in [
            "<form><input name=\"city\"",
            "<form><input name=\"city\" value=\"Bo",
            "<p>Hi</p><!-- unterminated",
            "<!DOCTYPE html",
        ] {
            let err = tokenize(html, false).unwrap_err();

            assert_eq!(err.message(), "Unexpected EOF", "{html}");
        }

        assert_eq!(
            tokenize("<p>a < b", false).unwrap(),
            vec![tag("p", &[], false), text("a < b", TextType::Data)]
        );
    }

    #[test]
    fn self_closing_raw_text_element() {
        assert_eq!(
            tokenize("<textarea name=\"t\"/><b>x</b>", false).unwrap(),
            vec![
                tag("textarea", &[("name", "t")], true),
                tag("b", &[], false),
                text("x", TextType::Data),
                end("b"),
            ]
        );
    }
}
