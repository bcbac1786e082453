use crate::errors::ParseError;
use crate::html::TextType;
use crate::tokens::{Attribute, Comment, Doctype, EndTag, Tag, TextChunk, Token};
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{self as h5, TagKind, TokenSink, TokenSinkResult};
use std::borrow::Cow;
use std::cell::{Cell, RefCell};

// Reported for the end of input inside of markup, if exact errors are enabled.
const UNEXPECTED_EOF: &str = "Unexpected EOF";

// Converts tokens emitted by the html5ever tokenizer into our own tokens
// and records them into the provided vector.
pub(super) struct TokenCollector<'t> {
    tokens: RefCell<&'t mut Vec<Token>>,
    first_error: RefCell<&'t mut Option<ParseError>>,
    text_type: Cell<TextType>,
    strict: bool,
}

impl<'t> TokenCollector<'t> {
    pub fn new(
        tokens: &'t mut Vec<Token>,
        first_error: &'t mut Option<ParseError>,
        strict: bool,
    ) -> Self {
        TokenCollector {
            tokens: RefCell::new(tokens),
            first_error: RefCell::new(first_error),
            text_type: Cell::new(TextType::Data),
            strict,
        }
    }

    #[inline]
    fn push(&self, token: Token) {
        self.tokens.borrow_mut().push(token);
    }

    // NOTE: html5ever splits character data on character references
    // and nulls. Adjacent runs are merged, so the whole text content
    // between two tags ends up in a single token.
    fn push_text(&self, text: &str) {
        if text.is_empty() {
            return;
        }

        let tokens = &mut **self.tokens.borrow_mut();

        if let Some(Token::Text(last)) = tokens.last_mut() {
            last.push_str(text);
        } else {
            tokens.push(Token::Text(TextChunk::new(text, self.text_type.get())));
        }
    }

    fn push_start_tag(&self, tag: h5::Tag) -> TokenSinkResult<()> {
        let name = String::from(&*tag.name);

        // NOTE: a self-closing tag has no content, so the markup after it
        // is never taken for the raw text of the element.
        let text_type = if tag.self_closing {
            TextType::Data
        } else {
            TextType::for_start_tag(&name)
        };

        let attributes = tag
            .attrs
            .iter()
            .map(|attr| Attribute::new(&*attr.name.local, &*attr.value))
            .collect();

        self.push(Token::StartTag(Tag::new(name, attributes, tag.self_closing)));
        self.text_type.set(text_type);

        match text_type {
            TextType::RCData => TokenSinkResult::RawData(RawKind::Rcdata),
            TextType::RawText => TokenSinkResult::RawData(RawKind::Rawtext),
            TextType::ScriptData => TokenSinkResult::RawData(RawKind::ScriptData),
            TextType::PlainText => TokenSinkResult::Plaintext,
            TextType::Data => TokenSinkResult::Continue,
        }
    }

    // NOTE: the tokenizer drops a tag cut off by the end of input and closes
    // cut off comments and doctypes itself. Either way the output would not
    // reproduce the input, so this diagnostic is fatal in both modes.
    #[inline]
    fn is_fatal(&self, message: &str) -> bool {
        self.strict || message == UNEXPECTED_EOF
    }

    fn record_error(&self, message: Cow<'static, str>, line_number: u64) {
        let first_error = &mut **self.first_error.borrow_mut();

        if first_error.is_none() && self.is_fatal(&message) {
            trace!(@parse_error message, line_number);

            *first_error = Some(ParseError::new(message, line_number));
        }
    }
}

impl TokenSink for TokenCollector<'_> {
    type Handle = ();

    fn process_token(&self, token: h5::Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            h5::Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.push_start_tag(tag),
                TagKind::EndTag => {
                    self.push(Token::EndTag(EndTag::new(&*tag.name)));
                    self.text_type.set(TextType::Data);
                }
            },
            h5::Token::CharacterTokens(ref s) => self.push_text(s),
            h5::Token::NullCharacterToken => self.push_text("\0"),
            h5::Token::CommentToken(ref s) => self.push(Token::Comment(Comment::new(&**s))),
            h5::Token::DoctypeToken(ref doctype) => self.push(Token::Doctype(Doctype::new(
                doctype.name.as_ref().map(ToString::to_string),
                doctype.public_id.as_ref().map(ToString::to_string),
                doctype.system_id.as_ref().map(ToString::to_string),
            ))),
            h5::Token::ParseError(message) => self.record_error(message, line_number),
            h5::Token::EOFToken => (),
        }

        TokenSinkResult::Continue
    }
}
