mod attributes;
mod comment;
mod doctype;
mod end_tag;
mod tag;
mod text_chunk;

pub use self::attributes::{Attribute, Attributes};
pub use self::comment::Comment;
pub use self::doctype::Doctype;
pub use self::end_tag::EndTag;
pub use self::tag::Tag;
pub use self::text_chunk::TextChunk;

pub(crate) trait Serialize {
    fn to_html(&self, output_handler: &mut dyn FnMut(&str));

    #[cfg(test)]
    fn to_html_string(&self) -> String {
        let mut html = String::new();

        self.to_html(&mut |c| html.push_str(c));

        html
    }
}

/// One lexical unit of the markup.
///
/// Start tags carry the self-closing flag themselves, so `<input/>` and
/// `<input>` are both represented by [`Token::StartTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag(Tag),
    EndTag(EndTag),
    Text(TextChunk),
    Comment(Comment),
    Doctype(Doctype),
}

impl Serialize for Token {
    #[inline]
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        match self {
            Token::StartTag(t) => t.to_html(output_handler),
            Token::EndTag(t) => t.to_html(output_handler),
            Token::Text(t) => t.to_html(output_handler),
            Token::Comment(t) => t.to_html(output_handler),
            Token::Doctype(t) => t.to_html(output_handler),
        }
    }
}
