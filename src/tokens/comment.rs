use super::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
}

impl Comment {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Comment { text: text.into() }
    }
}

impl Serialize for Comment {
    #[inline]
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        output_handler("<!--");
        output_handler(&self.text);
        output_handler("-->");
    }
}
