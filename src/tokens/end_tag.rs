use super::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTag {
    name: String,
}

impl EndTag {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        EndTag { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Serialize for EndTag {
    #[inline]
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        output_handler("</");
        output_handler(&self.name);
        output_handler(">");
    }
}
