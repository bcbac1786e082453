use crate::errors::EncodingError;
use bitflags::bitflags;
use encoding_rs::{Encoding, UTF_8};

bitflags! {
    /// Attributes an error placeholder is looked up by.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlaceholderLookup: u8 {
        const ID = 1;
        const NAME = 1 << 1;
    }
}

impl Default for PlaceholderLookup {
    #[inline]
    fn default() -> Self {
        PlaceholderLookup::ID
    }
}

/// A character encoding that is known to be ASCII-compatible.
///
/// Markup is only ever scanned for ASCII delimiters, so encodings like
/// UTF-16 are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiCompatibleEncoding(&'static Encoding);

impl AsciiCompatibleEncoding {
    /// Returns `None` if the encoding is not ASCII-compatible.
    #[inline]
    pub fn new(encoding: &'static Encoding) -> Option<Self> {
        encoding.is_ascii_compatible().then_some(Self(encoding))
    }

    #[inline]
    pub fn utf_8() -> Self {
        Self(UTF_8)
    }
}

impl Default for AsciiCompatibleEncoding {
    #[inline]
    fn default() -> Self {
        Self::utf_8()
    }
}

impl From<AsciiCompatibleEncoding> for &'static Encoding {
    #[inline]
    fn from(encoding: AsciiCompatibleEncoding) -> Self {
        encoding.0
    }
}

impl TryFrom<&'static Encoding> for AsciiCompatibleEncoding {
    type Error = EncodingError;

    #[inline]
    fn try_from(encoding: &'static Encoding) -> Result<Self, EncodingError> {
        Self::new(encoding).ok_or(EncodingError::NonAsciiCompatibleEncoding)
    }
}

/// Specifies how [`FormFiller`] locates the elements it fills.
///
/// [`FormFiller`]: crate::FormFiller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Attributes of a placeholder element compared to the error key.
    ///
    /// ### Default
    ///
    /// `PlaceholderLookup::ID`
    pub placeholder_lookup: PlaceholderLookup,

    /// Names of the elements that display error messages.
    ///
    /// ### Default
    ///
    /// `["span"]`
    pub placeholder_tags: Vec<String>,

    /// Suffix appended to a field name to get the key of its error placeholder.
    ///
    /// ### Default
    ///
    /// `"_error"`
    pub error_suffix: String,

    /// If `true`, any diagnostic reported by the tokenizer fails the operation
    /// with a parse error, e.g. a duplicate attribute or a bare `<` in text.
    ///
    /// Otherwise such markup is recovered from the way browsers do it: a
    /// duplicate attribute is dropped, and a bare `<` or an unterminated
    /// character reference is treated as text. The end of input inside of a
    /// tag, comment or doctype is a parse error in both modes, since the
    /// tokenizer would drop the unfinished tag.
    ///
    /// ### Default
    ///
    /// `false`
    pub strict: bool,

    /// Character encoding of the byte input and output of
    /// [`FormFiller::fill_bytes`].
    ///
    /// ### Default
    ///
    /// UTF-8
    ///
    /// [`FormFiller::fill_bytes`]: crate::FormFiller::fill_bytes
    pub encoding: AsciiCompatibleEncoding,
}

impl Settings {
    #[inline]
    pub(crate) fn is_placeholder_tag(&self, tag_name: &str) -> bool {
        self.placeholder_tags.iter().any(|t| t == tag_name)
    }

    #[inline]
    pub(crate) fn error_key(&self, field_name: &str) -> String {
        format!("{field_name}{}", self.error_suffix)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            placeholder_lookup: PlaceholderLookup::default(),
            placeholder_tags: vec!["span".into()],
            error_suffix: "_error".into(),
            strict: false,
            encoding: AsciiCompatibleEncoding::default(),
        }
    }
}
