mod field_pass;
mod settings;

use self::field_pass::FieldPass;
use crate::errors::{EncodingError, FillError};
use crate::tokenizer::tokenize;
use encoding_rs::Encoding;

pub use self::settings::{AsciiCompatibleEncoding, PlaceholderLookup, Settings};

/// Fills form controls and error placeholders of HTML documents.
///
/// The filler holds no state between calls, so a single instance can be shared
/// between threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct FormFiller {
    settings: Settings,
}

impl FormFiller {
    #[inline]
    pub fn new(settings: Settings) -> Self {
        FormFiller { settings }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fills every element matching `field_name` with `value`:
    ///
    /// - text-like `<input>`s get their `value` attribute set;
    /// - checkboxes and radio buttons with the matching `value` get checked,
    ///   other radio buttons of the group get unchecked;
    /// - the `<option>` with the matching `value` of a `<select>` gets selected,
    ///   all other options of it get unselected;
    /// - the text content of `<textarea>`s and error placeholders is replaced.
    ///
    /// Returns the document unchanged if nothing matches.
    pub fn fill_field(&self, html: &str, field_name: &str, value: &str) -> Result<String, FillError> {
        let tokens = tokenize(html, self.settings.strict)?;
        let mut output = String::with_capacity(html.len() + value.len());

        FieldPass::new(field_name, value, &self.settings)
            .run(tokens, &mut |chunk| output.push_str(chunk));

        Ok(output)
    }

    /// Fills the value of each field in turn. The first error aborts the
    /// whole operation.
    pub fn fill_values<I, K, V>(&self, html: &str, values: I) -> Result<String, FillError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        values
            .into_iter()
            .try_fold(html.to_owned(), |html, (field_name, value)| {
                self.fill_field(&html, field_name.as_ref(), value.as_ref())
            })
    }

    /// Fills the error placeholder of each field in turn. A placeholder is
    /// found by the field name followed by the configured error suffix.
    pub fn fill_errors<I, K, V>(&self, html: &str, errors: I) -> Result<String, FillError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        errors
            .into_iter()
            .try_fold(html.to_owned(), |html, (field_name, message)| {
                let key = self.settings.error_key(field_name.as_ref());

                self.fill_field(&html, &key, message.as_ref())
            })
    }

    /// Fills values first and then errors.
    pub fn fill<I, K, V, J, L, M>(&self, html: &str, values: I, errors: J) -> Result<String, FillError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        J: IntoIterator<Item = (L, M)>,
        L: AsRef<str>,
        M: AsRef<str>,
    {
        let html = self.fill_values(html, values)?;

        self.fill_errors(&html, errors)
    }

    /// Same as [`fill`], but for a document in the configured encoding.
    ///
    /// The output is produced in the same encoding. Characters of the values
    /// that can't be represented in it are written as numeric character
    /// references.
    ///
    /// [`fill`]: FormFiller::fill
    pub fn fill_bytes<I, K, V, J, L, M>(
        &self,
        html: &[u8],
        values: I,
        errors: J,
    ) -> Result<Vec<u8>, FillError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
        J: IntoIterator<Item = (L, M)>,
        L: AsRef<str>,
        M: AsRef<str>,
    {
        let encoding: &'static Encoding = self.settings.encoding.into();

        let html = encoding
            .decode_without_bom_handling_and_without_replacement(html)
            .ok_or(EncodingError::MalformedInput(encoding.name()))?;

        let filled = self.fill(&html, values, errors)?;
        let (bytes, _, _) = encoding.encode(&filled);

        Ok(bytes.into_owned())
    }
}
