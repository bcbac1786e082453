//! Re-injects previously submitted values and validation messages into HTML forms.
//!
//! Given the markup of a form and the values the user submitted, `formfill`
//! rewrites only the form controls and error placeholders that match the
//! submitted field names and leaves the rest of the markup intact.
//!
//! # Example
//! ```
//! use std::collections::HashMap;
//!
//! let html = r#"<form action="">
//!     <span class="error_message" id="city_error"></span>
//!     <input type="text" name="city" />
//!     <span class="error_message" id="state_error"></span>
//!     <input type="text" name="state" />
//! </form>"#;
//!
//! let values = HashMap::from([("city", "Boom Town"), ("state", "Pennsylvania")]);
//! let errors = HashMap::from([("city", "That is an invalid city.")]);
//!
//! let filled = formfill::fill(html, &values, &errors).unwrap();
//!
//! assert_eq!(
//!     filled,
//!     r#"<form action="">
//!     <span class="error_message" id="city_error">That is an invalid city.</span>
//!     <input type="text" name="city" value="Boom Town"/>
//!     <span class="error_message" id="state_error"></span>
//!     <input type="text" name="state" value="Pennsylvania"/>
//! </form>"#
//! );
//! ```

#[macro_use]
mod debug_trace;

mod errors;
mod filler;
mod html;
mod tokenizer;
mod tokens;

pub use self::errors::{EncodingError, FillError, ParseError};
pub use self::filler::{AsciiCompatibleEncoding, FormFiller, PlaceholderLookup, Settings};

/// Fills `values` into their controls and then `errors` into the error
/// placeholders of their fields, using the default [`Settings`].
///
/// See [`FormFiller::fill`].
pub fn fill<I, K, V, J, L, M>(html: &str, values: I, errors: J) -> Result<String, FillError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    J: IntoIterator<Item = (L, M)>,
    L: AsRef<str>,
    M: AsRef<str>,
{
    FormFiller::default().fill(html, values, errors)
}

/// See [`FormFiller::fill_values`].
pub fn fill_values<I, K, V>(html: &str, values: I) -> Result<String, FillError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    FormFiller::default().fill_values(html, values)
}

/// See [`FormFiller::fill_errors`].
pub fn fill_errors<I, K, V>(html: &str, errors: I) -> Result<String, FillError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    FormFiller::default().fill_errors(html, errors)
}

/// See [`FormFiller::fill_field`].
pub fn fill_field(html: &str, field_name: &str, value: &str) -> Result<String, FillError> {
    FormFiller::default().fill_field(html, field_name, value)
}
