use memchr::{memchr2, memchr3};

// NOTE: all needles are ASCII, so every match position
// is guaranteed to be a char boundary of the input.
macro_rules! impl_replace_byte {
    ($input:expr, $output_handler:expr, $find:expr, $get_replacement:expr) => {{
        let mut tail: &str = $input;

        while let Some(pos) = $find(tail.as_bytes()) {
            if pos > 0 {
                $output_handler(&tail[..pos]);
            }

            $output_handler($get_replacement(tail.as_bytes()[pos]));

            tail = &tail[pos + 1..];
        }

        if !tail.is_empty() {
            $output_handler(tail);
        }
    }};
}

/// HTML-escapes text content:
///     - `<` will be replaced with `&lt;`
///     - `>` will be replaced with `&gt;`
///     - `&` will be replaced with `&amp;`
pub(crate) fn escape_text(text: &str, output_handler: &mut dyn FnMut(&str)) {
    impl_replace_byte!(
        text,
        output_handler,
        |tail: &[u8]| memchr3(b'<', b'>', b'&', tail),
        |matched: u8| match matched {
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => "&amp;",
        }
    );
}

/// Escapes a value that is serialized inside of double quotes.
pub(crate) fn escape_attribute_value(value: &str, output_handler: &mut dyn FnMut(&str)) {
    impl_replace_byte!(
        value,
        output_handler,
        |tail: &[u8]| memchr2(b'&', b'"', tail),
        |matched: u8| match matched {
            b'"' => "&quot;",
            _ => "&amp;",
        }
    );
}
