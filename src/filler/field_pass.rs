use super::settings::{PlaceholderLookup, Settings};
use crate::html::TextType;
use crate::tokens::{EndTag, Serialize, Tag, TextChunk, Token};

/// A single forward scan over the tokens of a document that fills all
/// controls and placeholders matching one field name.
///
/// The state flags live only as long as the pass, every pass starts idle.
pub(super) struct FieldPass<'s> {
    field_name: &'s str,
    value: &'s str,
    settings: &'s Settings,
    awaiting_text_fill: bool,
    inside_matched_select: bool,
}

impl<'s> FieldPass<'s> {
    pub fn new(field_name: &'s str, value: &'s str, settings: &'s Settings) -> Self {
        FieldPass {
            field_name,
            value,
            settings,
            awaiting_text_fill: false,
            inside_matched_select: false,
        }
    }

    /// Writes every token back to the output exactly once and in the same
    /// order, after applying the mutations to the matched ones.
    pub fn run(mut self, tokens: Vec<Token>, output_handler: &mut dyn FnMut(&str)) {
        trace!(@pass self.field_name, self.value);

        for mut token in tokens {
            match &mut token {
                Token::StartTag(tag) => self.handle_start_tag(tag),
                Token::EndTag(end_tag) => self.handle_end_tag(end_tag, output_handler),
                Token::Text(text) => self.handle_text(text),
                Token::Comment(_) | Token::Doctype(_) => (),
            }

            token.to_html(output_handler);
        }
    }

    fn handle_start_tag(&mut self, tag: &mut Tag) {
        match tag.name() {
            "input" => {
                if tag.has_attribute("name", self.field_name) {
                    self.fill_input(tag);
                }
            }
            "option" => {
                if self.inside_matched_select {
                    self.fill_option(tag);
                }
            }
            // NOTE: a self-closing container has no end tag that would
            // reset the state, so it never opens one.
            _ if tag.self_closing() => (),
            "textarea" => {
                if tag.has_attribute("name", self.field_name) {
                    trace!(@fill self.field_name, "textarea");
                    self.awaiting_text_fill = true;
                }
            }
            "select" => {
                if tag.has_attribute("name", self.field_name) {
                    trace!(@fill self.field_name, "select");
                    self.inside_matched_select = true;
                }
            }
            name if self.settings.is_placeholder_tag(name) => {
                if self.is_matched_placeholder(tag) {
                    trace!(@fill self.field_name, name);
                    self.awaiting_text_fill = true;
                }
            }
            _ => (),
        }
    }

    fn handle_end_tag(&mut self, end_tag: &EndTag, output_handler: &mut dyn FnMut(&str)) {
        match end_tag.name() {
            "select" => self.inside_matched_select = false,
            name if self.awaiting_text_fill && self.is_fillable_container(name) => {
                // NOTE: the element turned out to be empty, so there was
                // no text token to replace. Insert the value before the end tag.
                let text_type = TextType::for_start_tag(name);

                TextChunk::new(self.value, text_type).to_html(output_handler);
                self.awaiting_text_fill = false;
            }
            _ => (),
        }
    }

    fn handle_text(&mut self, text: &mut TextChunk) {
        if self.awaiting_text_fill {
            text.set_text(self.value);
            self.awaiting_text_fill = false;
        }
    }

    // NOTE: every option of the matched select is visited, so a previously
    // selected option loses the mark even if it comes after the target one.
    fn fill_option(&self, option: &mut Tag) {
        option.remove_attribute("selected");

        if option.has_attribute("value", self.value) {
            trace!(@fill self.field_name, "option selected");
            option.set_attribute("selected", "selected");
        }
    }

    fn fill_input(&self, input: &mut Tag) {
        match input.get_attribute("type") {
            Some(input_type @ ("checkbox" | "radio")) => {
                if input.has_attribute("value", self.value) {
                    trace!(@fill self.field_name, "input checked");
                    input.set_attribute("checked", "checked");
                } else if input_type == "radio" {
                    // NOTE: only one radio button of a group can be checked.
                    // Checkboxes are independent and stay as they are.
                    input.remove_attribute("checked");
                }
            }
            _ => {
                trace!(@fill self.field_name, "input value");
                input.set_attribute("value", self.value);
            }
        }
    }

    fn is_matched_placeholder(&self, tag: &Tag) -> bool {
        let lookup = self.settings.placeholder_lookup;

        (lookup.contains(PlaceholderLookup::ID) && tag.has_attribute("id", self.field_name))
            || (lookup.contains(PlaceholderLookup::NAME)
                && tag.has_attribute("name", self.field_name))
    }

    #[inline]
    fn is_fillable_container(&self, tag_name: &str) -> bool {
        tag_name == "textarea" || self.settings.is_placeholder_tag(tag_name)
    }
}
