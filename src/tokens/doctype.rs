use super::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Doctype {
    name: Option<String>,
    public_id: Option<String>,
    system_id: Option<String>,
}

impl Doctype {
    pub fn new(name: Option<String>, public_id: Option<String>, system_id: Option<String>) -> Self {
        Doctype {
            name,
            public_id,
            system_id,
        }
    }
}

impl Serialize for Doctype {
    fn to_html(&self, output_handler: &mut dyn FnMut(&str)) {
        output_handler("<!DOCTYPE");

        if let Some(name) = &self.name {
            output_handler(" ");
            output_handler(name);
        }

        if let Some(public_id) = &self.public_id {
            output_handler(" PUBLIC \"");
            output_handler(public_id);
            output_handler("\"");
        }

        if let Some(system_id) = &self.system_id {
            if self.public_id.is_none() {
                output_handler(" SYSTEM");
            }

            output_handler(" \"");
            output_handler(system_id);
            output_handler("\"");
        }

        output_handler(">");
    }
}
