use crate::{file::File, message::Message, r#enum::Enum, service::Service};

/// The elements of a file in the order they are rendered
#[derive(Debug)]
pub struct FileWalk<'a> {
    pub file: &'a File,

    /// Every message, nested ones flattened depth-first in declaration order
    pub messages: Vec<&'a Message>,

    /// Top level enums followed by nested ones
    pub enums: Vec<&'a Enum>,

    /// Services, empty when stubs are disabled
    pub services: Vec<&'a Service>,
}

impl<'a> FileWalk<'a> {
    /// Walk the file. Services are only collected when `with_services` is set.
    pub fn new(file: &'a File, with_services: bool) -> Self {
        Self {
            file,
            messages: file.all_messages().collect(),
            enums: file.all_enums().collect(),
            services: match with_services {
                true => file.services.iter().collect(),
                false => Vec::new(),
            },
        }
    }

    /// Returns true when a service stub file should be generated
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }
}
