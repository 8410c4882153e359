use serde::Serialize;

use crate::{import::Import, message::Message, r#enum::Enum, service::Service};

/// The naming scope of a schema file
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Scope {
    /// The proto package, e.g "pb.foo.bar". Empty when the file declares no package.
    pub package: String,

    /// The `ruby_package` file option, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruby_package: Option<String>,
}

impl Scope {
    pub fn new<S: Into<String>>(package: S) -> Self {
        Self {
            package: package.into(),
            ruby_package: None,
        }
    }

    /// The package prefix used to build fully qualified names: "" or ".pb.foo"
    pub fn prefix(&self) -> String {
        match self.package.as_str() {
            "" => String::new(),
            package => format!(".{}", package),
        }
    }

    /// Build the fully qualified name of a type path declared in this scope
    pub fn qualify<S: AsRef<str>>(&self, path: &[S]) -> String {
        let mut name = self.prefix();
        for segment in path {
            name.push('.');
            name.push_str(segment.as_ref());
        }
        name
    }
}

/// File is a compiled schema file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct File {
    /// The input path, relative to the proto root, e.g "pb/foo/bar.proto"
    pub path: String,

    pub scope: Scope,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,

    /// Top level messages
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,

    /// Top level enums
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

impl File {
    pub fn new<S: Into<String>>(path: S, scope: Scope) -> Self {
        Self {
            path: path.into(),
            scope,
            ..Default::default()
        }
    }

    /// All messages of the file, nested ones flattened depth-first in declaration order
    pub fn all_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().flat_map(|msg| msg.messages_iter())
    }

    /// Top level enums followed by the enums nested in each message of `all_messages`
    pub fn all_enums(&self) -> impl Iterator<Item = &Enum> {
        self.enums
            .iter()
            .chain(self.all_messages().flat_map(|msg| msg.enums.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::{File, Scope};
    use crate::{message::Message, r#enum::Enum};

    fn path(p: &str) -> Vec<String> {
        p.split('.').map(String::from).collect()
    }

    #[test]
    fn it_should_qualify_names() {
        assert_eq!(Scope::new("pb.foo").qualify(&["Outer", "Inner"]), ".pb.foo.Outer.Inner");
        assert_eq!(Scope::default().qualify(&["Item"]), ".Item");
    }

    #[test]
    fn it_should_flatten_enums_after_top_level_ones() {
        let mut file = File::new("test.proto", Scope::new("pb"));
        let mut outer = Message::new(path("Outer"));
        let mut inner = Message::new(path("Outer.Inner"));
        inner.add_nested_enum(Enum::new(path("Outer.Inner.Deep")));
        outer.add_nested_enum(Enum::new(path("Outer.Kind")));
        outer.add_nested_message(inner);
        file.messages.push(outer);
        file.enums.push(Enum::new(path("Status")));

        let names = file
            .all_enums()
            .map(|e| e.path.join("."))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Status", "Outer.Kind", "Outer.Inner.Deep"]);
    }
}
