use std::collections::HashMap;

use crate::{
    field::{FieldKind, TypeRef, ValueType},
    file::{File, Scope},
    message::Message,
};

/// A named type known to the symbol table
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Message(TypeRef),
    Enum(TypeRef),

    /// The synthesized entry message backing a map field: (key type, value type)
    MapEntry(ValueType, ValueType),
}

impl Symbol {
    /// The value type used when a field references this symbol
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Symbol::Message(r) => Some(ValueType::Message(r.clone())),
            Symbol::Enum(r) => Some(ValueType::Enum(r.clone())),
            Symbol::MapEntry(..) => None,
        }
    }
}

/// SymbolTable maps fully qualified proto names (e.g ".pb.foo.Request") to the types they designate
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a symbol under its fully qualified name
    pub fn define(&mut self, full_name: String, symbol: Symbol) {
        self.symbols.insert(full_name, symbol);
    }

    /// Get the symbol with the given fully qualified name
    pub fn get(&self, full_name: &str) -> Option<&Symbol> {
        self.symbols.get(full_name)
    }

    /// Register every message and enum declared in the file
    pub fn add_file(&mut self, file: &File) {
        for msg in file.all_messages() {
            self.define(
                file.scope.qualify(&msg.path),
                Symbol::Message(TypeRef::new(file.scope.clone(), msg.path.clone())),
            );
        }

        for e in file.all_enums() {
            self.define(
                file.scope.qualify(&e.path),
                Symbol::Enum(TypeRef::new(file.scope.clone(), e.path.clone())),
            );
        }
    }

    /// Resolve a type name referenced from within `scope` (a fully qualified message or package name)
    /// following protobuf [scoping rules]: the innermost scope is searched first, then each parent.
    /// Names starting with a `.` are fully qualified.
    ///
    /// [scoping rules] https://developers.google.com/protocol-buffers/docs/proto#packages_and_name_resolution
    pub fn resolve(&self, scope: &str, name: &str) -> Option<&Symbol> {
        if name.starts_with('.') {
            return self.get(name);
        }

        let mut segments = scope
            .split('.')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        loop {
            let candidate = segments
                .iter()
                .copied()
                .chain(std::iter::once(name))
                .fold(String::new(), |mut acc, segment| {
                    acc.push('.');
                    acc.push_str(segment);
                    acc
                });

            if let Some(symbol) = self.get(&candidate) {
                return Some(symbol);
            }

            if segments.pop().is_none() {
                return None;
            }
        }
    }

    /// Replace every unresolved type name of the file with the message or enum it designates.
    /// Names that can't be found are left unresolved.
    pub fn resolve_file(&self, file: &mut File) {
        let prefix = file.scope.prefix();

        for msg in file.messages.iter_mut() {
            self.resolve_message(&file.scope, msg);
        }

        for service in file.services.iter_mut() {
            for rpc in service.methods.iter_mut() {
                self.resolve_value(&prefix, &mut rpc.request_type);
                self.resolve_value(&prefix, &mut rpc.response_type);
            }
        }
    }

    fn resolve_message(&self, file_scope: &Scope, msg: &mut Message) {
        let scope = file_scope.qualify(&msg.path);

        for field in msg.fields.iter_mut() {
            match &mut field.kind {
                FieldKind::Singular(v) | FieldKind::Repeated(v) => self.resolve_value(&scope, v),
                FieldKind::Map(k, v) => {
                    self.resolve_value(&scope, k);
                    self.resolve_value(&scope, v);
                }
            }
        }

        for nested in msg.nested.iter_mut() {
            self.resolve_message(file_scope, nested);
        }
    }

    fn resolve_value(&self, scope: &str, value: &mut ValueType) {
        if let ValueType::Unresolved(name) = value {
            if let Some(resolved) = self.resolve(scope, name).and_then(Symbol::value_type) {
                *value = resolved;
            }
        }
    }
}

/// Resolve the type references of a set of files against the types they declare together
pub fn resolve_files(files: &mut [File]) {
    let mut table = SymbolTable::new();
    for file in files.iter() {
        table.add_file(file);
    }

    for file in files.iter_mut() {
        table.resolve_file(file);
    }
}
