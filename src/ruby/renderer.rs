use tracing::{debug, warn};

use super::{
    fragments::{self, StubMethod},
    naming,
    printer::Printer,
    Toolkit,
};
use crate::{
    field::{FieldKind, ValueType},
    file::Scope,
    message::Message,
    r#enum::Enum,
    walker::FileWalk,
};

/// Renderer turns a walked schema file into signature files
pub struct Renderer<'a> {
    /// Type mapping and identifier checks shared by both passes
    toolkit: &'a Toolkit,
}

impl<'a> Renderer<'a> {
    /// Create a new renderer
    pub fn new(toolkit: &'a Toolkit) -> Self {
        Self { toolkit }
    }

    /// Render the message and enum declarations of a file
    pub fn render_types(&self, walk: &FileWalk) -> String {
        let scope = &walk.file.scope;
        let mut p = Printer::new();

        p.append(&fragments::file_header(&walk.file.path));
        p.append(&fragments::module_declarations(&naming::modules(scope)));

        for msg in walk.messages.iter() {
            p.add_blank_line();
            self.render_message(&mut p, scope, msg);
        }

        for e in walk.enums.iter() {
            p.add_blank_line();
            self.render_enum(&mut p, scope, e);
        }

        p.into_string()
    }

    /// Render the rpc stubs of a file, if it has any service to render
    pub fn render_services(&self, walk: &FileWalk) -> Option<String> {
        if !walk.has_services() {
            return None;
        }

        let scope = &walk.file.scope;
        let mapper = &self.toolkit.types;
        let mut p = Printer::new();
        p.append(&fragments::file_header(&walk.file.path));

        for service in walk.services.iter() {
            debug!(service = %service.name, methods = service.methods.len(), "rendering service");

            let methods = service
                .methods
                .iter()
                .map(|rpc| StubMethod {
                    name: naming::method_name(&rpc.name),
                    param_type: mapper.method_param_type(rpc),
                    return_type: mapper.method_return_type(rpc),
                })
                .collect::<Vec<_>>();

            p.add_blank_line();
            p.append(&fragments::service_block(
                &naming::service_name(scope, &service.name),
                &methods,
            ));
        }

        Some(p.into_string())
    }

    fn render_message(&self, p: &mut Printer, scope: &Scope, msg: &Message) {
        let Toolkit { types, identifiers } = self.toolkit;
        let name = naming::type_name(scope, &msg.path);

        p.append(&fragments::class_header(&name));
        p.add_blank_line();

        let has_invalid_fields = identifiers.any_invalid(&msg.fields);
        if has_invalid_fields {
            warn!(class = %name, "field names are not valid identifiers");
        }

        let args = msg
            .fields
            .iter()
            .map(|field| (field.name.as_str(), types.constructor_field_type(field)))
            .collect::<Vec<_>>();
        p.append(&fragments::bulk_initializer(has_invalid_fields));
        p.append(&fragments::typed_initializer(&args));

        for field in msg.fields.iter() {
            if let Some(unresolved) = unresolved_type(&field.kind) {
                warn!(class = %name, field = %field.name, type_name = %unresolved, "unresolved type, falling back to untyped");
            }

            p.add_blank_line();
            p.append(&fragments::field_accessors(
                &field.name,
                &types.getter_type(field),
                &types.setter_type(field),
            ));
        }

        let mut oneofs = msg.real_oneofs().peekable();
        if oneofs.peek().is_some() {
            p.add_blank_line();
        }
        for oneof in oneofs {
            p.append(&fragments::oneof_accessor(&oneof.name));
        }

        p.add_blank_line();
        p.append(&fragments::class_footer());
    }

    fn render_enum(&self, p: &mut Printer, scope: &Scope, e: &Enum) {
        let name = naming::type_name(scope, &e.path);
        p.append(&fragments::enum_block(&name, &e.values));
    }
}

/// Returns the first unresolved type name of a field kind, if any
fn unresolved_type(kind: &FieldKind) -> Option<&str> {
    let values = match kind {
        FieldKind::Singular(v) | FieldKind::Repeated(v) => vec![v],
        FieldKind::Map(k, v) => vec![k, v],
    };

    values.into_iter().find_map(|v| match v {
        ValueType::Unresolved(name) => Some(name.as_str()),
        _ => None,
    })
}
