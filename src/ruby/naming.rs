use convert_case::{Case, Casing};
use lazy_static::lazy_static;
use regex::Regex;

use crate::file::Scope;

/// Returns the Ruby module path of a scope: the `ruby_package` option when set,
/// otherwise the proto package with each segment converted to PascalCase.
/// e.g "pb.foo_bar" => "Pb::FooBar"
pub fn package(scope: &Scope) -> String {
    match scope.ruby_package.as_deref() {
        Some(ruby_package) if !ruby_package.is_empty() => ruby_package.to_string(),
        _ => scope
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_case(Case::Pascal))
            .collect::<Vec<_>>()
            .join("::"),
    }
}

/// Returns every module that must be declared before the types of the scope,
/// e.g "Pb::Foo" => ["Pb", "Pb::Foo"]
pub fn modules(scope: &Scope) -> Vec<String> {
    let package = package(scope);
    let mut modules: Vec<String> = Vec::new();

    for segment in package.split("::").filter(|s| !s.is_empty()) {
        let module = match modules.last() {
            Some(parent) => format!("{}::{}", parent, segment),
            None => segment.to_string(),
        };
        modules.push(module);
    }

    modules
}

/// Returns the Ruby constant path of a message or enum, e.g "Pb::Foo::Outer::Inner"
pub fn type_name<S: AsRef<str>>(scope: &Scope, path: &[S]) -> String {
    let package = package(scope);
    let mut segments = Vec::with_capacity(path.len() + 1);

    if !package.is_empty() {
        segments.push(package);
    }

    segments.extend(path.iter().map(|segment| upper_first(segment.as_ref())));
    segments.join("::")
}

/// Returns the service module, e.g "Pb::Foo::HelloWorld"
pub fn service_name(scope: &Scope, service: &str) -> String {
    type_name(scope, &[service])
}

/// Returns the stub method name for an rpc, e.g "SayHello" => "say_hello".
/// Digits stay attached to the preceding word, the way the grpc runtime names its stub methods.
pub fn method_name(rpc: &str) -> String {
    lazy_static! {
        static ref ACRONYM: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
        static ref WORD: Regex = Regex::new(r"([a-z\d])([A-Z])").unwrap();
    }

    let name = ACRONYM.replace_all(rpc, "${1}_${2}");
    let name = WORD.replace_all(&name, "${1}_${2}");
    name.replace('-', "_").to_lowercase()
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(package: &str, ruby_package: Option<&str>) -> Scope {
        Scope {
            package: package.to_string(),
            ruby_package: ruby_package.map(String::from),
        }
    }

    #[test]
    fn test_package_from_proto_package() {
        assert_eq!(package(&scope("pb.foo_bar.v1", None)), "Pb::FooBar::V1");
        assert_eq!(package(&scope("", None)), "");
    }

    #[test]
    fn test_package_from_ruby_package() {
        assert_eq!(
            package(&scope("pb.foo", Some("Acme::Protos"))),
            "Acme::Protos"
        );
        assert_eq!(package(&scope("pb.foo", Some(""))), "Pb::Foo");
    }

    #[test]
    fn test_modules() {
        assert_eq!(
            modules(&scope("pb.hello", None)),
            vec!["Pb".to_string(), "Pb::Hello".to_string()]
        );
        assert!(modules(&scope("", None)).is_empty());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(
            type_name(&scope("pb.hello", None), &["Outer", "inner"]),
            "Pb::Hello::Outer::Inner"
        );
        assert_eq!(type_name(&scope("", None), &["Item"]), "Item");
    }

    #[test]
    fn test_method_name() {
        assert_eq!(method_name("GetThing"), "get_thing");
        assert_eq!(method_name("Search"), "search");
        assert_eq!(method_name("GetHTTPStatus"), "get_http_status");
        assert_eq!(method_name("V2Get"), "v2_get");
        assert_eq!(method_name("Get2FACode"), "get2_fa_code");
    }
}
