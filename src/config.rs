use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for parameter {key}, expected a boolean")]
    InvalidBool { key: String, value: String },
}

/// Generator options, read from the plugin parameter string (e.g "grpc=false")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Generate the `_services_pb.rbs` stub files
    pub grpc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { grpc: true }
    }
}

impl Config {
    /// Parse a comma separated list of `key=value` pairs.
    /// Unknown keys are ignored with a warning.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        let pairs = parameter
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty());

        for pair in pairs {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (pair, ""),
            };

            match key {
                "grpc" => config.grpc = parse_bool(key, value)?,
                _ => warn!(key, "ignoring unknown parameter"),
            }
        }

        Ok(config)
    }
}

/// Parse a boolean value the way protoc plugins commonly do
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};

    macro_rules! test_parameter {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, grpc) = $value;
                assert_eq!(Config::from_parameter(input), Ok(Config { grpc }));
            }
        )*
        }
    }

    test_parameter! {
        no_parameter: (None, true),
        empty_parameter: (Some(""), true),
        grpc_false: (Some("grpc=false"), false),
        grpc_zero: (Some("grpc=0"), false),
        grpc_true_upper: (Some("grpc=TRUE"), true),
        unknown_key_ignored: (Some("foo=bar, grpc=F"), false),
    }

    #[test]
    fn it_should_reject_invalid_bool() {
        assert_eq!(
            Config::from_parameter(Some("grpc=nope")),
            Err(ConfigError::InvalidBool {
                key: "grpc".into(),
                value: "nope".into()
            })
        );
        assert!(Config::from_parameter(Some("grpc")).is_err());
    }
}
