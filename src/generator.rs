use tracing::debug;

use crate::{
    config::Config,
    file::File,
    ruby::{Renderer, Toolkit},
    walker::FileWalk,
};

/// A generated output file
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Output path, relative to the output root
    pub name: String,

    pub content: String,
}

/// Generator renders the signature files of a set of schema files
#[derive(Debug, Default)]
pub struct Generator {
    config: Config,
    toolkit: Toolkit,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            toolkit: Toolkit::default(),
        }
    }

    /// Generate the artifacts of every file, in input order.
    /// Each file yields a `_pb.rbs` file, followed by a `_services_pb.rbs` file
    /// when stubs are enabled and the file declares services.
    pub fn generate(&self, files: &[File]) -> Vec<Artifact> {
        let renderer = Renderer::new(&self.toolkit);
        let mut artifacts = Vec::new();

        for file in files {
            let walk = FileWalk::new(file, self.config.grpc);
            debug!(
                file = %file.path,
                messages = walk.messages.len(),
                enums = walk.enums.len(),
                services = walk.services.len(),
                "generating"
            );

            artifacts.push(Artifact {
                name: output_name(&file.path, "_pb.rbs"),
                content: renderer.render_types(&walk),
            });

            if let Some(content) = renderer.render_services(&walk) {
                artifacts.push(Artifact {
                    name: output_name(&file.path, "_services_pb.rbs"),
                    content,
                });
            }
        }

        artifacts
    }
}

/// Derive an output path from an input path: "pb/foo.proto" => "pb/foo_pb.rbs"
pub fn output_name(input: &str, suffix: &str) -> String {
    let stem = input.strip_suffix(".proto").unwrap_or(input);
    format!("{}{}", stem, suffix)
}
