use prost::Message;
use prost_types::compiler::{
    code_generator_response::{self, Feature},
    CodeGeneratorRequest, CodeGeneratorResponse,
};
use tracing::{debug, warn};

use crate::{
    config::Config, descriptor::DescriptorAdapter, error::Error, file::File, generator::Generator,
};

/// Decode a CodeGeneratorRequest and generate its response
pub fn run(input: &[u8]) -> Result<CodeGeneratorResponse, Error> {
    let request = CodeGeneratorRequest::decode(input)?;
    Ok(generate(&request))
}

/// Generate the signature files of the request's `file_to_generate`.
/// Invalid parameters are reported through the response error, without any file.
pub fn generate(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let supported_features = Some(Feature::Proto3Optional as u64);

    let config = match Config::from_parameter(request.parameter.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            return CodeGeneratorResponse {
                error: Some(err.to_string()),
                supported_features,
                ..Default::default()
            }
        }
    };
    debug!(?config, files = request.file_to_generate.len(), "generating");

    let adapter = DescriptorAdapter::new(&request.proto_file);
    let files = request
        .file_to_generate
        .iter()
        .filter_map(|name| {
            let descriptor = request.proto_file.iter().find(|f| f.name() == name);
            if descriptor.is_none() {
                warn!(file = %name, "file to generate missing from the request");
            }
            descriptor
        })
        .map(|descriptor| adapter.convert(descriptor))
        .collect::<Vec<File>>();

    let file = Generator::new(config)
        .generate(&files)
        .into_iter()
        .map(|artifact| code_generator_response::File {
            name: Some(artifact.name),
            content: Some(artifact.content),
            ..Default::default()
        })
        .collect();

    CodeGeneratorResponse {
        file,
        supported_features,
        ..Default::default()
    }
}
