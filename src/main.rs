use clap::{Parser, Subcommand};
use glob::glob;
use prost::Message;
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};
use tracing::{error, info};

use protoc_gen_rbs::{
    config::Config, error::Error, file_parser, generator::Generator, plugin,
    resolver::resolve_files,
};

#[derive(Parser)]
#[command(name = "protoc-gen-rbs")]
#[command(about = "Generate RBS signatures for protobuf generated Ruby code", long_about = None)]
struct Cli {
    /// Without a subcommand, run as a protoc plugin: read a CodeGeneratorRequest on stdin
    /// and write a CodeGeneratorResponse on stdout
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate signatures from .proto source files
    Generate {
        /// Generator parameter, e.g `grpc=false`
        #[arg(short, long = "param")]
        param: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Import root, stripped from file paths to name the outputs
        #[arg(short = 'I', long)]
        root: Option<PathBuf>,

        /// Glob patterns of the .proto files to generate
        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Print the parsed schema of a .proto file as JSON
    Inspect {
        /// Input .proto file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => run_plugin(),
        Some(Commands::Generate {
            param,
            output,
            root,
            patterns,
        }) => run_generate(&param, &output, root.as_deref(), &patterns),
        Some(Commands::Inspect { file }) => run_inspect(&file),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run_plugin() -> Result<(), Error> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    let response = plugin::run(&input)?;
    std::io::stdout().write_all(&response.encode_to_vec())?;
    Ok(())
}

fn run_generate(
    param: &[String],
    output: &Path,
    root: Option<&Path>,
    patterns: &[String],
) -> Result<(), Error> {
    let config = Config::from_parameter(Some(&param.join(",")))?;

    let mut files = Vec::new();
    for pattern in patterns {
        for entry in glob(pattern)? {
            let path = entry?;
            let mut file = file_parser::read_file(&path)?;
            if let Some(relative) = root.and_then(|root| path.strip_prefix(root).ok()) {
                file.path = relative.to_string_lossy().into_owned();
            }
            files.push(file);
        }
    }
    resolve_files(&mut files);

    for artifact in Generator::new(config).generate(&files) {
        let path = output.join(&artifact.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, artifact.content)?;
        info!(path = %path.display(), "wrote");
    }

    Ok(())
}

fn run_inspect(path: &Path) -> Result<(), Error> {
    let mut files = vec![file_parser::read_file(path)?];
    resolve_files(&mut files);

    println!("{}", serde_json::to_string_pretty(&files[0])?);
    Ok(())
}
