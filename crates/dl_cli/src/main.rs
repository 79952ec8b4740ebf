use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use dl_ast::{Options, SourceType};
use dl_compiler::{compile_with_runtime, transform_json};
use dl_desugar::Runtime;
use tracing::info;

mod logging;

#[derive(Parser)]
#[command(
    name = "downlevel",
    about = "downlevel: compile arrow functions, classes and generators to ES5"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, desugar, and emit JavaScript.
    Compile {
        /// Input .js file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        flags: CompileFlags,
        /// Splice this file instead of the bundled generator runtime.
        #[arg(long)]
        runtime: Option<PathBuf>,
        /// Generate a source map next to the output.
        #[arg(long)]
        source_map: bool,
    },
    /// Desugar a JSON AST (as printed by `parse --ast`) into a JSON AST.
    Transform {
        /// Input .json file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        flags: CompileFlags,
    },
    /// Parse the file and report any syntax errors.
    Check {
        input: PathBuf,
        #[arg(long, default_value_t = SourceType::Auto)]
        source_type: SourceType,
    },
    /// Parse and dump the AST.
    Parse {
        input: PathBuf,
        /// Dump as JSON instead of debug output.
        #[arg(long)]
        ast: bool,
        #[arg(long, default_value_t = SourceType::Auto)]
        source_type: SourceType,
    },
}

#[derive(Args, Debug, Default)]
struct CompileFlags {
    /// JSON file with compile options (`arrowFunction`, `class`, ...).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep arrow functions.
    #[arg(long)]
    no_arrow_function: bool,
    /// Keep classes.
    #[arg(long)]
    no_class: bool,
    /// Keep generator functions.
    #[arg(long)]
    no_generator: bool,
    /// Always splice the runtime into the output.
    #[arg(long, conflicts_with = "no_runtime")]
    include_runtime: bool,
    /// Never splice the runtime into the output.
    #[arg(long)]
    no_runtime: bool,
    /// Parse goal: script, module or auto.
    #[arg(long)]
    source_type: Option<SourceType>,
}

impl CompileFlags {
    /// Options from the config file (if any) with command-line flags on top.
    fn options(&self, input: &Path) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => load_config(path)?,
            None => Options::default(),
        };

        if self.no_arrow_function {
            options.arrow_function = false;
        }
        if self.no_class {
            options.class = false;
        }
        if self.no_generator {
            options.generator = false;
        }
        if self.include_runtime {
            options.include_runtime = Some(true);
        }
        if self.no_runtime {
            options.include_runtime = Some(false);
        }
        if let Some(source_type) = self.source_type {
            options.source_type = source_type;
        }
        if options.source_file_name.is_none() {
            options.source_file_name = Some(input.display().to_string());
        }

        Ok(options)
    }
}

fn load_config(path: &Path) -> Result<Options> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Compile {
            input,
            output,
            flags,
            runtime,
            source_map,
        } => {
            let source = read_input(&input)?;
            let filename = input.display().to_string();
            let mut options = flags.options(&input)?;

            let generated_name = match &output {
                Some(path) => path.display().to_string(),
                None => filename.clone(),
            };
            if source_map && options.source_map_name.is_none() {
                options.source_map_name = Some(generated_name.clone());
            }

            let runtime = match &runtime {
                Some(path) => Runtime::from_file(path)
                    .with_context(|| format!("failed to read runtime {}", path.display()))?,
                None => Runtime::generator(),
            };

            let compiled = compile_with_runtime(&source, &options, &runtime)?;
            write_output(output.as_deref(), &compiled.code)?;

            if let Some(map) = compiled.map {
                let map_path = format!("{generated_name}.map");
                std::fs::write(&map_path, &map)
                    .with_context(|| format!("failed to write {map_path}"))?;
                info!(path = %map_path, "wrote source map");
                eprintln!("Source map written to {map_path}");
            }
        }
        Commands::Transform {
            input,
            output,
            flags,
        } => {
            let text = read_input(&input)?;
            let options = flags.options(&input)?;
            let ast: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not JSON", input.display()))?;

            let transformed = transform_json(ast, &options)?;
            let json = serde_json::to_string_pretty(&transformed)?;
            write_output(output.as_deref(), &format!("{json}\n"))?;
        }
        Commands::Check { input, source_type } => {
            let source = read_input(&input)?;
            let filename = input.display().to_string();

            dl_parser::parse(&source, &filename, source_type)?;
            eprintln!("OK: {filename}");
        }
        Commands::Parse {
            input,
            ast,
            source_type,
        } => {
            let source = read_input(&input)?;
            let filename = input.display().to_string();
            let parsed = dl_parser::parse(&source, &filename, source_type)?;

            if ast {
                let json = serde_json::to_string_pretty(&parsed.program)?;
                println!("{json}");
            } else {
                println!("{:#?}", parsed.program);
            }
        }
    }

    Ok(())
}
