use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use clap::{Parser, Subcommand};

use pipescript::backends::BackendType;
use pipescript::error::CompileError;
use pipescript::parser;
use pipescript::Node;

#[derive(Parser)]
#[command(name = "pipescript")]
#[command(about = "Compiles pipescript sources to JavaScript", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a source file for the selected target
    Compile {
        /// Source file
        input: String,

        /// Target language
        #[arg(short, long, default_value = "javascript")]
        target: String,

        /// Output file, defaults to the input path with the target's extension
        #[arg(short, long)]
        output: Option<String>,

        /// Print the token stream
        #[arg(long)]
        show_tokens: bool,

        /// Print the AST
        #[arg(long)]
        show_ast: bool,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Source file
        input: String,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a source file and print the AST without generating code
    Parse {
        /// Source file
        input: String,

        /// Print the AST as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compile a source file to JavaScript and run it in a host runtime
    Run {
        /// Source file
        input: String,

        /// Runtime that reads the program from stdin
        #[arg(long, default_value = "node")]
        runtime: String,
    },

    /// List supported targets
    Targets,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CompileError> {
    match cli.command {
        Commands::Compile { input, target, output, show_tokens, show_ast } => {
            let backend_type = BackendType::select(&target)?;
            println!("Compiling {} for {}...", input, target);

            let source = fs::read_to_string(&input)?;
            let tokens = pipescript::tokenize(&source)?;
            if show_tokens {
                println!("=== TOKENS ===");
                for token in &tokens {
                    println!("{:?}", token);
                }
            }

            let program = pipescript::parse_tokens(&tokens)?;
            if show_ast {
                println!("=== AST ===");
                println!("{:#?}", program);
            }

            let mut backend = backend_type.create();
            let code = backend.generate(&Node::Program(program))?;

            let output_path = match output {
                Some(path) => path,
                None => Path::new(&input)
                    .with_extension(backend_type.extension())
                    .to_string_lossy()
                    .into_owned(),
            };
            fs::write(&output_path, &code)?;
            println!("Compiled to: {}", output_path);
            println!("=== OUTPUT ===");
            println!("{}", code);
        }
        Commands::Tokens { input, json } => {
            let source = fs::read_to_string(&input)?;
            let tokens = pipescript::tokenize(&source)?;

            if json {
                println!("{}", to_json(&tokens)?);
            } else {
                for token in &tokens {
                    println!("{:?}", token);
                }
            }
        }
        Commands::Parse { input, json } => {
            println!("Parsing {}...", input);

            let source = fs::read_to_string(&input)?;
            println!("=== SOURCE ===");
            println!("{}", source);

            println!("=== TOKENS ===");
            let tokens = pipescript::tokenize(&source)?;
            for token in &tokens {
                println!("{:?}", token);
            }

            println!("=== AST ===");
            let program = parser::parse(&source)?;
            if json {
                println!("{}", to_json(&program)?);
            } else {
                println!("{:#?}", program);
            }
        }
        Commands::Run { input, runtime } => {
            let source = fs::read_to_string(&input)?;
            let code = pipescript::compile(&source)?;
            execute(&runtime, &code)?;
        }
        Commands::Targets => {
            println!("Supported targets:");
            for backend in BackendType::all() {
                println!("  {:12} - {}", backend.name(), backend.description());
            }
        }
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CompileError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Pipes the generated program into `runtime`'s stdin and waits for it.
fn execute(runtime: &str, code: &str) -> Result<(), CompileError> {
    let mut child = Command::new(runtime).stdin(Stdio::piped()).spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(code.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(CompileError::Runtime {
            message: format!("{} exited with {}", runtime, status),
        });
    }
    Ok(())
}
