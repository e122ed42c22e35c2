use clap::Parser;
use kumiki::prelude::*;
use std::fs;
use std::process;

/// A node-graph code generation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON file
    graph_path: String,

    /// Target language name (falls back to python when unregistered)
    #[arg(short, long, default_value = "python")]
    language: String,

    /// Optional output file; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Run the structural validator and print its findings before generating
    #[arg(long)]
    validate: bool,
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });

    let mut graph =
        Graph::from_json(&graph_json).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let nodes = NodeRegistry::with_defaults();
    let languages = LanguageRegistry::with_defaults();

    // Compact graph files may carry only id, kind, and properties; fill in
    // the socket layouts from the registry factories.
    nodes.hydrate(&mut graph);

    if cli.validate {
        let report = Validator::new().validate(&graph);
        if report.valid {
            eprintln!("Validation passed: no structural findings.");
        } else {
            eprintln!("Validation found {} issue(s):", report.errors.len());
            for error in &report.errors {
                eprintln!("  - {}", error);
            }
        }
    }

    let generator = Generator::new(&nodes, &languages);
    let generated = generator.generate(&graph, &cli.language);

    for warning in &generated.warnings {
        eprintln!("Warning: {}", warning);
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &generated.source).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output file '{}': {}", path, e))
            });
            eprintln!("Wrote {} ({}).", path, generated.syntax);
        }
        None => print!("{}", generated.source),
    }
}
