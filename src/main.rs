use anyhow::Context;
use clap::Parser;
use lexbrief::{Config, Pipeline, DEFAULT_MODEL};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "lexbrief",
    version,
    author,
    about = "Turn raw legal document text into a presentation-ready analysis",
    long_about = "Turn raw legal document text into a structured, presentation-ready analysis.\n\n\
    This tool reads extracted document text, normalizes and bounds it, asks an LLM \
    backend for a structured legal analysis, and re-flows the reply into a stable \
    presentation layout (title banner, numbered items on their own lines, reference \
    footer).\n\n\
    USAGE EXAMPLES:\n  \
      # Analyze an extracted contract\n  \
      lexbrief --file ./contract.txt\n\n  \
      # Keep the original document name in the banner and footer\n  \
      lexbrief --file ./extracted/contract.txt --name contract.pdf\n\n  \
      # Write the analysis to a file\n  \
      lexbrief --file ./contract.txt --out ./analysis.txt"
)]
struct Cli {
    /// Path to the extracted document text to analyze
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// Document name used in the banner and reference footer
    ///
    /// Defaults to the input file name.
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Output file for the analysis (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// API key for the LLM backend
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Backend model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Max document characters sent to the backend before truncation
    #[arg(long, default_value_t = 15_000)]
    max_length: usize,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let content = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read document '{}'", cli.file.display()))?;

    let file_name = match cli.name {
        Some(name) => name,
        None => display_name(&cli.file),
    };

    let config = Config::builder()
        .api_key(cli.api_key)
        .model(cli.model)
        .max_content_length(cli.max_length)
        .build()
        .context("Failed to build configuration")?;

    let analysis = Pipeline::new(config)
        .context("Failed to create pipeline")?
        .analyze(&content, &file_name)
        .await
        .context("Document analysis failed")?;

    match cli.out {
        Some(path) => {
            std::fs::write(&path, &analysis)
                .with_context(|| format!("Failed to write analysis to '{}'", path.display()))?;
        }
        None => println!("{analysis}"),
    }

    Ok(())
}

/// Returns the file name component of a path for display purposes.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("lexbrief=info"),
        1 => EnvFilter::new("lexbrief=debug"),
        _ => EnvFilter::new("lexbrief=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_display_name_uses_file_component() {
        assert_eq!(display_name(Path::new("/tmp/docs/contract.txt")), "contract.txt");
        assert_eq!(display_name(Path::new("brief.pdf")), "brief.pdf");
    }

    #[test]
    fn test_cli_reads_document_from_disk() {
        let temp = assert_fs::TempDir::new().unwrap();
        let doc = temp.child("contract.txt");
        doc.write_str("This is a contract.").unwrap();

        let content = std::fs::read_to_string(doc.path()).unwrap();
        assert_eq!(content, "This is a contract.");
    }

    #[test]
    fn test_cli_requires_file_argument() {
        let result = Cli::try_parse_from(["lexbrief", "--api-key", "secret"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from([
            "lexbrief",
            "--file",
            "contract.txt",
            "--api-key",
            "secret",
        ])
        .unwrap();

        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.max_length, 15_000);
        assert!(cli.name.is_none());
        assert!(cli.out.is_none());
    }
}
