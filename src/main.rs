use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use unmht::core::{
    convert_mhtml_document, format_output_path, print_error_message, print_info_message,
    UnmhtError, UnmhtOptions,
};
use unmht::parsers::html::create_metadata_tag;
use unmht::storage::{BlobDirectoryStore, InlineStore};

#[derive(Parser)]
#[command(
    name = "unmht",
    version,
    about = "Converts MHTML web archives into single self-contained HTML files"
)]
struct Cli {
    /// Input MHTML archives (.mht / .mhtml)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output path template; %stem% and %timestamp% are substituted
    #[arg(short, long, default_value = "%stem%.conv.html")]
    output: String,

    /// Write resources as content-addressed blob files next to the output
    /// document instead of inlining them as data URLs
    #[arg(short, long)]
    unpack: bool,

    /// Suppress informational output
    #[arg(short, long)]
    silent: bool,

    /// Do not prepend the provenance comment to the output document
    #[arg(long)]
    no_metadata: bool,
}

fn main() {
    let cli = Cli::parse();
    let options = UnmhtOptions {
        no_metadata: cli.no_metadata,
        silent: cli.silent,
    };

    let mut failures: usize = 0;
    for input_path in &cli.inputs {
        if let Err(e) = convert_input(input_path, &cli, &options) {
            print_error_message(&format!("{}: {}", input_path.display(), e));
            failures += 1;
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}

fn convert_input(input_path: &Path, cli: &Cli, options: &UnmhtOptions) -> Result<(), UnmhtError> {
    let input = fs::read(input_path)
        .map_err(|e| UnmhtError::new(&format!("unable to read input: {e}")))?;

    let stem = input_path.with_extension("");
    let output_path = PathBuf::from(format_output_path(&cli.output, &stem.to_string_lossy()));

    let mut result = if cli.unpack {
        // Blobs end up next to the output document
        let blob_directory = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let store = BlobDirectoryStore::new(blob_directory);
        convert_mhtml_document(options, &store, &input)?
    } else {
        convert_mhtml_document(options, &InlineStore, &input)?
    };

    if !options.no_metadata {
        let mut metadata_comment = create_metadata_tag(&input_path.display().to_string());
        metadata_comment.push('\n');
        result.splice(0..0, metadata_comment.into_bytes());
    }
    if result.last() != Some(&b'\n') {
        result.extend_from_slice(b"\n");
    }

    fs::write(&output_path, &result)
        .map_err(|e| UnmhtError::new(&format!("unable to write output: {e}")))?;

    if !options.silent {
        print_info_message(&format!(
            "{} -> {}",
            input_path.display(),
            output_path.display()
        ));
    }

    Ok(())
}
