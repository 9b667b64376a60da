//! xylem - JSON to XML converter

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use xylem::{Config, to_xml_text};

#[derive(Parser)]
#[command(name = "xylem")]
#[command(version, about = "Convert JSON documents to XML", long_about = None)]
#[command(after_help = "EXAMPLES:
    xylem data.json data.xml     Convert a JSON file to XML
    xylem -i 2 data.json         Pretty-print to stdout
    cat data.json | xylem -      Read JSON from stdin")]
struct Cli {
    /// Input JSON file, or - for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output XML file (stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Root element name
    #[arg(short, long, default_value = "root")]
    root: String,

    /// Spaces per nesting level (0 = compact output)
    #[arg(short, long, default_value_t = 0)]
    indent: usize,

    /// Sort mapping keys for reproducible output
    #[arg(short, long)]
    canonical: bool,

    /// Key prefix marking attributes (empty disables the convention)
    #[arg(long, default_value = "-")]
    attr_prefix: String,

    /// Key meaning "element text" (empty disables)
    #[arg(long, default_value = "#text")]
    text_key: String,

    /// Key meaning "CDATA section" (empty disables)
    #[arg(long, default_value = "")]
    cdata_key: String,

    /// Key meaning "comment" (empty disables)
    #[arg(long, default_value = "")]
    comm_key: String,

    /// Strip whitespace around text content
    #[arg(short, long)]
    trim: bool,

    /// Omit the XML declaration
    #[arg(long)]
    no_decl: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let raw = if cli.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        buf
    } else {
        std::fs::read_to_string(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?
    };

    let json: serde_json::Value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    let value = xylem::json::from_json(&json);

    let config = Config::new()
        .with_root_name(cli.root.as_str())
        .with_indent(cli.indent)
        .with_canonical(cli.canonical)
        .with_attr_prefix(cli.attr_prefix.as_str())
        .with_text_key(cli.text_key.as_str())
        .with_cdata_key(cli.cdata_key.as_str())
        .with_comm_key(cli.comm_key.as_str())
        .with_trim(cli.trim)
        .with_xml_decl(!cli.no_decl);

    let xml = to_xml_text(&value, &config).map_err(|e| e.to_string())?;

    match &cli.output {
        Some(path) => std::fs::write(path, xml).map_err(|e| format!("{path}: {e}"))?,
        None => {
            print!("{xml}");
            if !xml.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
