use clap::Parser;
use env_logger::Env;
use log::error;

use ss2clash::generator::{generate, GenReport};
use ss2clash::{GenError, GenSettings};

/// Convert shadowsocks share-links into a Clash configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// File with one ss:// link per line [default: ss.txt]
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Clash template to merge the nodes into [default: template.yaml]
    #[arg(short, long, value_name = "FILE")]
    template: Option<String>,

    /// Output file, overwritten if it exists [default: config.yaml]
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Do not add `udp: true` to generated nodes
    #[arg(long)]
    no_udp: bool,

    /// Percent-decode node names taken from the link fragment
    #[arg(long)]
    decode_remarks: bool,
}

fn run(args: Args) -> Result<GenReport, GenError> {
    let mut settings = match args.config.as_deref() {
        Some(path) => GenSettings::load_from_file(path)?,
        None => GenSettings::default(),
    };

    if let Some(input) = args.input {
        settings.input = input;
    }
    if let Some(template) = args.template {
        settings.template = template;
    }
    if let Some(output) = args.output {
        settings.output = output;
    }
    if args.no_udp {
        settings.udp = false;
    }
    if args.decode_remarks {
        settings.decode_remarks = true;
    }

    generate(&settings)
}

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    match run(Args::parse()) {
        Ok(report) => println!("Generated {}", report.output),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
