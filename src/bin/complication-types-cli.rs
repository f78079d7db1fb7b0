use std::process::ExitCode;

use clap::{Parser, Subcommand};

use complication_types::{ComplicationType, WireError, to_wire_types, try_from_wire_type};

#[derive(clap::Parser, Debug)]
#[command(
    name = "complication-types-cli",
    version,
    about = "Translate complication types to and from their wire codes"
)]
struct Cli {
    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// encode <name>...: print the wire code of each type, in order
    Encode {
        /// Type names, e.g. short_text small_image
        #[arg(required = true)]
        names: Vec<ComplicationType>,
    },
    /// decode <code>...: print the type name of each wire code, in order
    Decode {
        /// Wire codes; unknown codes print as `empty`
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i32>,
        /// Fail on unknown codes instead of falling back to `empty`
        #[arg(long)]
        strict: bool,
    },
    /// list: print every type with its wire code
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.cmd) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Cmd) -> Result<String, WireError> {
    match cmd {
        Cmd::Encode { names } => Ok(cmd_encode(names)),
        Cmd::Decode { codes, strict } => cmd_decode(&codes, strict),
        Cmd::List => Ok(cmd_list()),
    }
}

/// encode <name>...
fn cmd_encode(names: Vec<ComplicationType>) -> String {
    let codes = to_wire_types(names);
    let line: Vec<String> = codes.iter().map(i32::to_string).collect();
    line.join(" ")
}

/// decode <code>...
fn cmd_decode(codes: &[i32], strict: bool) -> Result<String, WireError> {
    let mut names = Vec::with_capacity(codes.len());
    for &code in codes {
        let t = if strict {
            try_from_wire_type(code)?
        } else {
            if !ComplicationType::is_known_wire_type(code) {
                tracing::debug!(code, "unknown wire type, using fallback");
            }
            ComplicationType::from_wire_type(code)
        };
        names.push(t.name());
    }
    Ok(names.join(" "))
}

/// list
fn cmd_list() -> String {
    let mut out = format!("{:>4}  {}", "code", "type");
    for t in ComplicationType::ALL {
        out.push_str(&format!("\n{:>4}  {}", t.wire_type(), t));
    }
    out
}
