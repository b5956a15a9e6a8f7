//! rconsole CLI
//!
//! Command-line shell for the RCON client: executes a command given as
//! arguments, or a script read from a file or stdin.

use std::fs;
use std::io::Read;
use std::time::Duration;

use clap::Parser;
use rconsole::{Client, DEFAULT_ADDRESS, DEFAULT_PASSWORD};
use tracing_subscriber::{fmt, EnvFilter};

/// rconsole CLI
#[derive(Parser, Debug)]
#[command(name = "rconsole")]
#[command(about = "Source RCON client for game server consoles")]
#[command(version)]
struct Args {
    /// Address of the server RCON, in the format HOST:PORT
    #[arg(short, long, default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Password of the RCON
    #[arg(short, long, default_value = DEFAULT_PASSWORD)]
    password: String,

    /// Timeout of the connection, in seconds
    #[arg(short, long, default_value = "1.0")]
    timeout: f64,

    /// Read commands from a file, "-" for stdin; from arguments if not set
    #[arg(short, long)]
    file: Option<String>,

    /// Command to execute
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,rconsole=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let timeout = Duration::from_secs_f64(args.timeout.max(0.0));
    let client = Client::new(args.address.as_str(), args.password.as_str(), timeout);

    let cmd = match command_text(&args) {
        Ok(cmd) => cmd,
        Err(message) => fatal(&message),
    };

    match client.execute(&cmd) {
        Ok(output) => println!("{}", output.trim()),
        Err(err) => {
            // Partial script output is still worth printing
            let output = err.output.trim();
            if !output.is_empty() {
                println!("{}", output);
            }
            fatal(&err.to_string());
        }
    }
}

/// Resolve the command text from the file flag or trailing arguments
fn command_text(args: &Args) -> Result<String, String> {
    if let Some(file) = &args.file {
        return read_commands(file).map_err(|e| format!("cannot read {}: {}", file, e));
    }

    let cmd = args.command.join(" ").trim().to_string();
    if cmd.is_empty() {
        return Err("empty commands".to_string());
    }
    Ok(cmd)
}

/// Read a command script from a file, or stdin for "-"
fn read_commands(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(file)
    }
}

/// Print a message to stderr and exit non-zero
fn fatal(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
