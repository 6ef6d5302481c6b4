mod dump;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use getarg::Settings;
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "getarg")]
#[command(version, about = "Query -flag=value style arguments from the shell", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the string value of a flag
    Get(GetArgs),

    /// Print the integer value of a flag
    Int(IntArgs),

    /// Print the boolean value of a flag (honours -noNAME)
    Bool(BoolArgs),

    /// Print the parsed argument table
    Dump(DumpArgs),
}

#[derive(Parser)]
struct GetArgs {
    /// Flag name, e.g. -datadir
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    name: String,

    /// Value printed when the flag is absent
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    default: String,

    /// Arguments to inspect
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Parser)]
struct IntArgs {
    /// Flag name, e.g. -threads
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    name: String,

    /// Value printed when the flag is absent
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    default: i64,

    /// Arguments to inspect
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Parser)]
struct BoolArgs {
    /// Flag name, e.g. -listen
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    name: String,

    /// Treat the flag as true when neither NAME nor its negation is given
    #[arg(long)]
    default: bool,

    /// Print nothing; exit 0 for true and 1 for false
    #[arg(long)]
    exit_code: bool,

    /// Arguments to inspect
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Parser)]
struct DumpArgs {
    /// Print the table as JSON
    #[arg(long)]
    json: bool,

    /// Arguments to inspect
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn main() -> Result<()> {
    // A missing .env is fine; RUST_LOG may also come from the environment.
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get(args) => get_command(args),
        Commands::Int(args) => int_command(args),
        Commands::Bool(args) => bool_command(args),
        Commands::Dump(args) => dump_command(args),
    }
}

/// Accept `kev`, `-kev` and `--kev` for the flag `-kev`.
fn flag_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let bare = trimmed.trim_start_matches('-');
    if bare.is_empty() {
        bail!("flag name must not be empty (got {raw:?})");
    }
    if trimmed.starts_with("--") {
        Ok(trimmed[1..].to_string())
    } else if trimmed.starts_with('-') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("-{trimmed}"))
    }
}

fn print_line(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("failed to write to stdout")
}

fn get_command(args: GetArgs) -> Result<()> {
    tracing::debug!("executing get command");

    let name = flag_name(&args.name)?;
    let settings = Settings::load(&args.args);
    print_line(settings.get_arg(&name, &args.default))
}

fn int_command(args: IntArgs) -> Result<()> {
    tracing::debug!("executing int command");

    let name = flag_name(&args.name)?;
    let settings = Settings::load(&args.args);
    print_line(&settings.get_int_arg(&name, args.default).to_string())
}

fn bool_command(args: BoolArgs) -> Result<()> {
    tracing::debug!("executing bool command");

    let name = flag_name(&args.name)?;
    let settings = Settings::load(&args.args);
    let value = settings.get_bool_arg(&name, args.default);

    if args.exit_code {
        std::process::exit(if value { 0 } else { 1 });
    }
    print_line(if value { "true" } else { "false" })
}

fn dump_command(args: DumpArgs) -> Result<()> {
    tracing::debug!("executing dump command");

    let settings = Settings::load(&args.args);
    let text = if args.json {
        dump::to_json(&settings)?
    } else {
        dump::to_text(&settings)
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::flag_name;

    #[test]
    fn flag_name_normalizes_dashes() {
        assert_eq!(flag_name("kev").unwrap(), "-kev");
        assert_eq!(flag_name("-kev").unwrap(), "-kev");
        assert_eq!(flag_name("--kev").unwrap(), "-kev");
        assert_eq!(flag_name(" -kev ").unwrap(), "-kev");
    }

    #[test]
    fn flag_name_rejects_empty() {
        assert!(flag_name("").is_err());
        assert!(flag_name("-").is_err());
        assert!(flag_name("--").is_err());
    }
}
