use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use zeroize::Zeroize;

use pwdhash::engine::{Derived, EngineError, Mode};
use pwdhash::session::{AllowAll, MemoryStore, SecretStore, Session, SessionError};
use pwdhash::settings::{self, Settings};
use pwdhash::{logging, site};

/// CLI for deterministic site passwords.
#[derive(Debug, Parser)]
#[command(
    name = "pwdhash",
    version,
    about = "Site-specific passwords from one master password (PBKDF2-SHA256 or legacy PwdHash)"
)]
struct Cli {
    /// Settings file (defaults to $XDG_CONFIG_HOME/pwdhash/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a password for a site
    Generate(GenerateArgs),
    /// Show the effective domain a site input resolves to
    Site {
        /// URL or hostname
        input: String,
    },
    /// Inspect or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print current settings
    Show,
    /// Print the settings file location
    Path,
    /// Select the default algorithm
    SetMode {
        #[arg(value_enum)]
        mode: CliMode,
    },
    /// Echo generated passwords on stderr as well
    SetShowPassword {
        #[arg(action = clap::ArgAction::Set)]
        show: bool,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliMode {
    Modern,
    Legacy,
    Both,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("master_input")
        .required(true)
        .args(["master", "master_prompt", "master_stdin"])
))]
struct GenerateArgs {
    /// URL or hostname of the site
    #[arg(long, value_name = "STRING")]
    site: String,

    /// Algorithm; defaults to the mode in settings
    #[arg(long, value_enum)]
    mode: Option<CliMode>,

    /// Master secret provided directly (dangerous)
    #[arg(long, value_name = "STRING")]
    master: Option<String>,

    /// Prompt for master secret on the TTY (preferred)
    #[arg(long = "master-prompt")]
    master_prompt: bool,

    /// Read entire stdin as master secret
    #[arg(long = "master-stdin")]
    master_stdin: bool,

    /// Print a JSON object with details instead of plain password
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOut<'a> {
    site: &'a str,
    domain: &'a str,
    mode: Mode,
    password: &'a str,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            4
        }
    };
    process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = match cli.config {
        Some(path) => path,
        None => settings::config_path().context("failed to locate settings file")?,
    };
    match cli.command {
        Commands::Generate(args) => handle_generate(args, &config_path),
        Commands::Site { input } => handle_site(&input),
        Commands::Config(cmd) => handle_config(cmd, &config_path),
    }
}

fn handle_generate(args: GenerateArgs, config_path: &Path) -> Result<i32> {
    let settings = settings::load_or_default(config_path);
    let modes: Vec<Mode> = match args.mode {
        Some(CliMode::Modern) => vec![Mode::Modern],
        Some(CliMode::Legacy) => vec![Mode::Legacy],
        Some(CliMode::Both) => vec![Mode::Modern, Mode::Legacy],
        None => vec![settings.mode],
    };

    // Resolve master secret via exactly one method (clap group enforces one)
    let mut master = match (args.master, args.master_prompt, args.master_stdin) {
        (Some(m), false, false) => m,
        (None, true, false) => read_master_prompt()?,
        (None, false, true) => read_master_stdin()?,
        _ => unreachable!("clap ArgGroup enforces exclusivity"),
    };

    if master.is_empty() {
        eprintln!("invalid input: master secret must be nonempty");
        return Ok(2);
    }

    let mut session = Session::new(MemoryStore::new(), AllowAll);
    session.store_mut().save(&master);
    master.zeroize();

    let mut results = Vec::with_capacity(modes.len());
    for mode in modes {
        match session.generate(&args.site, mode) {
            Ok(derived) => results.push(derived),
            Err(SessionError::Engine(EngineError::InvalidDomain(_))) => {
                eprintln!("invalid input: cannot find a hostname in {:?}", args.site);
                return Ok(2);
            }
            Err(e) => return Err(anyhow::Error::new(e).context("password derivation failed")),
        }
    }
    session.store_mut().delete();

    if args.json {
        print_json(&args.site, &results)?;
    } else {
        for derived in &results {
            println!("{}", derived.password);
        }
    }

    if settings.show_password {
        for derived in &results {
            eprintln!("{} ({}): {}", derived.domain, derived.mode, derived.password);
        }
    }
    Ok(0)
}

fn print_json(site: &str, results: &[Derived]) -> Result<()> {
    let rows: Vec<JsonOut<'_>> = results
        .iter()
        .map(|d| JsonOut {
            site,
            domain: d.domain.as_str(),
            mode: d.mode,
            password: &d.password,
        })
        .collect();
    let out = match rows.as_slice() {
        [single] => serde_json::to_string(single)?,
        many => serde_json::to_string(many)?,
    };
    println!("{}", out);
    Ok(())
}

fn handle_site(input: &str) -> Result<i32> {
    match site::get_site(input) {
        Some(domain) => {
            println!("{}", domain);
            Ok(0)
        }
        None => {
            eprintln!("Invalid Input");
            Ok(2)
        }
    }
}

fn handle_config(cmd: ConfigCommand, path: &Path) -> Result<i32> {
    match cmd {
        ConfigCommand::Show => {
            let current = settings::load(path)?;
            print!("{}", toml::to_string_pretty(&current)?);
        }
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::SetMode { mode } => {
            let mode = match mode {
                CliMode::Modern => Mode::Modern,
                CliMode::Legacy => Mode::Legacy,
                CliMode::Both => {
                    eprintln!("invalid input: the default mode must be modern or legacy");
                    return Ok(2);
                }
            };
            update_settings(path, |s| s.mode = mode)?;
        }
        ConfigCommand::SetShowPassword { show } => {
            update_settings(path, |s| s.show_password = show)?;
        }
    }
    Ok(0)
}

fn update_settings(path: &Path, change: impl FnOnce(&mut Settings)) -> Result<()> {
    let mut current = settings::load(path)
        .with_context(|| format!("refusing to overwrite unreadable {}", path.display()))?;
    change(&mut current);
    settings::save(path, &current)?;
    Ok(())
}

fn read_master_prompt() -> Result<String> {
    #[cfg(feature = "tty")]
    {
        let prompt = "Master: ";
        let master = rpassword::prompt_password(prompt).context("failed to read TTY password")?;
        Ok(master)
    }

    #[cfg(not(feature = "tty"))]
    {
        Err(anyhow::anyhow!(
            "--master-prompt requested but binary built without 'tty' feature (enable with --features tty)"
        ))
    }
}

fn read_master_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read from stdin")?;
    // Keep as provided (no trim), but normalize Windows CRLF
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(buf)
}
