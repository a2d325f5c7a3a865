//! tierpolicy driver
//!
//! - Loads the policy document from a file or URL (`--policy`)
//! - `tree`: print the compiled policy tree
//! - `lookup`: governing policy for one file
//! - `by-storage`: policies using a tier combination
//! - `report`: per-tier breakdown

use std::process::ExitCode;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use tierpolicy_core::Result;
use tierpolicy_engine::{config, policy};

const DEFAULT_POLICY_LOCATION: &str =
    "https://raw.githubusercontent.com/cedadev/media_rules/master/policy.yaml";

#[derive(Debug, Parser)]
#[command(name = "tierpolicy", about = "Decide which storage tier a file belongs on")]
struct Cli {
    /// Policy document: a file path or an http(s) URL.
    #[arg(long, global = true, env = "TIERPOLICY_POLICY", default_value = DEFAULT_POLICY_LOCATION)]
    policy: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the policy tree.
    Tree,
    /// Find the policy governing a file.
    Lookup {
        path: String,
        /// File size in bytes.
        #[arg(long)]
        size: Option<u64>,
        /// Modification date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_mod_time)]
        mod_time: Option<NaiveDateTime>,
    },
    /// List policies storing on all `--include` tiers and none of `--exclude`.
    ByStorage {
        #[arg(long = "include", value_delimiter = ',')]
        includes: Vec<String>,
        #[arg(long = "exclude", value_delimiter = ',')]
        excludes: Vec<String>,
    },
    /// Per-tier breakdown of policies.
    Report {
        #[arg(long, value_delimiter = ',', default_values_t = policy::DEFAULT_TIERS.map(String::from))]
        tiers: Vec<String>,
    },
}

fn parse_mod_time(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::default()))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error ({}): {e}", e.kind().as_str());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_from_location(&cli.policy).await?;
    let tree = config::build_tree(&cfg)?;

    match cli.command {
        Command::Tree => print!("{}", tree.render_tree()),
        Command::Lookup {
            path,
            size,
            mod_time,
        } => match tree.find_storage_policy(&path, size, mod_time)? {
            Some(found) => println!("{found} -> {}", found.storage().join(", ")),
            None => println!("no policy found"),
        },
        Command::ByStorage { includes, excludes } => {
            for found in tree.find_policy_by_storage(includes.as_slice(), excludes.as_slice()) {
                println!("{found}");
            }
        }
        Command::Report { tiers } => {
            for row in policy::storage_report(&tree, tiers.as_slice()) {
                println!("{}", row.query);
                for found in row.policies {
                    println!("    {found}");
                }
                println!();
            }
        }
    }
    Ok(())
}
