//! # envstruct demo application
//!
//! A sample CLI that binds its configuration from environment variables.
//! It exists to demonstrate and manually verify envstruct's features.
//!
//! ## Running
//!
//! ```sh
//! DEMO_NAME=demo cargo run --example envstruct_demo -- echo
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                                              |
//! |----------------------|---------------------------------------------------------------------------------|
//! | Required variable    | `cargo run --example envstruct_demo -- echo` (fails without `DEMO_NAME`)        |
//! | Defaults             | `DEMO_NAME=demo cargo run --example envstruct_demo -- echo`                     |
//! | Durations            | `DEMO_NAME=demo DEMO_TIMEOUT=2h30m cargo run --example envstruct_demo -- echo`  |
//! | Sequences of URLs    | `DEMO_NAME=demo DEMO_UPSTREAMS="http://a, http://b" cargo run --example envstruct_demo -- echo` |
//! | Table report         | `DEMO_NAME=demo cargo run --example envstruct_demo -- --env-report echo`        |
//! | JSON report          | `DEMO_NAME=demo cargo run --example envstruct_demo -- --env-report=json echo`   |
//! | Redacted field       | `DEMO_NAME=demo DEMO_API_TOKEN=x cargo run --example envstruct_demo -- --env-report echo` |
//! | Strict mode          | `DEMO_NAME=demo DEMO_RATIO=0.5 cargo run --example envstruct_demo -- --env-strict echo` |
//! | Binder logging       | `RUST_LOG=envstruct=debug DEMO_NAME=demo cargo run --example envstruct_demo -- echo` |

mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use envstruct::EnvArgs;

use config::DemoConfig;

/// envstruct demo — a sample CLI configured from the environment.
#[derive(Parser, Debug)]
#[command(name = "envstruct-demo")]
struct Cli {
    #[command(flatten)]
    env: EnvArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved configuration.
    Echo,
}

fn echo(config: &DemoConfig) {
    if config.verbose {
        println!("[verbose] Resolved configuration for {:?}", config.name);
        println!();
    }

    let upstreams: Vec<&str> = config.upstreams.iter().map(|u| u.as_str()).collect();
    let entries = [
        ("name", config.name.clone()),
        ("listen", format!("{}:{}", config.host, config.port)),
        ("timeout", humantime::format_duration(config.timeout).to_string()),
        ("upstreams", upstreams.join(", ")),
        ("ratio", config.ratio.to_string()),
    ];

    let max_key_len = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("{key:<max_key_len$}  {value}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = DemoConfig::default();
    cli.env.binder().load(&mut config).unwrap_or_else(|e| {
        eprintln!("Failed to load config:\n{e}");
        std::process::exit(1);
    });

    cli.env
        .report(&config, std::io::stdout().lock())
        .unwrap_or_else(|e| {
            eprintln!("Failed to write report:\n{e}");
            std::process::exit(1);
        });

    match cli.command {
        Commands::Echo => echo(&config),
    }
}
