//! Inspect and bootstrap the keeper server configuration.
//!
//! ```sh
//! keeper-config --dir /etc/keeper            # show resolved values
//! keeper-config --dir /etc/keeper show --json
//! keeper-config --dir /etc/keeper get threads.queue
//! keeper-config --dir /etc/keeper gen        # write defaults
//! ```
//!
//! Mistyped keys are reported at `warn`. Set `RUST_LOG=keeper_config=trace`
//! to also see every absent key that fell back to its default.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use keeper_config::{ConfigArgs, ops};

#[derive(Parser, Debug)]
#[command(name = "keeper-config", version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let action = cli.config.into_action();

    match ops::handle(&action) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("Config error:\n{e}");
            std::process::exit(1);
        }
    }
}
