use std::process::exit;

use bootpath::resolve::{archive_path, executable_path, home_path};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print the bootstrap paths derived from the running executable.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the program-invocation string used on platforms without a
    /// native executable query.
    #[arg(long)]
    argv0: Option<String>,
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::OFF.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .compact()
        .init();

    let cli = Cli::parse();
    let argv0 = cli
        .argv0
        .or_else(|| std::env::args().next())
        .unwrap_or_default();

    let execfile = match executable_path(&argv0) {
        Ok(execfile) => execfile,
        Err(err) => {
            println!("error: {}", err);
            exit(1);
        }
    };

    println!("executable: {}", execfile);
    println!("home:       {}", home_path(&execfile));
    println!("archive:    {}", archive_path(&execfile));
}
