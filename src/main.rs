use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

mod catalog;
mod output;

const DEFAULT_OUTPUT_DIR: &str = "api/writable/uploads/policies";

#[derive(Parser, Debug)]
#[command(name = "hr-policies", version, about = "Write the standard HR policy templates to disk")]
struct Cli {
    #[arg(
        short,
        long,
        env = "HR_POLICIES_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory the policy files are written into (created if missing)"
    )]
    output_dir: PathBuf,
    #[arg(long, help = "Print the built-in policy names and exit without writing")]
    list: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let policies = catalog::builtin::builtin()?;
    debug!("Loaded {} built-in policies", policies.len());

    if cli.list {
        for name in policies.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    output::ensure_output_directory(&cli.output_dir)?;
    let report = output::emit_all(&policies, &cli.output_dir, |doc| {
        println!("Generated {}", doc.name);
    })?;
    info!(
        "Wrote {} policies to {}",
        report.written.len(),
        cli.output_dir.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Run failed: {:?}", err);
            let mut message = format!("error: {}", err);
            let mut cause = err.source();
            while let Some(inner) = cause {
                message.push_str(&format!(": {}", inner));
                cause = inner.source();
            }
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
