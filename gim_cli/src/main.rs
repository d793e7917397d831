use clap::Parser;
use gim_core::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gim")]
#[command(about = "Keyboard-driven exercise tracker", long_about = None)]
struct Cli {
    /// Override the exercise data file
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = logging::DEFAULT_LEVEL)]
    log_level: String,

    /// Command to run once (e.g. `add n/Squat w/100`); starts an interactive
    /// session when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let config = Config::load()?;
    let data_file = cli.data_file.unwrap_or_else(|| config.data.data_file.clone());

    let mut model = Model::new(storage::load(&data_file)?);

    if cli.command.is_empty() {
        return run_interactive(&mut model, &data_file);
    }

    let line = cli.command.join(" ");
    match run_line(&mut model, &line, &data_file) {
        Ok(result) => {
            println!("{}", result.feedback);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Parse and execute one command line, saving the tracker if it changed
fn run_line(model: &mut Model, line: &str, data_file: &Path) -> Result<CommandResult> {
    let command = parse_command(line)?;
    let result = command.execute(model)?;

    if result.mutated {
        storage::save(model.tracker(), data_file)?;
    }

    Ok(result)
}

fn run_interactive(model: &mut Model, data_file: &Path) -> Result<()> {
    println!("Welcome to Gim! Type 'help' to see the available commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match run_line(model, &line, data_file) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    break;
                }
            }
            // Parse and execution errors are recoverable; storage failures are not
            Err(e @ (Error::Io(_) | Error::Json(_))) => return Err(e),
            Err(e) => {
                tracing::debug!("Command {:?} failed: {}", line, e);
                eprintln!("{}", e);
            }
        }
    }

    Ok(())
}
