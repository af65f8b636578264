use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result};
use std::{path::PathBuf, time::Duration};

use argh::FromArgs;

const NAME: &str = "arith";

#[derive(FromArgs)]
/// Evaluate one expression of booleans and natural numbers
struct Args {
    #[argh(positional)]
    code: Option<String>,

    #[argh(option, description = "read the expression from a file", short = 'f')]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let source = match (args.code, args.file) {
        (Some(_), Some(_)) => {
            println!("Usage:{NAME} \"code\"");
            return Err(miette::miette!("give either an expression or --file, not both"));
        }
        (Some(code), None) => code,
        (None, Some(path)) => {
            let source =
                std::fs::read_to_string(path).map_err(|e| miette::miette!(e.to_string()))?;
            source.trim_end().to_string()
        }
        (None, None) => {
            println!("Usage:{NAME} \"code\"");
            return Err(miette::miette!("no expression given"));
        }
    };

    run(source)
}

fn run(source: String) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg:.magenta}")
            .into_diagnostic()?
            .tick_strings(&["⢎ ", "⠎⠁", "⠊⠑", "⠈⠱", " ⡱", "⢀⡰", "⢄⡠", "⢆⡀", ""]),
    );
    pb.set_message("Evaluating...");
    let result = arith::run(&source);
    pb.finish_and_clear();

    match result {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(err) => {
            println!("{err}");
            Err(miette::Report::new(err).with_source_code(source))
        }
    }
}
