//! Command line summary of MCNP mctal files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::error;

use mctools::mctal::{self, Mctal, Tally};
use mctools::utils::{f, OptionExt, StringExt, ValueExt};

/// Summarise the tallies in a MCNP mctal file
#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help(true))]
struct Cli {
    /// Path to the mctal file
    file: PathBuf,

    /// Print every cell of a tally (repeatable)
    #[arg(short, long = "tally", value_name = "ID")]
    tallies: Vec<u32>,

    /// Write the parsed document to a binary archive
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Write the parsed document to a JSON file
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> mctal::Result<()> {
    let mctal = Mctal::from_file(&cli.file)?;

    print_header(&mctal);
    for tally in &mctal.tallies {
        println!("{tally}");
    }

    for &id in &cli.tallies {
        print_cells(mctal.tally(id)?);
    }

    if let Some(path) = &cli.save {
        mctal.save(path)?;
    }

    if let Some(path) = &cli.json {
        mctal::write_json(&mctal, path)?;
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    // warnings and info by default
    let result = stderrlog::new()
        .modules(["mctools", "mctools_mctal"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .show_module_names(cli.verbose > 1)
        .init();

    if let Err(e) = result {
        eprintln!("Unable to initialise logging: {e}");
    }
}

fn print_header(mctal: &Mctal) {
    let h = mctal.get_header();
    println!("{} {} ({})", h.code, h.version, h.probid);
    println!("{}", mctal.title().trim());
    println!(
        "dump {}, {} histories, {} random numbers, {} tallies",
        h.dump, h.n_particles, h.n_random, h.n_tallies
    );
}

fn print_cells(tally: &Tally) {
    println!();
    println!("Tally {}: {}", tally.id, tally.describe_particles().capitalise());

    for cell in tally.cells() {
        let object = tally.objects.get(cell.object).map(|o| f!("{o}"));
        println!(
            "  object {} ({}) segment {} multiplier {} cosine [{}, {}]",
            cell.object,
            object.display(),
            cell.segment,
            cell.multiplier.display(),
            cell.cosine[0].sci(3, 2),
            cell.cosine[1].sci(3, 2),
        );

        // upper edge of each bin, skipping the leading 0.0
        for (edge, result) in tally.energies.iter().skip(1).zip(cell.results()) {
            println!(
                "    {:>12} {} {:.4}",
                edge.to_string(),
                result.value.sci(5, 2),
                result.error
            );
        }
    }
}
