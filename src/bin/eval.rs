use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use ordbench::eval::{self, Config, Table, HEIGHT_PROBABILITIES};

#[derive(Parser, Debug)]
#[clap(about = "Benchmark the score-ordered structures and write the results as CSV")]
struct Args {
    /// Directory the CSV files are written to.
    #[clap(long, default_value = "evals")]
    out_dir: PathBuf,

    /// Smallest problem size is 2^min_exp.
    #[clap(long, default_value_t = 10)]
    min_exp: u32,

    /// Largest problem size is 2^max_exp.
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=30))]
    max_exp: u32,

    /// Number of trials averaged per problem size.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Seed of the workload generator.
    #[clap(long, default_value_t = 123456)]
    seed: u64,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Figure 1: average insert time per element.
    Insert,

    /// Figure 2: average search time per query.
    Search,

    /// Figure 3: average height, with skip lists of several probabilities.
    Height {
        #[clap(long, value_delimiter = ',', default_values_t = HEIGHT_PROBABILITIES, value_parser = parse_probability)]
        probabilities: Vec<f64>,
    },

    /// Total insert time of std::collections::BTreeMap vs HashMap.
    BaselineInsert,

    /// Total search time of std::collections::BTreeMap vs HashMap.
    BaselineSearch {
        #[clap(long, default_value_t = 1000)]
        queries: usize,
    },

    /// Figures 1 to 3 and both baselines with their default parameters.
    All,
}

fn parse_probability(arg: &str) -> Result<f64, String> {
    let probability: f64 = arg.parse().map_err(|e| format!("{}", e))?;

    if probability > 0.0 && probability < 1.0 {
        Ok(probability)
    } else {
        Err(format!("{} is not in (0, 1)", probability))
    }
}

fn save(table: &Table, args: &Args, name: &str) -> io::Result<()> {
    let path = args.out_dir.join(name);
    table.save(&path)?;
    println!("Written {}", path.display());

    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.min_exp > args.max_exp {
        eprintln!(
            "--min-exp ({}) should not exceed --max-exp ({})",
            args.min_exp, args.max_exp
        );
        std::process::exit(2);
    }

    let config = Config {
        min_exp: args.min_exp,
        max_exp: args.max_exp,
        trials: args.trials as usize,
        seed: args.seed,
    };

    match &args.command {
        Command::Insert => save(&eval::insert_time(&config), &args, "fig1_insert_time.csv")?,
        Command::Search => save(&eval::search_time(&config), &args, "fig2_search_time.csv")?,
        Command::Height { probabilities } => save(
            &eval::height(&config, probabilities),
            &args,
            "fig3_height.csv",
        )?,
        Command::BaselineInsert => {
            save(&eval::baseline_insert(&config), &args, "baseline_insert.csv")?
        }
        Command::BaselineSearch { queries } => save(
            &eval::baseline_search(&config, *queries),
            &args,
            "baseline_search.csv",
        )?,
        Command::All => {
            save(&eval::insert_time(&config), &args, "fig1_insert_time.csv")?;
            save(&eval::search_time(&config), &args, "fig2_search_time.csv")?;
            save(
                &eval::height(&config, &HEIGHT_PROBABILITIES),
                &args,
                "fig3_height.csv",
            )?;
            save(&eval::baseline_insert(&config), &args, "baseline_insert.csv")?;
            save(
                &eval::baseline_search(&config, 1000),
                &args,
                "baseline_search.csv",
            )?;
        }
    }

    println!("Evaluation finished.");

    Ok(())
}
