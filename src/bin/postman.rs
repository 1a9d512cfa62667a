use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use postman::{CLIArgs, RootedTree, Route};

const RULE: &str = "==================================================";

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    postman::logger::init(args.verbose)
        .map_err(|error| anyhow!("Failed to set logger: {error}"))?;

    if !args.quiet {
        print_welcome();
    }

    let input_path = match args.input_path {
        Some(path) => path,
        None => ask_input_path()?,
    };
    let graph = postman::read_graph(&input_path).with_context(|| {
        format!(
            "Failed to read nests from given file({}).",
            input_path.display()
        )
    })?;
    let tree = RootedTree::build(&graph).with_context(|| {
        format!(
            "Failed to hang nests in given file({}) from the root.",
            input_path.display()
        )
    })?;
    let apology_n = Route::plan(&graph, &tree).apologies();

    if args.quiet {
        println!("{}", apology_n);
    } else {
        println!("\n{}", RULE);
        println!(" The newt has to apologize {} time(s).", apology_n);
        println!("{}\n", RULE);
    }

    if let Some(output_path) = &args.output {
        match save_result(apology_n, output_path) {
            Ok(()) => {
                if !args.quiet {
                    println!("Result saved to file({}).", output_path.display());
                }
            }
            Err(error) => eprintln!("{:#}", error),
        }
    }

    Ok(())
}

fn print_welcome() {
    println!("\n{}", RULE);
    println!(" POSTMAN ROUTE CALCULATOR");
    println!("{}", RULE);
    println!("\nThe newt delivers letters to the birds nesting in an oak.");
    println!("Passing a nest without a letter for it costs an apology.");
    println!("This program counts the fewest apologies the newt can get away with.\n");
}

fn ask_input_path() -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter the name of the file with nest data (e.g. input.txt): ");
        io::stdout().flush().context("Failed to flush standard output.")?;
        let line = lines
            .next()
            .context("No file name given before standard input ended.")?
            .context("Failed to read file name from standard input.")?;
        let name = line.trim();
        if !name.is_empty() {
            return Ok(PathBuf::from(name));
        }

        println!("File name can't be empty!");
    }
}

fn save_result(apology_n: usize, path: &Path) -> Result<()> {
    fs::write(path, apology_n.to_string())
        .with_context(|| format!("Failed to save result to given file({}).", path.display()))
}
