//! # Pattern Recipe CLI
//!
//! Runs one showcase interaction per invocation and prints its report.
//!
//! ```bash
//! pattern-recipe patterns
//! pattern-recipe builder --engine "Electric Motor" --wheels "20-inch Chrome" --color "#222222"
//! pattern-recipe builder --standard --color "#FF0000"
//! pattern-recipe composite --no-ram
//! pattern-recipe --json decorator --add milk --add sugar
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use pattern_recipe::decorator::Topping;
use pattern_recipe::lifecycle::setup_tracing;
use pattern_recipe::showcase::{
    assemble_pc, build_car, build_standard_car, catalogue, order_coffee, CarOptions, PcSelection,
};
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version, about = "Builder, Composite and Decorator, interactively")]
struct Cli {
    /// Print the report as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the demonstrated patterns.
    Patterns,
    /// Configure and build a car.
    Builder {
        #[arg(long, default_value = "V6 Turbo")]
        engine: String,
        #[arg(long, default_value = "18-inch Alloy")]
        wheels: String,
        #[arg(long, default_value = "#EFEFEF")]
        color: String,
        /// Let the director pick engine and wheels.
        #[arg(long, conflicts_with_all = ["engine", "wheels"])]
        standard: bool,
    },
    /// Assemble a PC and price it.
    Composite {
        #[arg(long)]
        no_cpu: bool,
        #[arg(long)]
        no_ram: bool,
        #[arg(long)]
        no_gpu: bool,
        #[arg(long)]
        no_ssd: bool,
    },
    /// Order a coffee; add-ons are applied in the order given.
    Decorator {
        /// milk, sugar or whipped-cream (repeatable)
        #[arg(long = "add")]
        toppings: Vec<Topping>,
    },
}

fn render<R: Serialize + Display>(report: &R, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

/// Runs the selected interaction and returns the rendered report.
fn run(cli: Cli) -> Result<String> {
    let json = cli.json;
    match cli.command {
        Command::Patterns => render(&catalogue(), json),
        Command::Builder {
            engine,
            wheels,
            color,
            standard,
        } => {
            let report = if standard {
                build_standard_car(&color)?
            } else {
                build_car(&CarOptions {
                    engine,
                    wheels,
                    color,
                })?
            };
            render(&report, json)
        }
        Command::Composite {
            no_cpu,
            no_ram,
            no_gpu,
            no_ssd,
        } => {
            let selection = PcSelection {
                cpu: !no_cpu,
                ram: !no_ram,
                gpu: !no_gpu,
                ssd: !no_ssd,
            };
            render(&assemble_pc(&selection)?, json)
        }
        Command::Decorator { toppings } => render(&order_coffee(&toppings), json),
    }
}

fn main() -> Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    println!("{}", run(cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pattern_recipe::showcase::Pattern;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("pattern-recipe").chain(args.iter().copied()))?;
        run(cli)
    }

    #[test]
    fn test_patterns_json_lists_concepts() {
        let output = run_args(&["--json", "patterns"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        for (entry, pattern) in entries.iter().zip(Pattern::ALL) {
            assert_eq!(entry["concept"], pattern.concept());
        }
    }

    #[test]
    fn test_patterns_text() {
        let output = run_args(&["patterns"]).unwrap();
        assert!(output.contains("The Decorator Pattern"));
    }

    #[test]
    fn test_decorator_toppings_keep_command_line_order() {
        let output = run_args(&["decorator", "--add", "sugar", "--add", "whipped-cream"]).unwrap();
        assert!(output.contains("Description: Simple Coffee, with Sugar, with Whipped Cream"));
        assert!(output.contains("Total Cost: $9.00"));
    }

    #[test]
    fn test_decorator_rejects_unknown_topping() {
        assert!(Cli::try_parse_from(["pattern-recipe", "decorator", "--add", "caramel"]).is_err());
    }

    #[test]
    fn test_json_flag_after_subcommand() {
        let output = run_args(&["composite", "--no-gpu", "--json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["total"], 1250.0);
    }

    #[test]
    fn test_builder_options() {
        let output = run_args(&["builder", "--engine", "Electric Motor", "--color", "#000000"]).unwrap();
        assert!(output.contains("Engine - Electric Motor, Wheels - 18-inch Alloy"));
        assert!(output.contains("label text: white"));
    }

    #[test]
    fn test_builder_standard_conflicts_with_engine() {
        assert!(Cli::try_parse_from(["pattern-recipe", "builder", "--standard", "--engine", "V6 Turbo"]).is_err());

        let output = run_args(&["builder", "--standard", "--color", "#FF0000"]).unwrap();
        assert!(output.contains("Engine - V8, Wheels - 18-inch Alloy, Color - #FF0000"));
    }

    #[test]
    fn test_builder_bad_colour_is_an_error() {
        let err = run_args(&["builder", "--color", "red"]).unwrap_err();
        assert!(err.to_string().contains("Invalid colour 'red'"));
    }
}
