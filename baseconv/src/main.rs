#![warn(clippy::all, clippy::pedantic)]

mod labels;

use baseconv_core::{
    convert_all, explain_conversion, Base, ConversionSummary, ExplanationRecord, ExplanationTrace,
};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use labels::Language;
use std::process::exit;

/// Convert numbers between binary, octal, decimal and hex, and show the working.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Language of the output
    #[arg(short, long, global = true, value_enum, default_value_t = Language::En)]
    lang: Language,

    #[command(subcommand)]
    operation: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a number in every base
    Convert {
        number: String,

        /// Base the number is written in (2, 8, 10 or 16)
        #[arg(short, long)]
        from: Base,
    },

    /// Explain step by step how a number is converted
    Explain {
        number: String,

        /// Base the number is written in (2, 8, 10 or 16)
        #[arg(short, long)]
        from: Base,

        /// Base to convert into (2, 8, 10 or 16)
        #[arg(short, long, required_unless_present = "all")]
        to: Option<Base>,

        /// Explain the conversion into every other base
        #[arg(long, conflicts_with = "to")]
        all: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let lang = cli.lang;

    match cli.operation {
        Commands::Convert { number, from } => {
            let summary = convert_all(&number, from).unwrap_or_else(|err| {
                eprintln!("{}", lang.error(&err).red());
                exit(1)
            });
            print_summary(lang, &summary);
        }

        Commands::Explain {
            number,
            from,
            to,
            all,
        } => {
            let targets: Vec<Base> = match to {
                Some(target) if !all => vec![target],
                _ => Base::ALL.into_iter().filter(|&base| base != from).collect(),
            };

            let traces = targets
                .into_iter()
                .map(|target| explain_conversion(&number, from, target))
                .collect::<Result<Vec<_>, _>>()
                .unwrap_or_else(|err| {
                    eprintln!("{}", lang.error(&err).red());
                    exit(1)
                });

            println!("{}", lang.explanation_title().bold());
            for trace in &traces {
                print_explanation(lang, trace);
            }
        }
    }
}

fn print_summary(lang: Language, summary: &ConversionSummary) {
    let rows = [
        (Base::Decimal, summary.decimal.to_string()),
        (Base::Binary, summary.binary.clone()),
        (Base::Octal, summary.octal.clone()),
        (Base::Hexadecimal, summary.hex.clone()),
    ];

    let width = rows
        .iter()
        .map(|(base, _)| lang.base_name(*base).chars().count())
        .max()
        .unwrap_or(0);

    println!("{}", lang.results_title().bold());
    for (base, digits) in rows {
        let label = format!("{}:", lang.base_name(base));
        println!("  {label:<pad$} {}", digits.green(), pad = width + 1);
    }
}

fn print_explanation(lang: Language, trace: &ExplanationTrace) {
    println!();
    for record in &trace.records {
        let line = lang.record(record);
        match record {
            ExplanationRecord::ToDecimalHeader { .. }
            | ExplanationRecord::FromDecimalHeader { .. } => println!("{}", line.cyan().bold()),
            ExplanationRecord::FinalSum(_)
            | ExplanationRecord::ReadRemainders(_)
            | ExplanationRecord::PaddedBinary { .. } => println!("{}", line.bold()),
            ExplanationRecord::PositionalTerm(_)
            | ExplanationRecord::Division(_)
            | ExplanationRecord::AlreadyInBase { .. } => println!("{line}"),
        }
    }
}
