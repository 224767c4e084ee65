//! # rnafold-cli
//!
//! Predicts the secondary structure of an RNA read by base-pair maximization
//! and prints it in dot-bracket notation.
//!
//! ```bash
//! rnafold-cli read.txt
//! rnafold-cli -S -l 3 hairpins.fasta
//! rnafold-cli --strategy memoized --print-matrix read.txt
//! ```

use clap::{Arg, ArgAction, Command};
use rnafold::io::{read_sequences, NamedSequence};
use rnafold::{fold, FillStrategy, Fold, FoldConfig, OutputOptions, MIN_LOOP_LENGTH};
use std::io::{self, BufWriter, Write};

fn write_fold<W: Write>(
    writer: &mut W,
    record: &NamedSequence,
    result: &Fold,
    output: &OutputOptions,
) -> io::Result<()> {
    if let Some(id) = &record.id {
        writeln!(writer, ">{}", id)?;
        writeln!(writer, "{}", record.sequence)?;
    }
    if output.print_matrix {
        write!(writer, "{}", result.matrix)?;
    }
    if output.show_score {
        writeln!(writer, "{} ({})", result.structure, result.score)
    } else {
        writeln!(writer, "{}", result.structure)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("rnafold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("RNA secondary structure prediction by base-pair maximization")
        .arg(
            Arg::new("read_file")
                .value_name("READ_FILE")
                .required(true)
                .help("Plain sequence file (A, U, G, C) or FASTA"),
        )
        .arg(
            Arg::new("min-loop-length")
                .short('l')
                .long("min-loop-length")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("4")
                .help("Minimum number of positions between paired bases"),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .value_name("STRATEGY")
                .default_value("bottom-up")
                .help("Score matrix fill order: bottom-up or memoized"),
        )
        .arg(
            Arg::new("print-matrix")
                .short('m')
                .long("print-matrix")
                .action(ArgAction::SetTrue)
                .help("Print the score matrix before the structure"),
        )
        .arg(
            Arg::new("score")
                .short('S')
                .long("score")
                .action(ArgAction::SetTrue)
                .help("Append the number of base pairs to the structure"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let config = FoldConfig {
        min_loop_length: matches
            .get_one::<usize>("min-loop-length")
            .copied()
            .unwrap_or(MIN_LOOP_LENGTH),
        strategy: match matches.get_one::<String>("strategy") {
            Some(s) => s.parse::<FillStrategy>().map_err(|e| e.to_string())?,
            None => FillStrategy::default(),
        },
    };

    let output = OutputOptions {
        print_matrix: matches.get_flag("print-matrix"),
        show_score: matches.get_flag("score"),
        quiet: matches.get_flag("quiet"),
    };

    let input_file = matches
        .get_one::<String>("read_file")
        .ok_or("missing read file")?;
    let records = read_sequences(input_file)
        .map_err(|e| format!("Error reading input file <{}>: {}", input_file, e))?;

    if !output.quiet {
        eprintln!(
            "Folding {} sequence(s) from {} (min loop length {}, {} fill)",
            records.len(),
            input_file,
            config.min_loop_length,
            config.strategy
        );
    }

    let mut writer = BufWriter::new(io::stdout());
    let mut total_pairs = 0u64;

    for record in &records {
        let result = fold(&record.sequence, &config);
        total_pairs += u64::from(result.score);
        write_fold(&mut writer, record, &result, &output)?;
    }
    writer.flush()?;

    if !output.quiet {
        eprintln!(
            "Done: {} base pairs across {} sequence(s).",
            total_pairs,
            records.len()
        );
    }

    Ok(())
}
