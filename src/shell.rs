//! Imperative shell for deciding satisfiability of labels.

use std::{process::ExitCode, time::Instant};

use log::error;

use crate::core::{arena::Arena, expr::Id, gen, label::Label, reasoner};
use crate::parser::{self, ParseError};
use crate::util;

/// Largest label that is echoed back in full; larger labels are reported by line index.
const LABEL_PRINT_LIMIT: usize = 100;

/// Default largest family parameter used by benchmark mode.
const BENCH_LIMIT: usize = 10;

/// Main entry point.
///
/// Dispatches on the invocation shape: `-label <label>` decides a single label, `-bench [n]`
/// times the parametric formula families, and any other single argument is read as a label
/// file (`-` for standard input) with one label per line.
/// The exit code reflects whether every input could be parsed and decided, not the verdicts.
pub fn main(args: Vec<String>) -> ExitCode {
    match args.first().map(String::as_str) {
        Some("-label") if args.len() == 2 => run_label(&args[1]),
        Some("-bench") if args.len() <= 2 => run_bench(args.get(1)),
        Some(path) if args.len() == 1 => run_file(path),
        _ => {
            eprintln!("usage: reasoner -label \"<formula>[,<formula>...]\"");
            eprintln!("       reasoner <path>");
            eprintln!("       reasoner -bench [n]");
            ExitCode::FAILURE
        }
    }
}

/// Decides a single label given on the command line.
fn run_label(input: &str) -> ExitCode {
    let mut arena = Arena::new();
    match decide(&mut arena, input, 0) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("cannot parse label: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Decides every line of a label file.
///
/// A label that fails to parse is reported and skipped; the remaining labels are still
/// decided, and the process exits non-zero at the end.
fn run_file(path: &str) -> ExitCode {
    let file = match util::read_file(path) {
        Ok(file) => file,
        Err(err) => {
            error!("cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut arena = Arena::new();
    let mut failed = false;
    for (index, line) in file.lines().enumerate() {
        match decide(&mut arena, line, index) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                error!("skipping label {index}: {err}");
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Parses, normalizes, and decides one label, returning its report line.
pub(crate) fn decide(arena: &mut Arena, input: &str, index: usize) -> Result<String, ParseError> {
    let label = parser::parse_label(arena, input)?;
    let normalized = label.normalized(arena);
    let satisfiable = reasoner::successful(arena, normalized);
    Ok(report(arena, &label, index, satisfiable))
}

/// Formats the report line for a decided label.
///
/// Small labels are echoed in full, in the order their formulae were first parsed; labels
/// with more than [LABEL_PRINT_LIMIT] formulae are reported by their zero-based line index.
pub(crate) fn report(arena: &Arena, label: &Label, index: usize, satisfiable: bool) -> String {
    let verdict = if satisfiable {
        "is satisfiable"
    } else {
        "is not satisfiable"
    };
    if label.len() <= LABEL_PRINT_LIMIT {
        format!("{} {}", label.as_ref(arena), verdict)
    } else {
        format!("Label {index} {verdict}")
    }
}

/// Times the three parametric formula families for parameters `0..=limit`.
fn run_bench(limit: Option<&String>) -> ExitCode {
    let limit: usize = match limit.map(|raw| raw.parse()) {
        None => BENCH_LIMIT,
        Some(Ok(limit)) => limit,
        Some(Err(_)) => {
            error!("the benchmark parameter must be a number");
            return ExitCode::FAILURE;
        }
    };
    let mut arena = Arena::new();
    let families: [(&str, fn(&mut Arena, usize) -> Id); 3] = [
        ("linear_neg", gen::linear_neg),
        ("exp_size", gen::exp_size),
        ("exp_model", gen::exp_model),
    ];
    for (name, family) in families {
        for n in 0..=limit {
            bench_instance(&mut arena, name, n, family);
        }
    }
    ExitCode::SUCCESS
}

/// Generates, normalizes, and decides one family instance, printing the elapsed time.
fn bench_instance(arena: &mut Arena, name: &str, n: usize, family: fn(&mut Arena, usize) -> Id) {
    let id = family(arena, n);
    let id = arena.normalize(id);
    let label: Label = [id].into_iter().collect();
    let start = Instant::now();
    let satisfiable = reasoner::successful(arena, label);
    println!(
        "{:.3} ms to decide {name}({n}) as {}satisfiable",
        start.elapsed().as_secs_f64() * 1000.0,
        if satisfiable { "" } else { "not " }
    );
}
