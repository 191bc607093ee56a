use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{bail, Context};
use clap::{arg, value_parser, ArgAction, ArgMatches, Command};
use log::debug;
use yansi::Color::{Green, Red};
use yansi::Paint;

use crate::help;
use crate::walk::Walker;

pub fn check() -> Command {
    super::command("check")
        .about("Check that files contain valid Hyperscan patterns")
        .long_about(help::CHECK_LONG_HELP)
        // Keep options sorted alphabetically by their long name.
        // For instance, --bar goes before --foo.
        .arg(
            arg!(<PATTERNS_PATH>)
                .help("Path to a pattern file or directory, `-` for stdin")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-f --filter <PATTERN>)
                .help("Check files that match the given pattern only")
                .long_help(help::FILTER_LONG_HELP)
                .action(ArgAction::Append),
        )
        .arg(
            arg!(-r --recursive [MAX_DEPTH])
                .help("Walk directories recursively up to a given depth")
                .long_help(help::RECURSIVE_LONG_HELP)
                .default_missing_value("1000")
                .require_equals(true)
                .value_parser(value_parser!(usize)),
        )
}

pub fn exec_check(args: &ArgMatches) -> anyhow::Result<()> {
    let patterns_path = args.get_one::<PathBuf>("PATTERNS_PATH").unwrap();
    let recursive = args.get_one::<usize>("recursive");
    let filters = args.get_many::<String>("filter");

    let state = CheckState::new();

    if patterns_path.as_os_str() == "-" {
        check_patterns("<stdin>", stdin().lock(), &state)?;
    } else {
        let mut w = Walker::path(patterns_path);

        if let Some(filters) = filters {
            for filter in filters {
                w.filter(filter);
            }
        }

        w.max_depth(*recursive.unwrap_or(&0));

        w.walk(
            |file_path| {
                let file = File::open(file_path).with_context(|| {
                    format!("can not read `{}`", file_path.display())
                })?;

                check_patterns(
                    &file_path.display().to_string(),
                    BufReader::new(file),
                    &state,
                )
            },
            |err| {
                state.errors.fetch_add(1, Ordering::Relaxed);
                eprintln!("{} {}", "error:".paint(Red).bold(), err);
                Ok(())
            },
        )?;
    }

    let files_passed = state.files_passed.load(Ordering::Relaxed);
    let errors = state.errors.load(Ordering::Relaxed);

    println!("{} file(s) ok. errors: {}.", files_passed, errors);

    if errors > 0 {
        bail!("{} error(s) found", errors);
    }

    Ok(())
}

/// Checks the patterns read from `reader`, one pattern per line.
///
/// `origin` conveys where the patterns come from, usually a file path. It
/// appears in the PASS/FAIL output and in the diagnostics.
fn check_patterns<R: BufRead>(
    origin: &str,
    reader: R,
    state: &CheckState,
) -> anyhow::Result<()> {
    debug!("checking `{}`", origin);

    let mut diagnostics = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line
            .with_context(|| format!("can not read `{}`", origin))?;

        let pattern = line.trim();

        // Blank lines and comments are not patterns.
        if pattern.is_empty() || pattern.starts_with('#') {
            continue;
        }

        if let Err(err) = hscheck::validate(pattern) {
            diagnostics.push((line_no + 1, err));
        }
    }

    if diagnostics.is_empty() {
        state.files_passed.fetch_add(1, Ordering::Relaxed);
        println!("[ {} ] {}", "PASS".paint(Green).bold(), origin);
    } else {
        state.errors.fetch_add(diagnostics.len(), Ordering::Relaxed);
        println!("[ {} ] {}", "FAIL".paint(Red).bold(), origin);
        for (line_no, err) in diagnostics {
            println!("{}:{}: {}", origin, line_no, err);
        }
    }

    Ok(())
}

struct CheckState {
    files_passed: AtomicUsize,
    errors: AtomicUsize,
}

impl CheckState {
    fn new() -> Self {
        Self {
            files_passed: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
        }
    }
}
