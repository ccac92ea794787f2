//! CLI front end for the normalization engine.
//!
//! Loads a skills-framework export (zip archive with a JSON payload, or the
//! raw workbook files) and prints role summaries plus the derived aggregate
//! counts as JSON. Warnings from skipped workbooks go to stderr.

use anyhow::{Result, bail};
use skillframe::{FrameworkStore, LoadState};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let mut store = FrameworkStore::new();

    match cli.input {
        Input::Archive(path) => store.load_archive(&path),
        Input::Workbooks(paths) => {
            let refs: Vec<&std::path::Path> = paths.iter().map(PathBuf::as_path).collect();
            for warning in store.load_workbooks(&refs) {
                eprintln!("warning: {warning}");
            }
        }
    }

    if store.state() == LoadState::Error {
        bail!("load failed: {}", store.error());
    }

    let model = store.model();
    let report = serde_json::json!({
        "roleCount": model.role_count(),
        "uniqueSkillCount": model.unique_skill_count(),
        "sectors": model.sectors(),
        "roleSummaries": &model.role_summaries,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

struct Cli {
    input: Input,
}

enum Input {
    Archive(PathBuf),
    Workbooks(Vec<PathBuf>),
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let Some(first) = args.next() else {
            usage();
        };

        if first == "--xlsx" {
            let paths: Vec<PathBuf> = args.map(PathBuf::from).collect();
            if paths.is_empty() {
                bail!("--xlsx requires at least one workbook path");
            }
            return Ok(Cli {
                input: Input::Workbooks(paths),
            });
        }

        if first == "--help" || first == "-h" {
            usage();
        }

        if args.next().is_some() {
            bail!("expected a single archive path; use --xlsx for workbook files");
        }
        Ok(Cli {
            input: Input::Archive(PathBuf::from(first)),
        })
    }
}

fn usage() -> ! {
    eprintln!("usage: sfw-inspect <archive.zip>");
    eprintln!("       sfw-inspect --xlsx <framework.xlsx> [mapping.xlsx] [skills.xlsx]");
    std::process::exit(2);
}
