use anyhow::{anyhow, Context};
use log::info;
use rayon::prelude::*;
use showdown_team::legality::check_team;
use showdown_team::model::StatBlockFlat;
use showdown_team::{export_team, export_team_to_showdown, parse_showdown_team, parse_team};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Command {
    Parse { input: Input, lenient: bool },
    Export { input: Input },
    Check { paths: Vec<PathBuf> },
    Roundtrip { input: Input },
}

#[derive(Debug, Clone)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_arg(arg: Option<String>) -> Self {
        match arg.as_deref() {
            None | Some("-") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        }
    }

    fn read(&self) -> anyhow::Result<String> {
        match self {
            Input::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
            Input::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

fn usage() -> ! {
    eprintln!(
        "Usage: showdown-team <command>\n\
         \x20 parse [--lenient] [FILE|-]   parse a Showdown paste, print JSON\n\
         \x20 export [FILE|-]              read JSON rows, print a Showdown paste\n\
         \x20 check FILE...                parse and legality-check pastes\n\
         \x20 roundtrip [FILE|-]           parse and re-export a paste"
    );
    std::process::exit(2);
}

fn parse_args() -> anyhow::Result<Command> {
    let mut args = env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("parse") => {
            let mut lenient = false;
            let mut input = None;
            for arg in args {
                match arg.as_str() {
                    "--lenient" => lenient = true,
                    other if input.is_none() => input = Some(other.to_string()),
                    other => return Err(anyhow!("Unexpected argument '{}' for parse", other)),
                }
            }
            Command::Parse {
                input: Input::from_arg(input),
                lenient,
            }
        }
        Some("export") => Command::Export {
            input: Input::from_arg(args.next()),
        },
        Some("check") => {
            let paths: Vec<PathBuf> = args.map(PathBuf::from).collect();
            if paths.is_empty() {
                anyhow::bail!("Usage: showdown-team check FILE...");
            }
            Command::Check { paths }
        }
        Some("roundtrip") => Command::Roundtrip {
            input: Input::from_arg(args.next()),
        },
        Some("--help") | Some("-h") | None => usage(),
        Some(other) => return Err(anyhow!("Unknown command '{}'", other)),
    };
    Ok(command)
}

/// Returns whether every input was accepted.
fn run(command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Parse { input, lenient } => {
            let text = input.read()?;
            if lenient {
                let team = parse_team(&text);
                println!("{}", serde_json::to_string_pretty(&team)?);
                return Ok(true);
            }
            let result = parse_showdown_team(&text);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(result.success)
        }
        Command::Export { input } => {
            let raw = input.read()?;
            let rows: Vec<StatBlockFlat> =
                serde_json::from_str(&raw).context("Expected a JSON array of stat rows")?;
            println!("{}", export_team_to_showdown(&rows));
            Ok(true)
        }
        Command::Check { paths } => {
            let reports: Vec<(PathBuf, anyhow::Result<FileReport>)> = paths
                .into_par_iter()
                .map(|path| {
                    let report = check_file(&path);
                    (path, report)
                })
                .collect();
            let mut all_ok = true;
            for (path, report) in reports {
                match report {
                    Ok(report) => {
                        if report.problems.is_empty() {
                            println!("{}: ok", path.display());
                        } else {
                            all_ok = false;
                            println!("{}: {} problem(s)", path.display(), report.problems.len());
                        }
                        for problem in &report.problems {
                            println!("  {}", problem);
                        }
                        for warning in &report.warnings {
                            println!("  warning: {}", warning);
                        }
                    }
                    Err(err) => {
                        all_ok = false;
                        println!("{}: {:#}", path.display(), err);
                    }
                }
            }
            Ok(all_ok)
        }
        Command::Roundtrip { input } => {
            let text = input.read()?;
            let team = parse_team(&text);
            info!("Re-exporting {} Pokemon", team.len());
            println!("{}", export_team(&team));
            Ok(true)
        }
    }
}

struct FileReport {
    problems: Vec<String>,
    warnings: Vec<String>,
}

fn check_file(path: &Path) -> anyhow::Result<FileReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let result = parse_showdown_team(&text);
    let mut problems = result.errors;
    problems.extend(
        check_team(&result.pokemon)
            .into_iter()
            .map(|(idx, issue)| format!("{}: {}", result.pokemon[idx].species, issue)),
    );
    Ok(FileReport {
        problems,
        warnings: result.warnings,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let command = parse_args()?;
    if !run(command)? {
        std::process::exit(1);
    }
    Ok(())
}
