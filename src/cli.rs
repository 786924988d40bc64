// src/cli.rs
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::client::Client;
use crate::config::options::{AppOptions, ExportFormat, PageKind};
use crate::core::sanitize::{aliases, char_name, split_names};
use crate::data::DataSet;
use crate::file::{export_dataset, render};
use crate::progress::StderrProgress;
use crate::roster::Roster;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Roster,
    Stats,
    Aliases,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub options: AppOptions,
    /// `--has`: characters the roster must contain
    pub required: Vec<String>,
}

pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<(), Box<dyn Error>> {
    let cli = parse_args(args)?;
    logf!("CLI: {:?} profile={:?}", cli.command, cli.options.fetch.profile);

    match cli.command {
        Command::Help => {
            print!("{HELP}");
            Ok(())
        }
        Command::Aliases => {
            for (alias, name) in aliases() {
                println!("{alias}\t{name}");
            }
            Ok(())
        }
        Command::Roster => run_roster(&cli),
        Command::Stats => run_stats(&cli),
    }
}

fn run_roster(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    let client = Client::new(cli.options.fetch.profile.as_str())?;
    let roster = client.fetch_roster()?;

    let missing = missing_required(&roster, &cli.required);
    if !missing.is_empty() {
        return Err(format!("Roster is missing: {}", missing.join(", ")).into());
    }

    let ds = DataSet::from_roster_filtered(&roster, cli.options.fetch.min_stars);
    emit(cli, PageKind::Roster, &ds)
}

/// Entries of `required` (names or nicknames) not on the roster, as the user typed them.
pub fn missing_required<'r>(roster: &Roster, required: &'r [String]) -> Vec<&'r str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|typed| !roster.contains(&char_name(typed)))
        .collect()
}

fn run_stats(cli: &CliArgs) -> Result<(), Box<dyn Error>> {
    let client = Client::new(cli.options.fetch.profile.as_str())?;
    let mut progress = StderrProgress::new();
    let stats = client.fetch_many_stats(&cli.options.fetch.characters, Some(&mut progress))?;
    emit(cli, PageKind::Character, &DataSet::from_stats(&stats))
}

fn emit(cli: &CliArgs, page: PageKind, ds: &DataSet) -> Result<(), Box<dyn Error>> {
    let export = &cli.options.export;
    if export.out_path.is_some() {
        let path = export_dataset(export, page, ds)?;
        eprintln!("Wrote {}", path.display());
    } else {
        let mut out = io::stdout().lock();
        out.write_all(render(export, ds).as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, Box<dyn Error>> {
    let mut args = args.into_iter();
    let mut options = AppOptions::default();
    let mut required = Vec::new();

    let command = match args.next().as_deref() {
        None | Some("-h") | Some("--help") | Some("help") => Command::Help,
        Some("roster") => Command::Roster,
        Some("stats") => Command::Stats,
        Some("aliases") => Command::Aliases,
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "-p" | "--profile" => {
                options.fetch.profile = args.next().ok_or("Missing value for --profile")?;
            }
            "-c" | "--char" => {
                options.fetch.characters.push(args.next().ok_or("Missing value for --char")?);
            }
            "--min-stars" => {
                let v = args.next().ok_or("Missing value for --min-stars")?;
                options.fetch.min_stars = v.parse().map_err(|_| format!("Invalid star count: {}", v))?;
            }
            "--has" => {
                let v = args.next().ok_or("Missing value for --has")?;
                required.extend(split_names(&v));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format =
                    ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "--include-headers" => options.export.include_headers = true,
            "-o" | "--out" => {
                options.export.out_path = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-h" | "--help" => {
                return Ok(CliArgs { command: Command::Help, options, required });
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    match command {
        Command::Roster | Command::Stats if options.fetch.profile.trim().is_empty() => {
            return Err("Specify a profile with -p <profile>".into());
        }
        Command::Stats if options.fetch.characters.is_empty() => {
            return Err("Specify at least one character with -c <name>".into());
        }
        _ => {}
    }

    Ok(CliArgs { command, options, required })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, Box<dyn Error>> {
        parse_args(args.iter().map(|a| s!(*a)))
    }

    #[test]
    fn roster_command_with_options() {
        let cli = parse(&[
            "roster", "-p", "123456789", "--min-stars", "5", "--has", "Rey, Finn",
            "--format", "tsv", "--include-headers", "-o", "out/r.tsv",
        ]).unwrap();
        assert_eq!(cli.command, Command::Roster);
        assert_eq!(cli.options.fetch.profile, "123456789");
        assert_eq!(cli.options.fetch.min_stars, 5);
        assert_eq!(cli.required, vec!["Rey", "Finn"]);
        assert_eq!(cli.options.export.format, ExportFormat::Tsv);
        assert!(cli.options.export.include_headers);
        assert_eq!(cli.options.export.out_path, Some(PathBuf::from("out/r.tsv")));
    }

    #[test]
    fn stats_collects_characters() {
        let cli = parse(&["stats", "--profile", "me", "-c", "gk", "--char", "Darth Vader"]).unwrap();
        assert_eq!(cli.command, Command::Stats);
        assert_eq!(cli.options.fetch.characters, vec!["gk", "Darth Vader"]);
    }

    #[test]
    fn missing_pieces_are_errors() {
        assert!(parse(&["roster"]).unwrap_err().to_string().contains("profile"));
        assert!(parse(&["stats", "-p", "me"]).unwrap_err().to_string().contains("character"));
        assert!(parse(&["roster", "-p"]).is_err());
        assert!(parse(&["roster", "-p", "me", "--min-stars", "lots"]).is_err());
        assert!(parse(&["roster", "-p", "me", "--format", "xml"]).is_err());
        assert!(parse(&["roster", "-p", "me", "--bogus"]).is_err());
        assert!(parse(&["fetch"]).is_err());
    }

    #[test]
    fn has_accepts_nicknames() {
        use crate::model::RosterEntry;
        let roster = Roster::aggregate(vec![
            RosterEntry { name: s!("General Kenobi"), stars: 7, ..RosterEntry::default() },
            RosterEntry { name: s!("Jawa"), stars: 4, ..RosterEntry::default() },
        ]);
        let cli = parse(&["roster", "-p", "me", "--has", "gk, Jawa"]).unwrap();
        assert!(missing_required(&roster, &cli.required).is_empty());

        let required = vec![s!("GK"), s!("cls"), s!("Rey")];
        assert_eq!(missing_required(&roster, &required), vec!["cls", "Rey"]);
    }

    #[test]
    fn help_and_aliases() {
        assert_eq!(parse(&[]).unwrap().command, Command::Help);
        assert_eq!(parse(&["roster", "--help"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["aliases"]).unwrap().command, Command::Aliases);
    }
}
