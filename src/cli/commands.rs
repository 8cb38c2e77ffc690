use std::io::{self, BufRead};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::Employee;
use crate::engine::OrgEngine;
use crate::render::{indented_listing, OrgTreeConvert};
use crate::roster;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    match &cli.command {
        Some(Commands::Show { roster, flat }) => _show(roster.as_deref(), *flat, &settings),
        Some(Commands::Shell { roster }) => _shell(roster.as_deref(), settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn load_roster(path: Option<&Path>) -> CliResult<Employee> {
    match path {
        Some(path) => Ok(roster::load(path)?),
        None => Ok(roster::sample()),
    }
}

#[instrument(skip(settings))]
fn _show(roster_path: Option<&Path>, flat: bool, settings: &Settings) -> CliResult<()> {
    let root = load_roster(roster_path)?;
    debug!(employees = root.count(), "roster loaded");
    if flat {
        print!("{}", indented_listing(&root, settings.indent_width));
    } else {
        println!("{}", root.to_tree_string());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _shell(roster_path: Option<&Path>, settings: Settings) -> CliResult<()> {
    let root = load_roster(roster_path)?;
    let mut engine = OrgEngine::with_settings(root, settings);

    println!("{}", engine.root().to_tree_string());
    output::info("Commands: move <employee> <supervisor> | undo | redo | show | quit");

    let stdin = io::stdin();
    loop {
        output::prompt("orgtree>");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        match run_line(&mut engine, line.trim()) {
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Render) => println!("{}", engine.root().to_tree_string()),
            Ok(Outcome::Quit) => break,
            Err(message) => output::error(&message),
        }
    }
    Ok(())
}

enum Outcome {
    Silent,
    Render,
    Quit,
}

/// One shell interaction. Engine errors come back as messages; the loop
/// keeps running and the tree is unchanged.
fn run_line(engine: &mut OrgEngine, line: &str) -> Result<Outcome, String> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => Ok(Outcome::Silent),
        Some("move") => {
            let employee = parse_id(parts.next())?;
            let supervisor = parse_id(parts.next())?;
            engine
                .move_employee(employee, supervisor)
                .map_err(|e| e.to_string())?;
            output::success(&format!("moved {} under {}", employee, supervisor));
            Ok(Outcome::Render)
        }
        Some("undo") => {
            engine.undo().map_err(|e| e.to_string())?;
            output::success("undone");
            Ok(Outcome::Render)
        }
        Some("redo") => {
            engine.redo().map_err(|e| e.to_string())?;
            output::success("redone");
            Ok(Outcome::Render)
        }
        Some("show") => Ok(Outcome::Render),
        Some("help") => {
            output::info("move <employee> <supervisor> | undo | redo | show | quit");
            Ok(Outcome::Silent)
        }
        Some("quit") | Some("exit") => Ok(Outcome::Quit),
        Some(other) => Err(format!("unknown command: {}", other)),
    }
}

fn parse_id(token: Option<&str>) -> Result<u32, String> {
    token
        .ok_or_else(|| "usage: move <employee-id> <supervisor-id>".to_string())?
        .parse()
        .map_err(|_| "ids must be integers".to_string())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
