pub mod actions;
pub mod config;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Arg, ArgMatches, Command};

use self::config::DashboardConfig;

/// Build the command tree.
pub fn command() -> Command {
    Command::new("firedash")
        .about("Unit status board for CAD dispatch call notes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Load dashboard configuration from a TOML (or .json) file (overrides FIREDASH_CONFIG)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .help("Write detailed logs to the specified file (overrides FIREDASH_LOG_FILE)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .global(true)
                .help("Output results in JSON format")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("classify")
                .about("Resolve one unit's current status from call notes")
                .arg(
                    Arg::new("unit")
                        .long("unit")
                        .short('u')
                        .required(true)
                        .help("Unit code as it appears in the dispatch roster")
                        .value_name("UNIT"),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .help("Call notes file (default: stdin)")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("own")
                        .long("own")
                        .help("Treat the unit as our own regardless of the roster")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("not-own"),
                )
                .arg(
                    Arg::new("not-own")
                        .long("not-own")
                        .help("Treat the unit as another agency's regardless of the roster")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("board")
                .about("Show unit badges for every incident in a JSON incident list")
                .arg(
                    Arg::new("incidents")
                        .long("incidents")
                        .short('i')
                        .help("JSON array of incidents (default: stdin)")
                        .value_name("FILE"),
                ),
        )
        .subcommand(Command::new("rules").about("Print the active status rule table in evaluation order"))
}

/// Parse command line arguments and return ArgMatches.
pub fn parse_args() -> ArgMatches {
    command().get_matches()
}

/// Run the selected subcommand and return what should be printed.
pub fn run(matches: &ArgMatches) -> Result<String> {
    let config = DashboardConfig::discover(matches.get_one::<String>("config").map(String::as_str))?;
    let rules = config.load_rules()?;
    let json = matches.get_flag("json");

    match matches.subcommand() {
        Some(("classify", sub)) => {
            let unit = sub
                .get_one::<String>("unit")
                .ok_or_else(|| anyhow!("--unit is required"))?;
            let own_override = if sub.get_flag("own") {
                Some(true)
            } else if sub.get_flag("not-own") {
                Some(false)
            } else {
                None
            };
            let notes = actions::read_input(sub.get_one::<String>("file").map(String::as_str))?;
            let result = actions::classify(&rules, &config.roster, unit, &notes, own_override);
            actions::render_classification(&result, json)
        }
        Some(("board", sub)) => {
            let source =
                actions::read_input(sub.get_one::<String>("incidents").map(String::as_str))?;
            let store = actions::load_incidents(&source)?;
            let summaries = actions::summarize(&store, &config.roster, &rules, Utc::now());
            actions::render_board(&summaries, json)
        }
        Some(("rules", _)) => actions::render_rules(&rules, json),
        Some((other, _)) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("no subcommand given")),
    }
}
