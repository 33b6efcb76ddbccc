//! Command-line interface for spdx-expr
//! Parses SPDX license expressions and prints them in a chosen format.
//!
//! Usage:
//!   spdx `<expression>`... [--format `<format>`] [--config `<path>`]   - Parse and print each expression
//!   spdx --check `<expression>`...                                 - Only validate
//!   echo `<expression>` | spdx                                     - Read one expression per line from stdin
//!
//! Exit status: 0 when every expression is valid, 1 when any is invalid, 2 on usage,
//! configuration or I/O errors.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command};
use spdx_config::{Loader, SpdxConfig};
use spdx_expr::{OutputFormat, Parser};
use std::io::BufRead;
use std::process::ExitCode;
use tracing::debug;

fn command() -> Command {
    let formats: Vec<&'static str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();

    Command::new("spdx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse SPDX license expressions")
        .arg(
            Arg::new("expression")
                .help("Expressions to parse; read one per line from stdin when omitted")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: expression)")
                .value_parser(formats),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only validate; print nothing for valid expressions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("or-later-single-token")
                .long("or-later-single-token")
                .help("Parse a lone `id+` as \"id or later\" instead of a literal leaf")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(matches: &ArgMatches) -> Result<SpdxConfig, spdx_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("or-later-single-token") {
        loader = loader.set_override("parse.or_later_single_token", true)?;
    }
    loader.build()
}

fn read_stdin() -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn main() -> ExitCode {
    let matches = command().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };
    logging::init_logging(&config.logging);
    debug!(?config, "loaded configuration");

    let inputs: Vec<String> = match matches.get_many::<String>("expression") {
        Some(values) => values.cloned().collect(),
        None => match read_stdin() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::from(2);
            }
        },
    };

    let parser = Parser::new().with_options(config.parse.options());
    let check_only = matches.get_flag("check");
    let mut all_valid = true;

    for input in &inputs {
        let expression = match parser.try_parse(input) {
            Ok(expression) => expression,
            Err(e) => {
                eprintln!("invalid: {}: {}", input, e);
                all_valid = false;
                continue;
            }
        };
        if check_only {
            continue;
        }
        match config.output.format.render(&expression) {
            Ok(rendered) => println!("{}", rendered.trim_end()),
            Err(e) => {
                eprintln!("Error formatting expression: {}", e);
                return ExitCode::from(2);
            }
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn flags_become_overrides() {
        let matches = command().get_matches_from([
            "spdx",
            "--format",
            "json",
            "--or-later-single-token",
            "MIT+",
        ]);
        let config = load_config(&matches).expect("config to load");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.parse.or_later_single_token);
    }
}
