// Copyright © 2025 Potato Util. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for Potato Util
//!
//! This module provides the command-line interface for the Potato Util helpers.
//! It handles argument parsing, command execution, and user interaction.
//!
//! # Examples
//!
//! Basic usage example to parse a `slug` command with a separator argument:
//!
//! ```
//! use potato_util::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "potato-util",
//!     "slug",
//!     "My Photo File!!.png",
//!     "--separator",
//!     "_"
//! ]);
//!
//! assert!(matches.subcommand_matches("slug").is_some());
//! let slug_cmd = matches.subcommand_matches("slug").unwrap();
//! assert_eq!(slug_cmd.get_one::<char>("separator").unwrap(), &'_');
//! ```

use crate::core::config::{ConfigBuilder, DEFAULT_ENV_PREFIX};
use crate::core::error::{Result, UtilError};
use crate::runtime;
use crate::slug::Slugifier;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::path::PathBuf;

/// The current version of Potato Util, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds and configures the Potato Util command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    Command::new("PotatoUtil")
        .author("Potato Util Contributors")
        .about("Small, independent utility functions: slugs, debug mode, config.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("slug")
                .about("Normalise text into a URL/filesystem-safe slug")
                .arg(
                    Arg::new("text")
                        .help("Text to normalise")
                        .required(true)
                        .value_parser(value_parser!(String))
                )
                .arg(
                    Arg::new("separator")
                        .short('s')
                        .long("separator")
                        .help("Separator character, '-' or '_' (defaults to '-')")
                        .value_parser(value_parser!(char))
                )
                .arg(
                    Arg::new("max-length")
                        .short('m')
                        .long("max-length")
                        .help("Maximum slug length in characters")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("no-transliterate")
                        .long("no-transliterate")
                        .help("Treat non-ASCII characters as separators instead of transliterating")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Configuration file providing slug defaults")
                        .value_parser(value_parser!(PathBuf))
                )
        )
        .subcommand(
            Command::new("debug")
                .about("Report whether debug mode is enabled")
        )
        .subcommand(
            Command::new("config")
                .about("Print the effective configuration as JSON")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .help("Configuration file to load (repeatable; later files win)")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(PathBuf))
                )
                .arg(
                    Arg::new("env-prefix")
                        .short('e')
                        .long("env-prefix")
                        .help("Prefix for environment variable overrides")
                        .value_parser(value_parser!(String))
                        .default_value(DEFAULT_ENV_PREFIX)
                )
        )
        .after_help(
            "\x1b[1;4mDocumentation:\x1b[0m\n\n  https://docs.rs/potato-util\n\n\
             \x1b[1;4mLicense:\x1b[0m\n  The project is licensed under the terms of \
             both the MIT license and the Apache License (Version 2.0)."
        )
}

/// Executes the command-line interface by matching the subcommand and arguments.
///
/// # Returns
/// * `Result<()>` - Indicates success, or an error if execution fails.
pub fn execute() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("slug", sub_matches)) => run_slug(sub_matches),
        Some(("debug", _)) => run_debug(),
        Some(("config", sub_matches)) => run_config(sub_matches),
        _ => Err(UtilError::configuration("Unknown command", None)),
    }
}

/// Normalises the given text and prints the slug.
fn run_slug(matches: &ArgMatches) -> Result<()> {
    let text = matches.get_one::<String>("text").map_or("", String::as_str);
    let slugifier = slugifier_from_matches(matches)?;

    info!("Normalising {} characters of input", text.chars().count());
    println!("{}", slugifier.slugify(text));
    Ok(())
}

/// Builds a [`Slugifier`] from the `slug` subcommand arguments.
///
/// A configuration file, when given, provides the defaults; explicit flags
/// override it.
fn slugifier_from_matches(matches: &ArgMatches) -> Result<Slugifier> {
    let mut slugifier = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            debug!("Loading slug defaults from '{}'", path.display());
            let config = ConfigBuilder::new().with_file(path).build()?;
            let slugifier = config.read().slugifier()?;
            slugifier
        }
        None => Slugifier::new(),
    };

    if let Some(&separator) = matches.get_one::<char>("separator") {
        slugifier = slugifier.with_separator(separator)?;
    }
    if let Some(&limit) = matches.get_one::<usize>("max-length") {
        slugifier = slugifier.with_max_length(limit)?;
    }
    if matches.get_flag("no-transliterate") {
        slugifier = slugifier.with_transliteration(false);
    }

    Ok(slugifier)
}

/// Prints whether debug mode is enabled.
fn run_debug() -> Result<()> {
    println!("{}", runtime::is_debug_mode());
    Ok(())
}

/// Builds the effective configuration and prints it as pretty JSON.
fn run_config(matches: &ArgMatches) -> Result<()> {
    let mut builder = ConfigBuilder::new();

    if let Some(files) = matches.get_many::<PathBuf>("file") {
        for path in files {
            builder = builder.with_file(path);
        }
    }
    if let Some(prefix) = matches.get_one::<String>("env-prefix") {
        builder = builder.with_env_prefix(prefix.as_str());
    }

    let config = builder.build()?;
    let rendered = serde_json::to_string_pretty(&*config.read())
        .map_err(|e| {
            UtilError::configuration(
                format!("Failed to render configuration: {}", e),
                None,
            )
        })?;

    println!("{}", rendered);
    Ok(())
}

/// Displays the Potato Util banner with version and description information.
pub fn print_banner() {
    info!("Displaying Potato Util banner");

    let title = format!("Potato Util 🥔 v{}", VERSION);
    let description = "Small, independent utility functions: slug generation, debug-mode detection, deep merging and layered configuration.";

    let width = title.chars().count().max(description.len()) + 4;
    let horizontal_line = "─".repeat(width - 2);

    println!("\n┌{}┐", horizontal_line);
    println!("│{:^width$}│", title, width = width - 2);
    println!("├{}┤", horizontal_line);
    println!("│{:^width$}│", description, width = width - 2);
    println!("└{}┘\n", horizontal_line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ArgMatches;

    fn get_matches(args: Vec<&str>) -> ArgMatches {
        build().get_matches_from(args)
    }

    #[test]
    fn test_slug_command() {
        let matches = get_matches(vec![
            "potato-util",
            "slug",
            "My Photo File!!.png",
            "--separator",
            "_",
            "--max-length",
            "24",
        ]);
        let slug_cmd = matches.subcommand_matches("slug").unwrap();

        assert_eq!(
            slug_cmd.get_one::<String>("text").unwrap(),
            "My Photo File!!.png"
        );
        assert_eq!(slug_cmd.get_one::<char>("separator").unwrap(), &'_');
        assert_eq!(slug_cmd.get_one::<usize>("max-length").unwrap(), &24);
        assert!(!slug_cmd.get_flag("no-transliterate"));
    }

    #[test]
    fn test_slug_command_defaults() {
        let matches = get_matches(vec!["potato-util", "slug", "hello"]);
        let slug_cmd = matches.subcommand_matches("slug").unwrap();

        assert!(slug_cmd.get_one::<char>("separator").is_none());
        assert!(slug_cmd.get_one::<usize>("max-length").is_none());

        let slugifier = slugifier_from_matches(slug_cmd).unwrap();
        assert_eq!(slugifier.slugify("My Photo File!!.png"), "my-photo-file-png");
    }

    #[test]
    fn test_slugifier_from_matches_applies_flags() {
        let matches = get_matches(vec![
            "potato-util",
            "slug",
            "Café Münster",
            "--separator",
            "_",
            "--no-transliterate",
        ]);
        let slug_cmd = matches.subcommand_matches("slug").unwrap();

        let slugifier = slugifier_from_matches(slug_cmd).unwrap();
        assert_eq!(slugifier.slugify("Café Münster"), "caf_m_nster");
    }

    #[test]
    fn test_debug_command() {
        let matches = get_matches(vec!["potato-util", "debug"]);
        assert!(matches.subcommand_matches("debug").is_some());
    }

    #[test]
    fn test_config_command() {
        let matches = get_matches(vec![
            "potato-util",
            "config",
            "--file",
            "base.toml",
            "--file",
            "overlay.yaml",
            "--env-prefix",
            "APP_",
        ]);
        let config_cmd = matches.subcommand_matches("config").unwrap();

        let files: Vec<_> = config_cmd
            .get_many::<PathBuf>("file")
            .unwrap()
            .collect();
        assert_eq!(files.len(), 2);
        assert_eq!(
            config_cmd.get_one::<String>("env-prefix").unwrap(),
            "APP_"
        );
    }

    #[test]
    fn test_config_command_default_prefix() {
        let matches = get_matches(vec!["potato-util", "config"]);
        let config_cmd = matches.subcommand_matches("config").unwrap();

        assert_eq!(
            config_cmd.get_one::<String>("env-prefix").unwrap(),
            DEFAULT_ENV_PREFIX
        );
    }
}
