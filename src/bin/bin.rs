//This file is part of clrelease
//
//clrelease is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//clrelease is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with clrelease.  If not, see <http://www.gnu.org/licenses/>.

use clap::{App, YamlLoader};
use env_logger::Builder;
use libclrelease::*;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

#[cfg(test)]
mod tests;

pub(crate) struct BinOptions {
    pub root: Option<PathBuf>,
    pub source_kind: SourceKind,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
    pub debug: bool,
}

fn main() {
    let bin_options = help_string();

    set_up_logging(bin_options.debug, bin_options.verbose);

    // No version is a plain message on stdout, everything else an error log line.
    if let Err(e) = actual_work(&bin_options) {
        match e {
            Error::VersionNotFound(_) => println!("Couldn't find the next version"),
            _ => error!("{}", e),
        }

        std::process::exit(1);
    }
}

fn actual_work(opts: &BinOptions) -> Result<(), Error> {
    let root = root_dir(opts.root.as_ref().map(PathBuf::as_path))?;

    info!("Project root: {}", root.display());

    let settings = Settings::load(&root, opts.config.as_ref().map(PathBuf::as_path))?;

    if opts.dry_run {
        let released = preview_changelog(&root, &settings, opts.source_kind)?;

        let stdout = std::io::stdout();
        stdout.lock().write_all(&released)?;

        return Ok(());
    }

    release_changelog(&root, &settings, opts.source_kind)?;

    Ok(())
}

fn set_up_logging(is_debug: bool, is_verbose: bool) {
    let mut builder = Builder::new();

    // The binary logs under `clrelease`, the library under `libclrelease`. Other crates stay off.
    if is_debug {
        builder
            .filter_module("libclrelease", log::LevelFilter::Debug)
            .filter_module("clrelease", log::LevelFilter::Debug);
    } else if is_verbose {
        builder
            .filter_module("libclrelease", log::LevelFilter::Info)
            .filter_module("clrelease", log::LevelFilter::Info);
    } else {
        builder
            .filter_module("libclrelease", log::LevelFilter::Warn)
            .filter_module("clrelease", log::LevelFilter::Warn);
    }

    builder.default_format_timestamp(false).init();

    if is_debug && is_verbose {
        warn!("Specified both --verbose and --debug! Will ignore --verbose.");
    }
}

// Print the help script if invoked with `--help`/`-h`
fn help_string() -> BinOptions {
    let help_yaml =
        YamlLoader::load_from_str(include_str!(concat!(env!("OUT_DIR"), "/cli_gen.yml"))).unwrap();
    let matches = App::from_yaml(&help_yaml[0]).get_matches();

    let source_kind = if matches.value_of("source").unwrap_or_default() == "pom" {
        SourceKind::Pom
    } else {
        SourceKind::Properties
    };

    let root = matches.value_of("root").map(PathBuf::from);

    let config = matches.value_of("config").map(PathBuf::from);

    let dry_run = matches.is_present("dry_run");

    let verbose = matches.is_present("verbose");

    let debug = matches.is_present("debug");

    BinOptions {
        root,
        source_kind,
        config,
        dry_run,
        verbose,
        debug,
    }
}

/// The directory holding the version source and the changelog: `--root` if given,
/// otherwise the directory we've been started in.
fn root_dir(explicit_root: Option<&Path>) -> Result<PathBuf, Error> {
    let root = match explicit_root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if root.is_dir() {
        Ok(root)
    } else {
        Err(Error::File(format!(
            "Root directory {} doesn't exist",
            root.display()
        )))
    }
}
