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

use crate::errors::Error;
use serde_derive::Deserialize;
use std::fs;
use std::path::Path;

use log::debug;

/// The name of the settings file looked up in the project root
pub const SETTINGS_FILE: &str = "clrelease.toml";

/// File names and version source parameters. Every field has a default, so a
/// settings file only has to contain what it wants to change, e.g.:
///
/// ```toml
/// changelog = "CHANGELOG.md"
///
/// [properties]
/// key = "project.rel.com.example:my-project"
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Path of the changelog, relative to the project root
    pub changelog: String,
    pub properties: PropertiesSettings,
    pub pom: PomSettings,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct PropertiesSettings {
    pub file: String,
    /// Prefix of the key holding the release version, with `:` unescaped
    pub key: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct PomSettings {
    pub file: String,
    pub namespace: String,
    pub snapshot_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            changelog: "CHANGES.md".to_string(),
            properties: PropertiesSettings::default(),
            pom: PomSettings::default(),
        }
    }
}

impl Default for PropertiesSettings {
    fn default() -> Self {
        PropertiesSettings {
            file: "release.properties".to_string(),
            key: "project.rel.com.atlassian.braid:graphql-braid".to_string(),
        }
    }
}

impl Default for PomSettings {
    fn default() -> Self {
        PomSettings {
            file: "pom.xml".to_string(),
            namespace: "http://maven.apache.org/POM/4.0.0".to_string(),
            snapshot_suffix: "-SNAPSHOT".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string, using defaults for everything it doesn't set
    ///
    /// # Errors
    ///
    /// * Errors out if `toml_str` isn't valid TOML or has values of the wrong type
    pub fn from_toml(toml_str: &str) -> Result<Settings, Error> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Reads settings from the TOML file at `path`
    ///
    /// # Errors
    ///
    /// * Errors out if the file can't be read
    /// * Errors out if the file can't be parsed, see [from_toml](crate::config::Settings::from_toml)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Settings, Error> {
        let path = path.as_ref();

        debug!("Reading settings from {}", path.display());

        let settings: Settings = toml::from_str(&fs::read_to_string(path)?)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        debug!("Settings: {:?}", settings);

        Ok(settings)
    }

    /// Loads the settings for the project at `root`: the file at `config` if one was given,
    /// otherwise [SETTINGS_FILE](crate::config::SETTINGS_FILE) in `root` if it exists,
    /// otherwise the defaults.
    ///
    /// # Errors
    ///
    /// * Errors out if the chosen settings file can't be read or parsed
    pub fn load(root: &Path, config: Option<&Path>) -> Result<Settings, Error> {
        match config {
            Some(path) => Settings::from_file(path),
            None => {
                let default_path = root.join(SETTINGS_FILE);

                if default_path.is_file() {
                    Settings::from_file(default_path)
                } else {
                    Ok(Settings::default())
                }
            }
        }
    }
}
