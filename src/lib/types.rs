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
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// The line that marks the section of changes that haven't been released yet
pub const UNRELEASED_MARKER: &str = "(Unreleased)";

/// The underline written below a fresh [UNRELEASED_MARKER]
pub const SECTION_UNDERLINE: &str = "-------------------";

/// The format of the date in a release heading, e.g. `1.0.0 (2024-03-01)`
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The ChangelogReleaser struct, which rewrites the changelog at `path` for a release.
///
/// Constructed via [ChangelogReleaser::new](crate::ChangelogReleaser::new), which
/// makes sure the changelog exists.
pub struct ChangelogReleaser {
    pub path: PathBuf,
    pub(super) clock: Box<dyn Clock>,
}

/// Provides the date a release happens on
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the machine clrelease runs on
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date. Useful for testing or reproducible releases
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Something the release version can be read from, e.g. a properties file or a pom.xml
pub trait VersionSource {
    /// Human readable name of the source, used in diagnostics
    fn name(&self) -> String;

    /// Reads the release version.
    ///
    /// Returns `Ok(None)` if the source could be read, but doesn't contain a version.
    ///
    /// # Errors
    ///
    /// * Errors out if the source can't be read or parsed
    fn read_version(&self) -> Result<Option<String>, Error>;
}

/// The SourceKind enum, containing all types of version sources clrelease can read
#[derive(Copy, Clone, Eq, Ord, PartialOrd, Hash, Debug, PartialEq)]
pub enum SourceKind {
    Properties,
    Pom,
}

/// Reads the release version from a `key=value` properties file, e.g. `release.properties`
#[derive(Clone, Eq, Hash, Debug, PartialEq)]
pub struct PropertiesSource {
    pub path: PathBuf,
    pub key: String,
}

/// Reads the release version from a Maven build descriptor, e.g. `pom.xml`
#[derive(Clone, Eq, Hash, Debug, PartialEq)]
pub struct PomSource {
    pub path: PathBuf,
    pub namespace: String,
    pub snapshot_suffix: String,
}
