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

use crate::config::Settings;
use crate::errors::Error;
use crate::types::*;
use std::path::Path;

use log::{debug, info};

/// Builds the VersionSource of kind `source_kind` for the project at `root`
pub fn version_source(
    source_kind: SourceKind,
    root: &Path,
    settings: &Settings,
) -> Box<dyn VersionSource> {
    match source_kind {
        SourceKind::Properties => Box::new(PropertiesSource::new(
            root.join(&settings.properties.file),
            &settings.properties.key,
        )),
        SourceKind::Pom => Box::new(PomSource::new(
            root.join(&settings.pom.file),
            &settings.pom.namespace,
            &settings.pom.snapshot_suffix,
        )),
    }
}

/// Reads the release version from `source`
///
/// # Errors
///
/// * Errors out with [Error::VersionNotFound](crate::errors::Error::VersionNotFound) if
///   `source` doesn't contain a version
/// * Errors out if `source` can't be read
pub fn find_version(source: &dyn VersionSource) -> Result<String, Error> {
    match source.read_version()? {
        Some(version) => {
            debug!("Read version {} from {}", version, source.name());
            Ok(version)
        }
        None => Err(Error::VersionNotFound(source.name())),
    }
}

/// Convenience function that reads the release version of the project at `root` and
/// releases its changelog. Returns the released version.
///
/// The changelog isn't touched if no version can be found.
///
/// # Errors
///
/// * Errors out if the version can't be determined, see [find_version](crate::helpers::find_version)
/// * Errors out if the changelog doesn't exist or can't be rewritten
pub fn release_changelog(
    root: &Path,
    settings: &Settings,
    source_kind: SourceKind,
) -> Result<String, Error> {
    let (releaser, version) = prepare_release(root, settings, source_kind)?;

    releaser.release(&version)?;

    Ok(version)
}

/// Same as [release_changelog](crate::helpers::release_changelog), but returns the released
/// changelog instead of writing it.
///
/// # Errors
///
/// * Errors out if the version can't be determined, see [find_version](crate::helpers::find_version)
/// * Errors out if the changelog doesn't exist or can't be read
pub fn preview_changelog(
    root: &Path,
    settings: &Settings,
    source_kind: SourceKind,
) -> Result<Vec<u8>, Error> {
    let (releaser, version) = prepare_release(root, settings, source_kind)?;

    releaser.preview(&version)
}

// Version first: without one, the changelog isn't even opened
fn prepare_release(
    root: &Path,
    settings: &Settings,
    source_kind: SourceKind,
) -> Result<(ChangelogReleaser, String), Error> {
    let version = find_version(version_source(source_kind, root, settings).as_ref())?;

    info!("Releasing version {}", version);

    let releaser = ChangelogReleaser::new(root.join(&settings.changelog))?;

    Ok((releaser, version))
}
