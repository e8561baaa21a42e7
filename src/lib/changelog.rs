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
use crate::types::*;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use log::{debug, info, warn};

impl ChangelogReleaser {
    /// Initializes a new ChangelogReleaser for the changelog at `path`, dated by the local clock.
    ///
    /// # Errors
    ///
    /// * Errors out if there's no regular file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<ChangelogReleaser, Error> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        Ok(ChangelogReleaser {
            path: path.to_path_buf(),
            clock: Box::new(LocalClock),
        })
    }

    /// Sets the Clock that decides the date of the release heading
    pub fn set_clock<C: Clock + 'static>(&mut self, clock: C) -> &mut ChangelogReleaser {
        self.clock = Box::new(clock);
        self
    }

    /// Releases the unreleased section of the changelog as `release_version`.
    ///
    /// The new content goes to a temporary file next to the changelog first, which then
    /// replaces the changelog, so a failed write doesn't leave a truncated changelog behind.
    ///
    /// # Errors
    ///
    /// * Errors out if the changelog can't be read
    /// * Errors out if the new changelog can't be written
    pub fn release(&self, release_version: &str) -> Result<(), Error> {
        let released = self.preview(release_version)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp_file = NamedTempFile::new_in(dir)?;
        tmp_file.write_all(&released)?;
        tmp_file.as_file().sync_all()?;

        fs::set_permissions(tmp_file.path(), fs::metadata(&self.path)?.permissions())?;

        tmp_file.persist(&self.path)?;

        info!(
            "Released version {} in {}",
            release_version,
            self.path.display()
        );

        Ok(())
    }

    /// Returns the changelog as it would look after [release](crate::ChangelogReleaser::release),
    /// without writing anything.
    ///
    /// The changelog is handled as raw bytes, it doesn't have to be valid UTF-8.
    ///
    /// # Errors
    ///
    /// * Errors out if the changelog can't be read
    pub fn preview(&self, release_version: &str) -> Result<Vec<u8>, Error> {
        let content = fs::read(&self.path)?;

        let markers = content
            .split_inclusive(|b| *b == b'\n')
            .filter(|line| is_marker_line(line))
            .count();

        debug!(
            "Found {} line(s) containing {} in {}",
            markers,
            UNRELEASED_MARKER,
            self.path.display()
        );

        if markers == 0 {
            warn!(
                "{} doesn't contain an {} section, leaving it as is",
                self.path.display(),
                UNRELEASED_MARKER
            );
        } else if markers > 1 {
            warn!(
                "{} contains {} lines with {}, releasing every one of them",
                self.path.display(),
                markers,
                UNRELEASED_MARKER
            );
        }

        Ok(ChangelogReleaser::render(
            &content,
            release_version,
            self.clock.today(),
        ))
    }

    /// Replaces every line containing [UNRELEASED_MARKER](crate::types::UNRELEASED_MARKER) with
    /// a fresh unreleased section followed by the heading of the release. All other lines,
    /// line endings included, are kept byte for byte.
    pub fn render(content: &[u8], release_version: &str, date: NaiveDate) -> Vec<u8> {
        let heading = format!(
            "{} ({})",
            release_version,
            date.format(RELEASE_DATE_FORMAT)
        );

        let mut released = Vec::with_capacity(content.len() + 64);

        for line in content.split_inclusive(|b| *b == b'\n') {
            if is_marker_line(line) {
                let section = [
                    UNRELEASED_MARKER,
                    SECTION_UNDERLINE,
                    "",
                    "- ",
                    "",
                    heading.as_str(),
                ];

                for new_line in &section {
                    released.extend_from_slice(new_line.as_bytes());
                    released.push(b'\n');
                }
            } else {
                released.extend_from_slice(line);
            }
        }

        released
    }
}

fn is_marker_line(line: &[u8]) -> bool {
    line.windows(UNRELEASED_MARKER.len())
        .any(|window| window == UNRELEASED_MARKER.as_bytes())
}
