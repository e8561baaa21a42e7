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
use std::fs;
use std::path::Path;

use log::debug;

impl PropertiesSource {
    pub fn new<P: AsRef<Path>>(path: P, key: &str) -> PropertiesSource {
        PropertiesSource {
            path: path.as_ref().to_path_buf(),
            key: key.to_owned(),
        }
    }
}

impl VersionSource for PropertiesSource {
    fn name(&self) -> String {
        format!("{} (key {})", self.path.display(), self.key)
    }

    /// Reads the value of the property whose key starts with `self.key`. If multiple lines match,
    /// the last one wins.
    ///
    /// # Errors
    ///
    /// * Errors out if the properties file can't be read
    fn read_version(&self) -> Result<Option<String>, Error> {
        let content = fs::read_to_string(&self.path)?;

        Ok(find_property(&content, &self.key))
    }
}

/// Finds the value of the property whose (unescaped) key starts with `key_prefix`.
///
/// Values are trimmed, empty values count as missing.
pub(super) fn find_property(content: &str, key_prefix: &str) -> Option<String> {
    let mut found = None;

    for line in content.lines() {
        let (raw_key, value) = match split_property(line) {
            Some(pair) => pair,
            None => continue,
        };

        if unescape_key(raw_key.trim_start()).starts_with(key_prefix) {
            debug!("Found property line: {}", line);
            found = Some(value.trim().to_string());
        }
    }

    found.filter(|value| !value.is_empty())
}

// Splits at the first `=` that isn't escaped by a backslash
fn split_property(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' {
            return Some((&line[..idx], &line[idx + 1..]));
        }
    }

    None
}

// `project.rel.com.atlassian.braid\:graphql-braid` -> `project.rel.com.atlassian.braid:graphql-braid`
fn unescape_key(raw_key: &str) -> String {
    let mut key = String::with_capacity(raw_key.len());
    let mut chars = raw_key.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                key.push(escaped);
            }
        } else {
            key.push(c);
        }
    }

    key
}
