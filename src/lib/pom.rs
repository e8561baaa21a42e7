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
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

use log::debug;

impl PomSource {
    pub fn new<P: AsRef<Path>>(path: P, namespace: &str, snapshot_suffix: &str) -> PomSource {
        PomSource {
            path: path.as_ref().to_path_buf(),
            namespace: namespace.to_owned(),
            snapshot_suffix: snapshot_suffix.to_owned(),
        }
    }
}

impl VersionSource for PomSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    /// Reads `<parent><version>` and then `<version>` of the project, the latter winning if
    /// both are present. A trailing snapshot suffix is stripped.
    ///
    /// # Errors
    ///
    /// * Errors out if the pom can't be read
    /// * Errors out if the pom isn't valid XML
    fn read_version(&self) -> Result<Option<String>, Error> {
        let content = fs::read_to_string(&self.path)?;

        pom_version(&content, &self.namespace, &self.snapshot_suffix)
    }
}

pub(super) fn pom_version(
    content: &str,
    namespace: &str,
    snapshot_suffix: &str,
) -> Result<Option<String>, Error> {
    let doc = Document::parse(content)?;
    let project = doc.root_element();

    let mut version = child(project, namespace, "parent")
        .and_then(|parent| child_text(parent, namespace, "version"));

    debug!("Parent version: {:?}", version);

    if let Some(project_version) = child_text(project, namespace, "version") {
        debug!("Project version: {}", project_version);
        version = Some(project_version);
    }

    Ok(version
        .map(|v| strip_snapshot(&v, snapshot_suffix))
        .filter(|v| !v.is_empty()))
}

fn child<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &str,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.has_tag_name((namespace, name)))
}

fn child_text(node: Node, namespace: &str, name: &str) -> Option<String> {
    child(node, namespace, name)
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Strips `suffix` (e.g. `-SNAPSHOT`) off the end of `version` once, if it's there
pub(super) fn strip_snapshot(version: &str, suffix: &str) -> String {
    if !suffix.is_empty() && version.ends_with(suffix) {
        version[..version.len() - suffix.len()].to_string()
    } else {
        version.to_string()
    }
}
