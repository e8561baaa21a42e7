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

//! libclrelease turns the `(Unreleased)` section of a changelog into a dated release.
//! The release version can be read from the following sources:
//!
//! * a `key=value` properties file, e.g. the `release.properties` of the maven-release-plugin
//! * a Maven build descriptor (`pom.xml`), minus its `-SNAPSHOT` suffix
//!
//! # Usage
//!
//! The following will release `CHANGES.md` with the version from `release.properties`
//!
//! ```no_run
//! use libclrelease::*;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let settings = Settings::default();
//!
//! let source = version_source(SourceKind::Properties, root, &settings);
//! let version = find_version(source.as_ref()).unwrap();
//!
//! ChangelogReleaser::new(root.join(&settings.changelog))
//!     .unwrap()
//!     .release(&version)
//!     .unwrap();
//! ```

mod pom;
mod properties;

pub mod changelog;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod types;

pub use crate::config::*;
pub use crate::errors::*;
pub use crate::helpers::*;
pub use crate::types::*;
