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

use failure::Fail;

/// The Error enum containing all Errors that may occur when running clrelease
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Fail)]
pub enum Error {
    #[fail(display = "Changelog {} doesn't exist", _0)]
    FileNotFound(String),
    #[fail(display = "Couldn't find the next version in {}", _0)]
    VersionNotFound(String),
    #[fail(display = "Failed to read/write a file! Error: {}", _0)]
    File(String),
    #[fail(display = "Failed to parse the build descriptor! Error: {}", _0)]
    Xml(String),
    #[fail(display = "Failed to read the settings! Error: {}", _0)]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::File(e.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Self {
        Error::File(e.error.to_string())
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
