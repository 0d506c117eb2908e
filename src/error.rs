// Copyright 2026 the cardbox authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

pub type Fallible<T> = Result<T, ErrorReport>;

/// Broad classification of a failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The caller supplied a value that fails validation.
    InvalidInput,
    /// The referenced entity does not exist.
    NotFound,
    /// The underlying store failed.
    Storage,
    /// Everything else: bugs and environment failures.
    Internal,
}

#[derive(Debug)]
pub struct ErrorReport {
    kind: ErrorKind,
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
        }
    }

    #[allow(dead_code)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Shorthand for returning an error from a fallible function.
pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport::new(message))
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl std::error::Error for ErrorReport {}

impl From<std::io::Error> for ErrorReport {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<rusqlite::Error> for ErrorReport {
    fn from(e: rusqlite::Error) -> Self {
        Self {
            kind: ErrorKind::Storage,
            message: e.to_string(),
        }
    }
}

impl From<walkdir::Error> for ErrorReport {
    fn from(e: walkdir::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(e: toml::de::Error) -> Self {
        Self::new(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = ErrorReport::new("something broke");
        assert_eq!(e.to_string(), "error: something broke");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ErrorReport::new("x").kind(), ErrorKind::Internal);
        assert_eq!(
            ErrorReport::invalid_input("x").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(ErrorReport::not_found("x").kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail("nope");
        assert!(result.is_err());
    }
}
