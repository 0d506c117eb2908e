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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

const CONFIG_FILE_NAME: &str = "cardbox.toml";

/// Collection settings, read from `cardbox.toml` in the collection
/// directory. The file is optional and so is every key in it.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// The most cards a single review session pulls in.
    #[serde(default = "default_review_limit")]
    pub review_limit: usize,
}

fn default_review_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            review_limit: default_review_limit(),
        }
    }
}

impl Config {
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
