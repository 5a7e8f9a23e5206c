// Copyright 2025 Fernando Borretti
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

use std::env;
use std::fs::create_dir_all;
use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;

use mimir_core::ErrorKind;
use mimir_core::ErrorReport;
use mimir_core::Fallible;
use serde::Deserialize;
use serde::Serialize;

const CONFIG_DIRECTORY: &str = ".mimir_downloader";
const CONFIG_FILE: &str = "config.toml";

/// Settings kept between runs.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Session token from a previous sign-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// Platform base URL, for self-hosted or staging instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Read the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }
        let text = read_to_string(path)?;
        toml::from_str(&text).map_err(|e| {
            ErrorReport::new(
                ErrorKind::Config,
                format!("Failed to parse config file '{}': {e}", path.display()),
            )
        })
    }

    pub fn save(&self, path: &Path) -> Fallible<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let text = toml::to_string(self).map_err(|e| {
            ErrorReport::new(ErrorKind::Config, format!("Failed to serialize config: {e}"))
        })?;
        write(path, text)?;
        Ok(())
    }
}

/// `~/.mimir_downloader/config.toml`.
pub fn default_config_path() -> Fallible<PathBuf> {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .ok_or_else(|| ErrorReport::new(ErrorKind::Config, "Cannot locate home directory."))?;
    Ok(PathBuf::from(home).join(CONFIG_DIRECTORY).join(CONFIG_FILE))
}
