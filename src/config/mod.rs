// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration and the user settings store.
//!
//! This module manages the application configuration file, including the
//! keyed boolean settings that prompts use for their "don't show again"
//! reminders. Persistence is fire-and-forget: a failed write is ignored and
//! the in-memory value stands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "streamtui";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Keyed reminder flags. `true` (the default for an absent key) means
    /// "keep reminding", i.e. the associated prompt is still shown.
    pub(crate) reminders: HashMap<String, bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            reminders: HashMap::new(),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Keyed boolean settings backed by the configuration file.
pub(crate) struct Settings {
    config: AppConfig,
    persist: bool,
}

impl Settings {
    pub(crate) fn new(config: AppConfig) -> Self {
        Self {
            config,
            persist: true,
        }
    }

    /// An in-memory store that never touches the filesystem.
    #[cfg(test)]
    pub(crate) fn ephemeral() -> Self {
        Self {
            config: AppConfig::default(),
            persist: false,
        }
    }

    /// Looks up a boolean setting; absent keys default to `true`.
    pub(crate) fn get(&self, key: &str) -> bool {
        self.config.reminders.get(key).copied().unwrap_or(true)
    }

    /// Stores a boolean setting and writes the configuration file through,
    /// ignoring write failures.
    pub(crate) fn save(&mut self, key: &str, value: bool) {
        self.config.reminders.insert(key.to_string(), value);
        if self.persist {
            save_config(&self.config).ok();
        }
    }
}
