// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{error, warn};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Currency;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.kharcha", "Kharcha", "kharcha"));

const SETTINGS_FILE: &str = "settings.json";

/// Device-local configuration. Thresholds are display-only; nothing is
/// enforced server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub monthly_income: Decimal,
    pub monthly_budget: Decimal,
    pub default_currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_income: Decimal::from(50_000),
            monthly_budget: Decimal::from(15_000),
            default_currency: Currency::INR,
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join(SETTINGS_FILE))
}

/// One JSON blob on disk, read on demand and overwritten wholesale on
/// save. Every save broadcasts the new record once to all subscribers so
/// long-lived views can refresh without polling.
pub struct SettingsStore {
    path: PathBuf,
    subscribers: Mutex<Vec<Sender<Settings>>>,
}

impl SettingsStore {
    pub fn open() -> Result<Self> {
        Ok(Self::at_path(settings_path()?))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Never fails: a missing or unreadable file falls back to defaults.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(
                        "settings file {} is not valid JSON ({}); using defaults",
                        self.path.display(),
                        err
                    );
                    Settings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(err) => {
                warn!(
                    "could not read settings from {} ({}); using defaults",
                    self.path.display(),
                    err
                );
                Settings::default()
            }
        }
    }

    /// Persist the whole record, then notify subscribers. Write failures
    /// are logged and swallowed; the on-disk record keeps its old value and
    /// no notification goes out.
    pub fn save(&self, settings: &Settings) {
        let payload = match serde_json::to_string_pretty(settings) {
            Ok(p) => p,
            Err(err) => {
                error!("could not serialize settings: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, payload) {
            error!(
                "could not write settings to {}: {err}",
                self.path.display()
            );
            return;
        }
        self.broadcast(settings);
    }

    /// Channel that receives every subsequent saved record.
    pub fn subscribe(&self) -> Receiver<Settings> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    fn broadcast(&self, settings: &Settings) {
        let mut subs = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subs.retain(|tx| tx.send(settings.clone()).is_ok());
    }
}
