//! Process configuration
//!
//! Everything is read from `SNAPDIAL_*` environment variables with
//! documented defaults, except the client id, which resolves with the
//! precedence: explicit override, then `SNAPDIAL_CLIENT_ID`, then the id
//! file. A controller with no valid client id has no defined behavior, so
//! an unresolvable id is a fatal [`ControlError::Config`].

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use std::{env, fs};

use serde_json::Value;

use crate::ControlError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 1780;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_VOLUME_STEP: i32 = 5;
pub const DEFAULT_CLIENT_ID_FILE: &str = "selected_client.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Server address
    pub host: String,
    /// Server control port
    pub port: u16,
    /// Timeout for one full request/response cycle
    pub timeout: Duration,
    /// Magnitude applied per volume trigger
    pub volume_step: i32,
    /// Id of the client this process controls
    pub client_id: String,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ControlError> {
        Self::resolve(&env_snapshot(), None)
    }

    /// Load configuration with an explicit client id, overriding the
    /// environment and the id file
    pub fn from_env_with_client_id(client_id: impl Into<String>) -> Result<Self, ControlError> {
        Self::resolve(&env_snapshot(), Some(client_id.into()))
    }

    fn resolve(
        vars: &HashMap<String, String>,
        explicit_client_id: Option<String>,
    ) -> Result<Self, ControlError> {
        let host = vars
            .get("SNAPDIAL_HOST")
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(vars, "SNAPDIAL_PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_var(vars, "SNAPDIAL_TIMEOUT", DEFAULT_TIMEOUT_SECS)?;
        let volume_step = parse_var(vars, "SNAPDIAL_VOLUME_STEP", DEFAULT_VOLUME_STEP)?;
        let client_id = resolve_client_id(vars, explicit_client_id)?;

        Ok(Self {
            host,
            port,
            timeout: Duration::from_secs(timeout_secs),
            volume_step,
            client_id,
        })
    }
}

fn env_snapshot() -> HashMap<String, String> {
    env::vars().collect()
}

fn parse_var<T>(vars: &HashMap<String, String>, name: &str, default: T) -> Result<T, ControlError>
where
    T: FromStr,
    T::Err: Display,
{
    match vars.get(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ControlError::Config(format!("invalid {name} value {raw:?}: {e}"))),
    }
}

fn resolve_client_id(
    vars: &HashMap<String, String>,
    explicit: Option<String>,
) -> Result<String, ControlError> {
    if let Some(id) = explicit {
        let id = id.trim().to_string();
        if !id.is_empty() {
            return Ok(id);
        }
    }
    if let Some(id) = vars.get("SNAPDIAL_CLIENT_ID") {
        let id = id.trim();
        if !id.is_empty() {
            return Ok(id.to_string());
        }
    }
    let path = vars
        .get("SNAPDIAL_CLIENT_ID_FILE")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CLIENT_ID_FILE);
    load_client_id_file(Path::new(path))
}

/// Read the selected-client file: a JSON document with an `id` field for
/// `.json` paths, trimmed plain text otherwise
fn load_client_id_file(path: &Path) -> Result<String, ControlError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ControlError::Config(format!(
            "client id not found: set SNAPDIAL_CLIENT_ID or create {}: {e}",
            path.display()
        ))
    })?;

    let id = if path.extension().is_some_and(|ext| ext == "json") {
        let doc: Value = serde_json::from_str(&contents).map_err(|e| {
            ControlError::Config(format!("unparseable id file {}: {e}", path.display()))
        })?;
        match doc.get("id") {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    } else {
        contents.trim().to_string()
    };

    if id.is_empty() {
        return Err(ControlError::Config(format!(
            "missing 'id' in {}",
            path.display()
        )));
    }
    Ok(id)
}
