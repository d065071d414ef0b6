use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

use super::errors::ConfigError;

/// Conventional name of the local env file.
pub const ENV_FILE: &str = ".env";

/// Immutable snapshot of the configuration variables.
///
/// Built once at startup from the host environment layered over the
/// optional `.env` file. Host variables win over file entries. The process
/// environment itself is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Loads `.env` from the working directory over the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(ENV_FILE), std::env::vars_os())
    }

    /// Loads `path` and layers `host` on top of it. A missing file is not an error.
    ///
    /// A host variable whose value is not UTF-8 still shadows the file entry
    /// of the same name; it is left out of the snapshot.
    pub fn load_from<I, K, V>(path: &Path, host: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut vars = BTreeMap::new();

        match dotenvy::from_path_iter(path) {
            Ok(entries) => {
                for (index, entry) in entries.enumerate() {
                    match entry {
                        Ok((key, value)) => {
                            vars.insert(key, value);
                        }
                        Err(e) => match swallowed_lines(&e) {
                            Some(dropped) => {
                                tracing::warn!(
                                    "Unterminated quote in entry {} of {}, the remaining {} lines were not loaded",
                                    index + 1,
                                    path.display(),
                                    dropped
                                );
                            }
                            None => {
                                tracing::warn!(
                                    "Skipping entry {} of {}: {}",
                                    index + 1,
                                    path.display(),
                                    e
                                );
                            }
                        },
                    }
                }
                tracing::debug!("Loaded {} entries from {}", vars.len(), path.display());
            }
            Err(e) if e.not_found() => {
                tracing::debug!("No env file at {}, using host environment only", path.display());
            }
            Err(e) => {
                return Err(ConfigError::EnvFile {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }

        for (key, value) in host {
            let key = match key.into().into_string() {
                Ok(key) => key,
                Err(raw) => {
                    tracing::warn!("Ignoring host variable with non UTF-8 name {:?}", raw);
                    continue;
                }
            };
            match value.into().into_string() {
                Ok(value) => {
                    vars.insert(key, value);
                }
                Err(_) => {
                    tracing::warn!("Host variable {} is not UTF-8, ignoring it and its .env entry", key);
                    vars.remove(&key);
                }
            }
        }

        Ok(Self { vars })
    }

    #[cfg(test)]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Number of lines after the first one that a parse error consumed.
///
/// An opening quote with no closing quote makes dotenvy read up to the end
/// of the file, so everything after it is lost in a single error.
fn swallowed_lines(error: &dotenvy::Error) -> Option<usize> {
    match error {
        dotenvy::Error::LineParse(line, _) => {
            let extra = line.trim_end().lines().count().saturating_sub(1);
            (extra > 0).then_some(extra)
        }
        _ => None,
    }
}
