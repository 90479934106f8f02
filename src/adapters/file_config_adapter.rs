//! INI file configuration adapter.
//!
//! Wraps a [`configparser::ini::Ini`] store that is loaded once from a path and
//! rewritten in full to the same path on every successful [`ConfigPort::set_value`].
//! Reads never fail: a missing section or key is reported through the injected
//! [`LogPort`] and read as the empty string.

use crate::adapters::tracing_log_adapter::TracingLogAdapter;
use crate::domain::error::ConfigError;
use crate::domain::value::Value;
use crate::ports::config_port::ConfigPort;
use crate::ports::log_port::LogPort;
use configparser::ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};

/// Holds keys that appear before the first section header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

pub struct FileConfigAdapter {
    config: Ini,
    path: PathBuf,
    log: Box<dyn LogPort>,
}

impl FileConfigAdapter {
    /// Load `path`, reporting through `tracing`. An unreadable or malformed
    /// file is reported and yields an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::open_with_log(path, Box::new(TracingLogAdapter))
    }

    pub fn open_with_log<P: AsRef<Path>>(path: P, log: Box<dyn LogPort>) -> Self {
        let path = path.as_ref().to_path_buf();
        let config = match load_ini(&path) {
            Ok(config) => config,
            Err(e) => {
                log.error(&format!("Could not load config: {e}"));
                new_ini()
            }
        };
        Self { config, path, log }
    }

    /// Like [`open`](Self::open) but returns load failures to the caller.
    pub fn try_open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::try_open_with_log(path, Box::new(TracingLogAdapter))
    }

    pub fn try_open_with_log<P: AsRef<Path>>(
        path: P,
        log: Box<dyn LogPort>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let config = load_ini(&path)?;
        Ok(Self { config, path, log })
    }

    /// Parse `content` into a store bound to `path`. Nothing is read from `path`.
    pub fn from_string_at<P: AsRef<Path>>(path: P, content: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let config = parse_ini(&path, content)?;
        Ok(Self {
            config,
            path,
            log: Box::new(TracingLogAdapter),
        })
    }

    /// Parse `content` with no backing path; every `set_value` on the result
    /// fails with [`ConfigError::Io`] and is rolled back.
    pub fn from_string(content: &str) -> Result<Self, ConfigError> {
        Self::from_string_at(PathBuf::new(), content)
    }

    pub fn with_log(mut self, log: Box<dyn LogPort>) -> Self {
        self.log = log;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The default section always exists, even with no keys.
    pub fn has_section(&self, section: &str) -> bool {
        section == DEFAULT_SECTION || self.config.get_map_ref().contains_key(section)
    }

    fn report_valid_sections(&self) {
        self.log.info("Valid sections are: ");
        self.log.info(&format!("{:?}", self.get_sections()));
    }

    fn report_write_failure(&self, section: &str, key: &str, value: &str, err: &ConfigError) {
        self.log.error(&format!(
            "Error while writing {value} into key {key} in section {section}: {err}"
        ));
        self.report_valid_sections();
    }

    fn persist(&self) -> Result<(), ConfigError> {
        self.config.write(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Case-sensitive, multi-line parser where `#` and `;` only start a comment at
/// the beginning of a line.
fn new_ini() -> Ini {
    let mut defaults = Ini::new_cs().defaults();
    defaults.case_sensitive = true;
    defaults.multiline = true;
    defaults.enable_inline_comments = false;
    defaults.default_section = DEFAULT_SECTION.to_string();
    Ini::new_from_defaults(defaults)
}

fn parse_ini(path: &Path, content: &str) -> Result<Ini, ConfigError> {
    let mut config = new_ini();
    config
        .read(content.to_string())
        .map_err(|reason| ConfigError::Parse {
            file: path.display().to_string(),
            reason,
        })?;
    Ok(config)
}

fn load_ini(path: &Path) -> Result<Ini, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_ini(path, &content)
}

fn lookup<'a>(config: &'a Ini, section: &str, key: &str) -> Option<&'a Option<String>> {
    config.get_map_ref().get(section).and_then(|keys| keys.get(key))
}

impl ConfigPort for FileConfigAdapter {
    fn get_value(&self, section: &str, key: &str) -> Value {
        let raw = match self.get_raw(section, key) {
            Some(raw) => raw,
            None => {
                self.log
                    .error(&format!("Could not find key {key} in section {section}"));
                self.report_valid_sections();
                String::new()
            }
        };
        Value::coerce(&raw)
    }

    fn get_sections(&self) -> Vec<String> {
        self.config
            .sections()
            .into_iter()
            .filter(|s| s != DEFAULT_SECTION)
            .collect()
    }

    fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError> {
        if !self.has_section(section) {
            let err = ConfigError::UnknownSection {
                section: section.to_string(),
            };
            self.report_write_failure(section, key, value, &err);
            return Err(err);
        }

        let previous = self.config.set(section, key, Some(value.to_string()));
        if let Err(err) = self.persist() {
            match previous {
                Some(old) => {
                    self.config.set(section, key, old);
                }
                None => {
                    self.config.remove_key(section, key);
                }
            }
            self.report_write_failure(section, key, value, &err);
            return Err(err);
        }
        Ok(())
    }

    /// Keys under the default section are visible in every existing section.
    fn get_raw(&self, section: &str, key: &str) -> Option<String> {
        if !self.has_section(section) {
            return None;
        }
        lookup(&self.config, section, key)
            .or_else(|| lookup(&self.config, DEFAULT_SECTION, key))
            .map(|value| value.clone().unwrap_or_default())
    }
}
