//! Configuration access port trait.

use crate::domain::error::ConfigError;
use crate::domain::value::Value;

pub trait ConfigPort {
    /// Coerced value at (section, key). A missing entry is reported and read
    /// as the empty string.
    fn get_value(&self, section: &str, key: &str) -> Value;

    /// Section names in file order, without the implicit default section.
    fn get_sections(&self) -> Vec<String>;

    /// Store `value` verbatim and rewrite the backing file.
    fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<(), ConfigError>;

    /// Raw stored text, without reporting. A key with no value reads as `""`.
    fn get_raw(&self, section: &str, key: &str) -> Option<String>;

    fn require_value(&self, section: &str, key: &str) -> Result<Value, ConfigError> {
        self.get_raw(section, key)
            .map(|raw| Value::coerce(&raw))
            .ok_or_else(|| ConfigError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.get_raw(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_raw(section, key)
            .and_then(|raw| Value::coerce(&raw).as_int())
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_raw(section, key)
            .and_then(|raw| Value::coerce(&raw).as_float())
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_raw(section, key)
            .and_then(|raw| Value::coerce(&raw).as_bool())
            .unwrap_or(default)
    }
}
