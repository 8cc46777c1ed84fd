use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::common::bass_error::{BassError, Result};

/// Loose key/value configuration that remembers which keys were consumed
#[derive(Debug, Clone, Default)]
pub struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    pub fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    /// Take a key out of the map, converting it to `T`
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| BassError::Config(format!("invalid value {} for {}: {}", value, key, e))),
        }
    }

    /// Fail if any key was never consumed
    pub fn check(&self) -> Result<()> {
        if self.conf.is_empty() {
            return Ok(());
        }
        let mut keys: Vec<&str> = self.conf.keys().map(String::as_str).collect();
        keys.sort_unstable();
        Err(BassError::Config(format!("unknown para = {}", keys.join(","))))
    }
}
