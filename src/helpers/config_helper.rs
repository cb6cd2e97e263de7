use crate::config::constants::DEFAULT_TIMEOUT_SECS;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_color() -> bool {
        true
    }

    /// Treats a blank optional string as unset.
    pub fn non_empty(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}
