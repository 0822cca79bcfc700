use crate::ConfigError;
use std::env;

/// Load a variable from the environment
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment. Empty values count as unset.
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.trim().is_empty())
}

/// Load a variable from the environment, if present
pub fn load_usize_opt(key: &str) -> Result<Option<usize>, ConfigError> {
    load_string_opt(key).map(|val| val.trim().parse::<usize>()).transpose().map_err(Into::into)
}
