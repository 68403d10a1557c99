//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        Ok(_) => Err(Error::MissingEnv(name)),
        Err(_) => Err(Error::MissingEnv(name)),
    }
}

/// Get an environment variable, falling back to `default` when unset or blank.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
///
/// Unset is `MissingEnv`; set but unparsable is `WrongFormat`.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_SURELY_UNSET"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_SURELY_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_parse() {
        env::set_var("LIB_UTILS_TEST_TIMEOUT", " 15 ");
        env::set_var("LIB_UTILS_TEST_BAD_TIMEOUT", "soon");

        assert_eq!(get_env_parse::<u64>("LIB_UTILS_TEST_TIMEOUT"), Ok(15));
        assert_eq!(
            get_env_parse::<u64>("LIB_UTILS_TEST_BAD_TIMEOUT"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_TIMEOUT"))
        );
    }
}
