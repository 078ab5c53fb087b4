// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn display_formats_messages() {
        let io_err = Error::Io("disk".into());
        assert_eq!(format!("{}", io_err), "I/O Error: disk");

        let config_err = Error::Config("bad".into());
        assert_eq!(format!("{}", config_err), "Config Error: bad");
    }

    #[test]
    fn from_io_error_converts_to_io_variant() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let converted: Error = err.into();
        match converted {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_converts_to_config_variant() {
        let parse_err = toml::from_str::<toml::Value>("not = valid = toml")
            .expect_err("invalid toml must fail");
        let converted: Error = parse_err.into();
        assert!(matches!(converted, Error::Config(_)));
    }
}
