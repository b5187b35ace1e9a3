use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Session(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Session(message) => write!(formatter, "Session error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_prefixes_the_error_kind() {
        assert_eq!(
            AppError::Config("bad level".to_string()).to_string(),
            "Config error: bad level"
        );
        assert_eq!(
            AppError::Session("disposed".to_string()).to_string(),
            "Session error: disposed"
        );
    }
}
