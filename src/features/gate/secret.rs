use secrecy::{ExposeSecret, SecretString};

/// Shared secret used when the build does not set `DRVIVA_ACCESS_SECRET`.
const DEFAULT_ACCESS_SECRET: &str = "132800";

/// The single shared password the gate accepts.
///
/// This is a soft UI gate: the value ships inside the wasm bundle and is
/// compared in plain text. Wrapping it in `SecretString` only keeps it out of
/// `Debug` output and logs.
pub struct AccessSecret(SecretString);

impl AccessSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// The secret baked in at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("DRVIVA_ACCESS_SECRET").unwrap_or(DEFAULT_ACCESS_SECRET))
    }

    /// Exact string equality; no trimming or case folding.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.expose_secret() == candidate
    }
}

impl std::fmt::Debug for AccessSecret {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("AccessSecret([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::AccessSecret;

    #[test]
    fn matches_requires_exact_equality() {
        let secret = AccessSecret::new("132800");
        assert!(secret.matches("132800"));
        assert!(!secret.matches(" 132800"));
        assert!(!secret.matches("132800 "));
        assert!(!secret.matches("13280"));
        assert!(!secret.matches(""));
    }

    #[test]
    fn debug_output_hides_the_value() {
        let secret = AccessSecret::new("132800");
        let rendered = format!("{secret:?}");
        assert!(!rendered.contains("132800"));
    }

    #[test]
    fn build_secret_accepts_itself() {
        let expected = option_env!("DRVIVA_ACCESS_SECRET").unwrap_or("132800");
        assert!(AccessSecret::from_build_env().matches(expected));
    }
}
