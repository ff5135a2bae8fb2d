use std::{sync::LazyLock, time::Duration};

pub static SUBMIT_CONFIG: LazyLock<SubmitConfig> = LazyLock::new(SubmitConfig::from_env);

const TIMEOUT_VAR: &str = "FPVM_SUBMIT_TIMEOUT_MS";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    /// Upper bound on how long a sink may take to accept a submission.
    pub timeout: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SubmitConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout = match lookup(TIMEOUT_VAR).map(|v| v.trim().parse::<u64>()) {
            None => DEFAULT_TIMEOUT,
            Some(Ok(ms)) if ms > 0 => Duration::from_millis(ms),
            Some(_) => {
                tracing::warn!(
                    "{TIMEOUT_VAR} must be a positive number of milliseconds, using {}ms",
                    DEFAULT_TIMEOUT.as_millis()
                );
                DEFAULT_TIMEOUT
            }
        };
        Self { timeout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(SubmitConfig::from_lookup(|_| None), SubmitConfig::default());
    }

    #[test]
    fn test_timeout_override() {
        let config = SubmitConfig::from_lookup(|k| (k == TIMEOUT_VAR).then(|| "2500".to_string()));
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_bad_values_fall_back() {
        for bad in ["", "soon", "0", "-10"] {
            let config = SubmitConfig::from_lookup(|_| Some(bad.to_string()));
            assert_eq!(config.timeout, DEFAULT_TIMEOUT, "{bad}");
        }
    }
}
