use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Length above which operations switch to the parallel path by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How an operation chooses between its sequential and parallel paths.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionPolicy {
    /// Parallel only when the operand length exceeds the operation's threshold.
    #[default]
    Auto,
    Sequential,
    Parallel,
}

impl FromStr for ExecutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ExecutionPolicy::Auto),
            "sequential" | "seq" => Ok(ExecutionPolicy::Sequential),
            "parallel" | "par" => Ok(ExecutionPolicy::Parallel),
            _ => Err(format!(
                "Unknown execution policy: {}. Expected one of: auto, sequential, parallel",
                s
            )),
        }
    }
}

/// Execution settings shared by the vector arithmetic and reduction operations.
///
/// Each operation family has its own threshold. Results of elementwise
/// operations are identical on both paths; floating-point reductions may
/// differ in their last bits because the parallel accumulation order is
/// unspecified.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExecutionConfig {
    pub policy: ExecutionPolicy,
    pub elementwise_threshold: usize,
    pub magnitude_threshold: usize,
    pub dot_product_threshold: usize,
    pub scale_threshold: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            policy: ExecutionPolicy::Auto,
            elementwise_threshold: DEFAULT_PARALLEL_THRESHOLD,
            magnitude_threshold: DEFAULT_PARALLEL_THRESHOLD,
            dot_product_threshold: DEFAULT_PARALLEL_THRESHOLD,
            scale_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ExecutionConfig {
    pub fn new(policy: ExecutionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn sequential() -> Self {
        Self::new(ExecutionPolicy::Sequential)
    }

    pub fn parallel() -> Self {
        Self::new(ExecutionPolicy::Parallel)
    }

    /// Whether an operation of length `len` with the given threshold runs in parallel.
    pub fn use_parallel(&self, threshold: usize, len: usize) -> bool {
        match self.policy {
            ExecutionPolicy::Auto => len > threshold,
            ExecutionPolicy::Sequential => false,
            ExecutionPolicy::Parallel => true,
        }
    }
}

/// Load an execution configuration from a JSON file.
///
/// Fields missing from the file keep their default values.
pub fn load_execution_config<P: AsRef<Path>>(path: P) -> Result<ExecutionConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ExecutionConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded execution config from {}: {:?}",
        path.as_ref().display(),
        config
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_policy_uses_strict_threshold() {
        let config = ExecutionConfig::default();
        assert!(!config.use_parallel(1000, 1000));
        assert!(config.use_parallel(1000, 1001));
        assert!(!config.use_parallel(1000, 0));
    }

    #[test]
    fn forced_policies_ignore_threshold() {
        assert!(!ExecutionConfig::sequential().use_parallel(10, 1_000_000));
        assert!(ExecutionConfig::parallel().use_parallel(10, 1));
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("AUTO".parse::<ExecutionPolicy>(), Ok(ExecutionPolicy::Auto));
        assert_eq!("seq".parse::<ExecutionPolicy>(), Ok(ExecutionPolicy::Sequential));
        assert_eq!("Parallel".parse::<ExecutionPolicy>(), Ok(ExecutionPolicy::Parallel));
        let err = "gpu".parse::<ExecutionPolicy>().unwrap_err();
        assert!(err.contains("gpu"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ExecutionConfig =
            serde_json::from_str(r#"{"policy": "parallel", "dot_product_threshold": 64}"#).unwrap();
        assert_eq!(config.policy, ExecutionPolicy::Parallel);
        assert_eq!(config.dot_product_threshold, 64);
        assert_eq!(config.elementwise_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }
}
