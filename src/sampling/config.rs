use serde::{Serialize, Deserialize};

/// Current on-disk schema version. Bump when the field set changes.
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Immutable sampler configuration, also the explicit serialization schema
/// for persisting a sampler.
///
/// Fields:
/// - `version`     — schema version; files written by a newer schema are
///                   rejected at load time
/// - `size`        — sample space, indices are drawn from `[0, size)`
/// - `num_samples` — indices returned per draw
/// - `prob`        — optional discrete distribution over the sample space;
///                   uniform when absent
/// - `replace`     — draw with or without replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub size: usize,
    pub num_samples: usize,
    pub prob: Option<Vec<f64>>,
    pub replace: bool,
}

impl SamplerConfig {
    /// Validates and builds a configuration.
    ///
    /// # Panics
    /// Panics if `size` or `num_samples` is zero, if `num_samples > size`
    /// when sampling without replacement, or if `prob` has the wrong length,
    /// a non-finite or negative entry, or zero total mass.
    pub fn new(
        size: usize,
        num_samples: usize,
        prob: Option<Vec<f64>>,
        replace: bool,
    ) -> SamplerConfig {
        assert!(size > 0, "sample space must not be empty");
        assert!(num_samples > 0, "num_samples must be at least 1");
        if !replace {
            assert!(
                num_samples <= size,
                "cannot draw {} distinct indices from a space of {}",
                num_samples, size
            );
        }
        if let Some(p) = &prob {
            assert_eq!(p.len(), size, "prob length must equal size");
            assert!(
                p.iter().all(|v| v.is_finite() && *v >= 0.0),
                "prob entries must be finite and nonnegative"
            );
            assert!(p.iter().sum::<f64>() > 0.0, "prob must have positive total mass");
        }
        SamplerConfig { version: CONFIG_VERSION, size, num_samples, prob, replace }
    }

    /// Serializes the configuration to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `SamplerConfig` from a JSON file, rejecting files
    /// written with an unknown schema version.
    pub fn load_json(path: &str) -> std::io::Result<SamplerConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: SamplerConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        if config.version != CONFIG_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "unsupported sampler config version {} (expected {})",
                    config.version, CONFIG_VERSION
                ),
            ));
        }
        Ok(config)
    }
}
