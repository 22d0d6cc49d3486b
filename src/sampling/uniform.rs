use rand::prelude::*;
use crate::sampling::config::SamplerConfig;
use crate::sampling::shortlist::Shortlist;

/// Draws `num_samples` indices uniformly from `[0, size)` with replacement.
///
/// Holds only its immutable configuration; `query` is a pure function of
/// that configuration and the thread RNG.
pub struct UniformSampler {
    config: SamplerConfig,
}

impl UniformSampler {
    pub fn new(size: usize, num_samples: usize) -> UniformSampler {
        UniformSampler { config: SamplerConfig::new(size, num_samples, None, true) }
    }

    /// # Panics
    /// Panics if the configuration carries a probability vector; uniform
    /// sampling ignores one, so accepting it would mislead the caller.
    pub fn from_config(config: SamplerConfig) -> UniformSampler {
        assert!(config.prob.is_none(), "UniformSampler does not take a probability vector");
        UniformSampler { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    fn draw(&self, rng: &mut ThreadRng) -> Shortlist {
        let indices = (0..self.config.num_samples)
            .map(|_| rng.gen_range(0..self.config.size))
            .collect();
        Shortlist::uniform(indices)
    }

    /// Returns one shortlist per requested instance.
    pub fn query(&self, num_instances: usize) -> Vec<Shortlist> {
        let mut rng = rand::thread_rng();
        (0..num_instances).map(|_| self.draw(&mut rng)).collect()
    }

    pub fn save(&self, path: &str) -> std::io::Result<()> {
        self.config.save_json(path)
    }

    pub fn load(path: &str) -> std::io::Result<UniformSampler> {
        Ok(UniformSampler::from_config(SamplerConfig::load_json(path)?))
    }
}
