use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use crate::sampling::config::SamplerConfig;
use crate::sampling::shortlist::Shortlist;

/// Draws one index per instance from a caller-supplied candidate set,
/// optionally weighted by the configured global probability vector evaluated
/// at the candidate indices.
///
/// Built for the single-sample-per-query case; a multi-instance query is
/// served by a plain per-instance loop (a warning is logged at construction
/// as a reminder).
pub struct CandidateSampler {
    config: SamplerConfig,
}

impl CandidateSampler {
    pub fn new(
        num_labels: usize,
        num_samples: usize,
        prob: Option<Vec<f64>>,
        replace: bool,
    ) -> CandidateSampler {
        log::warn!(
            "CandidateSampler supports one sample per query; multi-instance \
             queries fall back to a per-instance loop"
        );
        CandidateSampler::from_config(SamplerConfig::new(num_labels, num_samples, prob, replace))
    }

    pub fn from_config(config: SamplerConfig) -> CandidateSampler {
        CandidateSampler { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    fn draw(&self, rng: &mut ThreadRng, candidates: &[usize]) -> Shortlist {
        assert!(!candidates.is_empty(), "candidate set must not be empty");
        let picked = if let Some(p) = &self.config.prob {
            let weights: Vec<f64> = candidates
                .iter()
                .map(|&ix| {
                    assert!(ix < self.config.size, "candidate index {} out of range", ix);
                    p[ix]
                })
                .collect();
            let dist = WeightedIndex::new(&weights)
                .expect("candidate set must carry positive probability mass");
            candidates[dist.sample(rng)]
        } else {
            candidates[rng.gen_range(0..candidates.len())]
        };
        Shortlist::uniform(vec![picked])
    }

    /// Draws one index per candidate set; `candidates[i]` restricts the i-th
    /// instance's draw.
    pub fn query(&self, candidates: &[Vec<usize>]) -> Vec<Shortlist> {
        let mut rng = rand::thread_rng();
        candidates.iter().map(|c| self.draw(&mut rng, c)).collect()
    }

    pub fn save(&self, path: &str) -> std::io::Result<()> {
        self.config.save_json(path)
    }

    pub fn load(path: &str) -> std::io::Result<CandidateSampler> {
        Ok(CandidateSampler::from_config(SamplerConfig::load_json(path)?))
    }
}
