use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use rand::seq::index;
use crate::sampling::config::SamplerConfig;
use crate::sampling::shortlist::Shortlist;

/// Draws `num_negatives` label indices from `[0, num_labels)` according to a
/// configured discrete distribution (uniform when none is given), with or
/// without replacement.
///
/// The `WeightedIndex` table for the weighted-with-replacement case is built
/// once at construction; the configuration never changes afterwards.
pub struct NegativeSampler {
    config: SamplerConfig,
    dist: Option<WeightedIndex<f64>>,
}

impl NegativeSampler {
    pub fn new(
        num_labels: usize,
        num_negatives: usize,
        prob: Option<Vec<f64>>,
        replace: bool,
    ) -> NegativeSampler {
        NegativeSampler::from_config(SamplerConfig::new(num_labels, num_negatives, prob, replace))
    }

    pub fn from_config(config: SamplerConfig) -> NegativeSampler {
        let dist = match (&config.prob, config.replace) {
            (Some(p), true) => Some(
                WeightedIndex::new(p.iter().copied())
                    .expect("probability vector validated at construction"),
            ),
            _ => None,
        };
        NegativeSampler { config, dist }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    fn draw(&self, rng: &mut ThreadRng) -> Shortlist {
        let n = self.config.num_samples;
        let indices: Vec<usize> = if let Some(dist) = &self.dist {
            (0..n).map(|_| dist.sample(rng)).collect()
        } else if let Some(p) = &self.config.prob {
            index::sample_weighted(rng, self.config.size, |ix| p[ix], n)
                .expect("need at least num_negatives labels with positive probability")
                .into_vec()
        } else if self.config.replace {
            (0..n).map(|_| rng.gen_range(0..self.config.size)).collect()
        } else {
            index::sample(rng, self.config.size, n).into_vec()
        };
        Shortlist::uniform(indices)
    }

    /// Returns one shortlist of negatives per requested instance.
    pub fn query(&self, num_instances: usize) -> Vec<Shortlist> {
        let mut rng = rand::thread_rng();
        (0..num_instances).map(|_| self.draw(&mut rng)).collect()
    }

    pub fn save(&self, path: &str) -> std::io::Result<()> {
        self.config.save_json(path)
    }

    pub fn load(path: &str) -> std::io::Result<NegativeSampler> {
        Ok(NegativeSampler::from_config(SamplerConfig::load_json(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn without_replacement_draws_are_distinct() {
        let sampler = NegativeSampler::new(8, 8, None, false);
        for shortlist in sampler.query(20) {
            let unique: HashSet<usize> = shortlist.indices.iter().copied().collect();
            assert_eq!(unique.len(), 8);
            assert!(shortlist.indices.iter().all(|&ix| ix < 8));
        }
    }

    #[test]
    fn skewed_distribution_shows_up_empirically() {
        let prob = vec![0.5, 0.3, 0.15, 0.05];
        let sampler = NegativeSampler::new(4, 10_000, Some(prob.clone()), true);
        let shortlist = &sampler.query(1)[0];

        let mut counts = [0usize; 4];
        for &ix in &shortlist.indices {
            counts[ix] += 1;
        }
        for (ix, &p) in prob.iter().enumerate() {
            let freq = counts[ix] as f64 / 10_000.0;
            assert!(
                (freq - p).abs() < 0.02,
                "index {} frequency {} too far from probability {}",
                ix, freq, p
            );
        }
    }

    #[test]
    fn zero_probability_labels_are_never_drawn() {
        let prob = vec![0.5, 0.5, 0.0, 0.0];
        let with = NegativeSampler::new(4, 50, Some(prob.clone()), true);
        assert!(with.query(1)[0].indices.iter().all(|&ix| ix < 2));

        let without = NegativeSampler::new(4, 2, Some(prob), false);
        assert!(without.query(1)[0].indices.iter().all(|&ix| ix < 2));
    }

    #[test]
    fn weights_are_all_unit() {
        let sampler = NegativeSampler::new(5, 3, None, true);
        let shortlist = &sampler.query(1)[0];
        assert_eq!(shortlist.weights, vec![1.0; 3]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let sampler = NegativeSampler::new(6, 3, Some(vec![0.3, 0.3, 0.1, 0.1, 0.1, 0.1]), true);
        let path = std::env::temp_dir().join("xmc_loss_negative_sampler.json");
        let path = path.to_str().unwrap();
        sampler.save(path).unwrap();
        let restored = NegativeSampler::load(path).unwrap();
        assert_eq!(restored.config(), sampler.config());

        // The restored sampler must draw from the same distribution support.
        assert!(restored.query(1)[0].indices.iter().all(|&ix| ix < 6));
    }
}
