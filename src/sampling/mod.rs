pub mod config;
pub mod shortlist;
pub mod uniform;
pub mod negative;
pub mod candidate;

pub use config::SamplerConfig;
pub use shortlist::Shortlist;
pub use uniform::UniformSampler;
pub use negative::NegativeSampler;
pub use candidate::CandidateSampler;
