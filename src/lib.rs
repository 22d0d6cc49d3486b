pub mod math;
pub mod loss;
pub mod sampling;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use loss::reduction::{LossOutput, Reduction};
pub use loss::hinge::{HingeLoss, SquaredHingeLoss};
pub use loss::bce::BceWithLogitsLoss;
pub use loss::cosine::CosineEmbeddingLoss;
pub use loss::triplet::TripletMarginLossOhnm;
pub use sampling::config::SamplerConfig;
pub use sampling::shortlist::Shortlist;
pub use sampling::uniform::UniformSampler;
pub use sampling::negative::NegativeSampler;
pub use sampling::candidate::CandidateSampler;
