pub mod reduction;
pub mod hinge;
pub mod bce;
pub mod cosine;
pub mod triplet;

pub use reduction::{LossOutput, Reduction};
pub use hinge::{HingeLoss, SquaredHingeLoss};
pub use bce::BceWithLogitsLoss;
pub use cosine::CosineEmbeddingLoss;
pub use triplet::TripletMarginLossOhnm;
