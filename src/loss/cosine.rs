use crate::math::matrix::Matrix;
use crate::loss::reduction::{mask_and_reduce, LossOutput, Reduction};

/// Cosine embedding loss over a matrix of precomputed cosine similarities.
///
/// Positive pairs (target > 0) pay `pos_weight·(1 − sim)`; negative pairs pay
/// `max(0, sim − margin)`, i.e. nothing once they are at least `margin` apart.
pub struct CosineEmbeddingLoss {
    pub margin: f64,
    pub pos_weight: f64,
    pub reduction: Reduction,
    pub pad_ind: Option<usize>,
}

impl CosineEmbeddingLoss {
    pub fn new(
        margin: f64,
        pos_weight: f64,
        reduction: Reduction,
        pad_ind: Option<usize>,
    ) -> CosineEmbeddingLoss {
        CosineEmbeddingLoss { margin, pos_weight, reduction, pad_ind }
    }

    /// Computes the loss.
    ///
    /// # Arguments
    /// - `input`  — cosine similarities between document and label,
    ///              batch_size × output_size
    /// - `target` — 0/1 ground truth, same shape
    /// - `mask`   — optional 0/1 matrix, same shape; entries where the mask
    ///              is 0 do not contribute to the loss
    pub fn forward(&self, input: &Matrix, target: &Matrix, mask: Option<&Matrix>) -> LossOutput {
        let loss = input.zip_map(target, |x, y| {
            if y > 0.0 {
                self.pos_weight * (1.0 - x)
            } else {
                (x - self.margin).max(0.0)
            }
        });
        mask_and_reduce(loss, self.pad_ind, mask, self.reduction)
    }
}

impl Default for CosineEmbeddingLoss {
    fn default() -> Self {
        CosineEmbeddingLoss::new(0.8, 1.0, Reduction::Mean, None)
    }
}
