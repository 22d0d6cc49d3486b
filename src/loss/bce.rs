use crate::math::matrix::Matrix;
use crate::loss::reduction::{mask_and_reduce, LossOutput, Reduction};

/// Numerically stable softplus: ln(1 + e^z) = max(z, 0) + ln(1 + e^(−|z|)).
fn softplus(z: f64) -> f64 {
    z.max(0.0) + (-z.abs()).exp().ln_1p()
}

/// Binary cross-entropy computed directly from logits.
///
/// Folding the sigmoid into the loss keeps the computation stable for large
/// |logit| (the naive sigmoid-then-log overflows to log(0)):
///
///   l = pos_weight·y·softplus(−x) + (1 − y)·softplus(x)
///
/// `weight` rescales each class column; `pos_weight` rescales the positive
/// term per class. Both are optional and must have length output_size.
pub struct BceWithLogitsLoss {
    pub weight: Option<Vec<f64>>,
    pub pos_weight: Option<Vec<f64>>,
    pub reduction: Reduction,
    pub pad_ind: Option<usize>,
}

impl BceWithLogitsLoss {
    pub fn new(
        weight: Option<Vec<f64>>,
        pos_weight: Option<Vec<f64>>,
        reduction: Reduction,
        pad_ind: Option<usize>,
    ) -> BceWithLogitsLoss {
        BceWithLogitsLoss { weight, pos_weight, reduction, pad_ind }
    }

    /// Computes the loss.
    ///
    /// # Arguments
    /// - `input`  — logits, batch_size × output_size
    /// - `target` — 0/1 ground truth, same shape
    /// - `mask`   — optional 0/1 matrix, same shape; entries where the mask
    ///              is 0 do not contribute to the loss
    ///
    /// # Panics
    /// Panics if a configured `weight`/`pos_weight` length differs from the
    /// number of columns in `input`.
    pub fn forward(&self, input: &Matrix, target: &Matrix, mask: Option<&Matrix>) -> LossOutput {
        if let Some(w) = &self.weight {
            assert_eq!(w.len(), input.cols, "weight length must equal output_size");
        }
        if let Some(pw) = &self.pos_weight {
            assert_eq!(pw.len(), input.cols, "pos_weight length must equal output_size");
        }

        let mut loss = Matrix::zeros(input.rows, input.cols);
        for i in 0..input.rows {
            for j in 0..input.cols {
                let x = input.data[i][j];
                let y = target.data[i][j];
                let pw = self.pos_weight.as_ref().map_or(1.0, |p| p[j]);
                let mut l = pw * y * softplus(-x) + (1.0 - y) * softplus(x);
                if let Some(w) = &self.weight {
                    l *= w[j];
                }
                loss.data[i][j] = l;
            }
        }
        mask_and_reduce(loss, self.pad_ind, mask, self.reduction)
    }
}

impl Default for BceWithLogitsLoss {
    fn default() -> Self {
        BceWithLogitsLoss::new(None, None, Reduction::Mean, None)
    }
}
