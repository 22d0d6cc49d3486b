use crate::math::matrix::Matrix;
use crate::loss::reduction::{mask_and_reduce, LossOutput, Reduction};

/// Converts a {0, 1} target to the {-1, +1} convention hinge losses expect.
fn to_svm_label(y: f64) -> f64 {
    2.0 * y - 1.0
}

/// Hinge loss: max(0, margin − ŷ·x) with ŷ = 2y − 1.
///
/// Targets are given as 0/1 and converted internally.
pub struct HingeLoss {
    pub margin: f64,
    pub reduction: Reduction,
    pub pad_ind: Option<usize>,
}

impl HingeLoss {
    pub fn new(margin: f64, reduction: Reduction, pad_ind: Option<usize>) -> HingeLoss {
        HingeLoss { margin, reduction, pad_ind }
    }

    /// Computes the hinge loss.
    ///
    /// # Arguments
    /// - `input`  — real-valued predictions (logits), batch_size × output_size
    /// - `target` — 0/1 ground truth, same shape
    /// - `mask`   — optional 0/1 matrix, same shape; entries where the mask
    ///              is 0 do not contribute to the loss
    pub fn forward(&self, input: &Matrix, target: &Matrix, mask: Option<&Matrix>) -> LossOutput {
        let loss = input.zip_map(target, |x, y| (self.margin - to_svm_label(y) * x).max(0.0));
        mask_and_reduce(loss, self.pad_ind, mask, self.reduction)
    }
}

impl Default for HingeLoss {
    fn default() -> Self {
        HingeLoss::new(1.0, Reduction::Mean, None)
    }
}

/// Squared hinge loss: max(0, margin − ŷ·x)², elementwise the square of
/// `HingeLoss` under the same configuration.
pub struct SquaredHingeLoss {
    pub margin: f64,
    pub reduction: Reduction,
    pub pad_ind: Option<usize>,
}

impl SquaredHingeLoss {
    pub fn new(margin: f64, reduction: Reduction, pad_ind: Option<usize>) -> SquaredHingeLoss {
        SquaredHingeLoss { margin, reduction, pad_ind }
    }

    /// Same contract as `HingeLoss::forward`, with the elementwise term squared.
    pub fn forward(&self, input: &Matrix, target: &Matrix, mask: Option<&Matrix>) -> LossOutput {
        let loss = input.zip_map(target, |x, y| {
            (self.margin - to_svm_label(y) * x).max(0.0).powi(2)
        });
        mask_and_reduce(loss, self.pad_ind, mask, self.reduction)
    }
}

impl Default for SquaredHingeLoss {
    fn default() -> Self {
        SquaredHingeLoss::new(1.0, Reduction::Mean, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> (Matrix, Matrix) {
        let input = Matrix::from_data(vec![
            vec![2.0, -0.5, 0.3],
            vec![-1.5, 0.9, 0.0],
        ]);
        let target = Matrix::from_data(vec![
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ]);
        (input, target)
    }

    #[test]
    fn hinge_is_nonnegative_everywhere() {
        let (input, target) = sample();
        let loss = HingeLoss::default().forward(&input, &target, None);
        // Cross-check against the unreduced matrix too.
        let full = HingeLoss::new(1.0, Reduction::None, None).forward(&input, &target, None);
        assert!(loss.scalar() >= 0.0);
        assert!(full.elementwise().data.iter().flatten().all(|&v| v >= 0.0));
    }

    #[test]
    fn correct_side_beyond_margin_costs_nothing() {
        let input = Matrix::from_data(vec![vec![2.0, -3.0]]);
        let target = Matrix::from_data(vec![vec![1.0, 0.0]]);
        let loss = HingeLoss::default().forward(&input, &target, None);
        assert_relative_eq!(loss.scalar(), 0.0);
    }

    #[test]
    fn squared_hinge_is_hinge_squared_elementwise() {
        let (input, target) = sample();
        let h = HingeLoss::new(1.0, Reduction::None, None).forward(&input, &target, None);
        let sq = SquaredHingeLoss::new(1.0, Reduction::None, None).forward(&input, &target, None);
        for (hr, sr) in h.elementwise().data.iter().zip(sq.elementwise().data.iter()) {
            for (&hv, &sv) in hr.iter().zip(sr.iter()) {
                assert_relative_eq!(sv, hv * hv, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn masked_position_is_ignored_regardless_of_value() {
        let input = Matrix::from_data(vec![vec![-100.0, 1.5]]);
        let target = Matrix::from_data(vec![vec![1.0, 1.0]]);
        let mask = Matrix::from_data(vec![vec![0.0, 1.0]]);
        let loss = HingeLoss::new(1.0, Reduction::Sum, None).forward(&input, &target, Some(&mask));
        assert_relative_eq!(loss.scalar(), 0.0);
    }

    #[test]
    fn pad_column_is_zero_even_without_mask() {
        let input = Matrix::from_data(vec![vec![-100.0, 0.0]]);
        let target = Matrix::from_data(vec![vec![1.0, 1.0]]);
        let loss = HingeLoss::new(1.0, Reduction::None, Some(0)).forward(&input, &target, None);
        assert_eq!(loss.elementwise().data[0][0], 0.0);
        assert_relative_eq!(loss.elementwise().data[0][1], 1.0);
    }

    #[test]
    fn reduction_modes_agree() {
        let (input, target) = sample();
        let cfg = |r| HingeLoss::new(1.0, r, None);
        let full = cfg(Reduction::None).forward(&input, &target, None);
        let sum = cfg(Reduction::Sum).forward(&input, &target, None);
        let mean = cfg(Reduction::Mean).forward(&input, &target, None);
        let total: f64 = full.elementwise().data.iter().flatten().sum();
        assert_relative_eq!(sum.scalar(), total, epsilon = 1e-12);
        assert_relative_eq!(mean.scalar(), total / 6.0, epsilon = 1e-12);
    }
}
