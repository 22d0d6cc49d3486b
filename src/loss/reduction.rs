use serde::{Serialize, Deserialize};
use crate::math::matrix::Matrix;

/// Selects how a per-element loss matrix is collapsed.
///
/// - `None` — no reduction; the full elementwise loss matrix is returned.
/// - `Mean` — mean over the entries that actually count, i.e. excluding the
///   padding column and masked-off positions.
/// - `Sum`  — plain sum of the surviving entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    None,
    #[default]
    Mean,
    Sum,
}

/// Result of a loss forward pass. `Mean`/`Sum` produce a scalar,
/// `Reduction::None` keeps the full batch_size × output_size matrix.
#[derive(Debug, Clone)]
pub enum LossOutput {
    Scalar(f64),
    Elementwise(Matrix),
}

impl LossOutput {
    /// Returns the reduced scalar value.
    ///
    /// # Panics
    /// Panics if the loss was computed with `Reduction::None`.
    pub fn scalar(&self) -> f64 {
        match self {
            LossOutput::Scalar(v) => *v,
            LossOutput::Elementwise(_) => {
                panic!("loss was computed with Reduction::None; no scalar available")
            }
        }
    }

    /// Returns the unreduced elementwise loss matrix.
    ///
    /// # Panics
    /// Panics if the loss was reduced to a scalar.
    pub fn elementwise(&self) -> &Matrix {
        match self {
            LossOutput::Elementwise(m) => m,
            LossOutput::Scalar(_) => {
                panic!("loss was reduced to a scalar; no elementwise matrix available")
            }
        }
    }
}

/// Shared tail of every loss forward pass: zero the padding column, zero the
/// masked-off entries, then reduce.
///
/// # Arguments
/// - `loss`      — elementwise loss, batch_size × output_size
/// - `pad_ind`   — optional column forced to zero (reserved padding label)
/// - `mask`      — optional 0/1 matrix, same shape as `loss`; entries where
///                 the mask is 0 are zeroed and excluded from the mean count
/// - `reduction` — collapse mode
///
/// # Panics
/// Panics if `pad_ind` is out of range or the mask shape differs from `loss`.
pub fn mask_and_reduce(
    mut loss: Matrix,
    pad_ind: Option<usize>,
    mask: Option<&Matrix>,
    reduction: Reduction,
) -> LossOutput {
    if let Some(pad) = pad_ind {
        assert!(pad < loss.cols, "pad_ind {} out of range for {} columns", pad, loss.cols);
        for row in loss.data.iter_mut() {
            row[pad] = 0.0;
        }
    }

    if let Some(m) = mask {
        assert!(
            m.rows == loss.rows && m.cols == loss.cols,
            "mask shape {}x{} does not match loss shape {}x{}",
            m.rows, m.cols, loss.rows, loss.cols
        );
        for i in 0..loss.rows {
            for j in 0..loss.cols {
                if m.data[i][j] == 0.0 {
                    loss.data[i][j] = 0.0;
                }
            }
        }
    }

    match reduction {
        Reduction::None => LossOutput::Elementwise(loss),
        Reduction::Sum => {
            let sum: f64 = loss.data.iter().flatten().sum();
            LossOutput::Scalar(sum)
        }
        Reduction::Mean => {
            let mut sum = 0.0;
            let mut count = 0usize;
            for i in 0..loss.rows {
                for j in 0..loss.cols {
                    if Some(j) == pad_ind {
                        continue;
                    }
                    if let Some(m) = mask {
                        if m.data[i][j] == 0.0 {
                            continue;
                        }
                    }
                    sum += loss.data[i][j];
                    count += 1;
                }
            }
            let mean = if count == 0 { 0.0 } else { sum / count as f64 };
            LossOutput::Scalar(mean)
        }
    }
}
