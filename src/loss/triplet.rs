use crate::math::matrix::Matrix;
use crate::loss::reduction::{LossOutput, Reduction};

/// Cosine denominators are clamped at this value so zero vectors do not
/// produce NaN.
const EPS: f64 = 1e-8;

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    dot / (norm_a * norm_b).max(EPS)
}

/// First index holding the row maximum.
fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (j, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = j;
        }
    }
    best
}

/// Triplet margin loss with online hard negative mining.
///
/// Each document in the batch is paired with its positive label embedding and
/// with the hardest in-batch negative: the label whose dot-product similarity
/// to the document is highest once true positives are masked out of the
/// search. Masking replaces S[i][j] with min(S[i][j], 1 − selection[i][j]),
/// which pushes positive pairs below the similarity of any true negative.
pub struct TripletMarginLossOhnm {
    pub margin: f64,
    pub reduction: Reduction,
}

impl TripletMarginLossOhnm {
    pub fn new(margin: f64, reduction: Reduction) -> TripletMarginLossOhnm {
        TripletMarginLossOhnm { margin, reduction }
    }

    /// Computes the per-document triplet loss max(0, sim_n − sim_p + margin).
    ///
    /// # Arguments
    /// - `doc_embeddings`   — batch_size × embedding_dim document embeddings
    /// - `label_embeddings` — batch_size × embedding_dim embeddings of each
    ///                        document's positive label
    /// - `selection`        — batch_size × batch_size 0/1 matrix; (i, j) is 1
    ///                        when label j is a positive for document i
    ///
    /// With `Reduction::None` the result is the batch_size × 1 per-document
    /// loss; `Mean`/`Sum` reduce over the batch.
    ///
    /// A document whose selection row is all 1s has no eligible negative; the
    /// search then degenerates to an arbitrary low-similarity pick, which is
    /// accepted behavior.
    ///
    /// # Panics
    /// Panics if the embedding matrices differ in shape or `selection` is not
    /// batch_size × batch_size.
    pub fn forward(
        &self,
        doc_embeddings: &Matrix,
        label_embeddings: &Matrix,
        selection: &Matrix,
    ) -> LossOutput {
        let batch = doc_embeddings.rows;
        assert!(
            label_embeddings.rows == batch && label_embeddings.cols == doc_embeddings.cols,
            "doc and label embeddings must share shape"
        );
        assert!(
            selection.rows == batch && selection.cols == batch,
            "selection must be batch_size x batch_size"
        );

        let similarities = doc_embeddings.clone() * label_embeddings.transpose();
        let masked = similarities.zip_map(selection, |s, sel| s.min(1.0 - sel));

        let mut loss = Matrix::zeros(batch, 1);
        for i in 0..batch {
            let hardest = argmax(&masked.data[i]);
            let sim_p = cosine_similarity(&doc_embeddings.data[i], &label_embeddings.data[i]);
            let sim_n = cosine_similarity(&doc_embeddings.data[i], &label_embeddings.data[hardest]);
            loss.data[i][0] = (sim_n - sim_p + self.margin).max(0.0);
        }

        match self.reduction {
            Reduction::None => LossOutput::Elementwise(loss),
            Reduction::Sum => LossOutput::Scalar(loss.data.iter().map(|r| r[0]).sum()),
            Reduction::Mean => {
                let sum: f64 = loss.data.iter().map(|r| r[0]).sum();
                LossOutput::Scalar(sum / batch as f64)
            }
        }
    }
}

impl Default for TripletMarginLossOhnm {
    fn default() -> Self {
        TripletMarginLossOhnm::new(0.8, Reduction::Mean)
    }
}
