/// Per-column standardization statistics, fitted once over the catalog matrix
///
/// Applies `z = (x - mean) / std` with population standard deviation. The
/// same fitted statistics transform both the catalog matrix and every query
/// profile; nothing is ever refitted on query data.
///
/// Zero-variance columns use a divisor of 1.0, so a constant column
/// standardizes to exactly 0 instead of NaN.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Computes column-wise mean and standard deviation over the full matrix
    pub fn fit(matrix: &[Vec<f64>]) -> Self {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);

        let mut mean = vec![0.0; cols];
        for row in matrix {
            for (m, &x) in mean.iter_mut().zip(row.iter()) {
                *m += x;
            }
        }
        for m in &mut mean {
            *m /= rows as f64;
        }

        let mut variance = vec![0.0; cols];
        for row in matrix {
            for ((v, &x), &m) in variance.iter_mut().zip(row.iter()).zip(mean.iter()) {
                let d = x - m;
                *v += d * d;
            }
        }

        let scale = variance
            .iter()
            .map(|v| {
                let std = (v / rows as f64).sqrt();
                if std == 0.0 {
                    1.0
                } else {
                    std
                }
            })
            .collect();

        Self { mean, scale }
    }

    /// Standardizes a single row with the fitted statistics
    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter())
            .zip(self.scale.iter())
            .map(|((&x, &m), &s)| (x - m) / s)
            .collect()
    }

    /// Standardizes every row of a matrix with the fitted statistics
    pub fn transform_matrix(&self, matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
        matrix.iter().map(|row| self.transform_row(row)).collect()
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }
}
