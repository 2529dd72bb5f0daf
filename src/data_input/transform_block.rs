// src/data_input/transform_block.rs

use ndarray::{Array1, Array2};

/// Rigid transform recovered from a registration log.
/// Built per file and dropped once its error metric is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformBlock {
    pub rotation: Array2<f64>,    // 3x3, row-major as printed.
    pub translation: Array1<f64>, // 3 components, one per printed row.
}

impl TransformBlock {
    /// Identity rotation and zero translation.
    pub fn identity() -> Self {
        Self {
            rotation: Array2::eye(3),
            translation: Array1::zeros(3),
        }
    }

    /// Builds a block from printed rows `[r0, r1, r2, t]`.
    pub fn from_rows(rows: [[f64; 4]; 3]) -> Self {
        let mut block = Self::identity();
        for (row_index, row) in rows.iter().enumerate() {
            block.set_row(row_index, row);
        }
        block
    }

    pub(crate) fn set_row(&mut self, row_index: usize, values: &[f64; 4]) {
        for col in 0..3 {
            self.rotation[[row_index, col]] = values[col];
        }
        self.translation[row_index] = values[3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_splits_rotation_and_translation() {
        let block = TransformBlock::from_rows([
            [1.0, 2.0, 3.0, 10.0],
            [4.0, 5.0, 6.0, 20.0],
            [7.0, 8.0, 9.0, 30.0],
        ]);
        assert_eq!(block.rotation[[0, 2]], 3.0);
        assert_eq!(block.rotation[[2, 0]], 7.0);
        assert_eq!(block.translation.to_vec(), vec![10.0, 20.0, 30.0]);
    }
}

// src/data_input/transform_block.rs
