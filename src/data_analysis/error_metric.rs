// src/data_analysis/error_metric.rs

use nalgebra::{Matrix3, Vector3};
use ndarray::{Array1, Array2};

use crate::data_input::transform_block::TransformBlock;

/// Scalar registration error of one log file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetric {
    pub rotation_error: f64,    // Spectral norm of the rotation block.
    pub translation_error: f64, // Euclidean norm of the translation.
}

/// Reduces a transform block to its rotation and translation error magnitudes.
///
/// A block holding `inf` or `nan` yields an infinite error for that part, so
/// both magnitudes are always non-negative.
pub fn compute_error_metric(block: &TransformBlock) -> ErrorMetric {
    let translation = to_vector3(&block.translation);
    let translation_error = if translation.iter().all(|v| v.is_finite()) {
        translation.norm()
    } else {
        f64::INFINITY
    };

    ErrorMetric {
        rotation_error: spectral_norm(&to_matrix3(&block.rotation)),
        translation_error,
    }
}

/// Largest singular value of a 3x3 matrix, or infinity if any entry is not finite.
pub fn spectral_norm(matrix: &Matrix3<f64>) -> f64 {
    if !matrix.iter().all(|v| v.is_finite()) {
        return f64::INFINITY;
    }
    matrix.svd(false, false).singular_values.max()
}

/// Converts the ndarray rotation block to nalgebra for the SVD.
fn to_matrix3(rotation: &Array2<f64>) -> Matrix3<f64> {
    Matrix3::from_fn(|row, col| rotation[[row, col]])
}

fn to_vector3(translation: &Array1<f64>) -> Vector3<f64> {
    Vector3::from_fn(|row, _| translation[row])
}


// src/data_analysis/error_metric.rs
