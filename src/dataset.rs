use crate::math::matrix::Matrix;

/// The four boolean input pairs, one per row.
pub fn xor_inputs() -> Matrix {
    Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])
}

/// XOR truth values, matching `xor_inputs` row for row.
pub fn xor_targets() -> Matrix {
    Matrix::from_data(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]])
}
