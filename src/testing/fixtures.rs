/// The sequence the demonstration task runs over.
pub fn sample_values() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0]
}

/// Positive, negative, and zero entries in one sequence.
pub fn mixed_sign_values() -> Vec<f64> {
    vec![-2.0, 0.0, 1.5, -0.5, 3.0]
}
