use crate::core::data::exponent_matrix::ExponentMatrix;
use log::info;

/// Global classification of a completed exponent matrix.
///
/// The maxima are `None` when the matrix holds no finite value of that
/// sign; normalization by that sign is then neutralized downstream instead
/// of indexing into an empty list. The counters exist for observability
/// only.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExponentStatistics {
    pub max_finite_positive: Option<f64>,
    pub max_abs_finite_negative: Option<f64>,
    pub finite_positive_count: usize,
    pub finite_negative_count: usize,
    pub positive_inf_count: usize,
    pub negative_inf_count: usize,
    pub nan_count: usize,
}

/// Single sequential pass over the whole matrix.
///
/// Must only run after every computation job has joined: it assumes each
/// cell holds its final value.
pub fn analyze_exponents(matrix: &ExponentMatrix) -> ExponentStatistics {
    let mut abs_pos_exponents: Vec<f64> = Vec::new();
    let mut abs_neg_exponents: Vec<f64> = Vec::new();
    let mut positive_inf_count = 0;
    let mut negative_inf_count = 0;
    let mut nan_count = 0;

    for &exponent in matrix.cells() {
        if exponent.is_finite() {
            if exponent >= 0.0 {
                abs_pos_exponents.push(exponent);
            } else {
                abs_neg_exponents.push(-exponent);
            }
        } else if exponent.is_nan() {
            nan_count += 1;
        } else if exponent > 0.0 {
            positive_inf_count += 1;
        } else {
            negative_inf_count += 1;
        }
    }

    abs_pos_exponents.sort_unstable_by(f64::total_cmp);
    abs_neg_exponents.sort_unstable_by(f64::total_cmp);

    info!("Statistical analysis of the exponents:");
    info!("  - Positive count: {}", abs_pos_exponents.len());
    info!("  - Positive inf. : {}", positive_inf_count);
    info!("  - Negative count: {}", abs_neg_exponents.len());
    info!("  - Negative inf. : {}", negative_inf_count);
    info!("  - NaN count     : {}", nan_count);
    if let (Some(&first), Some(&last)) = (abs_pos_exponents.first(), abs_pos_exponents.last()) {
        info!("  - Pos. exponents: [{}, {}]", first, last);
    }
    if let (Some(&first), Some(&last)) = (abs_neg_exponents.first(), abs_neg_exponents.last()) {
        info!("  - Neg. exponents: [{}, {}]", -last, -first);
    }

    ExponentStatistics {
        max_finite_positive: abs_pos_exponents.last().copied(),
        max_abs_finite_negative: abs_neg_exponents.last().copied(),
        finite_positive_count: abs_pos_exponents.len(),
        finite_negative_count: abs_neg_exponents.len(),
        positive_inf_count,
        negative_inf_count,
        nan_count,
    }
}
