//! Best-match numeric agreement across responses.

/// Similarity of two non-negative values: `1 - |a-b| / max(a,b)`, floored at 0.
/// Returns `None` when both are zero.
pub fn value_similarity(a: f64, b: f64) -> Option<f64> {
    let larger = a.max(b);
    if larger == 0.0 {
        return None;
    }
    let relative_difference = (a - b).abs() / larger;
    Some((1.0 - relative_difference).max(0.0))
}

/// Agreement of per-response value lists, in [0, 1].
///
/// For every pair of responses that both hold values, the closest cross pair
/// of values decides the pair's similarity; the result is the mean over those
/// pairs. With no values, a single value in total, or no qualifying pair the
/// result is 0.0.
pub fn numeric_similarity(value_lists: &[Vec<f64>]) -> f64 {
    let total: usize = value_lists.iter().map(Vec::len).sum();
    if total < 2 {
        return 0.0;
    }

    let mut similarities = Vec::new();
    for i in 0..value_lists.len() {
        for j in (i + 1)..value_lists.len() {
            let (left, right) = (&value_lists[i], &value_lists[j]);
            if left.is_empty() || right.is_empty() {
                continue;
            }

            let best = left
                .iter()
                .flat_map(|a| right.iter().filter_map(move |b| value_similarity(*a, *b)))
                .fold(0.0f64, f64::max);
            similarities.push(best);
        }
    }

    if similarities.is_empty() {
        0.0
    } else {
        similarities.iter().sum::<f64>() / similarities.len() as f64
    }
}
