//! Small numeric and text helpers.
//!
//! Aggregations over empty input have no meaningful value and return `None`.

/// Returns the item with the highest key, or `None` for empty input.
///
/// When several items share the highest key, the last one wins.
pub fn with_max<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items
        .iter()
        .reduce(|best, item| if key(best) > key(item) { best } else { item })
}

/// Returns the arithmetic mean, or `None` for empty input.
///
/// The sum is accumulated in `i128` and converted once, so large values
/// neither overflow nor drift.
#[allow(clippy::cast_precision_loss)]
pub fn average_or_none(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Returns the value nearest to the mean, or `None` for empty input.
///
/// Ties go to the value that appears first.
#[allow(clippy::cast_precision_loss)]
pub fn closest_to_average(values: &[i64]) -> Option<i64> {
    let average = average_or_none(values)?;
    let mut closest = *values.first()?;
    let mut min_difference = f64::INFINITY;

    for &value in values {
        let difference = (value as f64 - average).abs();
        if difference < min_difference {
            min_difference = difference;
            closest = value;
        }
    }

    Some(closest)
}

/// Appends `suffix` to `text`, or returns an empty string when `text` is empty.
pub fn with_suffix(text: &str, suffix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{text}{suffix}")
}
