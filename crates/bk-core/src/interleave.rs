//! Positional merge of two sequences.

/// Merges `second` into `first` so that `second[i]` follows `first[i]`.
///
/// Once `first` runs out, the rest of `second` is appended in order. The
/// result always has `first.len() + second.len()` elements.
///
/// ```
/// use bk_core::interleave;
///
/// assert_eq!(interleave(&[1, 3, 5, 7, 9], &[2, 4, 6]), [1, 2, 3, 4, 5, 6, 7, 9]);
/// assert_eq!(interleave(&[1], &[2, 4, 6]), [1, 2, 4, 6]);
/// ```
pub fn interleave<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(first.len() + second.len());

    for (idx, item) in first.iter().enumerate() {
        merged.push(item.clone());
        if let Some(paired) = second.get(idx) {
            merged.push(paired.clone());
        }
    }

    if let Some(tail) = second.get(first.len()..) {
        merged.extend_from_slice(tail);
    }

    merged
}
