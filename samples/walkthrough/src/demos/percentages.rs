//! Filter, sort and map chained over a lazy sequence.

use fp_abstractions::control::{Sequence, SortOrder};

/// Builds the multiples of twenty up to 100 as descending percentages.
///
/// Nothing is computed until the returned sequence is consumed.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::percentages;
///
/// assert_eq!(
///     percentages().to_vec(),
///     vec!["100%", "80%", "60%", "40%", "20%"]
/// );
/// ```
pub fn percentages() -> Sequence<String> {
    Sequence::range(1..=100)
        .filter(|x| x % 20 == 0)
        .sort_by(|x| *x, SortOrder::Descending)
        .map(|x| format!("{x}%"))
}

/// Writes every percentage on its own line.
pub fn show(sink: &mut dyn FnMut(&str)) {
    for line in &percentages() {
        sink(&line);
    }
}
