//! Project Euler problem 1: the sum of all multiples of 3 or 5 below a limit.
//!
//! Solved twice, once with a mutable accumulator and once as a sequence
//! pipeline, so the two styles can be compared side by side.

use fp_abstractions::control::Sequence;

fn is_multiple_of_three_or_five(value: u64) -> bool {
    value % 3 == 0 || value % 5 == 0
}

/// Sums the multiples with an explicit loop.
pub fn sum_of_multiples_loop(limit: u64) -> u64 {
    let mut total = 0;
    for value in 1..limit {
        if is_multiple_of_three_or_five(value) {
            total += value;
        }
    }
    total
}

/// Sums the multiples with a filter over a lazy range.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::sum_of_multiples_sequence;
///
/// assert_eq!(sum_of_multiples_sequence(10), 23);
/// ```
pub fn sum_of_multiples_sequence(limit: u64) -> u64 {
    Sequence::range(1..limit)
        .filter(|value| is_multiple_of_three_or_five(*value))
        .sum()
}

/// Writes both answers for `limit`.
pub fn show(sink: &mut dyn FnMut(&str), limit: u64) {
    sink(&format!("loop: {}", sum_of_multiples_loop(limit)));
    sink(&format!("sequence: {}", sum_of_multiples_sequence(limit)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(10, 23)]
    #[case(1000, 233_168)]
    fn test_sum_of_multiples(#[case] limit: u64, #[case] expected: u64) {
        assert_eq!(sum_of_multiples_loop(limit), expected);
        assert_eq!(sum_of_multiples_sequence(limit), expected);
    }

    proptest! {
        #[test]
        fn prop_loop_and_sequence_agree(limit in 0_u64..5_000) {
            prop_assert_eq!(sum_of_multiples_loop(limit), sum_of_multiples_sequence(limit));
        }
    }
}
