//! A pure predicate: the same input always gives the same output.

/// Returns `true` when `number` has no divisor between 2 and itself.
///
/// Trial division; numbers below 2 are not prime.
pub fn is_prime(number: u64) -> bool {
    number >= 2
        && (2..number)
            .take_while(|divisor| within_square_root(*divisor, number))
            .all(|divisor| number % divisor != 0)
}

// `divisor * divisor <= number` without the overflow near `u64::MAX`.
const fn within_square_root(divisor: u64, number: u64) -> bool {
    divisor <= number / divisor
}

/// Writes the primality of 3, 4 and 5.
pub fn show(sink: &mut dyn FnMut(&str)) {
    for number in [3, 4, 5] {
        sink(&format!("{number} : {}", is_prime(number)));
    }
}
