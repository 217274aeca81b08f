//! Body mass index with the impure input and output injected as functions.
//!
//! [`run`] is a higher-order function: it receives the reader and the writer,
//! so the pure computation in between can be tested with fakes.

use std::fmt;

/// Classification of a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiRange {
    /// Below 18.5.
    Underweight,
    /// From 18.5 up to (not including) 25.
    Healthy,
    /// 25 and above.
    Overweight,
}

impl BmiRange {
    /// Classifies a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi >= 25.0 {
            Self::Overweight
        } else {
            Self::Healthy
        }
    }
}

impl fmt::Display for BmiRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
        };
        formatter.write_str(name)
    }
}

/// Computes `weight / height²`, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::calculate_bmi;
///
/// assert!((calculate_bmi(1.80, 77.0) - 23.77).abs() < f64::EPSILON);
/// ```
pub fn calculate_bmi(height: f64, weight: f64) -> f64 {
    (weight / height.powi(2) * 100.0).round() / 100.0
}

/// Reads the weight and height, classifies them and writes the result.
///
/// `read` is called with the field name (`"weight"` then `"height"`).
pub fn run<R, W>(mut read: R, mut write: W) -> BmiRange
where
    R: FnMut(&str) -> f64,
    W: FnMut(BmiRange),
{
    let weight = read("weight");
    let height = read("height");

    let range = BmiRange::from_bmi(calculate_bmi(height, weight));
    tracing::debug!(height, weight, %range, "classified bmi");

    write(range);
    range
}

/// Runs the demo with fixed measurements.
pub fn show(sink: &mut dyn FnMut(&str), height: f64, weight: f64) {
    run(
        |field| if field == "height" { height } else { weight },
        |range| sink(&format!("Based on your BMI, you are {range}")),
    );
}
