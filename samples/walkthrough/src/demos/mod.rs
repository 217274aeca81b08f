//! Individual demos.
//!
//! Each module exposes the pure computation it demonstrates plus a `show`
//! function that writes the demo's output to a caller supplied sink.

pub mod bmi;
pub mod euler;
pub mod greeting;
pub mod html;
pub mod names;
pub mod percentages;
pub mod person;
pub mod primes;
pub mod urls;
pub mod validation;

pub use bmi::{BmiRange, calculate_bmi};
pub use euler::{sum_of_multiples_loop, sum_of_multiples_sequence};
pub use greeting::greet;
pub use html::{FetchError, HtmlSource, InMemoryHtml, get_html, get_html_either};
pub use names::{full_name, full_name_applicative};
pub use percentages::percentages;
pub use person::{Person, birthday};
pub use primes::is_prime;
pub use urls::{UrlType, resolve_urls};
pub use validation::{UrlPolicy, UrlRejection};
