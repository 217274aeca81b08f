//! Combining optional names with `match_with`, `map`, `bind` and `map2`.

use fp_abstractions::control::Optional;
use fp_abstractions::typeclass::Applicative;

/// Returns a name only when asked to.
pub fn get_value(has_value: bool) -> Optional<&'static str> {
    if has_value {
        Optional::present("Bob")
    } else {
        Optional::absent()
    }
}

/// Greets the name if there is one, otherwise says goodbye.
pub fn hello_or_goodbye(has_value: bool) -> String {
    get_value(has_value).match_with(|name| format!("Hello, {name}"), || "Goodbye".to_string())
}

/// Source of the first name.
pub fn get_first_name() -> Optional<&'static str> {
    Optional::present("Joe")
}

/// Source of the last name.
pub fn get_last_name() -> Optional<&'static str> {
    Optional::present("Bloggs")
}

/// Appends the family name to `first_name`.
pub fn make_full_name(first_name: &str) -> Optional<String> {
    Optional::present(format!("{first_name} Bloggs"))
}

/// Builds the full name by binding the first name into [`make_full_name`].
///
/// # Examples
///
/// ```
/// use walkthrough::demos::full_name;
///
/// assert_eq!(full_name().to_string(), "Some(Joe Bloggs)");
/// ```
pub fn full_name() -> Optional<String> {
    get_first_name().bind(make_full_name)
}

/// Builds the full name from two independent lookups.
pub fn full_name_applicative() -> Optional<String> {
    get_first_name().map2(get_last_name(), |first, last| format!("{first} {last}"))
}

/// Writes the name demos.
pub fn show(sink: &mut dyn FnMut(&str)) {
    sink(&hello_or_goodbye(true));
    sink(&hello_or_goodbye(false));
    sink(&get_value(true).map(str::to_uppercase).to_string());
    sink(&full_name().to_string());
    sink(&full_name_applicative().to_string());
}
