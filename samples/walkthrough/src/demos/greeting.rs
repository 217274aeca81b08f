//! A greeting counter threaded through arguments instead of shared state.

/// Greets `name` and returns the next count alongside the message.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::greet;
///
/// let (first, count) = greet("Dave", 0);
/// let (second, _) = greet("Ellie", count);
/// assert_eq!(first, "Hello Dave 1");
/// assert_eq!(second, "Hello Ellie 2");
/// ```
pub fn greet(name: &str, count: u32) -> (String, u32) {
    let next = count + 1;
    (format!("Hello {name} {next}"), next)
}

/// Greets a fixed list of names in order.
pub fn show(sink: &mut dyn FnMut(&str)) {
    ["Dave", "Ellie"].iter().fold(0, |count, name| {
        let (message, next) = greet(name, count);
        sink(&message);
        next
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_greet_is_repeatable() {
        assert_eq!(greet("Dave", 0), greet("Dave", 0));
    }

    #[rstest]
    fn test_show_threads_the_count() {
        let mut lines = Vec::new();
        show(&mut |line| lines.push(line.to_string()));
        assert_eq!(lines, vec!["Hello Dave 1", "Hello Ellie 2"]);
    }
}
