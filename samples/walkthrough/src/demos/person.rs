//! Immutability: updates produce new values instead of mutating in place.

/// A person whose fields can only be set at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Creates a person; both fields are required.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns a copy with a different name.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: self.age,
        }
    }

    /// Returns a copy with a different age.
    #[must_use]
    pub fn with_age(&self, age: u32) -> Self {
        Self {
            name: self.name.clone(),
            age,
        }
    }
}

/// Returns the person one year older; the argument is left untouched.
///
/// # Examples
///
/// ```
/// use walkthrough::demos::{Person, birthday};
///
/// let bob = Person::new("bob", 22);
/// let older = birthday(&bob);
/// assert_eq!(older.age(), 23);
/// assert_eq!(bob.age(), 22);
/// ```
#[must_use]
pub fn birthday(person: &Person) -> Person {
    person.with_age(person.age + 1)
}

/// Writes a person before and after a birthday.
pub fn show(sink: &mut dyn FnMut(&str)) {
    let bob = Person::new("bob", 22);
    let older = birthday(&bob);
    sink(&format!("{} is {}", bob.name(), bob.age()));
    sink(&format!("after birthday: {} is {}", older.name(), older.age()));
}
