//! Lazily produced, replayable ordered sequences.
//!
//! A [`Sequence<T>`] wraps a producer: a closure that starts a fresh pull-based
//! iterator each time it is called. Combinators (`filter`, `map`, `bind`,
//! `sort_by`, `take`) wrap the producer without running it, so nothing is
//! evaluated until the caller consumes elements, and partial consumption only
//! evaluates the consumed prefix. Iterating again restarts production from the
//! beginning unless the sequence was [`materialize`](Sequence::materialize)d.
//!
//! Sequences share their producer through `Rc` and are therefore neither
//! `Send` nor `Sync`.
//!
//! # Examples
//!
//! ```rust
//! use fp_abstractions::control::{Sequence, SortOrder};
//!
//! let percentages = Sequence::range(1..=100)
//!     .filter(|x| x % 20 == 0)
//!     .sort_by(|x| *x, SortOrder::Descending)
//!     .map(|x| format!("{x}%"));
//!
//! assert_eq!(percentages.to_vec(), ["100%", "80%", "60%", "40%", "20%"]);
//! // Replayable: a second pass produces the same elements again
//! assert_eq!(percentages.iter().count(), 5);
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::rc::Rc;


type Producer<T> = dyn Fn() -> Box<dyn Iterator<Item = T>>;

/// Direction of [`Sequence::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

/// A finite or infinite ordered sequence whose elements are produced on demand.
///
/// # Examples
///
/// ```rust
/// use fp_abstractions::control::Sequence;
///
/// let evens = Sequence::from_fn(|| 0..).filter(|x| x % 2 == 0);
/// assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
/// ```
pub struct Sequence<T> {
    producer: Rc<Producer<T>>,
}

static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);

/// Iterator over one pass of a [`Sequence`].
pub struct SequenceIter<T> {
    inner: Box<dyn Iterator<Item = T>>,
}

impl<T> Iterator for SequenceIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> Clone for Sequence<T> {
    /// Shares the producer; both copies replay the same elements.
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T: 'static> Sequence<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a sequence from a producer that is re-invoked on every pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Sequence;
    ///
    /// let hrefs = Sequence::from_fn(|| ["/programming", "https://bbc.co.uk"]);
    /// assert_eq!(hrefs.to_vec(), vec!["/programming", "https://bbc.co.uk"]);
    /// ```
    pub fn from_fn<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            producer: Rc::new(move || -> Box<dyn Iterator<Item = T>> {
                Box::new(producer().into_iter())
            }),
        }
    }

    /// Creates a sequence that replays an iterator by cloning it on every pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Sequence;
    ///
    /// assert_eq!(Sequence::range(1..4).to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn range<I>(range: I) -> Self
    where
        I: Iterator<Item = T> + Clone + 'static,
    {
        Self::from_fn(move || range.clone())
    }

    /// Creates a fixed sequence over already computed values.
    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        let shared: Rc<[T]> = values.into();
        Self::from_fn(move || {
            let shared = Rc::clone(&shared);
            (0..shared.len()).map(move |index| shared[index].clone())
        })
    }

    /// Creates a sequence with no elements.
    pub fn empty() -> Self {
        Self::from_fn(std::iter::empty)
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Starts a new pass over the sequence.
    pub fn iter(&self) -> SequenceIter<T> {
        SequenceIter {
            inner: (self.producer)(),
        }
    }

    /// Runs one full pass and collects the elements.
    ///
    /// Does not terminate for an infinite sequence.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Runs one full pass and returns a sequence that replays its result
    /// without evaluating the pipeline again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Sequence;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let fixed = Sequence::range(0..3)
    ///     .map(move |x| {
    ///         counter.set(counter.get() + 1);
    ///         x
    ///     })
    ///     .materialize();
    ///
    /// assert_eq!(fixed.to_vec(), vec![0, 1, 2]);
    /// assert_eq!(fixed.to_vec(), vec![0, 1, 2]);
    /// assert_eq!(calls.get(), 3);
    /// ```
    pub fn materialize(&self) -> Self
    where
        T: Clone,
    {
        Self::from_vec(self.to_vec())
    }

    /// Folds one pass of the sequence into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::Sequence;
    ///
    /// let total = Sequence::range(1..10)
    ///     .filter(|x| x % 3 == 0 || x % 5 == 0)
    ///     .fold(0, |total, x| total + x);
    /// assert_eq!(total, 23);
    /// ```
    pub fn fold<A, F>(&self, init: A, function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(init, function)
    }

    /// Sums one pass of the sequence.
    pub fn sum<S>(&self) -> S
    where
        S: std::iter::Sum<T>,
    {
        self.iter().sum()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Keeps the elements that satisfy `predicate`, preserving their order.
    ///
    /// Lazy: valid over an infinite source as long as consumption is bounded.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let source = self.producer;
        let predicate = Rc::new(predicate);
        Self::from_fn(move || {
            let predicate = Rc::clone(&predicate);
            source().filter(move |element| predicate(element))
        })
    }

    /// Transforms every element, invoking `function` once per produced element.
    pub fn map<U, F>(self, function: F) -> Sequence<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let source = self.producer;
        let function = Rc::new(function);
        Sequence::from_fn(move || {
            let function = Rc::clone(&function);
            source().map(move |element| function(element))
        })
    }

    /// Maps every element to a sub-sequence and concatenates them in order.
    ///
    /// The sub-sequence may be anything iterable: another `Sequence`, a
    /// `Vec`, an `Optional` (absent elements are dropped) or an `Either`
    /// (failures are dropped).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::{Optional, Sequence};
    ///
    /// let kept = Sequence::range(1..=6).bind(|x| {
    ///     if x % 2 == 0 { Optional::present(x * 10) } else { Optional::absent() }
    /// });
    /// assert_eq!(kept.to_vec(), vec![20, 40, 60]);
    ///
    /// let expanded = Sequence::range(1..=2).bind(|x| vec![x, x]);
    /// assert_eq!(expanded.to_vec(), vec![1, 1, 2, 2]);
    /// ```
    pub fn bind<U, S, F>(self, function: F) -> Sequence<U>
    where
        U: 'static,
        S: IntoIterator<Item = U> + 'static,
        S::IntoIter: 'static,
        F: Fn(T) -> S + 'static,
    {
        let source = self.producer;
        let function = Rc::new(function);
        Sequence::from_fn(move || {
            let function = Rc::clone(&function);
            source().flat_map(move |element| function(element))
        })
    }

    /// Orders the elements by `key`.
    ///
    /// The sort is stable: elements with equal keys keep their relative order
    /// in both directions. The source must be finite; it is consumed in full
    /// when a pass starts, and `key` is evaluated once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_abstractions::control::{Sequence, SortOrder};
    ///
    /// let words = Sequence::from_fn(|| ["bb", "a", "cc", "d"])
    ///     .sort_by(|word| word.len(), SortOrder::Descending);
    /// assert_eq!(words.to_vec(), vec!["bb", "cc", "a", "d"]);
    /// ```
    pub fn sort_by<K, F>(self, key: F, order: SortOrder) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        let source = self.producer;
        Self::from_fn(move || {
            let mut elements: Vec<T> = source().collect();
            match order {
                SortOrder::Ascending => elements.sort_by_cached_key(|element| key(element)),
                SortOrder::Descending => {
                    elements.sort_by_cached_key(|element| Reverse(key(element)));
                }
            }
            tracing::trace!(length = elements.len(), ?order, "sorted sequence pass");
            elements
        })
    }

    /// Keeps at most the first `count` elements.
    pub fn take(self, count: usize) -> Self {
        let source = self.producer;
        Self::from_fn(move || source().take(count))
    }
}

impl<T: 'static> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<T>;

    fn into_iter(self) -> SequenceIter<T> {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIter<T>;

    fn into_iter(self) -> SequenceIter<T> {
        self.iter()
    }
}

impl<T: Clone + 'static> FromIterator<T> for Sequence<T> {
    /// Collects the iterator once; the result replays the collected elements.
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Sequence(<lazy>)")
    }
}
