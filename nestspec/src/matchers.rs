//! Matchers accepted by [`Context::expect`](crate::Context::expect) and
//! [`Context::assume`](crate::Context::assume).

use std::fmt::Debug;

use regex::Regex;

/// A named predicate over an actual value.
pub trait Matcher<T: ?Sized> {
    fn matches(&self, actual: &T) -> bool;

    /// Human-readable expectation, e.g. `equals 3`.
    fn description(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Equals<E>(E);

pub fn equals<E>(expected: E) -> Equals<E> {
    Equals(expected)
}

impl<T, E> Matcher<T> for Equals<E>
where
    T: PartialEq<E>,
    E: Debug,
{
    fn matches(&self, actual: &T) -> bool {
        *actual == self.0
    }

    fn description(&self) -> String {
        format!("equals {:?}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct NotEquals<E>(E);

pub fn not_equals<E>(unexpected: E) -> NotEquals<E> {
    NotEquals(unexpected)
}

impl<T, E> Matcher<T> for NotEquals<E>
where
    T: PartialEq<E>,
    E: Debug,
{
    fn matches(&self, actual: &T) -> bool {
        *actual != self.0
    }

    fn description(&self) -> String {
        format!("does not equal {:?}", self.0)
    }
}

pub fn is_true() -> Equals<bool> {
    Equals(true)
}

pub fn is_false() -> Equals<bool> {
    Equals(false)
}

#[derive(Debug, Clone, Copy)]
pub struct IsSome;

pub fn is_some() -> IsSome {
    IsSome
}

impl<T> Matcher<Option<T>> for IsSome {
    fn matches(&self, actual: &Option<T>) -> bool {
        actual.is_some()
    }

    fn description(&self) -> String {
        "is Some(_)".to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IsNone;

pub fn is_none() -> IsNone {
    IsNone
}

impl<T> Matcher<Option<T>> for IsNone {
    fn matches(&self, actual: &Option<T>) -> bool {
        actual.is_none()
    }

    fn description(&self) -> String {
        "is None".to_string()
    }
}

/// Substring match for string-like values.
#[derive(Debug, Clone)]
pub struct Contains(String);

pub fn contains(needle: impl Into<String>) -> Contains {
    Contains(needle.into())
}

impl<A: AsRef<str>> Matcher<A> for Contains {
    fn matches(&self, actual: &A) -> bool {
        actual.as_ref().contains(self.0.as_str())
    }

    fn description(&self) -> String {
        format!("contains {:?}", self.0)
    }
}

/// Membership test for vectors and slices.
#[derive(Debug, Clone)]
pub struct ContainsItem<T>(T);

pub fn contains_item<T>(item: T) -> ContainsItem<T> {
    ContainsItem(item)
}

impl<T: PartialEq + Debug> Matcher<Vec<T>> for ContainsItem<T> {
    fn matches(&self, actual: &Vec<T>) -> bool {
        actual.contains(&self.0)
    }

    fn description(&self) -> String {
        format!("contains item {:?}", self.0)
    }
}

impl<T: PartialEq + Debug> Matcher<&[T]> for ContainsItem<T> {
    fn matches(&self, actual: &&[T]) -> bool {
        actual.contains(&self.0)
    }

    fn description(&self) -> String {
        format!("contains item {:?}", self.0)
    }
}

/// Regular-expression match for string-like values.
///
/// An invalid pattern never matches; its compile error becomes the
/// description so the failure explains itself.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: String,
    compiled: Result<Regex, regex::Error>,
}

pub fn matches_regex(pattern: &str) -> MatchesRegex {
    MatchesRegex {
        pattern: pattern.to_string(),
        compiled: Regex::new(pattern),
    }
}

impl<A: AsRef<str>> Matcher<A> for MatchesRegex {
    fn matches(&self, actual: &A) -> bool {
        match &self.compiled {
            Ok(regex) => regex.is_match(actual.as_ref()),
            Err(_) => false,
        }
    }

    fn description(&self) -> String {
        match &self.compiled {
            Ok(_) => format!("matches /{}/", self.pattern),
            Err(err) => format!("matches /{}/ (invalid pattern: {err})", self.pattern),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IsWithin {
    expected: f64,
    delta: f64,
}

/// `|actual - expected| <= delta`.
pub fn is_within(expected: f64, delta: f64) -> IsWithin {
    IsWithin { expected, delta }
}

impl Matcher<f64> for IsWithin {
    fn matches(&self, actual: &f64) -> bool {
        (actual - self.expected).abs() <= self.delta
    }

    fn description(&self) -> String {
        format!("is within {} of {}", self.delta, self.expected)
    }
}

pub struct Satisfies<P> {
    description: String,
    predicate: P,
}

/// Arbitrary predicate with a caller-supplied description.
pub fn satisfies<P>(description: impl Into<String>, predicate: P) -> Satisfies<P> {
    Satisfies {
        description: description.into(),
        predicate,
    }
}

impl<T, P> Matcher<T> for Satisfies<P>
where
    P: Fn(&T) -> bool,
{
    fn matches(&self, actual: &T) -> bool {
        (self.predicate)(actual)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}
