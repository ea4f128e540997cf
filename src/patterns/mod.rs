//! Predicates over class records
//!
//! Architectural Principle: Service Layer - Predicates encapsulate layer membership tests
//! - PackageMatcher owns the exact `..`/`*` package-identifier semantics in one place
//! - ClassPredicate wraps a matcher together with its canonical description
//! - Predicate results are translated to layer membership at the rule boundary

pub mod package_matcher;

use crate::domain::violations::{HexguardError, HexguardResult};
use crate::graph::ClassRecord;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

pub use package_matcher::PackageMatcher;

/// A named, describable boolean test over a [`ClassRecord`]
///
/// Predicates are immutable once built. The description is what appears in
/// rule descriptions, so constructors keep it canonical: package predicates
/// render their pattern list single-quoted and order-preserving, custom
/// predicates carry the caller-supplied text verbatim.
#[derive(Clone)]
pub struct ClassPredicate {
    description: String,
    matcher: Matcher,
}

#[derive(Clone)]
enum Matcher {
    Packages(Vec<PackageMatcher>),
    Name(Regex),
    Custom(Arc<dyn Fn(&ClassRecord) -> bool + Send + Sync>),
    And(Box<ClassPredicate>, Box<ClassPredicate>),
    Or(Box<ClassPredicate>, Box<ClassPredicate>),
    Not(Box<ClassPredicate>),
}

impl ClassPredicate {
    /// Match classes residing in any of the given package identifiers.
    ///
    /// `..` in an identifier stands for any number of intermediate packages,
    /// `*` for a single wildcard segment part. The description is the
    /// comma-joined, single-quoted identifier list in input order.
    pub fn by_packages<I, S>(package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = package_identifiers.into_iter().map(Into::into).collect();
        tracing::debug!("compiling package predicate for {:?}", patterns);

        let matchers = patterns.iter().map(|p| PackageMatcher::new(p)).collect();
        Self { description: join_single_quoted(&patterns), matcher: Matcher::Packages(matchers) }
    }

    /// Wrap an arbitrary predicate function with its own description.
    ///
    /// Used where package matching is insufficient, e.g. annotation-based or
    /// name-suffix membership tests.
    pub fn by_predicate<F>(predicate: F, description: impl Into<String>) -> HexguardResult<Self>
    where
        F: Fn(&ClassRecord) -> bool + Send + Sync + 'static,
    {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(HexguardError::invalid_predicate("description must not be empty"));
        }

        Ok(Self { description, matcher: Matcher::Custom(Arc::new(predicate)) })
    }

    /// Match classes whose fully-qualified name matches the given regular expression
    pub fn name_matching(pattern: &str) -> HexguardResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| HexguardError::pattern(pattern, e.to_string()))?;

        Ok(Self {
            description: format!("name matching '{pattern}'"),
            matcher: Matcher::Name(regex),
        })
    }

    /// Combine with another predicate; matches when both match
    pub fn and(self, other: ClassPredicate) -> Self {
        Self {
            description: format!("{} and {}", self.description, other.description),
            matcher: Matcher::And(Box::new(self), Box::new(other)),
        }
    }

    /// Combine with another predicate; matches when either matches
    pub fn or(self, other: ClassPredicate) -> Self {
        Self {
            description: format!("{} or {}", self.description, other.description),
            matcher: Matcher::Or(Box::new(self), Box::new(other)),
        }
    }

    /// Invert this predicate
    pub fn negate(self) -> Self {
        Self {
            description: format!("not {}", self.description),
            matcher: Matcher::Not(Box::new(self)),
        }
    }

    /// Test a class record against this predicate
    pub fn matches(&self, class: &ClassRecord) -> bool {
        match &self.matcher {
            Matcher::Packages(matchers) => matchers.iter().any(|m| m.matches(&class.package)),
            Matcher::Name(regex) => regex.is_match(&class.name),
            Matcher::Custom(predicate) => predicate(class),
            Matcher::And(a, b) => a.matches(class) && b.matches(class),
            Matcher::Or(a, b) => a.matches(class) || b.matches(class),
            Matcher::Not(inner) => !inner.matches(class),
        }
    }

    /// The canonical human-readable description of this predicate
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for ClassPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassPredicate").field("description", &self.description).finish()
    }
}

/// Join pattern strings as `'p1', 'p2', ...`, preserving input order
fn join_single_quoted(patterns: &[String]) -> String {
    patterns.iter().map(|p| format!("'{p}'")).collect::<Vec<_>>().join(", ")
}
