//! Core domain models for architecture violations and evaluation results
//!
//! Architecture: Rich Domain Models - Violations are entities with behavior, not just data
//! - Violations classify themselves and render their own display messages
//! - EvaluationResult acts as an aggregate root managing collections of violations
//! - Evaluation never raises on a finding; every violation is accumulated here

use crate::domain::roles::LayerRole;
use serde::{Deserialize, Serialize};

/// The kinds of architectural findings evaluation can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A configured role matched zero classes while empty layers are disallowed
    MissingLayer {
        /// The role with no member classes
        role: LayerRole,
    },
    /// A class matched the predicates of more than one configured role
    RoleOverlap {
        /// Fully-qualified name of the ambiguous class
        class: String,
        /// First matching role in canonical order
        first: LayerRole,
        /// Second matching role in canonical order
        second: LayerRole,
    },
    /// A dependency edge crosses roles against the hexagonal direction
    DirectionViolation {
        /// Fully-qualified name of the depending class
        class: String,
        /// Role the depending class belongs to
        source: LayerRole,
        /// Role the dependency target belongs to
        target: LayerRole,
        /// Fully-qualified name of the dependency target
        dependency: String,
    },
}

/// An architecture violation detected during rule evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Structured classification of the finding
    pub kind: ViolationKind,
    /// Human-readable description of the violation
    pub message: String,
}

impl Violation {
    /// Create a missing-layer violation for a role with no member classes
    pub fn missing_layer(role: LayerRole) -> Self {
        Self {
            message: format!(
                "layer '{}' is empty: no classes matched its predicate",
                role.plural()
            ),
            kind: ViolationKind::MissingLayer { role },
        }
    }

    /// Create a role-overlap violation for an ambiguous class
    pub fn role_overlap(class: impl Into<String>, first: LayerRole, second: LayerRole) -> Self {
        let class = class.into();
        Self {
            message: format!(
                "class {class} matches more than one layer: {first} and {second}"
            ),
            kind: ViolationKind::RoleOverlap { class, first, second },
        }
    }

    /// Create a direction violation for a disallowed cross-role dependency edge
    pub fn direction(
        class: impl Into<String>,
        source: LayerRole,
        target: LayerRole,
        dependency: impl Into<String>,
    ) -> Self {
        let class = class.into();
        let dependency = dependency.into();
        Self {
            message: format!(
                "class {class} in layer '{source}' depends on {dependency} in layer \
                 '{target}', which violates the allowed dependency direction"
            ),
            kind: ViolationKind::DirectionViolation { class, source, target, dependency },
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of evaluating a rule against a class graph
///
/// The result is satisfied exactly when no violations were collected. Violations
/// keep the order they were produced in, which is deterministic for a given
/// rule and graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// All violations found during evaluation
    pub violations: Vec<Violation>,
}

impl EvaluationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation to the result
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether the rule held: no violations were found
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether the result contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Violations whose kind matches the supplied filter
    pub fn violations_matching<'a>(
        &'a self,
        predicate: impl Fn(&ViolationKind) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| predicate(&v.kind))
    }

    /// Merge another result into this one, preserving order
    pub fn merge(&mut self, other: EvaluationResult) {
        self.violations.extend(other.violations);
    }
}

/// Error types surfaced to callers configuring or checking a rule
#[derive(Debug, thiserror::Error)]
pub enum HexguardError {
    /// A predicate was supplied without a usable description
    #[error("Invalid predicate: {message}")]
    InvalidPredicate { message: String },

    /// A name pattern could not be compiled
    #[error("Pattern error in '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// A serialized class graph could not be parsed
    #[error("Class graph format error: {message}")]
    GraphFormat { message: String },

    /// A checked rule was not satisfied by the supplied class graph
    #[error("{report}")]
    RuleViolated { report: String },
}

impl HexguardError {
    /// Create an invalid-predicate error
    pub fn invalid_predicate(message: impl Into<String>) -> Self {
        Self::InvalidPredicate { message: message.into() }
    }

    /// Create a pattern error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern { pattern: pattern.into(), message: message.into() }
    }

    /// Create a graph format error
    pub fn graph_format(message: impl Into<String>) -> Self {
        Self::GraphFormat { message: message.into() }
    }
}

/// Result type for Hexguard operations
pub type HexguardResult<T> = Result<T, HexguardError>;
