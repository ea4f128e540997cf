//! Class graph input model
//!
//! Architecture: Anti-Corruption Layer - The graph translates external analysis output
//! - An external static-analysis front end parses code into records and edges
//! - This crate only ever iterates the graph read-only; it owns no parsing
//! - JSON ingestion converts the external wire format into clean domain objects

use crate::domain::violations::{HexguardError, HexguardResult};
use serde::{Deserialize, Serialize};

/// One analyzed class: its fully-qualified name, package, and outgoing dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Fully-qualified class name, e.g. `com.acme.order.OrderService`
    pub name: String,
    /// Package the class resides in, e.g. `com.acme.order`
    pub package: String,
    /// Fully-qualified names of classes this class references
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ClassRecord {
    /// Create a record, deriving the package from the qualified name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let package = name.rsplit_once('.').map(|(pkg, _)| pkg.to_string()).unwrap_or_default();
        Self { name, package, dependencies: Vec::new() }
    }

    /// Override the derived package, for naming schemes where the package is
    /// not simply the qualified name minus its last segment
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Add an outgoing dependency edge
    pub fn depends_on(mut self, target: impl Into<String>) -> Self {
        self.dependencies.push(target.into());
        self
    }

    /// The class name without its package prefix
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// An ordered collection of class records with their dependency edges
///
/// Supplied by an external front end and consumed read-only by rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGraph {
    /// All analyzed classes, in analysis order
    pub classes: Vec<ClassRecord>,
}

impl ClassGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class record, chaining style
    pub fn with_class(mut self, class: ClassRecord) -> Self {
        self.classes.push(class);
        self
    }

    /// Add a class record in place
    pub fn add_class(&mut self, class: ClassRecord) {
        self.classes.push(class);
    }

    /// Parse a graph from its JSON wire format
    pub fn from_json_str(content: &str) -> HexguardResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| HexguardError::graph_format(format!("failed to parse class graph: {e}")))
    }

    /// Serialize the graph to JSON
    pub fn to_json(&self) -> HexguardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HexguardError::graph_format(format!("failed to serialize class graph: {e}")))
    }

    /// Look up a class by its fully-qualified name
    pub fn get(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Number of classes in the graph
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the graph contains no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over all class records in analysis order
    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.iter()
    }
}

impl FromIterator<ClassRecord> for ClassGraph {
    fn from_iter<T: IntoIterator<Item = ClassRecord>>(iter: T) -> Self {
        Self { classes: iter.into_iter().collect() }
    }
}
