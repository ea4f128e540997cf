//! The hexagonal architecture layering rule
//!
//! Architecture: Aggregate Root - HexagonalArchitecture owns the configured layer bindings
//! - Configuration methods consume the rule and return a new value; no shared mutation
//! - Description rendering is a pure function of the current bindings
//! - Evaluation walks a supplied class graph and accumulates every violation

mod evaluation;

use crate::domain::roles::LayerRole;
use crate::domain::violations::{EvaluationResult, HexguardError, HexguardResult};
use crate::graph::ClassGraph;
use crate::patterns::ClassPredicate;
use crate::report;
use std::collections::BTreeMap;

/// Entry point: an unconfigured hexagonal architecture rule
pub fn hexagonal_architecture() -> HexagonalArchitecture {
    HexagonalArchitecture::default()
}

/// A structural rule describing a hexagonal architecture
///
/// Each of the six layer roles can be bound to at most one [`ClassPredicate`];
/// unbound roles take no part in description rendering or evaluation. The rule
/// is a plain immutable value: every configuration method takes `self` and
/// returns the updated rule, so configured rules can be shared and evaluated
/// concurrently without hidden state.
///
/// ```
/// use hexguard::{hexagonal_architecture, ClassGraph, ClassRecord};
///
/// let rule = hexagonal_architecture()
///     .driving_adapters(["..web.."])
///     .driving_ports(["..api.."])
///     .application_services(["..application.."]);
///
/// let graph = ClassGraph::new()
///     .with_class(ClassRecord::new("shop.web.OrderController").depends_on("shop.api.PlaceOrder"))
///     .with_class(ClassRecord::new("shop.api.PlaceOrder"))
///     .with_class(ClassRecord::new("shop.application.OrderService").depends_on("shop.api.PlaceOrder"));
///
/// assert!(rule.evaluate(&graph).is_satisfied());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HexagonalArchitecture {
    layers: BTreeMap<LayerRole, ClassPredicate>,
    optional_layers: bool,
    overridden_description: Option<String>,
    reason: Option<String>,
}

impl HexagonalArchitecture {
    /// Create an unconfigured rule; equivalent to [`hexagonal_architecture`]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_layer(mut self, role: LayerRole, predicate: ClassPredicate) -> Self {
        // Last write wins: rebinding a role replaces its previous predicate
        self.layers.insert(role, predicate);
        self
    }

    /// Bind the configuration layer to classes in the given package identifiers
    pub fn configurations<I, S>(self, package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configurations_that(ClassPredicate::by_packages(package_identifiers))
    }

    /// Bind the configuration layer to classes matching the supplied predicate
    pub fn configurations_that(self, predicate: ClassPredicate) -> Self {
        self.with_layer(LayerRole::Configuration, predicate)
    }

    /// Bind the application-service layer to classes in the given package identifiers
    pub fn application_services<I, S>(self, package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.application_services_that(ClassPredicate::by_packages(package_identifiers))
    }

    /// Bind the application-service layer to classes matching the supplied predicate
    pub fn application_services_that(self, predicate: ClassPredicate) -> Self {
        self.with_layer(LayerRole::ApplicationService, predicate)
    }

    /// Bind the driven-port layer to classes in the given package identifiers
    pub fn driven_ports<I, S>(self, package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.driven_ports_that(ClassPredicate::by_packages(package_identifiers))
    }

    /// Bind the driven-port layer to classes matching the supplied predicate
    pub fn driven_ports_that(self, predicate: ClassPredicate) -> Self {
        self.with_layer(LayerRole::DrivenPort, predicate)
    }

    /// Bind the driving-port layer to classes in the given package identifiers
    pub fn driving_ports<I, S>(self, package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.driving_ports_that(ClassPredicate::by_packages(package_identifiers))
    }

    /// Bind the driving-port layer to classes matching the supplied predicate
    pub fn driving_ports_that(self, predicate: ClassPredicate) -> Self {
        self.with_layer(LayerRole::DrivingPort, predicate)
    }

    /// Bind the driven-adapter layer to classes in the given package identifiers
    pub fn driven_adapters<I, S>(self, package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.driven_adapters_that(ClassPredicate::by_packages(package_identifiers))
    }

    /// Bind the driven-adapter layer to classes matching the supplied predicate
    pub fn driven_adapters_that(self, predicate: ClassPredicate) -> Self {
        self.with_layer(LayerRole::DrivenAdapter, predicate)
    }

    /// Bind the driving-adapter layer to classes in the given package identifiers
    pub fn driving_adapters<I, S>(self, package_identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.driving_adapters_that(ClassPredicate::by_packages(package_identifiers))
    }

    /// Bind the driving-adapter layer to classes matching the supplied predicate
    pub fn driving_adapters_that(self, predicate: ClassPredicate) -> Self {
        self.with_layer(LayerRole::DrivingAdapter, predicate)
    }

    /// Whether configured layers may be empty.
    ///
    /// When `false` (the default), evaluation reports a missing-layer violation
    /// for every configured role that matches no class in the graph; an empty
    /// layer usually signals a typo in the pattern rather than an intentionally
    /// vacant layer.
    pub fn with_optional_layers(mut self, optional_layers: bool) -> Self {
        self.optional_layers = optional_layers;
        self
    }

    /// Equivalent to [`with_optional_layers`](Self::with_optional_layers), which
    /// should be preferred as the meaning is easier to understand.
    pub fn allow_empty_layers(self, allow: bool) -> Self {
        self.with_optional_layers(allow)
    }

    /// Replace the generated description with an explicit one
    pub fn as_described(mut self, description: impl Into<String>) -> Self {
        self.overridden_description = Some(description.into());
        self
    }

    /// Append `, because <reason>` to whatever description is in effect
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// The predicate bound to a role, if any
    pub fn layer(&self, role: LayerRole) -> Option<&ClassPredicate> {
        self.layers.get(&role)
    }

    /// Render the human-readable description of this rule.
    ///
    /// Without an override the description starts with a fixed header line and
    /// lists each configured layer in canonical role order, one per line.
    pub fn description(&self) -> String {
        let base = match &self.overridden_description {
            Some(text) => text.clone(),
            None => {
                let mut lines = vec!["Hexagonal architecture consisting of".to_string()];
                for (role, predicate) in &self.layers {
                    lines.push(format!("{} ({})", role.plural(), predicate.description()));
                }
                lines.join("\n")
            }
        };

        match &self.reason {
            Some(reason) => format!("{base}, because {reason}"),
            None => base,
        }
    }

    /// Evaluate this rule against a class graph, collecting every violation
    pub fn evaluate(&self, classes: &ClassGraph) -> EvaluationResult {
        evaluation::evaluate(self, classes)
    }

    /// Evaluate this rule and fail with a line-oriented report if it does not hold
    pub fn check(&self, classes: &ClassGraph) -> HexguardResult<()> {
        let result = self.evaluate(classes);
        if result.is_satisfied() {
            Ok(())
        } else {
            Err(HexguardError::RuleViolated {
                report: report::render_failure_report(&self.description(), &result),
            })
        }
    }
}
