//! Rule evaluation against a class graph
//!
//! Architectural Principle: Domain Service - Evaluation is a pure function of rule and graph
//! - Membership, overlap, and direction checks run over the whole graph
//! - Every violation is accumulated; evaluation never aborts on the first finding
//! - Violation order is deterministic: missing layers, then overlaps, then directions

use super::HexagonalArchitecture;
use crate::domain::roles::LayerRole;
use crate::domain::violations::{EvaluationResult, Violation};
use crate::graph::ClassGraph;
use std::collections::HashMap;

/// Membership of one class after matching it against every configured layer
enum Membership {
    /// Exactly one configured role matched
    Role(LayerRole),
    /// Two or more configured roles matched; direction checks skip the class
    Ambiguous,
    /// No configured role matched; the class is out of architectural scope
    Unresolved,
}

pub(super) fn evaluate(rule: &HexagonalArchitecture, classes: &ClassGraph) -> EvaluationResult {
    let configured: Vec<(LayerRole, _)> =
        rule.layers.iter().map(|(role, predicate)| (*role, predicate)).collect();

    tracing::debug!(
        "evaluating rule with {} configured layers against {} classes",
        configured.len(),
        classes.len()
    );

    let mut result = EvaluationResult::new();

    // Phase 1: classify every class against every configured layer
    let mut membership: HashMap<&str, Membership> = HashMap::new();
    let mut member_counts: HashMap<LayerRole, usize> = HashMap::new();
    let mut overlaps: Vec<Violation> = Vec::new();

    for class in classes.iter() {
        let matching: Vec<LayerRole> = configured
            .iter()
            .filter(|(_, predicate)| predicate.matches(class))
            .map(|(role, _)| *role)
            .collect();

        for role in &matching {
            *member_counts.entry(*role).or_insert(0) += 1;
        }

        let membership_entry = match matching.as_slice() {
            [] => Membership::Unresolved,
            [role] => Membership::Role(*role),
            [first, second, ..] => {
                overlaps.push(Violation::role_overlap(class.name.clone(), *first, *second));
                Membership::Ambiguous
            }
        };
        membership.insert(class.name.as_str(), membership_entry);
    }

    // Phase 2: configured layers must not be empty unless explicitly relaxed
    if !rule.optional_layers {
        for (role, _) in &configured {
            if member_counts.get(role).copied().unwrap_or(0) == 0 {
                tracing::debug!("layer '{}' matched no classes", role.plural());
                result.add_violation(Violation::missing_layer(*role));
            }
        }
    }

    for overlap in overlaps {
        result.add_violation(overlap);
    }

    // Phase 3: walk every dependency edge between resolved classes
    for class in classes.iter() {
        let Some(Membership::Role(source)) = membership.get(class.name.as_str()) else {
            continue;
        };

        for dependency in &class.dependencies {
            let Some(Membership::Role(target)) = membership.get(dependency.as_str()) else {
                // Out-of-scope targets carry no direction constraints
                continue;
            };

            if !source.may_depend_on(*target) {
                result.add_violation(Violation::direction(
                    class.name.clone(),
                    *source,
                    *target,
                    dependency.clone(),
                ));
            }
        }
    }

    tracing::debug!("evaluation finished with {} violations", result.violations.len());
    result
}

#[cfg(test)]
mod tests {
    use crate::domain::roles::LayerRole;
    use crate::domain::violations::ViolationKind;
    use crate::graph::{ClassGraph, ClassRecord};
    use crate::patterns::ClassPredicate;
    use crate::rule::hexagonal_architecture;

    fn three_layer_rule() -> crate::rule::HexagonalArchitecture {
        hexagonal_architecture()
            .driving_adapters(["driving.adapter.."])
            .driving_ports(["driving.port.."])
            .application_services(["app.service.."])
    }

    #[test]
    fn test_empty_graph_with_required_layers_reports_each_missing_layer() {
        let result = three_layer_rule().evaluate(&ClassGraph::new());

        assert!(!result.is_satisfied());
        let missing: Vec<_> = result
            .violations_matching(|k| matches!(k, ViolationKind::MissingLayer { .. }))
            .collect();
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn test_missing_layers_are_reported_in_canonical_role_order() {
        let result = three_layer_rule().evaluate(&ClassGraph::new());

        let roles: Vec<LayerRole> = result
            .violations
            .iter()
            .filter_map(|v| match v.kind {
                ViolationKind::MissingLayer { role } => Some(role),
                _ => None,
            })
            .collect();

        assert_eq!(
            roles,
            vec![LayerRole::ApplicationService, LayerRole::DrivingPort, LayerRole::DrivingAdapter]
        );
    }

    #[test]
    fn test_empty_graph_with_optional_layers_is_satisfied() {
        let result = three_layer_rule().with_optional_layers(true).evaluate(&ClassGraph::new());

        assert!(result.is_satisfied());
    }

    #[test]
    fn test_port_depending_on_application_service_is_flagged() {
        // A -> B is a driving adapter using its port; B -> C is a port reaching
        // into the application, which breaks the dependency-free port constraint.
        let graph = ClassGraph::new()
            .with_class(ClassRecord::new("driving.adapter.A").depends_on("driving.port.B"))
            .with_class(ClassRecord::new("driving.port.B").depends_on("app.service.C"))
            .with_class(ClassRecord::new("app.service.C"));

        let result = three_layer_rule().evaluate(&graph);

        assert_eq!(result.violations.len(), 1);
        assert_eq!(
            result.violations[0].kind,
            ViolationKind::DirectionViolation {
                class: "driving.port.B".to_string(),
                source: LayerRole::DrivingPort,
                target: LayerRole::ApplicationService,
                dependency: "app.service.C".to_string(),
            }
        );
    }

    #[test]
    fn test_application_service_depending_on_driven_adapter_is_flagged() {
        let rule = three_layer_rule().driven_adapters(["driven.adapter.."]);

        let graph = ClassGraph::new()
            .with_class(ClassRecord::new("driving.adapter.A").depends_on("driving.port.B"))
            .with_class(ClassRecord::new("driving.port.B"))
            .with_class(ClassRecord::new("app.service.D").depends_on("driven.adapter.E"))
            .with_class(ClassRecord::new("driven.adapter.E"));

        let result = rule.evaluate(&graph);

        let directions: Vec<_> = result
            .violations_matching(|k| matches!(k, ViolationKind::DirectionViolation { .. }))
            .collect();
        assert_eq!(directions.len(), 1);
        assert_eq!(
            directions[0].kind,
            ViolationKind::DirectionViolation {
                class: "app.service.D".to_string(),
                source: LayerRole::ApplicationService,
                target: LayerRole::DrivenAdapter,
                dependency: "driven.adapter.E".to_string(),
            }
        );
    }

    #[test]
    fn test_allowed_directions_produce_no_violations() {
        let rule = hexagonal_architecture()
            .configurations(["wiring.."])
            .application_services(["app.service.."])
            .driven_ports(["driven.port.."])
            .driving_ports(["driving.port.."])
            .driven_adapters(["driven.adapter.."])
            .driving_adapters(["driving.adapter.."]);

        let graph = ClassGraph::new()
            .with_class(
                ClassRecord::new("wiring.Assembly")
                    .depends_on("app.service.OrderService")
                    .depends_on("driven.adapter.JpaOrders")
                    .depends_on("driving.adapter.OrderController"),
            )
            .with_class(
                ClassRecord::new("app.service.OrderService")
                    .depends_on("driving.port.PlaceOrder")
                    .depends_on("driven.port.Orders"),
            )
            .with_class(ClassRecord::new("driven.port.Orders"))
            .with_class(ClassRecord::new("driving.port.PlaceOrder"))
            .with_class(ClassRecord::new("driven.adapter.JpaOrders").depends_on("driven.port.Orders"))
            .with_class(
                ClassRecord::new("driving.adapter.OrderController")
                    .depends_on("driving.port.PlaceOrder"),
            );

        let result = rule.evaluate(&graph);
        assert!(result.is_satisfied(), "violations: {:?}", result.violations);
    }

    #[test]
    fn test_same_layer_dependencies_are_allowed() {
        let rule = hexagonal_architecture()
            .driving_ports(["driving.port.."])
            .with_optional_layers(true);

        let graph = ClassGraph::new()
            .with_class(ClassRecord::new("driving.port.PlaceOrder").depends_on("driving.port.OrderId"))
            .with_class(ClassRecord::new("driving.port.OrderId"));

        assert!(rule.evaluate(&graph).is_satisfied());
    }

    #[test]
    fn test_dependencies_outside_configured_layers_are_not_checked() {
        let rule = three_layer_rule();

        let graph = ClassGraph::new()
            .with_class(ClassRecord::new("driving.adapter.A").depends_on("driving.port.B"))
            .with_class(
                ClassRecord::new("driving.port.B")
                    .depends_on("java.util.List")
                    .depends_on("some.helper.Util"),
            )
            .with_class(ClassRecord::new("app.service.C"))
            .with_class(ClassRecord::new("some.helper.Util"));

        assert!(rule.evaluate(&graph).is_satisfied());
    }

    #[test]
    fn test_class_matching_two_layers_is_an_overlap() {
        let rule = hexagonal_architecture()
            .driven_ports(["shared.."])
            .driving_ports(["shared.."])
            .with_optional_layers(true);

        let graph = ClassGraph::new().with_class(ClassRecord::new("shared.Port"));
        let result = rule.evaluate(&graph);

        assert_eq!(result.violations.len(), 1);
        assert_eq!(
            result.violations[0].kind,
            ViolationKind::RoleOverlap {
                class: "shared.Port".to_string(),
                first: LayerRole::DrivenPort,
                second: LayerRole::DrivingPort,
            }
        );
    }

    #[test]
    fn test_ambiguous_classes_are_excluded_from_direction_checks() {
        let rule = hexagonal_architecture()
            .application_services(["app.."])
            .driven_ports(["shared.."])
            .driving_ports(["shared.."])
            .with_optional_layers(true);

        // shared.Port would be a forbidden target for nobody: its membership is
        // ambiguous, so only the overlap itself is reported.
        let graph = ClassGraph::new()
            .with_class(ClassRecord::new("app.Service").depends_on("shared.Port"))
            .with_class(ClassRecord::new("shared.Port").depends_on("app.Service"));

        let result = rule.evaluate(&graph);
        assert_eq!(result.violations.len(), 1);
        assert!(matches!(result.violations[0].kind, ViolationKind::RoleOverlap { .. }));
    }

    #[test]
    fn test_all_violations_are_accumulated_across_the_graph() {
        let rule = hexagonal_architecture()
            .configurations(["wiring.."])
            .application_services(["app.service.."])
            .driven_adapters(["driven.adapter.."])
            .driving_ports(["driving.port.."]);

        let graph = ClassGraph::new()
            // wiring.. matches nothing -> missing layer
            .with_class(ClassRecord::new("app.service.D").depends_on("driven.adapter.E"))
            .with_class(ClassRecord::new("driven.adapter.E").depends_on("app.service.D"))
            .with_class(ClassRecord::new("driving.port.P"));

        let result = rule.evaluate(&graph);

        let kinds: Vec<bool> = vec![
            matches!(result.violations[0].kind, ViolationKind::MissingLayer { .. }),
            matches!(result.violations[1].kind, ViolationKind::DirectionViolation { .. }),
            matches!(result.violations[2].kind, ViolationKind::DirectionViolation { .. }),
        ];
        assert_eq!(result.violations.len(), 3);
        assert_eq!(kinds, vec![true, true, true]);
    }

    #[test]
    fn test_custom_predicate_membership() {
        let adapters = ClassPredicate::by_predicate(
            |c: &ClassRecord| c.simple_name().ends_with("Adapter"),
            "classes named *Adapter",
        )
        .unwrap();

        let rule = hexagonal_architecture()
            .driven_adapters_that(adapters)
            .driven_ports(["port.."])
            .with_optional_layers(true);

        let graph = ClassGraph::new()
            .with_class(ClassRecord::new("anywhere.JpaAdapter").depends_on("port.Orders"))
            .with_class(ClassRecord::new("port.Orders"));

        assert!(rule.evaluate(&graph).is_satisfied());
    }
}
