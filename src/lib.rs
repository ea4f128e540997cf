//! Hexguard - Hexagonal architecture rules for class dependency graphs
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure rule logic separated from parsing and reporting infrastructure
//! - An external front end supplies the class graph; this crate only evaluates it
//! - Rules are immutable values, safe to share across independent evaluations
//!
//! A rule is configured fluently, then either rendered as a description or
//! evaluated against a class graph:
//!
//! ```
//! use hexguard::{hexagonal_architecture, ClassGraph, ClassRecord};
//!
//! let rule = hexagonal_architecture()
//!     .application_services(["..application.service.."])
//!     .driven_ports(["..domain.spi.."])
//!     .driving_ports(["..domain.api.."])
//!     .with_optional_layers(true);
//!
//! let graph = ClassGraph::new().with_class(
//!     ClassRecord::new("shop.application.service.OrderService")
//!         .depends_on("shop.domain.api.PlaceOrder"),
//! );
//!
//! let result = rule.evaluate(&graph);
//! assert!(result.is_satisfied());
//! ```

pub mod domain;
pub mod graph;
pub mod patterns;
pub mod report;
pub mod rule;

// Re-export main types for convenient access
pub use domain::roles::LayerRole;
pub use domain::violations::{
    EvaluationResult, HexguardError, HexguardResult, Violation, ViolationKind,
};

pub use graph::{ClassGraph, ClassRecord};

pub use patterns::{ClassPredicate, PackageMatcher};

pub use rule::{hexagonal_architecture, HexagonalArchitecture};

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_graph() -> ClassGraph {
        ClassGraph::new()
            .with_class(
                ClassRecord::new("shop.config.Wiring")
                    .depends_on("shop.application.service.OrderService")
                    .depends_on("shop.adapter.jpa.JpaOrderRepository")
                    .depends_on("shop.adapter.web.OrderController"),
            )
            .with_class(
                ClassRecord::new("shop.application.service.OrderService")
                    .depends_on("shop.domain.api.PlaceOrder")
                    .depends_on("shop.domain.spi.OrderRepository"),
            )
            .with_class(ClassRecord::new("shop.domain.api.PlaceOrder"))
            .with_class(ClassRecord::new("shop.domain.spi.OrderRepository"))
            .with_class(
                ClassRecord::new("shop.adapter.jpa.JpaOrderRepository")
                    .depends_on("shop.domain.spi.OrderRepository"),
            )
            .with_class(
                ClassRecord::new("shop.adapter.web.OrderController")
                    .depends_on("shop.domain.api.PlaceOrder"),
            )
    }

    fn shop_rule() -> HexagonalArchitecture {
        hexagonal_architecture()
            .configurations(["shop.config.."])
            .application_services(["shop.application.service.."])
            .driven_ports(["shop.domain.spi.."])
            .driving_ports(["shop.domain.api.."])
            .driven_adapters(["shop.adapter.jpa.."])
            .driving_adapters(["shop.adapter.web.."])
    }

    #[test]
    fn test_well_layered_shop_passes() {
        assert!(shop_rule().check(&shop_graph()).is_ok());
    }

    #[test]
    fn test_rotten_edge_is_reported_through_check() {
        let graph = shop_graph().with_class(
            ClassRecord::new("shop.domain.api.Leak").depends_on("shop.adapter.web.OrderController"),
        );

        let err = shop_rule().check(&graph).unwrap_err();
        let report = err.to_string();

        assert!(report.contains("was violated (1 time)"));
        assert!(report.contains("shop.domain.api.Leak"));
        assert!(report.contains("driving adapter"));
    }

    #[test]
    fn test_graph_from_json_feeds_evaluation() {
        let json = r#"{
            "classes": [
                {
                    "name": "shop.application.service.OrderService",
                    "package": "shop.application.service",
                    "dependencies": ["shop.domain.api.PlaceOrder"]
                },
                {
                    "name": "shop.domain.api.PlaceOrder",
                    "package": "shop.domain.api"
                }
            ]
        }"#;

        let graph = ClassGraph::from_json_str(json).unwrap();
        let rule = hexagonal_architecture()
            .application_services(["shop.application.service.."])
            .driving_ports(["shop.domain.api.."]);

        assert!(rule.evaluate(&graph).is_satisfied());
    }
}
