//! The six fixed architectural roles of a hexagonal architecture
//!
//! Architecture: Value Object - LayerRole is a closed enumeration with intrinsic ordering
//! - The canonical order drives description rendering and violation reporting
//! - Display labels live on the role, not in the formatters that use them

use serde::{Deserialize, Serialize};

/// One of the six architectural roles a class can be assigned to.
///
/// The derived ordering is the canonical role order used whenever roles are
/// rendered or iterated: configuration first, driving adapters last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerRole {
    /// Wiring code assembling adapters, ports, and application services
    Configuration,
    /// Use-case orchestration between driving and driven ports
    ApplicationService,
    /// Outbound capability required by the application
    DrivenPort,
    /// Inbound capability offered by the application
    DrivingPort,
    /// Concrete implementation of a driven port
    DrivenAdapter,
    /// Caller invoking a driving port
    DrivingAdapter,
}

impl LayerRole {
    /// All roles in canonical order.
    pub const ALL: [LayerRole; 6] = [
        LayerRole::Configuration,
        LayerRole::ApplicationService,
        LayerRole::DrivenPort,
        LayerRole::DrivingPort,
        LayerRole::DrivenAdapter,
        LayerRole::DrivingAdapter,
    ];

    /// Singular display label, used in violation messages
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::ApplicationService => "application service",
            Self::DrivenPort => "driven port",
            Self::DrivingPort => "driving port",
            Self::DrivenAdapter => "driven adapter",
            Self::DrivingAdapter => "driving adapter",
        }
    }

    /// Plural display label, used in rule descriptions
    pub fn plural(self) -> &'static str {
        match self {
            Self::Configuration => "configurations",
            Self::ApplicationService => "application services",
            Self::DrivenPort => "driven ports",
            Self::DrivingPort => "driving ports",
            Self::DrivenAdapter => "driven adapters",
            Self::DrivingAdapter => "driving adapters",
        }
    }

    /// Whether a dependency from `self` to `target` respects the hexagonal
    /// dependency direction. Same-role dependencies are always allowed; the
    /// direction constraints only apply across roles.
    pub fn may_depend_on(self, target: LayerRole) -> bool {
        if self == target {
            return true;
        }

        match self {
            // Wiring layer assembles everything
            Self::Configuration => true,
            Self::ApplicationService => {
                matches!(target, Self::DrivingPort | Self::DrivenPort)
            }
            Self::DrivingAdapter => matches!(target, Self::DrivingPort),
            Self::DrivenAdapter => matches!(target, Self::DrivenPort),
            // Ports are dependency-free abstractions
            Self::DrivenPort | Self::DrivingPort => false,
        }
    }
}

impl std::fmt::Display for LayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
