//! # Organization Diagram Config
//!
//! Styling and connection rules for the org-structure graph editor: six node
//! kinds, which kind may link to which, and the shared edge style. The
//! serialized forms match what the graph widget consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a node in the org graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Organization,
    Department,
    User,
    Role,
    Permission,
    Menu,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Organization,
        NodeKind::Department,
        NodeKind::User,
        NodeKind::Role,
        NodeKind::Permission,
        NodeKind::Menu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Organization => "organization",
            NodeKind::Department => "department",
            NodeKind::User => "user",
            NodeKind::Role => "role",
            NodeKind::Permission => "permission",
            NodeKind::Menu => "menu",
        }
    }

    /// Display metadata for this kind.
    pub fn config(&self) -> NodeConfig {
        let (label, icon, color, shade) = match self {
            NodeKind::Organization => ("Organization", "BankOutlined", "#1890ff", "#096dd9"),
            NodeKind::Department => ("Department", "ApartmentOutlined", "#52c41a", "#389e0d"),
            NodeKind::User => ("User", "UserOutlined", "#13c2c2", "#08979c"),
            NodeKind::Role => ("Role", "TeamOutlined", "#722ed1", "#531dab"),
            NodeKind::Permission => ("Permission", "LockOutlined", "#fa8c16", "#d46b08"),
            NodeKind::Menu => ("Menu", "MenuOutlined", "#eb2f96", "#c41d7f"),
        };
        NodeConfig {
            label,
            icon,
            color,
            gradient: format!("linear-gradient(135deg, {}, {})", color, shade),
        }
    }

    /// Kinds this kind may connect to.
    pub fn allowed_targets(&self) -> &'static [NodeKind] {
        match self {
            NodeKind::Organization => &[NodeKind::Department],
            NodeKind::Department => &[NodeKind::User],
            NodeKind::User => &[NodeKind::Role],
            NodeKind::Role => &[NodeKind::Permission, NodeKind::Menu],
            NodeKind::Permission | NodeKind::Menu => &[],
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, lowercase names only: `"Menu"` is not a kind.
impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown node kind '{}'", s))
    }
}

/// Label, icon and colors of a node kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeConfig {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub gradient: String,
}

/// Resolved style of a rendered node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub gradient: String,
    pub text_color: &'static str,
}

pub const NODE_TEXT_COLOR: &str = "#ffffff";

pub fn node_style(kind: NodeKind) -> NodeStyle {
    let config = kind.config();
    NodeStyle {
        background_color: config.color,
        border_color: config.color,
        gradient: config.gradient,
        text_color: NODE_TEXT_COLOR,
    }
}

/// Style for a kind given by name; unknown names are styled as organizations.
pub fn node_style_for(name: &str) -> NodeStyle {
    node_style(name.parse().unwrap_or(NodeKind::Organization))
}

/// Whether an edge from `source` to `target` is allowed.
pub fn validate_connection(source: NodeKind, target: NodeKind) -> bool {
    source.allowed_targets().contains(&target)
}

/// [`validate_connection`] over kind names; unknown names never connect.
pub fn validate_connection_by_name(source: &str, target: &str) -> bool {
    match (source.parse::<NodeKind>(), target.parse::<NodeKind>()) {
        (Ok(source), Ok(target)) => validate_connection(source, target),
        _ => false,
    }
}

/// Edge styling shared by every link in the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeConfig {
    pub attrs: EdgeAttrs,
    pub connector: Named<DirectionArgs>,
    pub router: Named<PaddingArgs>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeAttrs {
    pub line: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub stroke: &'static str,
    pub stroke_width: u32,
    pub target_marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

/// `{name, args}` pair used by connectors and routers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Named<A> {
    pub name: &'static str,
    pub args: A,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionArgs {
    pub direction: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddingArgs {
    pub padding: u32,
}

pub fn edge_config() -> EdgeConfig {
    EdgeConfig {
        attrs: EdgeAttrs {
            line: LineStyle {
                stroke: "#8c8c8c",
                stroke_width: 2,
                target_marker: Marker {
                    name: "block",
                    width: 12,
                    height: 8,
                },
            },
        },
        connector: Named {
            name: "smooth",
            args: DirectionArgs { direction: "V" },
        },
        router: Named {
            name: "manhattan",
            args: PaddingArgs { padding: 20 },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_rules() {
        assert!(validate_connection(NodeKind::Role, NodeKind::Permission));
        assert!(validate_connection(NodeKind::Role, NodeKind::Menu));
        assert!(validate_connection(NodeKind::Organization, NodeKind::Department));
        assert!(!validate_connection(NodeKind::User, NodeKind::Menu));
        assert!(!validate_connection(NodeKind::Department, NodeKind::Organization));
        assert!(!validate_connection(NodeKind::Permission, NodeKind::Role));
    }

    #[test]
    fn test_connection_by_name() {
        assert!(validate_connection_by_name("department", "user"));
        assert!(!validate_connection_by_name("team", "user"));
        assert!(!validate_connection_by_name("Department", "user"));
    }

    #[test]
    fn test_node_style() {
        let style = node_style(NodeKind::Role);
        assert_eq!(style.background_color, "#722ed1");
        assert_eq!(style.border_color, "#722ed1");
        assert_eq!(style.gradient, "linear-gradient(135deg, #722ed1, #531dab)");
        assert_eq!(style.text_color, "#ffffff");
    }

    #[test]
    fn test_unknown_kind_styled_as_organization() {
        assert_eq!(node_style_for("galaxy"), node_style(NodeKind::Organization));
        assert_eq!(node_style_for("menu").background_color, "#eb2f96");
        assert_eq!(node_style_for("Menu"), node_style(NodeKind::Organization));
        assert_eq!(node_style_for(" menu"), node_style(NodeKind::Organization));
    }

    #[test]
    fn test_edge_config_json_shape() {
        let json = serde_json::to_value(edge_config()).unwrap();
        assert_eq!(json["attrs"]["line"]["strokeWidth"], 2);
        assert_eq!(json["attrs"]["line"]["targetMarker"]["width"], 12);
        assert_eq!(json["connector"]["args"]["direction"], "V");
        assert_eq!(json["router"]["args"]["padding"], 20);
    }

    #[test]
    fn test_kind_serde_lowercase() {
        assert_eq!(serde_json::to_string(&NodeKind::Permission).unwrap(), "\"permission\"");
        assert_eq!("role".parse::<NodeKind>(), Ok(NodeKind::Role));
        assert!("ROLE".parse::<NodeKind>().is_err());
    }
}
