//! Market definitions from the per-sport rule document.

use serde::{Deserialize, Serialize};

/// Metadata for a single market key.
///
/// Rules reference markets either directly by key or through the broader
/// `group` (e.g. `"GAME_LINE"`); the remaining fields are descriptive and
/// carried through for callers that want them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDefinition {
    /// Broader family the market belongs to, e.g. `"GAME_LINE"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Market kind within the group, e.g. `"spread"`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub market_type: Option<String>,
    /// Period the market settles on, e.g. `"full_game"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Unit of the underlying statistic, e.g. `"yards"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_unit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_deserializes_with_partial_fields() {
        let def: MarketDefinition =
            serde_json::from_str(r#"{"group":"GAME_LINE","type":"spread"}"#).unwrap();
        assert_eq!(def.group.as_deref(), Some("GAME_LINE"));
        assert_eq!(def.market_type.as_deref(), Some("spread"));
        assert!(def.period.is_none());
        assert!(def.stat_unit.is_none());
    }
}
