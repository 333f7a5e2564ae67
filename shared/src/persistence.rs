use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::segments::SelectionMode;
use crate::theme::Theme;

/// The slice of the store that survives a reload. Spin state is deliberately
/// absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedSelection {
    pub theme: Theme,
    pub mode: SelectionMode,
    pub active_team_id: Option<String>,
    pub ad_hoc_names: Vec<String>,
    pub ad_hoc_title: Option<String>,
    pub verbose_logging: bool,
}

impl PersistedSelection {
    pub fn from_json(raw: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string(self).map_err(|e| PersistenceError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back() {
        let restored = PersistedSelection::from_json(r#"{"mode":"team","activeTeamId":"t9"}"#).unwrap();
        assert_eq!(restored.mode, SelectionMode::Team);
        assert_eq!(restored.active_team_id.as_deref(), Some("t9"));
        assert_eq!(restored.theme, Theme::Standard);
        assert!(restored.ad_hoc_names.is_empty());
    }

    #[test]
    fn test_corrupt_payload() {
        let err = PersistedSelection::from_json("{not json").unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialize(_)));
        let err = PersistedSelection::from_json(r#"{"theme":"neon"}"#).unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialize(_)));
    }

    #[test]
    fn test_wire_names() {
        let selection = PersistedSelection {
            theme: Theme::Puppy,
            mode: SelectionMode::AdHoc,
            ad_hoc_names: vec!["Ann".to_string()],
            ..Default::default()
        };
        let json = selection.to_json().unwrap();
        assert!(json.contains(r#""theme":"puppy""#));
        assert!(json.contains(r#""mode":"adhoc""#));
        assert!(json.contains(r#""adHocNames":["Ann"]"#));
    }
}
