use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{ADHOC_ID_PREFIX, MAX_LABEL_CHARS, MIN_SEGMENTS};
use crate::teams::Team;

/// One wheel entry. Order in a segment list decides its angle on the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Team,
    #[default]
    AdHoc,
}

/// Where the wheel's names come from right now.
#[derive(Debug, Clone, Copy)]
pub enum SelectionSource<'a> {
    Team {
        team: &'a Team,
        excluded: Option<&'a HashSet<String>>,
    },
    AdHoc {
        names: &'a [String],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelReadiness {
    Empty,
    /// Something to draw, nothing to pick between.
    InsufficientSegments,
    Ready,
}

pub fn resolve_segments(source: &SelectionSource<'_>) -> Vec<Segment> {
    let mut seen = HashSet::new();

    let candidates: Vec<Segment> = match source {
        SelectionSource::Team { team, excluded } => team
            .members
            .iter()
            .filter(|m| !excluded.map_or(false, |set| set.contains(&m.id)))
            .map(|m| Segment {
                id: m.id.clone(),
                text: m.name.trim().to_string(),
                avatar_url: m.avatar_url.clone().filter(|url| !url.is_empty()),
            })
            .collect(),
        SelectionSource::AdHoc { names } => names
            .iter()
            .enumerate()
            .map(|(i, name)| Segment {
                id: format!("{}{}", ADHOC_ID_PREFIX, i),
                text: name.trim().to_string(),
                avatar_url: None,
            })
            .collect(),
    };

    candidates
        .into_iter()
        .filter(|s| !s.text.is_empty())
        .filter(|s| seen.insert(s.id.clone()))
        .collect()
}

/// Splits free text on newlines and commas, trimming and dropping blanks.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn readiness(segments: &[Segment]) -> WheelReadiness {
    match segments.len() {
        0 => WheelReadiness::Empty,
        n if n < MIN_SEGMENTS => WheelReadiness::InsufficientSegments,
        _ => WheelReadiness::Ready,
    }
}

pub fn truncate_label(text: &str) -> String {
    if text.chars().count() > MAX_LABEL_CHARS {
        let head: String = text.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::TeamMember;

    fn team_of(ids: &[&str]) -> Team {
        Team {
            id: "t1".to_string(),
            name: "Platform".to_string(),
            members: ids
                .iter()
                .map(|id| TeamMember {
                    id: id.to_string(),
                    name: id.to_uppercase(),
                    avatar_url: None,
                })
                .collect(),
            order: 0,
        }
    }

    #[test]
    fn test_team_segments_skip_excluded_in_order() {
        let team = team_of(&["a", "b", "c"]);
        let excluded: HashSet<String> = ["b".to_string()].into_iter().collect();
        let segments = resolve_segments(&SelectionSource::Team { team: &team, excluded: Some(&excluded) });

        let ids: Vec<&str> = segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(segments[1].text, "C");
    }

    #[test]
    fn test_team_segments_dedupe_ids() {
        let mut team = team_of(&["a", "b"]);
        team.members.push(TeamMember { id: "a".to_string(), name: "Again".to_string(), avatar_url: None });
        let segments = resolve_segments(&SelectionSource::Team { team: &team, excluded: None });
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "A");
    }

    #[test]
    fn test_parse_names_splits_and_trims() {
        assert_eq!(
            parse_names("Alice, Bob,,  Carol\nDan"),
            vec!["Alice", "Bob", "Carol", "Dan"]
        );
        assert!(parse_names(" ,\n , ").is_empty());
        assert_eq!(parse_names("Eve\r\nFay"), vec!["Eve", "Fay"]);
    }

    #[test]
    fn test_adhoc_ids_follow_position() {
        let names = vec!["Sam".to_string(), "Sam".to_string(), "   ".to_string(), "Kim".to_string()];
        let segments = resolve_segments(&SelectionSource::AdHoc { names: &names });
        let ids: Vec<&str> = segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["adhoc-0", "adhoc-1", "adhoc-3"]);
        assert_eq!(segments[0].text, segments[1].text);
    }

    #[test]
    fn test_readiness() {
        let names = vec!["Solo".to_string()];
        let one = resolve_segments(&SelectionSource::AdHoc { names: &names });
        assert_eq!(readiness(&[]), WheelReadiness::Empty);
        assert_eq!(readiness(&one), WheelReadiness::InsufficientSegments);
        assert_ne!(readiness(&one), WheelReadiness::Ready);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short"), "Short");
        assert_eq!(truncate_label("Bartholomew Jones"), "Bartholomew Jon...");
        assert_eq!(truncate_label("ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ"), "ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ...");
    }
}
