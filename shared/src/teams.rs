use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_avatar_url, validate_display_name};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    #[validate(custom = "validate_display_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_avatar_url")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[validate(custom = "validate_display_name")]
    pub name: String,
    #[validate]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub order: i64,
}

/// Read-only snapshot of the teams handed over by whatever owns persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRoster {
    teams: Vec<Team>,
}

impl TeamRoster {
    /// Builds a roster from raw records. Invalid teams are dropped and their
    /// ids returned so the caller can report them.
    pub fn from_teams(teams: Vec<Team>) -> (Self, Vec<String>) {
        let mut rejected = Vec::new();
        let mut valid: Vec<Team> = teams
            .into_iter()
            .filter(|team| match team.validate() {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Dropping invalid team {}: {}", team.id, e);
                    rejected.push(team.id.clone());
                    false
                }
            })
            .collect();

        // Stable, so equal orders keep their stored position
        valid.sort_by_key(|t| t.order);

        (Self { teams: valid }, rejected)
    }

    pub fn get(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str) -> TeamMember {
        TeamMember { id: id.to_string(), name: name.to_string(), avatar_url: None }
    }

    fn team(id: &str, order: i64, members: Vec<TeamMember>) -> Team {
        Team { id: id.to_string(), name: format!("Team {}", id), members, order }
    }

    #[test]
    fn test_roster_sorts_by_order() {
        let (roster, rejected) = TeamRoster::from_teams(vec![
            team("b", 2, vec![member("1", "Ann")]),
            team("a", 0, vec![member("2", "Ben")]),
            team("c", 1, vec![]),
        ]);
        assert!(rejected.is_empty());
        let ids: Vec<&str> = roster.teams().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_roster_drops_invalid_members() {
        let mut bad = team("bad", 0, vec![member("1", "")]);
        bad.members.push(member("2", "Ok"));
        let mut bad_avatar = team("avatar", 1, vec![member("3", "Cat")]);
        bad_avatar.members[0].avatar_url = Some("javascript:alert(1)".to_string());

        let (roster, rejected) = TeamRoster::from_teams(vec![
            bad,
            bad_avatar,
            team("good", 2, vec![member("4", "Dan")]),
        ]);
        assert_eq!(rejected, vec!["bad".to_string(), "avatar".to_string()]);
        assert!(roster.get("good").is_some());
        assert!(roster.get("bad").is_none());
    }

    #[test]
    fn test_team_json_uses_camel_case() {
        let json = r#"{"id":"t1","name":"Core","members":[{"id":"m1","name":"Eve","avatarUrl":"https://x.io/e.png"}]}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.order, 0);
        assert_eq!(team.members[0].avatar_url.as_deref(), Some("https://x.io/e.png"));
        assert_eq!(team.members[0].name, "Eve");
    }
}
