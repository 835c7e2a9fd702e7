use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub type TeamId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl Group {
    pub const ALL: [Group; 12] = [
        Group::A,
        Group::B,
        Group::C,
        Group::D,
        Group::E,
        Group::F,
        Group::G,
        Group::H,
        Group::I,
        Group::J,
        Group::K,
        Group::L,
    ];

    pub fn letter(self) -> char {
        match self {
            Group::A => 'A',
            Group::B => 'B',
            Group::C => 'C',
            Group::D => 'D',
            Group::E => 'E',
            Group::F => 'F',
            Group::G => 'G',
            Group::H => 'H',
            Group::I => 'I',
            Group::J => 'J',
            Group::K => 'K',
            Group::L => 'L',
        }
    }

    pub fn from_letter(ch: char) -> Option<Group> {
        Group::ALL
            .iter()
            .copied()
            .find(|g| g.letter() == ch.to_ascii_uppercase())
    }

    /// Bit position used when groups are packed into a combination mask.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Group {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Group::from_letter(ch).ok_or_else(|| EngineError::UnknownGroup(trimmed.to_string()))
            }
            _ => Err(EngineError::UnknownGroup(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Group,
    RoundOf32,
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    BronzeFinal,
    Final,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Group,
        Stage::RoundOf32,
        Stage::RoundOf16,
        Stage::QuarterFinals,
        Stage::SemiFinals,
        Stage::BronzeFinal,
        Stage::Final,
    ];

    pub const KNOCKOUT: [Stage; 6] = [
        Stage::RoundOf32,
        Stage::RoundOf16,
        Stage::QuarterFinals,
        Stage::SemiFinals,
        Stage::BronzeFinal,
        Stage::Final,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Group => "Group Stage",
            Stage::RoundOf32 => "Round of 32",
            Stage::RoundOf16 => "Round of 16",
            Stage::QuarterFinals => "Quarter Finals",
            Stage::SemiFinals => "Semi Finals",
            Stage::BronzeFinal => "Bronze Final",
            Stage::Final => "Final",
        }
    }

    pub fn round_number(self) -> u8 {
        match self {
            Stage::Group => 0,
            Stage::RoundOf32 => 1,
            Stage::RoundOf16 => 2,
            Stage::QuarterFinals => 3,
            Stage::SemiFinals => 4,
            Stage::BronzeFinal => 5,
            Stage::Final => 6,
        }
    }

    pub fn match_numbers(self) -> std::ops::RangeInclusive<u16> {
        match self {
            Stage::Group => 1..=72,
            Stage::RoundOf32 => 73..=88,
            Stage::RoundOf16 => 89..=96,
            Stage::QuarterFinals => 97..=100,
            Stage::SemiFinals => 101..=102,
            Stage::BronzeFinal => 103..=103,
            Stage::Final => 104..=104,
        }
    }

    pub fn match_count(self) -> usize {
        self.match_numbers().count()
    }

    pub fn for_match_number(number: u16) -> Option<Stage> {
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.match_numbers().contains(&number))
    }

    pub fn draft_key(self) -> &'static str {
        match self {
            Stage::Group => "ante_post_group_predictions",
            Stage::RoundOf32 => "ante_post_r32_predictions",
            Stage::RoundOf16 => "ante_post_r16_predictions",
            Stage::QuarterFinals => "ante_post_qf_predictions",
            Stage::SemiFinals => "ante_post_sf_predictions",
            Stage::BronzeFinal => "ante_post_bronze_final_predictions",
            Stage::Final => "ante_post_final_predictions",
        }
    }

    pub fn short_code(self) -> &'static str {
        match self {
            Stage::Group => "Group",
            Stage::RoundOf32 => "R32",
            Stage::RoundOf16 => "R16",
            Stage::QuarterFinals => "QF",
            Stage::SemiFinals => "SF",
            Stage::BronzeFinal => "Bronze",
            Stage::Final => "Final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub confederation: Option<String>,
    // Lower is better; unranked teams sort last.
    #[serde(default)]
    pub fifa_ranking: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

/// A shared group-stage fixture row. Knockout matches are never fixtures: they are derived per
/// user from that user's own predictions (see `bracket`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub match_number: u16,
    #[serde(default)]
    pub group: Option<Group>,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
    // Real result; the progression engine never reads it.
    #[serde(default)]
    pub home_score: Option<u8>,
    #[serde(default)]
    pub away_score: Option<u8>,
    #[serde(default)]
    pub status: MatchStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePrediction {
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    #[serde(default)]
    pub predicted_winner_id: Option<TeamId>,
}

impl ScorePrediction {
    pub fn new(home_score: u8, away_score: u8) -> Self {
        Self {
            home_score: Some(home_score),
            away_score: Some(away_score),
            predicted_winner_id: None,
        }
    }

    pub fn with_winner(home_score: u8, away_score: u8, winner: impl Into<TeamId>) -> Self {
        Self {
            home_score: Some(home_score),
            away_score: Some(away_score),
            predicted_winner_id: Some(winner.into()),
        }
    }

    pub fn scores(&self) -> Option<(u8, u8)> {
        Some((self.home_score?, self.away_score?))
    }

    pub fn is_complete(&self) -> bool {
        self.scores().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    AntePost,
    Live,
}

impl PredictionType {
    pub fn as_str(self) -> &'static str {
        match self {
            PredictionType::AntePost => "ante_post",
            PredictionType::Live => "live",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ante_post" => Some(PredictionType::AntePost),
            "live" => Some(PredictionType::Live),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub user_id: String,
    // Only group-stage predictions reference a shared fixture row.
    pub match_id: Option<String>,
    pub match_number: u16,
    pub prediction_type: PredictionType,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub predicted_winner_id: Option<TeamId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub team_code: String,
    pub team_name: String,
    pub fifa_ranking: Option<u16>,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_code: team.code.clone(),
            team_name: team.name.clone(),
            fifa_ranking: team.fifa_ranking,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    pub(crate) fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += u32::from(scored);
        self.goals_against += u32::from(conceded);
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
        if scored > conceded {
            self.won += 1;
            self.points += 3;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalGroupStanding {
    #[serde(flatten)]
    pub standing: TeamStanding,
    pub position: u8,
    pub group: Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPlaceTeam {
    pub group: Group,
    pub standing: FinalGroupStanding,
}

/// One side of a knockout match together with how it got there ("Winner Group A",
/// "3rd Place Group E", "Loser Match 101").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutSlot {
    pub team_id: TeamId,
    pub code: String,
    pub name: String,
    pub source: String,
}

impl KnockoutSlot {
    pub fn from_standing(standing: &TeamStanding, source: impl Into<String>) -> Self {
        Self {
            team_id: standing.team_id.clone(),
            code: standing.team_code.clone(),
            name: standing.team_name.clone(),
            source: source.into(),
        }
    }

    pub(crate) fn relabel(&self, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutMatch {
    pub match_number: u16,
    pub home: KnockoutSlot,
    pub away: KnockoutSlot,
    pub stage: Stage,
    pub round_number: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_parses_single_letters_only() {
        assert_eq!("e".parse::<Group>().unwrap(), Group::E);
        assert_eq!(" L ".parse::<Group>().unwrap(), Group::L);
        assert!("M".parse::<Group>().is_err());
        assert!("AB".parse::<Group>().is_err());
        assert!("".parse::<Group>().is_err());
    }

    #[test]
    fn group_serializes_as_letter() {
        let json = serde_json::to_string(&Group::K).unwrap();
        assert_eq!(json, "\"K\"");
        let back: Group = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(back, Group::C);
    }

    #[test]
    fn stage_ranges_cover_all_104_matches_once() {
        let total: usize = Stage::ALL.iter().map(|s| s.match_count()).sum();
        assert_eq!(total, 104);
        assert_eq!(Stage::for_match_number(73), Some(Stage::RoundOf32));
        assert_eq!(Stage::for_match_number(103), Some(Stage::BronzeFinal));
        assert_eq!(Stage::for_match_number(104), Some(Stage::Final));
        assert_eq!(Stage::for_match_number(105), None);
    }

    #[test]
    fn standing_record_keeps_goal_difference_in_sync() {
        let team = Team {
            id: "t1".to_string(),
            code: "AAA".to_string(),
            name: "Alpha".to_string(),
            confederation: None,
            fifa_ranking: None,
        };
        let mut s = TeamStanding::new(&team);
        s.record(1, 3);
        s.record(2, 2);
        s.record(4, 0);
        assert_eq!((s.played, s.won, s.drawn, s.lost), (3, 1, 1, 1));
        assert_eq!(s.goal_difference, 2);
        assert_eq!(s.points, 4);
    }
}
