//! Match and Delivery Records

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Field values that load as absent in nullable columns
const NULL_MARKERS: [&str; 4] = ["NA", "NaN", "nan", "null"];

/// Season label (e.g. `2008` or `2007/08`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(String);

impl Season {
    /// Create a season from its label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    /// Season label as written in the match table
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Season {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// How a batter was dismissed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DismissalKind {
    Bowled,
    Caught,
    CaughtAndBowled,
    Lbw,
    Stumped,
    HitWicket,
    RunOut,
    RetiredHurt,
    RetiredOut,
    ObstructingTheField,
    /// Label not in the known set
    Other(String),
}

impl DismissalKind {
    /// Parse a dismissal label from the delivery table
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "bowled" => Self::Bowled,
            "caught" => Self::Caught,
            "caught and bowled" => Self::CaughtAndBowled,
            "lbw" => Self::Lbw,
            "stumped" => Self::Stumped,
            "hit wicket" => Self::HitWicket,
            "run out" => Self::RunOut,
            "retired hurt" => Self::RetiredHurt,
            "retired out" => Self::RetiredOut,
            "obstructing the field" => Self::ObstructingTheField,
            _ => Self::Other(label.trim().to_string()),
        }
    }

    /// Label as written in the delivery table
    pub fn label(&self) -> &str {
        match self {
            Self::Bowled => "bowled",
            Self::Caught => "caught",
            Self::CaughtAndBowled => "caught and bowled",
            Self::Lbw => "lbw",
            Self::Stumped => "stumped",
            Self::HitWicket => "hit wicket",
            Self::RunOut => "run out",
            Self::RetiredHurt => "retired hurt",
            Self::RetiredOut => "retired out",
            Self::ObstructingTheField => "obstructing the field",
            Self::Other(label) => label,
        }
    }

    /// Whether the wicket counts towards the bowler's tally
    ///
    /// Run outs, retirements hurt and obstruction are not the bowler's
    /// wickets. Every other kind, including unknown labels, is.
    pub fn credited_to_bowler(&self) -> bool {
        !matches!(
            self,
            Self::RunOut | Self::RetiredHurt | Self::ObstructingTheField
        )
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the match table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Match {
    /// Unique match key
    pub id: u64,
    pub season: Season,
    /// Winning team, absent for no-result matches
    #[serde(default, deserialize_with = "nullable")]
    pub winner: Option<String>,
    pub toss_winner: String,
}

impl Match {
    /// Create a match record
    pub fn new(
        id: u64,
        season: impl Into<Season>,
        winner: Option<&str>,
        toss_winner: &str,
    ) -> Self {
        Self {
            id,
            season: season.into(),
            winner: winner.map(str::to_string),
            toss_winner: toss_winner.to_string(),
        }
    }

    /// Whether the toss winner also won the match
    pub fn toss_winner_won(&self) -> bool {
        self.winner.as_deref() == Some(self.toss_winner.as_str())
    }
}

/// One row of the ball-by-ball delivery table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Delivery {
    /// Key of the match this ball belongs to
    pub match_id: u64,
    /// Batter on strike
    pub batter: String,
    pub bowler: String,
    /// Runs off the bat
    pub batsman_runs: u32,
    /// Ball number within the over
    pub ball: u32,
    #[serde(default, deserialize_with = "nullable_dismissal")]
    pub dismissal_kind: Option<DismissalKind>,
    #[serde(default, deserialize_with = "nullable")]
    pub player_dismissed: Option<String>,
}

impl Delivery {
    /// Create a delivery with no wicket
    pub fn new(match_id: u64, batter: &str, bowler: &str, batsman_runs: u32) -> Self {
        Self {
            match_id,
            batter: batter.to_string(),
            bowler: bowler.to_string(),
            batsman_runs,
            ball: 1,
            dismissal_kind: None,
            player_dismissed: None,
        }
    }

    /// Mark this delivery as a wicket of the given kind, dismissing the batter
    pub fn with_dismissal(mut self, kind: DismissalKind) -> Self {
        self.player_dismissed = Some(self.batter.clone());
        self.dismissal_kind = Some(kind);
        self
    }

    /// Whether a wicket fell on this ball that the bowler is credited with
    pub fn is_bowler_wicket(&self) -> bool {
        self.dismissal_kind
            .as_ref()
            .is_some_and(DismissalKind::credited_to_bowler)
    }
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let value = value.trim();
        if value.is_empty() || NULL_MARKERS.contains(&value) {
            None
        } else {
            Some(value.to_string())
        }
    }))
}

fn nullable_dismissal<'de, D>(deserializer: D) -> Result<Option<DismissalKind>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(nullable(deserializer)?.map(|label| DismissalKind::from_label(&label)))
}
