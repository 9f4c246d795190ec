use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Attention tier assigned to a relationship.
///
/// Ordered by closeness: `Community < CloseFriends < InnerCircle`.
/// Each tier carries an expected contact interval (see `config::TierConfig`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Community,
    CloseFriends,
    InnerCircle,
}

impl Tier {
    /// All tiers in ascending order of closeness.
    pub const ALL: [Tier; 3] = [Tier::Community, Tier::CloseFriends, Tier::InnerCircle];

    /// One tier up, or `None` at InnerCircle.
    pub fn promote(self) -> Option<Tier> {
        match self {
            Tier::Community => Some(Tier::CloseFriends),
            Tier::CloseFriends => Some(Tier::InnerCircle),
            Tier::InnerCircle => None,
        }
    }

    /// One tier down, or `None` at Community.
    pub fn demote(self) -> Option<Tier> {
        match self {
            Tier::Community => None,
            Tier::CloseFriends => Some(Tier::Community),
            Tier::InnerCircle => Some(Tier::CloseFriends),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Community => write!(f, "Community"),
            Tier::CloseFriends => write!(f, "Close Friends"),
            Tier::InnerCircle => write!(f, "Inner Circle"),
        }
    }
}
