//! Resolved boost card and its display state

use questboost_core::BoostId;
use serde::Serialize;
use std::fmt;

/// Per-user badge shown on a boost card. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostDisplayState {
    /// Boost is open and not yet completed: show the reward amount and token
    ShowReward,
    /// Boost ended, user completed it and a winner was drawn: link to the claim page
    SeeReward,
    /// Boost ended with nothing for this user to collect
    BoostEndedNoWin,
    /// Boost ended and the user already claimed
    BoostEndedAlreadyClaimed,
    /// Boost is open and the user completed every quest
    Done,
}

impl BoostDisplayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoostDisplayState::ShowReward => "show_reward",
            BoostDisplayState::SeeReward => "see_reward",
            BoostDisplayState::BoostEndedNoWin => "boost_ended_no_win",
            BoostDisplayState::BoostEndedAlreadyClaimed => "boost_ended_already_claimed",
            BoostDisplayState::Done => "done",
        }
    }
}

impl fmt::Display for BoostDisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boost as it should be presented to one user at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostCard {
    pub boost_id: BoostId,
    pub name: String,
    pub img_url: String,
    pub quest_count: usize,
    pub amount: f64,
    pub token: String,
    /// `None` when there is no badge to show (signed out, boost ended)
    pub state: Option<BoostDisplayState>,
    pub clickable: bool,
    /// Detail page link, only for clickable cards
    pub link: Option<String>,
}

impl BoostCard {
    /// Text of the badge, if any
    pub fn badge(&self) -> Option<String> {
        self.state.map(|state| match state {
            BoostDisplayState::ShowReward => format!("{} {}", self.amount, self.token),
            BoostDisplayState::SeeReward => "See my reward".to_string(),
            BoostDisplayState::BoostEndedNoWin | BoostDisplayState::BoostEndedAlreadyClaimed => {
                "Boost ended".to_string()
            }
            BoostDisplayState::Done => "Done".to_string(),
        })
    }
}

impl fmt::Display for BoostCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.quest_count > 1 { "s" } else { "" };
        write!(f, "{} - {} quest{}", self.name, self.quest_count, plural)?;
        if let Some(badge) = self.badge() {
            write!(f, " [{}]", badge)?;
        }
        if let Some(ref link) = self.link {
            write!(f, " -> {}", link)?;
        }
        Ok(())
    }
}
