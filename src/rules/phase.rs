//! Turn phases.

use serde::{Deserialize, Serialize};

/// A phase of the turn/phase machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No game running; players may join.
    Idle,
    /// A join is waiting for its color choice.
    ChoosingColor,
    /// The turn has been handed to the next player.
    WaitingForTurn,
    /// A die has just been rolled.
    RollingDice,
    /// The legal-move table is current; waiting for a move.
    MovingPiece,
    /// Routing after a move was applied.
    ProcessingValidMove,
    /// Sending captured opponents back to base.
    CapturingOpponent,
    /// The moved piece reached home.
    GoingHome,
    /// Terminal.
    Win,
}

impl Phase {
    /// Phase name as exposed to collaborators.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::ChoosingColor => "choosingColor",
            Phase::WaitingForTurn => "waitingForTurn",
            Phase::RollingDice => "rollingDice",
            Phase::MovingPiece => "movingPiece",
            Phase::ProcessingValidMove => "processingValidMove",
            Phase::CapturingOpponent => "capturingOpponent",
            Phase::GoingHome => "goingHome",
            Phase::Win => "win",
        }
    }

    /// Whether no event can leave this phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Win)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_serde() {
        for phase in [Phase::Idle, Phase::MovingPiece, Phase::ProcessingValidMove, Phase::Win] {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase.name()));
        }
    }

    #[test]
    fn test_only_win_is_terminal() {
        assert!(Phase::Win.is_terminal());
        assert!(!Phase::GoingHome.is_terminal());
    }
}
