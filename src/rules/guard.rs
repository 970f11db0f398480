//! Transition guards.
//!
//! Guards are a closed set of pure predicates over the context, the event
//! being handled (if any) and the board rules. They never fail: anything
//! malformed or out of range simply evaluates to "does not hold".

use smallvec::SmallVec;

use crate::board::{BoardRules, CellId};
use crate::core::{Color, GameContext, PathIndex};

use super::event::Event;

/// Minimum seated players before `start` is accepted.
pub const MIN_PLAYERS: usize = 2;

/// A named transition guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Guard {
    /// At least [`MIN_PLAYERS`] have joined.
    HasEnoughPlayers,
    /// Fewer than four players have joined.
    HasOpenSeat,
    /// The confirmed color is free.
    IsColorAvailable,
    /// A seated player holds the turn.
    IsCurrentPlayer,
    /// The latest roll does not grant another roll.
    LastRollNotOpening,
    /// No pending sequence moves any piece.
    CantMove,
    /// The requested move matches no legal-move table entry.
    IsInvalidMove,
    /// The moved piece landed on a capturable opponent.
    IsOpponentCapturable,
    /// The moved piece just reached home.
    IsGoingHome,
    /// This move already captured or went home.
    HasCapturedOrGoneHome,
    /// Some pending sequence still moves some piece.
    HasMoreMoves,
    /// Every piece of the current player is home.
    AreAllPiecesHome,
}

/// Everything a guard may read.
#[derive(Clone, Copy, Debug)]
pub struct GuardContext<'a> {
    pub ctx: &'a GameContext,
    pub event: Option<&'a Event>,
    pub rules: &'a BoardRules,
}

impl<'a> GuardContext<'a> {
    #[must_use]
    pub fn new(ctx: &'a GameContext, event: Option<&'a Event>, rules: &'a BoardRules) -> Self {
        Self { ctx, event, rules }
    }
}

impl Guard {
    /// Evaluate this guard.
    #[must_use]
    pub fn evaluate(self, gc: &GuardContext<'_>) -> bool {
        let ctx = gc.ctx;
        match self {
            Guard::HasEnoughPlayers => ctx.players.len() >= MIN_PLAYERS,

            Guard::HasOpenSeat => !ctx.players.is_full(),

            Guard::IsColorAvailable => match gc.event {
                Some(Event::ColorConfirmed { color, .. }) => {
                    !ctx.players.is_full() && !ctx.players.is_color_taken(*color)
                }
                _ => false,
            },

            Guard::IsCurrentPlayer => ctx.current_player().is_some(),

            Guard::LastRollNotOpening => match ctx.last_roll() {
                Some(roll) => !gc.rules.is_opening_value(roll),
                None => true,
            },

            Guard::CantMove => !ctx.legal_moves.has_any_move(),

            Guard::IsInvalidMove => match gc.event {
                Some(event @ Event::PieceMoved { .. }) => {
                    resolve_move(ctx, event, gc.rules).is_none()
                }
                _ => false,
            },

            Guard::IsOpponentCapturable => {
                !ctx.resolution.captured && !capture_victims(ctx, gc.rules).is_empty()
            }

            Guard::IsGoingHome => {
                !ctx.resolution.reached_home
                    && ctx
                        .last_move
                        .as_ref()
                        .is_some_and(|m| m.to == gc.rules.home_index())
            }

            Guard::HasCapturedOrGoneHome => ctx.resolution.earns_bonus_roll(),

            Guard::HasMoreMoves => ctx.legal_moves.has_any_move(),

            Guard::AreAllPiecesHome => ctx
                .current_player()
                .is_some_and(|p| p.all_home(gc.rules.home_index())),
        }
    }
}

/// A `pieceMoved` request resolved against the legal-move table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedMove {
    pub piece: usize,
    pub from: PathIndex,
    pub to: PathIndex,
}

/// Resolve a `pieceMoved` event to a legal move for the current player.
///
/// `None` if the event is not a move, the piece index is out of range, the
/// cell is not on the player's path, or no table entry takes that piece to
/// that index.
#[must_use]
pub fn resolve_move(ctx: &GameContext, event: &Event, rules: &BoardRules) -> Option<ResolvedMove> {
    let Event::PieceMoved { piece, cell } = *event else {
        return None;
    };
    let player = ctx.current_player()?;
    let from = *player.pieces.get(piece)?;
    let to = rules.path_index_of(player.color, cell)?;

    ctx.legal_moves
        .is_legal(piece, to)
        .then_some(ResolvedMove { piece, from, to })
}

/// Opponent pieces sharing the last moved piece's landing cell, as
/// `(turn-order position, piece index)` pairs.
///
/// Empty unless the landing cell is shared and not safe.
#[must_use]
pub fn capture_victims(ctx: &GameContext, rules: &BoardRules) -> SmallVec<[(usize, usize); 4]> {
    let mut victims = SmallVec::new();

    let (Some(turn), Some(record)) = (ctx.current_turn, ctx.last_move.as_ref()) else {
        return victims;
    };
    let Some(mover) = ctx.players.get(turn) else {
        return victims;
    };
    let Some(cell) = rules.cell(mover.color, record.to) else {
        return victims;
    };
    if !rules.is_capture_cell(cell) {
        return victims;
    }

    for (seat, opponent) in ctx.players.iter().enumerate() {
        if seat == turn {
            continue;
        }
        for (piece, &position) in opponent.pieces.iter().enumerate() {
            if occupies(rules, opponent.color, position, cell) {
                victims.push((seat, piece));
            }
        }
    }
    victims
}

fn occupies(rules: &BoardRules, color: Color, position: PathIndex, cell: CellId) -> bool {
    !position.is_base() && rules.cell(color, position) == Some(cell)
}
