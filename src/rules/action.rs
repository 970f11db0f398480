//! Transition actions.
//!
//! Actions are a closed set of context mutators. Each takes the context by
//! value and returns the next one, so a transition is a pipeline of pure
//! steps plus the one impure input, the random source.

use tracing::{debug, info, trace};

use crate::board::BoardRules;
use crate::core::{GameContext, MoveRecord, PathIndex, Randomness, Resolution};
use crate::moves::{LegalMoveTable, Projector};

use super::event::Event;
use super::guard::{capture_victims, resolve_move};

/// Pending dice are cleared before a roll once they reach this many.
pub const MAX_PENDING_DICE: usize = 3;

/// A named transition action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rotate the color order to start at a random player; reset the turn.
    SetTurnOrder,
    /// Seat the player named by a `colorConfirmed` event.
    AddPlayer,
    /// Hand the turn to the next player and drop the previous turn's dice.
    AdvanceTurn,
    /// Clear pending dice.
    ResetDice,
    /// Clear pending dice if they have hit [`MAX_PENDING_DICE`].
    ClearDiceWhenFull,
    /// Roll one die and append it to the pending dice.
    RollDie,
    /// Recompute the legal-move table from pending dice and piece positions.
    RebuildMoves,
    /// Remove the dice a `pieceMoved` event spends; record the move.
    ConsumeDice,
    /// Write the new path index into the moving piece.
    MovePiece,
    /// Send opponent pieces on the landing cell back to base.
    CaptureOpponents,
    /// Record that the moved piece reached home.
    MarkHome,
}

impl Action {
    /// Apply this action, returning the next context.
    pub fn apply<R: Randomness + ?Sized>(
        self,
        mut ctx: GameContext,
        event: Option<&Event>,
        rules: &BoardRules,
        rng: &mut R,
    ) -> GameContext {
        match self {
            Action::SetTurnOrder => {
                if let Some(first) = rng.gen_index(ctx.players.len()) {
                    ctx.players.rotate_to(first);
                }
                ctx.current_turn = None;
                let order: Vec<_> = ctx.players.iter().map(|p| p.color.name()).collect();
                info!(room = %ctx.room_id, ?order, "turn order fixed");
            }

            Action::AddPlayer => {
                if let Some(Event::ColorConfirmed { color, player_id }) = event {
                    if ctx.players.join(player_id.clone(), *color) {
                        info!(room = %ctx.room_id, player = %player_id, %color, "player joined");
                    }
                }
            }

            Action::AdvanceTurn => {
                let count = ctx.players.len();
                ctx.current_turn = match (ctx.current_turn, count) {
                    (_, 0) => None,
                    (None, _) => Some(0),
                    (Some(i), n) => Some((i + 1) % n),
                };
                ctx.pending_dice.clear();
                ctx.legal_moves.clear();
                ctx.last_move = None;
                ctx.resolution = Resolution::default();
                debug!(turn = ?ctx.current_turn, "turn advanced");
            }

            Action::ResetDice => ctx.pending_dice.clear(),

            Action::ClearDiceWhenFull => {
                if ctx.pending_dice.len() >= MAX_PENDING_DICE {
                    debug!(dice = ?ctx.pending_dice.as_slice(), "pending dice cap reached");
                    ctx.pending_dice.clear();
                }
            }

            Action::RollDie => {
                let roll = rng.roll_die();
                ctx.pending_dice.push(roll);
                debug!(roll, pending = ?ctx.pending_dice.as_slice(), "die rolled");
            }

            Action::RebuildMoves => {
                ctx.legal_moves = match ctx.current_player() {
                    Some(player) => {
                        let projector = Projector::new(rules.opening_values(), rules.home_index());
                        LegalMoveTable::build(&ctx.pending_dice, &player.pieces, &projector)
                    }
                    None => LegalMoveTable::new(),
                };
                trace!(
                    entries = ctx.legal_moves.len(),
                    any_move = ctx.legal_moves.has_any_move(),
                    "legal moves rebuilt"
                );
            }

            Action::ConsumeDice => {
                let Some(mv) = event.and_then(|e| resolve_move(&ctx, e, rules)) else {
                    return ctx;
                };
                let Some(sequence) = ctx.legal_moves.sequence_for(mv.piece, mv.to).cloned() else {
                    return ctx;
                };
                if sequence.remove_from(&mut ctx.pending_dice) {
                    debug!(dice = %sequence, remaining = ?ctx.pending_dice.as_slice(), "dice consumed");
                    ctx.last_move = Some(MoveRecord {
                        piece: mv.piece,
                        from: mv.from,
                        to: mv.to,
                        dice: sequence,
                    });
                    ctx.resolution = Resolution::default();
                }
            }

            Action::MovePiece => {
                let (Some(turn), Some(mv)) = (
                    ctx.current_turn,
                    event.and_then(|e| resolve_move(&ctx, e, rules)),
                ) else {
                    return ctx;
                };
                ctx.players.set_piece(turn, mv.piece, mv.to);
                debug!(piece = mv.piece, from = %mv.from, to = %mv.to, "piece moved");
            }

            Action::CaptureOpponents => {
                let victims = capture_victims(&ctx, rules);
                for &(seat, piece) in &victims {
                    ctx.players.set_piece(seat, piece, PathIndex::BASE);
                }
                if !victims.is_empty() {
                    ctx.resolution.captured = true;
                    info!(captured = victims.len(), "opponents sent back to base");
                }
            }

            Action::MarkHome => {
                ctx.resolution.reached_home = true;
                debug!("piece reached home");
            }
        }
        ctx
    }
}
