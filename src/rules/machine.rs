//! The turn/phase machine.
//!
//! ## Transition model
//!
//! Each phase has a list of event rows, a list of automatic rows, and
//! optional entry/exit actions. Rows are tried in order; the first whose
//! guard holds is taken. Taking a row with a target runs the source's exit
//! actions, the row's actions, then the target's entry actions (also for
//! self-transitions). A row with no target consumes the event and changes
//! nothing.
//!
//! After every accepted event the machine keeps taking automatic rows until
//! none applies, so callers only ever observe stable phases.
//!
//! ```
//! use ludo_engine::core::{Color, GameConfig};
//! use ludo_engine::rules::{Event, LudoMachine, Phase};
//!
//! let mut machine = LudoMachine::new(GameConfig::new("room-1").with_seed(7)).unwrap();
//! for (color, id) in [(Color::Red, "a"), (Color::Yellow, "b")] {
//!     assert!(machine.send(Event::JoinGame));
//!     assert!(machine.send(Event::color_confirmed(color, id)));
//! }
//! assert!(machine.send(Event::Start));
//! assert_eq!(machine.phase(), Phase::WaitingForTurn);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::BoardRules;
use crate::core::{Color, GameConfig, GameContext, GameRng, Player, Randomness};
use crate::error::ConfigError;

use super::action::Action;
use super::event::{Event, EventKind};
use super::guard::{Guard, GuardContext};
use super::phase::Phase;

/// Upper bound on automatic transitions taken for one event.
pub const MAX_SETTLE_STEPS: usize = 64;

/// One row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Row applies when this holds (always, if `None`).
    pub guard: Option<Guard>,
    /// Phase to enter; `None` consumes the event without a change.
    pub target: Option<Phase>,
    pub actions: &'static [Action],
}

impl Transition {
    const fn to(target: Phase) -> Self {
        Self {
            guard: None,
            target: Some(target),
            actions: &[],
        }
    }

    const fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    const fn with(mut self, actions: &'static [Action]) -> Self {
        self.actions = actions;
        self
    }

    const fn reject(guard: Guard) -> Self {
        Self {
            guard: Some(guard),
            target: None,
            actions: &[],
        }
    }
}

const IDLE_START: &[Transition] = &[Transition::to(Phase::WaitingForTurn)
    .when(Guard::HasEnoughPlayers)
    .with(&[Action::SetTurnOrder])];

const JOIN: &[Transition] = &[Transition::to(Phase::ChoosingColor).when(Guard::HasOpenSeat)];

const CONFIRM_COLOR: &[Transition] = &[Transition::to(Phase::Idle)
    .when(Guard::IsColorAvailable)
    .with(&[Action::AddPlayer])];

const FIRST_ROLL: &[Transition] = &[Transition::to(Phase::RollingDice)
    .when(Guard::IsCurrentPlayer)
    .with(&[Action::ResetDice])];

const ROLL_AGAIN: &[Transition] =
    &[Transition::to(Phase::RollingDice).when(Guard::IsCurrentPlayer)];

const MOVE: &[Transition] = &[
    Transition::reject(Guard::IsInvalidMove),
    Transition::to(Phase::ProcessingValidMove).with(&[
        Action::ConsumeDice,
        Action::MovePiece,
        Action::RebuildMoves,
    ]),
];

const AFTER_ROLL: &[Transition] =
    &[Transition::to(Phase::MovingPiece).when(Guard::LastRollNotOpening)];

const FORFEIT: &[Transition] = &[Transition::to(Phase::WaitingForTurn).when(Guard::CantMove)];

const ROUTE_MOVE: &[Transition] = &[
    Transition::to(Phase::CapturingOpponent).when(Guard::IsOpponentCapturable),
    Transition::to(Phase::GoingHome).when(Guard::IsGoingHome),
    Transition::to(Phase::RollingDice).when(Guard::HasCapturedOrGoneHome),
    Transition::to(Phase::MovingPiece).when(Guard::HasMoreMoves),
    Transition::to(Phase::WaitingForTurn),
];

const BACK_TO_ROUTING: &[Transition] = &[Transition::to(Phase::ProcessingValidMove)];

const HOME_ROUTING: &[Transition] = &[
    Transition::to(Phase::Win).when(Guard::AreAllPiecesHome),
    Transition::to(Phase::ProcessingValidMove),
];

/// Rows for an event in a phase.
#[must_use]
pub fn event_transitions(phase: Phase, kind: EventKind) -> &'static [Transition] {
    match (phase, kind) {
        (Phase::Idle, EventKind::Start) => IDLE_START,
        (Phase::Idle | Phase::WaitingForTurn, EventKind::JoinGame) => JOIN,
        (Phase::ChoosingColor, EventKind::ColorConfirmed) => CONFIRM_COLOR,
        (Phase::WaitingForTurn, EventKind::RollDice) => FIRST_ROLL,
        (Phase::RollingDice, EventKind::RollDice) => ROLL_AGAIN,
        (Phase::MovingPiece, EventKind::PieceMoved) => MOVE,
        _ => &[],
    }
}

/// Rows taken without an event.
#[must_use]
pub fn automatic_transitions(phase: Phase) -> &'static [Transition] {
    match phase {
        Phase::RollingDice => AFTER_ROLL,
        Phase::MovingPiece => FORFEIT,
        Phase::ProcessingValidMove => ROUTE_MOVE,
        Phase::CapturingOpponent => BACK_TO_ROUTING,
        Phase::GoingHome => HOME_ROUTING,
        _ => &[],
    }
}

/// Actions run on entering a phase.
#[must_use]
pub fn entry_actions(phase: Phase) -> &'static [Action] {
    match phase {
        Phase::WaitingForTurn => &[Action::AdvanceTurn],
        Phase::RollingDice => &[Action::ClearDiceWhenFull, Action::RollDie, Action::RebuildMoves],
        Phase::CapturingOpponent => &[Action::CaptureOpponents],
        Phase::GoingHome => &[Action::MarkHome],
        _ => &[],
    }
}

/// Actions run on leaving a phase.
#[must_use]
pub fn exit_actions(phase: Phase) -> &'static [Action] {
    match phase {
        Phase::RollingDice => &[Action::RebuildMoves],
        _ => &[],
    }
}

fn select<'t>(
    rows: &'t [Transition],
    ctx: &GameContext,
    event: Option<&Event>,
    rules: &BoardRules,
) -> Option<&'t Transition> {
    let gc = GuardContext::new(ctx, event, rules);
    rows.iter()
        .find(|row| row.guard.map_or(true, |guard| guard.evaluate(&gc)))
}

/// Seating and position invariants a resumed context must satisfy.
fn check_context(ctx: &GameContext, rules: &BoardRules) -> Result<(), ConfigError> {
    if ctx.room_id.trim().is_empty() {
        return Err(ConfigError::EmptyRoomId);
    }
    let players = ctx.players.len();
    if players > Color::COUNT {
        return Err(ConfigError::TooManyPlayers(players));
    }
    if let Some(turn) = ctx.current_turn.filter(|&t| t >= players) {
        return Err(ConfigError::TurnOutOfRange { turn, players });
    }

    let mut seen = [false; Color::COUNT];
    for player in ctx.players.iter() {
        if std::mem::replace(&mut seen[player.color.index()], true) {
            return Err(ConfigError::DuplicateColor(player.color));
        }
        if let Some((piece, &index)) = player
            .pieces
            .iter()
            .enumerate()
            .find(|&(_, &index)| index > rules.home_index())
        {
            return Err(ConfigError::PieceOutOfRange {
                color: player.color,
                piece,
                index,
            });
        }
    }
    Ok(())
}

/// Phase plus context: everything a collaborator may read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub context: GameContext,
}

/// A single game: board rules, random source, phase and context.
///
/// The machine exclusively owns its context. Every event is processed to a
/// stable phase before `send` returns.
#[derive(Clone, Debug)]
pub struct LudoMachine<R: Randomness = GameRng> {
    rules: BoardRules,
    rng: R,
    phase: Phase,
    context: GameContext,
}

impl LudoMachine<GameRng> {
    /// Create a machine in `idle` from a validated configuration.
    ///
    /// Dice come from the configured seed, or from entropy if none is set.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(seed = rng.seed(), "dice seeded");
        Self::with_rng(config, rng)
    }
}

impl<R: Randomness> LudoMachine<R> {
    /// Create a machine in `idle` with a caller-supplied random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let context = GameContext::new(config.room_id, config.rules.opening_values());
        debug!(room = %context.room_id, "machine created");
        Ok(Self {
            rules: config.rules,
            rng,
            phase: Phase::Idle,
            context,
        })
    }

    /// Resume from a snapshot.
    ///
    /// The roster and turn are checked against the seating rules, opening
    /// values are taken from `rules`, and the legal-move table is recomputed
    /// from the snapshot's dice and pieces.
    pub fn from_snapshot(
        rules: BoardRules,
        snapshot: Snapshot,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        let mut context = snapshot.context;
        check_context(&context, &rules)?;

        context.opening_values = rules.opening_values().iter().copied().collect();
        let context = Action::RebuildMoves.apply(context, None, &rules, &mut rng);
        debug!(room = %context.room_id, phase = %snapshot.phase, "machine resumed");
        Ok(Self {
            rules,
            rng,
            phase: snapshot.phase,
            context,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    #[must_use]
    pub fn rules(&self) -> &BoardRules {
        &self.rules
    }

    /// The random source, e.g. to checkpoint a [`GameRng`].
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Copy of the current phase and context.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            context: self.context.clone(),
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The player who won, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if self.is_finished() {
            self.context.current_player()
        } else {
            None
        }
    }

    /// Whether `event` would be accepted right now. Never mutates.
    #[must_use]
    pub fn can(&self, event: &Event) -> bool {
        let rows = event_transitions(self.phase, event.kind());
        select(rows, &self.context, Some(event), &self.rules)
            .is_some_and(|row| row.target.is_some())
    }

    /// Process an event to a stable phase.
    ///
    /// Returns `false`, leaving phase and context untouched, if no row for
    /// the event applies or the applicable row rejects it.
    #[instrument(skip(self), fields(room = %self.context.room_id, phase = %self.phase))]
    pub fn send(&mut self, event: Event) -> bool {
        let rows = event_transitions(self.phase, event.kind());
        let Some(row) = select(rows, &self.context, Some(&event), &self.rules).copied() else {
            debug!(phase = %self.phase, event = ?event.kind(), "event ignored");
            return false;
        };
        let Some(target) = row.target else {
            debug!(phase = %self.phase, ?event, "event rejected");
            return false;
        };

        debug!(from = %self.phase, to = %target, event = ?event.kind(), "transition");
        let ctx = self.take(self.phase, &row, target, self.context.clone(), Some(&event));
        let (phase, ctx) = self.settle(target, ctx);

        if event.kind() == EventKind::Start {
            info!(room = %ctx.room_id, players = ctx.players.len(), "game started");
        }
        self.phase = phase;
        self.context = ctx;
        true
    }

    /// Run exit, transition and entry actions for one row.
    fn take(
        &mut self,
        from: Phase,
        row: &Transition,
        target: Phase,
        ctx: GameContext,
        event: Option<&Event>,
    ) -> GameContext {
        let steps = exit_actions(from)
            .iter()
            .chain(row.actions)
            .chain(entry_actions(target));
        steps.fold(ctx, |ctx, action| {
            action.apply(ctx, event, &self.rules, &mut self.rng)
        })
    }

    /// Take automatic rows until none applies.
    fn settle(&mut self, mut phase: Phase, mut ctx: GameContext) -> (Phase, GameContext) {
        for _ in 0..MAX_SETTLE_STEPS {
            let rows = automatic_transitions(phase);
            let Some(row) = select(rows, &ctx, None, &self.rules).copied() else {
                return (phase, ctx);
            };
            let Some(target) = row.target else {
                return (phase, ctx);
            };

            debug!(from = %phase, to = %target, "automatic transition");
            ctx = self.take(phase, &row, target, ctx, None);
            phase = target;

            if phase == Phase::Win {
                if let Some(winner) = ctx.current_player() {
                    info!(room = %ctx.room_id, player = %winner.id, color = %winner.color, "game won");
                }
            }
        }
        warn!(%phase, steps = MAX_SETTLE_STEPS, "automatic transitions did not settle");
        (phase, ctx)
    }
}
