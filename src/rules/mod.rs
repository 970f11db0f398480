//! Turn/phase machine.
//!
//! - `phase`: the finite set of phases
//! - `event`: external requests
//! - `guard`: pure predicates that gate transitions
//! - `action`: context mutators run by transitions
//! - `machine`: the transition table and the `LudoMachine` that drives it
//!
//! Guards and actions are closed enums dispatched by `match`, so the
//! transition table is checked exhaustively at compile time.

pub mod phase;
pub mod event;
pub mod guard;
pub mod action;
pub mod machine;

pub use phase::Phase;
pub use event::{Event, EventKind};
pub use guard::{capture_victims, resolve_move, Guard, GuardContext, ResolvedMove, MIN_PLAYERS};
pub use action::{Action, MAX_PENDING_DICE};
pub use machine::{LudoMachine, Snapshot, Transition, MAX_SETTLE_STEPS};
