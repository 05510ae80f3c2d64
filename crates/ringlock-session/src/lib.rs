//! Ringlock: game session.
//!
//! A [`GameSession`] owns every puzzle aggregate, the audio port, the clock,
//! the event journal and the deferred-task schedulers for one play-through.
//! Presentation layers feed it [`PlayerAction`]s, pump
//! [`GameSession::run_due_tasks`] on a timer, and render its
//! [`SessionView`].

pub mod actions;
pub mod error;
pub mod session;
pub mod story;
pub mod view;

pub use actions::{ActionOutcome, PlayerAction};
pub use error::SessionError;
pub use session::GameSession;
pub use story::{PanelConfig, PuzzleKind, StoryConfig, StoryError};
pub use view::{PanelView, SessionView};
