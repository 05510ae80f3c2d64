//! The game session and its action dispatcher.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use ringlock_audio::{AudioPort, ToneKind};
use ringlock_color_mix::application::command_handlers::{handle_add_sample, handle_reset_mix};
use ringlock_color_mix::application::query_handlers::get_color_mix;
use ringlock_color_mix::domain::aggregates::{ColorMix, MixOutcome};
use ringlock_color_mix::domain::color::ColorSample;
use ringlock_color_mix::domain::commands::{AddSample, ResetMix};
use ringlock_core::clock::Clock;
use ringlock_core::error::DomainError;
use ringlock_core::journal::EventJournal;
use ringlock_core::rng::DeterministicRng;
use ringlock_core::schedule::Scheduler;
use ringlock_date::application::command_handlers::{
    DateTask, handle_check_date, handle_clear_feedback,
};
use ringlock_date::application::query_handlers::get_date;
use ringlock_date::domain::aggregates::{DateCheck, DateOutcome};
use ringlock_date::domain::commands::{CheckDate, ClearFeedback};
use ringlock_debate::application::command_handlers::{handle_move_card, handle_shuffle_deck};
use ringlock_debate::application::query_handlers::get_debate;
use ringlock_debate::domain::aggregates::{ArgumentSort, SortOutcome};
use ringlock_debate::domain::arguments::{ArgumentId, Zone};
use ringlock_debate::domain::commands::{MoveCard, ShuffleDeck};
use ringlock_jigsaw::application::command_handlers::{handle_answer_riddle, handle_place_piece};
use ringlock_jigsaw::application::query_handlers::get_jigsaw;
use ringlock_jigsaw::domain::aggregates::{Jigsaw, PlacementOutcome, RevealOutcome};
use ringlock_jigsaw::domain::board::{PieceId, SlotIndex};
use ringlock_jigsaw::domain::commands::{AnswerRiddle, PlacePiece};
use ringlock_progress::application::command_handlers::{
    ProgressTask, handle_due_task, handle_transition_to, handle_unlock_ring,
};
use ringlock_progress::application::query_handlers::get_progress;
use ringlock_progress::domain::aggregates::Progression;
use ringlock_progress::domain::commands::{TransitionTo, UnlockRing};
use ringlock_progress::domain::values::{PanelId, RingIndex};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::actions::{ActionOutcome, PlayerAction};
use crate::error::SessionError;
use crate::story::{PuzzleKind, RING_TARGETS, StoryConfig};
use crate::view::{PanelView, SessionView};

/// One play-through: every puzzle, the audio port, the clock, the journal
/// and the deferred-task queues.
pub struct GameSession {
    id: Uuid,
    story: StoryConfig,
    clock: Arc<dyn Clock>,
    audio: Box<dyn AudioPort>,
    journal: EventJournal,
    progression: Progression,
    color_mix: ColorMix,
    debate: ArgumentSort,
    jigsaw: Jigsaw,
    date: DateCheck,
    progress_tasks: Scheduler<ProgressTask>,
    date_tasks: Scheduler<DateTask>,
}

impl GameSession {
    /// Starts a session on the first panel of `story` and deals the debate
    /// deck with `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Story` if the riddles do not fill the board,
    /// or `SessionError::Domain` if dealing the deck fails.
    pub fn new(
        story: StoryConfig,
        clock: Arc<dyn Clock>,
        rng: &mut dyn DeterministicRng,
        audio: Box<dyn AudioPort>,
    ) -> Result<Self, SessionError> {
        let riddles = story.riddle_board()?;
        let mut session = Self {
            id: Uuid::new_v4(),
            progression: Progression::new(Uuid::new_v4(), story.panel_ids()),
            color_mix: ColorMix::new(Uuid::new_v4()),
            debate: ArgumentSort::new(Uuid::new_v4()),
            jigsaw: Jigsaw::new(Uuid::new_v4(), riddles),
            date: DateCheck::new(Uuid::new_v4()),
            story,
            clock,
            audio,
            journal: EventJournal::new(),
            progress_tasks: Scheduler::new(),
            date_tasks: Scheduler::new(),
        };

        let command = ShuffleDeck {
            correlation_id: Uuid::new_v4(),
        };
        handle_shuffle_deck(
            &command,
            &mut session.debate,
            rng,
            session.clock.as_ref(),
            &mut session.journal,
        )?;

        info!(session_id = %session.id, "session started");
        Ok(session)
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The story being played.
    #[must_use]
    pub fn story(&self) -> &StoryConfig {
        &self.story
    }

    /// Every event recorded so far.
    #[must_use]
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Handles one player action. Rejected input never changes state; it
    /// comes back as `ActionOutcome::Ignored`.
    #[instrument(skip(self, action), fields(session_id = %self.id, action = action.name()))]
    pub fn dispatch(&mut self, action: PlayerAction) -> ActionOutcome {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, "handling player action");

        match self.apply(action, correlation_id) {
            Ok(outcome) => outcome,
            Err(DomainError::Validation(reason)) => {
                debug!(correlation_id = %correlation_id, %reason, "action ignored");
                ActionOutcome::ignored(reason)
            }
            Err(error) => {
                warn!(correlation_id = %correlation_id, %error, "action failed");
                ActionOutcome::ignored(error.to_string())
            }
        }
    }

    fn apply(
        &mut self,
        action: PlayerAction,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        if let Some(puzzle) = action.puzzle() {
            self.require_on_screen(puzzle)?;
        }

        match action {
            PlayerAction::Next { target } => self.next(target, correlation_id),
            PlayerAction::ToggleMute => Ok(ActionOutcome::MuteToggled {
                muted: self.audio.toggle_mute(),
            }),
            PlayerAction::DropColor { payload } => self.drop_color(payload, correlation_id),
            PlayerAction::ResetMix => {
                handle_reset_mix(
                    &ResetMix { correlation_id },
                    &mut self.color_mix,
                    self.clock.as_ref(),
                    &mut self.journal,
                )?;
                Ok(ActionOutcome::Accepted)
            }
            PlayerAction::MoveCard { card, zone } => self.move_card(card, zone, correlation_id),
            PlayerAction::AnswerRiddle { riddle, value } => {
                self.answer_riddle(riddle, value, correlation_id)
            }
            PlayerAction::DropPiece { payload, slot } => {
                self.drop_piece(payload, slot, correlation_id)
            }
            PlayerAction::CheckDate { value } => self.check_date(value, correlation_id),
            PlayerAction::Affirm => {
                self.audio.play_tone(ToneKind::Solve);
                Ok(ActionOutcome::Affirmation {
                    message: self.story.affirmation.clone(),
                })
            }
        }
    }

    /// Puzzle surfaces only take input while their panel is showing.
    fn require_on_screen(&self, puzzle: PuzzleKind) -> Result<(), DomainError> {
        let on_screen = self
            .progression
            .active_panel()
            .and_then(|active| self.story.panel(active))
            .and_then(|panel| panel.puzzle);
        if on_screen == Some(puzzle) {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "the {} puzzle is not on screen",
                puzzle.label()
            )))
        }
    }

    fn next(
        &mut self,
        target: Option<PanelId>,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        let target = target
            .or_else(|| {
                self.progression
                    .active_panel()
                    .and_then(|active| self.story.panel(active))
                    .and_then(|panel| panel.next.clone())
            })
            .ok_or_else(|| DomainError::Validation("no panel to move on to".to_owned()))?;

        self.audio.init();
        self.audio.play_tone(ToneKind::Click);
        handle_transition_to(
            &TransitionTo {
                correlation_id,
                target,
            },
            &mut self.progression,
            self.clock.as_ref(),
            &mut self.journal,
            &mut self.progress_tasks,
        )?;
        Ok(ActionOutcome::Accepted)
    }

    fn drop_color(
        &mut self,
        payload: Option<String>,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        let payload =
            payload.ok_or_else(|| DomainError::Validation("drop carried no color".to_owned()))?;
        let sample: ColorSample = payload
            .parse()
            .map_err(|e| DomainError::Validation(format!("{e}")))?;

        let result = handle_add_sample(
            &AddSample {
                correlation_id,
                sample,
            },
            &mut self.color_mix,
            self.clock.as_ref(),
            &mut self.journal,
        )?;
        match result.outcome {
            MixOutcome::Mixing { .. } => Ok(ActionOutcome::Accepted),
            MixOutcome::Solved { .. } => self.unlock(RingIndex::FIRST, correlation_id),
        }
    }

    fn move_card(
        &mut self,
        card: u8,
        zone: Zone,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        let result = handle_move_card(
            &MoveCard {
                correlation_id,
                card: ArgumentId::new(card)?,
                zone,
            },
            &mut self.debate,
            self.clock.as_ref(),
            &mut self.journal,
        )?;
        match result.outcome {
            SortOutcome::Sorting { .. } => Ok(ActionOutcome::Accepted),
            SortOutcome::Solved { .. } => self.unlock(RingIndex::SECOND, correlation_id),
        }
    }

    fn answer_riddle(
        &mut self,
        riddle: u8,
        value: String,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        let piece = PieceId::new(riddle).map_err(|e| DomainError::Validation(format!("{e}")))?;
        let result = handle_answer_riddle(
            &AnswerRiddle {
                correlation_id,
                piece,
                answer: value,
            },
            &mut self.jigsaw,
            self.clock.as_ref(),
            &mut self.journal,
        )?;
        if result.outcome == RevealOutcome::Revealed {
            self.audio.play_tone(ToneKind::Click);
        }
        Ok(ActionOutcome::Accepted)
    }

    fn drop_piece(
        &mut self,
        payload: Option<String>,
        slot: u8,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        let payload =
            payload.ok_or_else(|| DomainError::Validation("drop carried no piece".to_owned()))?;
        let piece: PieceId = payload
            .parse()
            .map_err(|e| DomainError::Validation(format!("{e}")))?;
        let slot = SlotIndex::new(slot).map_err(|e| DomainError::Validation(format!("{e}")))?;

        let result = handle_place_piece(
            &PlacePiece {
                correlation_id,
                piece,
                slot,
            },
            &mut self.jigsaw,
            self.clock.as_ref(),
            &mut self.journal,
        )?;
        match result.outcome {
            PlacementOutcome::Placed { .. } => Ok(ActionOutcome::Accepted),
            PlacementOutcome::Solved => self.unlock(RingIndex::THIRD, correlation_id),
        }
    }

    fn check_date(
        &mut self,
        value: String,
        correlation_id: Uuid,
    ) -> Result<ActionOutcome, DomainError> {
        let result = handle_check_date(
            &CheckDate {
                correlation_id,
                input: value,
            },
            &mut self.date,
            self.clock.as_ref(),
            &mut self.journal,
            &mut self.date_tasks,
        )?;
        match result.outcome {
            DateOutcome::Confirmed => self.unlock(RingIndex::FOURTH, correlation_id),
            DateOutcome::Rejected { .. } => Ok(ActionOutcome::DateRejected),
        }
    }

    fn unlock(&mut self, ring: RingIndex, correlation_id: Uuid) -> Result<ActionOutcome, DomainError> {
        let next_panel = PanelId::from(RING_TARGETS[usize::from(ring.get()) - 1]);
        let result = handle_unlock_ring(
            &UnlockRing {
                correlation_id,
                ring,
                next_panel,
            },
            &mut self.progression,
            self.audio.as_mut(),
            self.clock.as_ref(),
            &mut self.journal,
            &mut self.progress_tasks,
        )?;
        if result.stored_events.is_empty() {
            return Ok(ActionOutcome::Accepted);
        }
        info!(correlation_id = %correlation_id, %ring, "ring unlocked");
        Ok(ActionOutcome::RingUnlocked { ring })
    }

    /// Fires every deferred task due by the session clock, earliest first,
    /// and returns how many fired. Tasks queued while firing run in the same
    /// call only if they are already due.
    pub fn run_due_tasks(&mut self) -> usize {
        let mut fired = 0;
        loop {
            let now = self.clock.now();
            let progress_due = self.progress_tasks.next_due().filter(|due| *due <= now);
            let date_due = self.date_tasks.next_due().filter(|due| *due <= now);

            let result = match (progress_due, date_due) {
                (None, None) => break,
                (Some(progress), Some(date)) if date < progress => self.fire_date_task(now),
                (Some(_), _) => self.fire_progress_task(now),
                (None, Some(_)) => self.fire_date_task(now),
            };
            if let Err(error) = result {
                warn!(session_id = %self.id, %error, "deferred task failed");
            }
            fired += 1;
        }
        fired
    }

    fn fire_progress_task(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        let Some(scheduled) = self.progress_tasks.pop_due(now) else {
            return Ok(());
        };
        let correlation_id = Uuid::new_v4();
        debug!(correlation_id = %correlation_id, task = ?scheduled.task, "firing progress task");
        handle_due_task(
            scheduled.task,
            correlation_id,
            &mut self.progression,
            self.clock.as_ref(),
            &mut self.journal,
            &mut self.progress_tasks,
        )
        .map(drop)
    }

    fn fire_date_task(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        let Some(scheduled) = self.date_tasks.pop_due(now) else {
            return Ok(());
        };
        let correlation_id = Uuid::new_v4();
        debug!(correlation_id = %correlation_id, task = ?scheduled.task, "firing date task");
        match scheduled.task {
            DateTask::ClearFeedback => handle_clear_feedback(
                &ClearFeedback { correlation_id },
                &mut self.date,
                self.clock.as_ref(),
                &mut self.journal,
            )
            .map(drop),
        }
    }

    /// Earliest due time among pending deferred tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        match (self.progress_tasks.next_due(), self.date_tasks.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Number of deferred tasks not yet fired.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.progress_tasks.len() + self.date_tasks.len()
    }

    /// Cancels every pending deferred task and returns how many were
    /// dropped.
    pub fn shutdown(&mut self) -> usize {
        let dropped = self.progress_tasks.cancel_all() + self.date_tasks.cancel_all();
        info!(session_id = %self.id, dropped, "session shut down");
        dropped
    }

    /// Builds the read model of the whole session.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            active_panel: self
                .progression
                .active_panel()
                .and_then(|id| self.story.panel(id))
                .map(PanelView::from),
            progress: get_progress(&self.progression),
            muted: self.audio.is_muted(),
            mute_indicator: self.audio.mute_indicator(),
            color_mix: get_color_mix(&self.color_mix),
            debate: get_debate(&self.debate),
            jigsaw: get_jigsaw(&self.jigsaw),
            date: get_date(&self.date),
            pending_tasks: self.pending_tasks(),
            journal_len: self.journal.len(),
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("progression", &self.progression)
            .field("pending_tasks", &self.pending_tasks())
            .field("journal_len", &self.journal.len())
            .finish_non_exhaustive()
    }
}
