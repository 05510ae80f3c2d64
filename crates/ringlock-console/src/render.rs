//! Text rendering of the session view.

use std::fmt;

use ringlock_color_mix::domain::aggregates::MixPhase;
use ringlock_date::domain::aggregates::InputFeedback;
use ringlock_debate::domain::arguments::Zone;
use ringlock_progress::domain::values::RingState;
use ringlock_session::{ActionOutcome, PuzzleKind, SessionView};

/// Command reference printed by `help`.
pub const HELP: &str = "\
commands:
  next [panel]             continue (or jump to a panel)
  mute                     toggle sound
  mix r,g,b                drop a paint into the bowl
  reset                    empty the bowl
  sort <card> left|right   move an argument card
  answer <riddle> <text>   answer a riddle
  place <piece> <slot>     drop a jigsaw piece on a slot
  date <text>              check the date
  yes                      answer the final question
  look                     redraw the screen
  help                     show this list
  quit                     leave";

/// Paints offered next to the bowl. Any `r,g,b` triple is accepted.
const PALETTE: [(&str, &str); 6] = [
    ("red", "255,0,0"),
    ("white", "255,255,255"),
    ("crimson", "185,25,35"),
    ("peach", "255,200,150"),
    ("blush", "255,150,150"),
    ("navy", "10,20,80"),
];

/// Full-screen rendering of a session view.
pub struct Screen<'a>(pub &'a SessionView);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let rings: String = view
            .progress
            .rings
            .iter()
            .map(|r| match r.state {
                RingState::Locked => '○',
                RingState::Unlocked => '●',
            })
            .collect();
        writeln!(f, "rings {rings}    sound {}", view.mute_indicator)?;

        let Some(panel) = &view.active_panel else {
            return write!(f, "\n   ...\n");
        };
        writeln!(f, "\n== {} ==\n", panel.title)?;
        writeln!(f, "{}", panel.text.trim_end())?;

        match panel.puzzle {
            Some(PuzzleKind::ColorMix) => color_mix(f, view)?,
            Some(PuzzleKind::Debate) => debate(f, view)?,
            Some(PuzzleKind::Jigsaw) => jigsaw(f, view)?,
            Some(PuzzleKind::Date) => date(f, view)?,
            Some(PuzzleKind::Affirmation) => writeln!(f, "\n  [ yes ]")?,
            None => {}
        }

        if panel.next.is_some() {
            writeln!(f, "\n  [ next ]")?;
        }
        Ok(())
    }
}

fn color_mix(f: &mut fmt::Formatter<'_>, view: &SessionView) -> fmt::Result {
    let mix = &view.color_mix;
    writeln!(f)?;
    let paints: Vec<String> = PALETTE
        .iter()
        .map(|(name, rgb)| format!("{name} {rgb}"))
        .collect();
    writeln!(f, "  paints: {}", paints.join(" | "))?;
    match (mix.phase, mix.mean) {
        (MixPhase::Empty, _) | (_, None) => writeln!(f, "  bowl: empty"),
        (MixPhase::Mixing, Some(mean)) => {
            writeln!(f, "  bowl: {mean} from {} drops", mix.sample_count)
        }
        (MixPhase::Solved, Some(mean)) => writeln!(f, "  bowl: {mean}, just right"),
    }
}

fn debate(f: &mut fmt::Formatter<'_>, view: &SessionView) -> fmt::Result {
    writeln!(f)?;
    for card in &view.debate.cards {
        let zone = match card.zone {
            None => "stack",
            Some(Zone::Left) => "left",
            Some(Zone::Right) => "right",
        };
        writeln!(f, "  [{}] {:<26} {zone}", card.id.get(), card.text)?;
    }
    if view.debate.solved {
        writeln!(f, "  the debate is settled")?;
    }
    Ok(())
}

fn jigsaw(f: &mut fmt::Formatter<'_>, view: &SessionView) -> fmt::Result {
    let board = &view.jigsaw;
    writeln!(f)?;
    for riddle in &board.riddles {
        let state = match (riddle.revealed, riddle.placed_in) {
            (false, _) => "hidden".to_owned(),
            (true, None) => format!("piece {} ready", riddle.piece),
            (true, Some(slot)) => format!("piece {} in slot {slot}", riddle.piece),
        };
        writeln!(f, "  ({}) {}  [{state}]", riddle.piece, riddle.prompt)?;
    }
    let slots: Vec<String> = board
        .slots
        .iter()
        .map(|slot| slot.map_or_else(|| "_".to_owned(), |piece| piece.to_string()))
        .collect();
    writeln!(f, "  board: [{}]", slots.join("]["))?;
    if board.solved {
        writeln!(f, "  the picture is whole")?;
    }
    Ok(())
}

fn date(f: &mut fmt::Formatter<'_>, view: &SessionView) -> fmt::Result {
    let prompt = &view.date;
    writeln!(f)?;
    match (prompt.solved, prompt.feedback) {
        (true, _) => writeln!(f, "  date: confirmed"),
        (false, InputFeedback::Alert) => writeln!(f, "  date: __/__  (not that one)"),
        (false, InputFeedback::Normal) => writeln!(f, "  date: __/__"),
    }
}

/// One-line reaction to an outcome; `None` when the screen says enough.
#[must_use]
pub fn outcome_line(outcome: &ActionOutcome) -> Option<String> {
    match outcome {
        ActionOutcome::Accepted => None,
        ActionOutcome::Ignored { reason } => Some(format!("(nothing happens: {reason})")),
        ActionOutcome::RingUnlocked { ring } => Some(format!("*** ring {ring} unlocks ***")),
        ActionOutcome::DateRejected => Some("That is not the date.".to_owned()),
        ActionOutcome::Affirmation { message } => Some(message.clone()),
        ActionOutcome::MuteToggled { muted: true } => Some("sound off".to_owned()),
        ActionOutcome::MuteToggled { muted: false } => Some("sound on".to_owned()),
    }
}
