//! Line grammar for the console.

use ringlock_debate::domain::arguments::Zone;
use ringlock_progress::domain::values::PanelId;
use ringlock_session::PlayerAction;

use crate::error::CommandError;

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// An interaction forwarded to the session.
    Play(PlayerAction),
    /// Redraw the screen.
    Look,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

const SORT_USAGE: &str = "sort <card> left|right";
const ANSWER_USAGE: &str = "answer <riddle> <text>";
const PLACE_USAGE: &str = "place <piece> <slot>";
const MIX_USAGE: &str = "mix r,g,b";

/// Parses one line of input.
///
/// # Errors
///
/// Returns `CommandError` for blank lines, unknown commands and bad
/// arguments.
pub fn parse(line: &str) -> Result<ConsoleCommand, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim_start()));

    let action = match word.to_ascii_lowercase().as_str() {
        "look" | "l" => return Ok(ConsoleCommand::Look),
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),
        "next" | "n" => PlayerAction::Next {
            target: first_word(rest).map(PanelId::from),
        },
        "mute" => PlayerAction::ToggleMute,
        "mix" => {
            if rest.is_empty() {
                return Err(CommandError::Usage(MIX_USAGE));
            }
            // The payload is passed through untouched; the bowl rejects bad colors.
            PlayerAction::DropColor {
                payload: Some(rest.to_owned()),
            }
        }
        "reset" => PlayerAction::ResetMix,
        "sort" => {
            let mut args = rest.split_whitespace();
            let card = number(args.next(), SORT_USAGE)?;
            let zone = args
                .next()
                .and_then(|z| z.parse::<Zone>().ok())
                .ok_or(CommandError::Usage(SORT_USAGE))?;
            PlayerAction::MoveCard { card, zone }
        }
        "answer" => {
            let (riddle, text) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            PlayerAction::AnswerRiddle {
                riddle: number(Some(riddle), ANSWER_USAGE)?,
                value: text.to_owned(),
            }
        }
        "place" => {
            let mut args = rest.split_whitespace();
            let piece = args.next().ok_or(CommandError::Usage(PLACE_USAGE))?;
            let slot = number(args.next(), PLACE_USAGE)?;
            PlayerAction::DropPiece {
                payload: Some(piece.to_owned()),
                slot,
            }
        }
        "date" => PlayerAction::CheckDate {
            value: rest.to_owned(),
        },
        "yes" | "y" => PlayerAction::Affirm,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(ConsoleCommand::Play(action))
}

fn first_word(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}

fn number(arg: Option<&str>, usage: &'static str) -> Result<u8, CommandError> {
    arg.and_then(|a| a.parse().ok())
        .ok_or(CommandError::Usage(usage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(line: &str) -> PlayerAction {
        match parse(line) {
            Ok(ConsoleCommand::Play(action)) => action,
            other => panic!("expected an action for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_next_with_and_without_target() {
        assert_eq!(play("next"), PlayerAction::Next { target: None });
        assert_eq!(
            play("  NEXT   finale "),
            PlayerAction::Next {
                target: Some(PanelId::from("finale"))
            }
        );
    }

    #[test]
    fn test_mix_keeps_raw_payload() {
        assert_eq!(
            play("mix 255, 0, 0"),
            PlayerAction::DropColor {
                payload: Some("255, 0, 0".to_owned())
            }
        );
        assert_eq!(parse("mix"), Err(CommandError::Usage(MIX_USAGE)));
    }

    #[test]
    fn test_sort_parses_card_and_zone() {
        assert_eq!(
            play("sort 3 right"),
            PlayerAction::MoveCard {
                card: 3,
                zone: Zone::Right
            }
        );
        assert_eq!(
            play("sort 0 L"),
            PlayerAction::MoveCard {
                card: 0,
                zone: Zone::Left
            }
        );
        assert_eq!(parse("sort 3 up"), Err(CommandError::Usage(SORT_USAGE)));
        assert_eq!(parse("sort x right"), Err(CommandError::Usage(SORT_USAGE)));
    }

    #[test]
    fn test_answer_keeps_the_rest_of_the_line() {
        assert_eq!(
            play("answer 1 foot steps"),
            PlayerAction::AnswerRiddle {
                riddle: 1,
                value: "foot steps".to_owned()
            }
        );
        assert_eq!(
            play("answer 2"),
            PlayerAction::AnswerRiddle {
                riddle: 2,
                value: String::new()
            }
        );
        assert_eq!(parse("answer"), Err(CommandError::Usage(ANSWER_USAGE)));
    }

    #[test]
    fn test_place_passes_piece_payload_through() {
        assert_eq!(
            play("place 2 3"),
            PlayerAction::DropPiece {
                payload: Some("2".to_owned()),
                slot: 3
            }
        );
        assert_eq!(parse("place 2"), Err(CommandError::Usage(PLACE_USAGE)));
    }

    #[test]
    fn test_date_and_simple_words() {
        assert_eq!(
            play("date 03 / 07"),
            PlayerAction::CheckDate {
                value: "03 / 07".to_owned()
            }
        );
        assert_eq!(play("mute"), PlayerAction::ToggleMute);
        assert_eq!(play("reset"), PlayerAction::ResetMix);
        assert_eq!(play("yes"), PlayerAction::Affirm);
        assert_eq!(parse("look"), Ok(ConsoleCommand::Look));
        assert_eq!(parse("help"), Ok(ConsoleCommand::Help));
        assert_eq!(parse("quit"), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(
            parse("dance"),
            Err(CommandError::Unknown("dance".to_owned()))
        );
    }
}
