use snake_engine::{CheatAction, Direction, InputEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::driver::DriverCommand;

/// Maps one input token to a driver command. Direction words steer,
/// cheat words are forwarded as-is (the engine ignores them unless the
/// round has cheats enabled), `quit` ends the program.
pub fn parse_token(token: &str) -> Option<DriverCommand> {
    let command = match token.to_ascii_lowercase().as_str() {
        "up" | "w" => DriverCommand::Input(InputEvent::Turn(Direction::Up)),
        "down" | "s" => DriverCommand::Input(InputEvent::Turn(Direction::Down)),
        "left" | "a" => DriverCommand::Input(InputEvent::Turn(Direction::Left)),
        "right" | "d" => DriverCommand::Input(InputEvent::Turn(Direction::Right)),
        "stop" => DriverCommand::Input(InputEvent::Cheat(CheatAction::Stop)),
        "slower" => DriverCommand::Input(InputEvent::Cheat(CheatAction::SpeedDown)),
        "faster" => DriverCommand::Input(InputEvent::Cheat(CheatAction::SpeedUp)),
        "shrink" => DriverCommand::Input(InputEvent::Cheat(CheatAction::Shrink)),
        "grow" => DriverCommand::Input(InputEvent::Cheat(CheatAction::Grow)),
        "quit" | "q" => DriverCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Pumps stdin lines into the command channel until EOF or the receiver
/// goes away.
pub fn spawn_stdin_reader(tx: mpsc::UnboundedSender<DriverCommand>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            for token in line.split_whitespace() {
                match parse_token(token) {
                    Some(command) => {
                        if tx.send(command).is_err() {
                            return;
                        }
                    }
                    None => snake_engine::warn!("Ignoring unknown input {:?}", token),
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(
            parse_token("up"),
            Some(DriverCommand::Input(InputEvent::Turn(Direction::Up)))
        );
        assert_eq!(
            parse_token("d"),
            Some(DriverCommand::Input(InputEvent::Turn(Direction::Right)))
        );
        assert_eq!(
            parse_token("LEFT"),
            Some(DriverCommand::Input(InputEvent::Turn(Direction::Left)))
        );
    }

    #[test]
    fn test_cheat_tokens() {
        assert_eq!(
            parse_token("grow"),
            Some(DriverCommand::Input(InputEvent::Cheat(CheatAction::Grow)))
        );
        assert_eq!(
            parse_token("slower"),
            Some(DriverCommand::Input(InputEvent::Cheat(
                CheatAction::SpeedDown
            )))
        );
    }

    #[test]
    fn test_quit_token() {
        assert_eq!(parse_token("q"), Some(DriverCommand::Quit));
        assert_eq!(parse_token("quit"), Some(DriverCommand::Quit));
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        assert_eq!(parse_token("sideways"), None);
        assert_eq!(parse_token(""), None);
    }
}
