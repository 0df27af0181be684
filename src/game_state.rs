use crate::engine::{GameSession, GameStatus, GuessOutcome, Snapshot};
use crate::picker::WordPicker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Raw guess text; the engine decides whether it is a valid letter.
    Guess(String),
    /// Input closed or the player asked to quit.
    Exit,
}

/// Front-end contract used by [`game_loop`]. Implemented by the line-based
/// CLI and the full-screen TUI.
pub trait GameInterface {
    fn display_welcome(&mut self);
    fn display_state(&mut self, snapshot: &Snapshot);
    fn read_guess(&mut self) -> UserAction;
    fn display_outcome(&mut self, outcome: &GuessOutcome);
    fn display_game_over(&mut self, snapshot: &Snapshot);
    /// Ask whether to play again. Returns `false` if input ends.
    fn ask_replay(&mut self) -> bool;
    fn display_goodbye(&mut self);
    fn display_exit_message(&mut self);
}

enum RoundEnd {
    Finished(GameStatus),
    Abandoned,
}

fn play_round<P, I>(session: &mut GameSession<P>, interface: &mut I) -> RoundEnd
where
    P: WordPicker,
    I: GameInterface + ?Sized,
{
    interface.display_welcome();
    while !session.is_over() {
        interface.display_state(&session.snapshot());
        let input = match interface.read_guess() {
            UserAction::Guess(input) => input,
            UserAction::Exit => return RoundEnd::Abandoned,
        };
        let result = session.guess(&input);
        interface.display_outcome(&result.outcome);
    }
    let snapshot = session.snapshot();
    interface.display_state(&snapshot);
    interface.display_game_over(&snapshot);
    RoundEnd::Finished(snapshot.status)
}

/// Play rounds until the player declines a replay or input ends.
///
/// Returns the number of rounds started.
pub fn game_loop<P, I>(session: &mut GameSession<P>, interface: &mut I) -> usize
where
    P: WordPicker,
    I: GameInterface + ?Sized,
{
    let mut rounds = 0;
    loop {
        rounds += 1;
        match play_round(session, interface) {
            RoundEnd::Abandoned => {
                log::info!("Round {rounds} abandoned");
                interface.display_exit_message();
                break;
            }
            RoundEnd::Finished(status) => {
                log::info!("Round {rounds} finished: {status:?}");
            }
        }

        if interface.ask_replay() {
            session.reset();
        } else {
            interface.display_goodbye();
            break;
        }
    }
    rounds
}
