use std::fmt;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tictactoe_engine::{GameError, GameSettings, GameState, MACHINE_MARK, Mode, Outcome, get_available_moves};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    pub machine_wins: u32,
    pub draws: u32,
    pub machine_losses: u32,
}

impl SimulationReport {
    pub fn games(&self) -> u32 {
        self.machine_wins + self.draws + self.machine_losses
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) if mark == MACHINE_MARK => self.machine_wins += 1,
            Outcome::Win(_) => self.machine_losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: machine won {}, drew {}, lost {}",
            self.games(),
            self.machine_wins,
            self.draws,
            self.machine_losses
        )
    }
}

/// Plays `games` games of a uniformly random `X` against the machine.
pub fn run(size: usize, games: u32, seed: u64) -> Result<SimulationReport, GameError> {
    let settings = GameSettings {
        size,
        mode: Mode::HumanVsMachine,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = SimulationReport::default();

    for _ in 0..games {
        let outcome = play_random_game(GameState::with_settings(&settings)?, &mut rng)?;
        report.record(outcome);
    }

    Ok(report)
}

fn play_random_game<R: Rng>(mut state: GameState, rng: &mut R) -> Result<Outcome, GameError> {
    loop {
        let outcome = state.outcome();
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        let moves = get_available_moves(state.board());
        let Some(&index) = moves.choose(rng) else {
            return Ok(outcome);
        };
        state = state.apply_move(index)?;
    }
}
