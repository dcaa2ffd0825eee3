use std::io::{self, BufRead, Write};

use tictactoe_engine::{GameState, Mark, log, winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Move(usize),
    Reset,
    ToggleMode,
    Quit,
}

impl PlayerInput {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "q" | "quit" => Some(PlayerInput::Quit),
            "r" | "reset" => Some(PlayerInput::Reset),
            "m" | "mode" => Some(PlayerInput::ToggleMode),
            other => other.parse().ok().map(PlayerInput::Move),
        }
    }
}

/// Board grid followed by the status line. Empty cells show their index so
/// the player knows what to type.
pub fn render(state: &GameState) -> String {
    let board = state.board();
    let width = (board.len() - 1).to_string().len();
    let mut out = String::new();

    for (row_index, row) in board.cells().chunks(board.size()).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, mark)| match mark {
                Mark::Empty => format!("{:>width$}", row_index * board.size() + col),
                _ => format!("{:>width$}", mark.symbol()),
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }

    out.push_str(&format!("{} ({})\n", state.status_line(), state.mode()));
    if let Some(line) = winning_line(board) {
        let cells: Vec<String> = line.iter().map(usize::to_string).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(" ")));
    }
    out
}

/// Runs the interactive loop until `q` or end of input and returns the last
/// state. Unparseable lines and rejected moves leave the game as it was.
pub fn run<R: BufRead, W: Write>(
    mut state: GameState,
    input: R,
    output: &mut W,
) -> io::Result<GameState> {
    writeln!(
        output,
        "Enter a cell index (0-{}), r to play again, m to switch opponent, q to quit.",
        state.board().len() - 1
    )?;
    write!(output, "{}", render(&state))?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = PlayerInput::parse(&line) else {
            continue;
        };

        state = match command {
            PlayerInput::Quit => break,
            PlayerInput::Reset => state.reset(),
            PlayerInput::ToggleMode => {
                let next = state.set_mode(state.mode().toggled());
                log!("Switched to {}", next.mode());
                next
            }
            PlayerInput::Move(index) => match state.apply_move(index) {
                Ok(next) => next,
                Err(_) => continue,
            },
        };

        write!(output, "{}", render(&state))?;
    }

    Ok(state)
}
