use std::io::{self, BufRead, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::card::Color;
use crate::state::{GameStateView, TurnPhase};
use crate::visualize::{describe_action, render_state};

/// Interactive seat that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asks for a wild color until one of the four color names is typed.
    fn prompt_color(&self) -> Color {
        print!("Choose a color (Red, Blue, Green, Yellow): ");
        loop {
            let input = read_line();
            match input.trim().parse::<Color>() {
                Ok(color) => {
                    println!("You chose {color}.");
                    return color;
                }
                Err(_) => print!("Invalid color. Choose again (Red, Blue, Green, Yellow): "),
            }
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action {
        assert!(
            !legal_actions.is_empty(),
            "at least one legal action must exist"
        );
        if matches!(state.phase, TurnPhase::AwaitingColor { .. }) {
            return Action::ChooseColor(self.prompt_color());
        }
        loop {
            println!(
                "\n=== {}'s turn (player {}) ===",
                self.name, state.self_player
            );
            println!("{}", render_state(state));
            println!("Available actions:");
            for (index, action) in legal_actions.iter().enumerate() {
                println!("  [{index}] {}", describe_action(state, action));
            }
            println!("Type the action index, 'help' or 'q' to quit.");
            print!("Selection: ");
            let input = read_line();
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the action you wish to perform.");
                println!("Drawing does not end your turn; skip when you are done.");
                continue;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(action) = legal_actions.get(choice) {
                println!("You selected: {}", describe_action(state, action));
                return *action;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }
}

fn read_line() -> String {
    if io::stdout().flush().is_err() {
        eprintln!("failed to flush stdout");
    }
    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) => {
            println!("\nInput closed. Exiting game.");
            std::process::exit(0);
        }
        Ok(_) => {}
        Err(err) => eprintln!("failed to read input: {err}"),
    }
    input
}
