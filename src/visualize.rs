use std::fmt::Write;

use crate::action::Action;
use crate::card::Card;
use crate::state::{Direction, GameStateView, GameStatus, TurnPhase};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Show opponents' card counts.
    pub show_hand_sizes: bool,
    pub show_pile_counts: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hand_sizes: true,
            show_pile_counts: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => format!("Finished (winner: Player {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let phase = match state.phase {
        TurnPhase::AwaitingMove => String::from("Awaiting move"),
        TurnPhase::AwaitingColor { player } => format!("Player {player} must choose a color"),
        TurnPhase::GameOver => String::from("Game over"),
    };
    let _ = writeln!(out, "Phase: {phase}");
    let direction = match state.direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    };
    let _ = writeln!(
        out,
        "Current player: {}{} ({direction})",
        state.current_player,
        if state.current_player == state.self_player {
            " (You)"
        } else {
            ""
        }
    );
    let top = state
        .discard_top
        .map(format_card)
        .unwrap_or_else(|| String::from("--"));
    let _ = writeln!(out, "Discard top: {top}");
    if options.show_pile_counts {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            state.draw_pile_count, state.discard_pile_count
        );
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.id == state.self_player {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let _ = writeln!(out, "  Player {}{}{}", player.id, label_you, current_tag);
        if player.id == state.self_player {
            if state.hand.is_empty() {
                let _ = writeln!(out, "    Hand: (empty)");
            } else {
                let hand_display = state
                    .hand
                    .iter()
                    .enumerate()
                    .map(|(idx, card)| format!("{idx}:{}", format_card(*card)))
                    .collect::<Vec<_>>()
                    .join("  ");
                let _ = writeln!(out, "    Hand: {hand_display}");
            }
        } else if options.show_hand_sizes {
            let _ = writeln!(out, "    Hand size: {}", player.hand_size);
        }
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Play { hand_index } => match state.hand.get(*hand_index) {
            Some(card) => format!("Play hand[{hand_index}] {}", format_card(*card)),
            None => format!("Play hand[{hand_index}]"),
        },
        Action::Draw => String::from("Draw a card"),
        Action::SkipTurn => String::from("Skip turn"),
        Action::ChooseColor(color) => format!("Choose {color}"),
    }
}

pub fn format_card(card: Card) -> String {
    card.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let game = GameBuilder::new(3)
            .expect("builder")
            .with_seed(11)
            .build()
            .expect("game");
        let view = game.state_view(0).expect("state view");
        let text = render_state(&view);
        assert!(text.contains("Player 0 (You)"));
        assert!(text.contains("Hand:"));
        assert!(text.contains("Hand size: 5"));
        assert!(text.contains("Discard top:"));

        let actions = game.legal_actions(0).expect("actions available");
        assert!(actions.contains(&Action::SkipTurn));
        assert_eq!(describe_action(&view, &Action::Draw), "Draw a card");
        let play = describe_action(&view, &Action::Play { hand_index: 0 });
        assert!(play.starts_with("Play hand[0] "));
    }

    #[test]
    fn opponent_hands_stay_hidden() {
        let game = GameBuilder::new(2)
            .expect("builder")
            .with_seed(5)
            .build()
            .expect("game");
        let view = game.state_view(1).expect("state view");
        let text = render_state(&view);
        assert!(text.contains("Player 1 (You)"));
        assert_eq!(text.matches("Hand:").count(), 1);
        assert_eq!(text.matches("Hand size: 5").count(), 1);
    }
}
