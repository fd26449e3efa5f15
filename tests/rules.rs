mod common;

use common::{FILLER, STARTING, hand_of, skipped, stacked_deck};
use unoengine::card::DECK_SIZE;
use unoengine::{
    Action, Card, CardKind, Color, Direction, GameBuilder, GameError, GameEvent, GameStatus,
    PlayOutcome, Special, TurnPhase, WildKind,
};

#[test]
fn initial_setup_for_every_table_size() -> Result<(), GameError> {
    for num_players in 2..=4 {
        let game = GameBuilder::new(num_players)?.with_seed(42).build()?;
        for player in 0..num_players {
            assert_eq!(game.hand(player)?.len(), 5);
        }
        assert_eq!(game.discard_len(), 1);
        let top = game.discard_top().expect("starting card");
        assert_eq!(top.kind(), CardKind::Number);
        assert_eq!(game.deck_len(), DECK_SIZE - 5 * num_players - 1);
        assert_eq!(game.total_cards(), DECK_SIZE);
        assert_eq!(game.current_player(), 0);
        assert_eq!(game.direction(), Direction::Clockwise);
        assert_eq!(game.phase(), TurnPhase::AwaitingMove);
        assert_eq!(game.status(), GameStatus::Ongoing);
    }
    Ok(())
}

#[test]
fn rejects_player_counts_outside_range() {
    assert!(matches!(
        GameBuilder::new(1),
        Err(GameError::InvalidPlayerCount(1))
    ));
    assert!(matches!(
        GameBuilder::new(5),
        Err(GameError::InvalidPlayerCount(5))
    ));
}

#[test]
fn seeded_games_are_reproducible() -> Result<(), GameError> {
    let first = GameBuilder::new(3)?.with_seed(9).build()?;
    let second = GameBuilder::new(3)?.with_seed(9).build()?;
    assert_eq!(first.hands(), second.hands());
    assert_eq!(first.discard_top(), second.discard_top());
    assert_eq!(first.deck(), second.deck());
    Ok(())
}

#[test]
fn rejects_decks_too_small_to_deal() -> Result<(), GameError> {
    let deck = vec![FILLER; 10];
    assert!(matches!(
        GameBuilder::new(2)?.with_deck(deck).build(),
        Err(GameError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        GameBuilder::new(2)?.with_hand_size(0).build(),
        Err(GameError::InvalidConfiguration(_))
    ));
    Ok(())
}

#[test]
fn dealing_follows_deck_order() -> Result<(), GameError> {
    let p0 = hand_of(&[Card::number(Color::Red, 1), Card::number(Color::Blue, 2)]);
    let p1 = hand_of(&[Card::special(Color::Green, Special::Skip)]);
    let draw = [Card::number(Color::Green, 3)];
    let deck = stacked_deck(&[p0.clone(), p1.clone()], STARTING, &draw);
    let game = GameBuilder::new(2)?.with_deck(deck).build()?;
    assert_eq!(game.hand(0)?, p0.as_slice());
    assert_eq!(game.hand(1)?, p1.as_slice());
    assert_eq!(game.discard_top(), Some(STARTING));
    assert_eq!(game.deck().cards(), &draw);
    Ok(())
}

#[test]
fn out_of_turn_play_leaves_state_untouched() -> Result<(), GameError> {
    let hands = [hand_of(&[]), hand_of(&[Card::number(Color::Red, 2)])];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    assert_eq!(game.play_card(1, 0), Err(GameError::NotYourTurn));
    assert_eq!(game.hand(1)?.len(), 5);
    assert_eq!(game.discard_len(), 1);
    assert_eq!(game.current_player(), 0);
    assert!(game.take_events().is_empty());
    Ok(())
}

#[test]
fn illegal_card_is_rejected() -> Result<(), GameError> {
    let blue_seven = Card::number(Color::Blue, 7);
    let hands = [hand_of(&[blue_seven]), hand_of(&[])];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    assert_eq!(
        game.play_card(0, 0),
        Err(GameError::IllegalCard {
            card: blue_seven,
            top: STARTING
        })
    );
    assert_eq!(game.play_card(0, 5), Err(GameError::HandIndex(5)));
    assert_eq!(game.play_card(7, 0), Err(GameError::InvalidPlayer(7)));
    assert_eq!(game.hand(0)?[0], blue_seven);
    assert_eq!(game.current_player(), 0);
    Ok(())
}

#[test]
fn matching_value_plays_across_colors() -> Result<(), GameError> {
    let blue_five = Card::number(Color::Blue, 5);
    let hands = [hand_of(&[blue_five]), hand_of(&[])];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    assert_eq!(game.play_card(0, 0)?, PlayOutcome::Continue);
    assert_eq!(game.discard_top(), Some(blue_five));
    assert_eq!(game.hand(0)?.len(), 4);
    assert_eq!(game.current_player(), 1);
    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::CardPlayed {
                player: 0,
                card: blue_five
            },
            GameEvent::TurnPassed { next: 1 },
        ]
    );
    Ok(())
}

#[test]
fn skip_with_three_players_jumps_two_seats() -> Result<(), GameError> {
    let hands = [
        hand_of(&[Card::special(Color::Red, Special::Skip)]),
        hand_of(&[]),
        hand_of(&[]),
    ];
    let mut game = GameBuilder::new(3)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    game.play_card(0, 0)?;
    assert_eq!(game.current_player(), 2);
    assert_eq!(skipped(&game.take_events()), vec![1]);
    Ok(())
}

#[test]
fn skip_counter_clockwise_steps_forward_then_back() -> Result<(), GameError> {
    let hands = [
        hand_of(&[Card::special(Color::Red, Special::Reverse)]),
        hand_of(&[]),
        hand_of(&[]),
        hand_of(&[Card::special(Color::Red, Special::Skip)]),
    ];
    let mut game = GameBuilder::new(4)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    game.play_card(0, 0)?;
    assert_eq!(game.direction(), Direction::CounterClockwise);
    assert_eq!(game.current_player(), 3);

    // Resolver moves 3 -> 0, then the normal counter-clockwise step lands on 3 again.
    game.play_card(3, 0)?;
    assert_eq!(game.current_player(), 3);
    Ok(())
}

#[test]
fn reverse_with_two_players_looks_like_a_normal_pass() -> Result<(), GameError> {
    let hands = [
        hand_of(&[Card::special(Color::Red, Special::Reverse)]),
        hand_of(&[]),
    ];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    game.play_card(0, 0)?;
    assert_eq!(game.direction(), Direction::CounterClockwise);
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn reverse_with_three_players_changes_who_moves_next() -> Result<(), GameError> {
    let hands = [
        hand_of(&[Card::special(Color::Red, Special::Reverse)]),
        hand_of(&[]),
        hand_of(&[Card::number(Color::Red, 8)]),
    ];
    let mut game = GameBuilder::new(3)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    game.play_card(0, 0)?;
    assert_eq!(game.direction(), Direction::CounterClockwise);
    assert_eq!(game.current_player(), 2);
    game.play_card(2, 0)?;
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn drawing_keeps_the_turn() -> Result<(), GameError> {
    let draw = [Card::number(Color::Blue, 1), Card::number(Color::Green, 2)];
    let hands = [hand_of(&[]), hand_of(&[])];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &draw))
        .build()?;
    assert_eq!(game.draw_card(0)?, draw[0]);
    assert_eq!(game.hand(0)?.len(), 6);
    assert_eq!(game.current_player(), 0);

    assert_eq!(game.apply_action(0, Action::Draw)?, PlayOutcome::Continue);
    assert_eq!(game.hand(0)?.last(), Some(&draw[1]));
    assert_eq!(game.current_player(), 0);
    assert!(!game.legal_actions(0)?.contains(&Action::Draw));
    Ok(())
}

#[test]
fn drawing_from_empty_deck_reports_and_changes_nothing() -> Result<(), GameError> {
    let hands = [hand_of(&[]), hand_of(&[])];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    assert_eq!(game.draw_card(0), Err(GameError::EmptyDeck));
    assert_eq!(game.hand(0)?.len(), 5);
    assert_eq!(game.total_cards(), 11);
    assert!(game.take_events().is_empty());
    Ok(())
}

#[test]
fn skip_turn_ignores_whose_turn_it_is() -> Result<(), GameError> {
    let hands = [
        hand_of(&[Card::special(Color::Red, Special::Reverse)]),
        hand_of(&[]),
        hand_of(&[]),
    ];
    let mut game = GameBuilder::new(3)?
        .with_deck(stacked_deck(&hands, STARTING, &[]))
        .build()?;
    game.skip_turn()?;
    assert_eq!(game.current_player(), 1);
    game.skip_turn()?;
    assert_eq!(game.current_player(), 2);
    game.skip_turn()?;
    assert_eq!(game.current_player(), 0);

    game.play_card(0, 0)?;
    assert_eq!(game.current_player(), 2);
    game.skip_turn()?;
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn legal_actions_for_current_player() -> Result<(), GameError> {
    let hands = [
        hand_of(&[Card::number(Color::Blue, 7), Card::number(Color::Red, 1)]),
        hand_of(&[]),
    ];
    let mut game = GameBuilder::new(2)?
        .with_deck(stacked_deck(&hands, STARTING, &[FILLER]))
        .build()?;
    assert_eq!(
        game.legal_actions(0)?,
        vec![Action::Play { hand_index: 1 }, Action::Draw, Action::SkipTurn]
    );
    assert_eq!(game.legal_actions(1), Err(GameError::NotYourTurn));
    game.apply_action(0, Action::SkipTurn)?;
    assert!(game.legal_actions(1)?.contains(&Action::SkipTurn));
    Ok(())
}

#[test]
fn winning_on_a_skip_stops_everything() -> Result<(), GameError> {
    let hands = [
        vec![Card::special(Color::Red, Special::Skip)],
        vec![FILLER],
        vec![FILLER],
    ];
    let mut game = GameBuilder::new(3)?
        .with_hand_size(1)
        .with_deck(stacked_deck(&hands, STARTING, &[FILLER]))
        .build()?;
    assert_eq!(game.play_card(0, 0)?, PlayOutcome::Won(0));
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.status(), GameStatus::Finished { winner: 0 });
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert_eq!(game.winner(), Some(0));
    let events = game.take_events();
    assert!(skipped(&events).is_empty());
    assert!(!events.iter().any(|e| matches!(e, GameEvent::TurnPassed { .. })));
    assert_eq!(events.last(), Some(&GameEvent::PlayerWon { player: 0 }));

    assert_eq!(game.play_card(0, 0), Err(GameError::GameOver));
    assert_eq!(game.draw_card(1), Err(GameError::GameOver));
    assert_eq!(game.skip_turn(), Err(GameError::GameOver));
    assert!(game.legal_actions(1)?.is_empty());
    Ok(())
}

#[test]
fn winning_on_draw_two_deals_no_penalty() -> Result<(), GameError> {
    let hands = [
        vec![Card::special(Color::Red, Special::DrawTwo)],
        vec![FILLER],
    ];
    let draw = [FILLER, FILLER];
    let mut game = GameBuilder::new(2)?
        .with_hand_size(1)
        .with_deck(stacked_deck(&hands, STARTING, &draw))
        .build()?;
    assert_eq!(game.play_card(0, 0)?, PlayOutcome::Won(0));
    assert_eq!(game.hand(1)?.len(), 1);
    assert_eq!(game.deck_len(), 2);
    Ok(())
}

#[test]
fn winning_on_a_wild_needs_no_color() -> Result<(), GameError> {
    let hands = [vec![Card::wild(WildKind::DrawFour)], vec![FILLER]];
    let draw = [FILLER; 4];
    let mut game = GameBuilder::new(2)?
        .with_hand_size(1)
        .with_deck(stacked_deck(&hands, STARTING, &draw))
        .build()?;
    assert_eq!(game.play_card(0, 0)?, PlayOutcome::Won(0));
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert_eq!(game.discard_top().map(|card| card.color), Some(Color::Wild));
    assert_eq!(game.hand(1)?.len(), 1);
    assert_eq!(game.deck_len(), 4);
    assert_eq!(game.choose_color(0, Color::Red), Err(GameError::GameOver));
    Ok(())
}

#[test]
fn state_view_reveals_only_own_hand() -> Result<(), GameError> {
    let game = GameBuilder::new(3)?.with_seed(3).build()?;
    let view = game.state_view(1)?;
    assert_eq!(view.self_player, 1);
    assert_eq!(view.hand, game.hand(1)?);
    assert_eq!(view.players.len(), 3);
    assert!(view.players.iter().all(|player| player.hand_size == 5));
    assert!(view.players[0].is_current);
    assert_eq!(view.draw_pile_count, DECK_SIZE - 16);
    assert_eq!(view.discard_top, game.discard_top());
    assert!(matches!(game.state_view(3), Err(GameError::InvalidPlayer(3))));
    Ok(())
}
