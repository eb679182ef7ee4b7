//! Round engine integration tests.

#![allow(clippy::float_cmp)]

use bjtrainer::{
    ACE, Action, ActionError, BetError, Card, DealError, HandOutcome, ReshuffleError,
    RoundEngine, RoundPhase, SessionError, SessionOptions, Shoe, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn engine_with_draws(seats: u8, bankroll: f64, draws: &[Card]) -> RoundEngine {
    let options = SessionOptions::default()
        .with_bankroll(bankroll)
        .with_active_hands(seats);
    let mut engine = RoundEngine::new(options, 1).unwrap();
    engine.replace_shoe(Shoe::stacked(draws)).unwrap();
    engine
}

fn ranks(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(|c| c.rank).collect()
}

#[test]
fn basic_round_flow() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 13), // dealer up
            card(Suit::Clubs, 10), // player
            card(Suit::Spades, 9), // dealer hole
            card(Suit::Diamonds, 12), // player
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    assert_eq!(engine.bankroll(), 90.0);

    engine.deal().unwrap();
    assert_eq!(engine.phase(), RoundPhase::PlayerTurns);
    assert_eq!(engine.active_hand().unwrap().total(), 20);
    assert_eq!(engine.recommended_action(), Some(Action::Stand));

    let outcome = engine.submit_action(Action::Stand).unwrap();
    assert!(outcome.correct);
    assert!(outcome.drawn.is_empty());
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);

    let drawn = engine.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(engine.phase(), RoundPhase::Tally);

    let result = engine.settle().unwrap();
    assert_eq!(engine.phase(), RoundPhase::RoundComplete);
    assert_eq!(result.dealer_total, 19);
    assert_eq!(result.hands.len(), 1);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 20.0);
    assert_eq!(engine.bankroll(), 110.0);

    let stats = engine.stats();
    assert_eq!(stats.net, 10.0);
    assert_eq!(stats.adherence, Some(100.0));
    assert_eq!(stats.average_bet, Some(10.0));
    assert_eq!(stats.net_per_hand, Some(10.0));
}

#[test]
fn natural_blackjack_pays_two_and_a_half_and_skips_turn() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Spades, ACE),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 13),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();

    assert_eq!(engine.phase(), RoundPhase::DealerTurn);
    assert!(engine.active_hand().is_none());
    assert_eq!(engine.session().total_actions(), 0);

    engine.dealer_play().unwrap();
    let result = engine.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 25.0);
    assert_eq!(engine.bankroll(), 115.0);
}

#[test]
fn blackjack_against_dealer_blackjack_returns_stake() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, ACE),
            card(Suit::Spades, ACE),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 12),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(engine.bankroll(), 100.0);
}

#[test]
fn equal_totals_push() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 8),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    engine.submit_action(Action::Stand).unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.hands[0].payout, 10.0);
    assert_eq!(engine.bankroll(), 100.0);
}

#[test]
fn bust_ends_turn_and_pays_nothing() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10), // dealer up
            card(Suit::Spades, 10), // player
            card(Suit::Clubs, 7), // dealer hole
            card(Suit::Diamonds, 6), // player
            card(Suit::Hearts, 6), // player hit
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.recommended_action(), Some(Action::Surrender));

    let outcome = engine.submit_action(Action::Hit).unwrap();
    assert!(!outcome.correct);
    assert_eq!(ranks(&outcome.drawn), vec![6]);
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);
    assert_eq!(engine.completed_hands()[0].total(), 22);

    engine.dealer_play().unwrap();
    let result = engine.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.hands[0].payout, 0.0);
    assert_eq!(engine.bankroll(), 90.0);
    assert_eq!(engine.session().correct_actions(), 0);
    assert_eq!(engine.session().total_actions(), 1);
}

#[test]
fn surrender_refunds_half_bet_and_never_wins() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 6),
            card(Suit::Hearts, 9), // dealer draw
        ],
    );

    engine.place_bet(0, 20.0).unwrap();
    engine.deal().unwrap();

    let outcome = engine.submit_action(Action::Surrender).unwrap();
    assert!(outcome.correct);
    assert_eq!(engine.bankroll(), 90.0);
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);

    engine.dealer_play().unwrap();
    let result = engine.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Surrendered);
    assert_eq!(result.hands[0].payout, 0.0);
    assert_eq!(engine.bankroll(), 90.0);
}

#[test]
fn double_down_draws_one_card_and_doubles_stake() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 6), // dealer up
            card(Suit::Spades, 6), // player
            card(Suit::Clubs, 10), // dealer hole
            card(Suit::Diamonds, 5), // player
            card(Suit::Hearts, 9), // double draw
            card(Suit::Clubs, 13), // dealer draw
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.recommended_action(), Some(Action::Double));

    let outcome = engine.submit_action(Action::Double).unwrap();
    assert!(outcome.correct);
    assert_eq!(ranks(&outcome.drawn), vec![9]);
    assert_eq!(engine.bankroll(), 80.0);
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);

    let hand = &engine.completed_hands()[0];
    assert_eq!(hand.bet(), 20.0);
    assert!(hand.is_doubled());
    assert_eq!(hand.total(), 20);

    let drawn = engine.dealer_play().unwrap();
    assert_eq!(ranks(&drawn), vec![13]);

    let result = engine.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].payout, 40.0);
    assert_eq!(engine.bankroll(), 120.0);
}

#[test]
fn split_then_bust_first_child_then_act_on_second() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10), // dealer up
            card(Suit::Spades, 8), // player
            card(Suit::Clubs, 7), // dealer hole
            card(Suit::Diamonds, 8), // player
            card(Suit::Hearts, 5), // first child
            card(Suit::Clubs, 3), // second child
            card(Suit::Spades, 10), // first child hit
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.recommended_action(), Some(Action::Split));

    let outcome = engine.submit_action(Action::Split).unwrap();
    assert!(outcome.correct);
    assert_eq!(ranks(&outcome.drawn), vec![5, 3]);
    assert_eq!(engine.bankroll(), 80.0);
    assert_eq!(engine.waiting_hands().count(), 2);

    let active = engine.active_hand().unwrap();
    assert_eq!(ranks(active.cards()), vec![8, 5]);
    assert!(active.is_from_split());
    assert_eq!(engine.recommended_action(), Some(Action::Hit));

    engine.submit_action(Action::Hit).unwrap();
    assert_eq!(engine.phase(), RoundPhase::PlayerTurns);
    assert_eq!(engine.completed_hands()[0].total(), 23);

    let active = engine.active_hand().unwrap();
    assert_eq!(ranks(active.cards()), vec![8, 3]);
    assert_eq!(engine.recommended_action(), Some(Action::Double));

    let outcome = engine.submit_action(Action::Stand).unwrap();
    assert!(!outcome.correct);
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);

    engine.dealer_play().unwrap();
    let result = engine.settle().unwrap();
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].player_total, 23);
    assert_eq!(result.hands[1].player_total, 11);
    assert!(result.hands.iter().all(|h| h.outcome == HandOutcome::Lose));
    assert_eq!(engine.bankroll(), 80.0);

    assert_eq!(engine.session().total_actions(), 3);
    assert_eq!(engine.session().correct_actions(), 2);
}

#[test]
fn split_children_act_before_waiting_seats() {
    let mut engine = engine_with_draws(
        2,
        100.0,
        &[
            card(Suit::Hearts, 10), // dealer up
            card(Suit::Spades, 8), // seat 0
            card(Suit::Clubs, 10), // seat 1
            card(Suit::Clubs, 7), // dealer hole
            card(Suit::Diamonds, 8), // seat 0
            card(Suit::Hearts, 9), // seat 1
            card(Suit::Hearts, 2), // first child
            card(Suit::Clubs, 3), // second child
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.place_bet(1, 10.0).unwrap();
    engine.deal().unwrap();

    engine.submit_action(Action::Split).unwrap();
    let waiting: Vec<Vec<u8>> = engine.waiting_hands().map(|h| ranks(h.cards())).collect();
    assert_eq!(waiting, vec![vec![8, 2], vec![8, 3], vec![10, 9]]);

    for _ in 0..3 {
        engine.submit_action(Action::Stand).unwrap();
    }
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);

    let totals: Vec<u8> = engine.completed_hands().iter().map(|h| h.total()).collect();
    assert_eq!(totals, vec![10, 11, 19]);

    engine.dealer_play().unwrap();
    let result = engine.settle().unwrap();
    let outcomes: Vec<HandOutcome> = result.hands.iter().map(|h| h.outcome).collect();
    assert_eq!(
        outcomes,
        vec![HandOutcome::Lose, HandOutcome::Lose, HandOutcome::Win]
    );
    assert_eq!(engine.bankroll(), 90.0);
}

#[test]
fn resplit_keeps_children_in_front() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 8),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 8), // first child pairs again
            card(Suit::Clubs, 3), // second child
            card(Suit::Clubs, 2), // re-split first
            card(Suit::Hearts, 4), // re-split second
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    engine.submit_action(Action::Split).unwrap();
    assert!(engine.available_actions().contains(&Action::Split));

    engine.submit_action(Action::Split).unwrap();
    let waiting: Vec<Vec<u8>> = engine.waiting_hands().map(|h| ranks(h.cards())).collect();
    assert_eq!(waiting, vec![vec![8, 2], vec![8, 4], vec![8, 3]]);
    assert_eq!(engine.bankroll(), 70.0);
}

#[test]
fn split_aces_child_blackjack_is_paid() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, ACE),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, ACE),
            card(Suit::Hearts, 13), // first child: blackjack
            card(Suit::Clubs, 9), // second child: soft 20
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.recommended_action(), Some(Action::Split));
    engine.submit_action(Action::Split).unwrap();

    assert_eq!(engine.completed_hands().len(), 1);
    assert!(engine.completed_hands()[0].is_blackjack());
    assert_eq!(ranks(engine.active_hand().unwrap().cards()), vec![ACE, 9]);

    engine.submit_action(Action::Stand).unwrap();
    engine.dealer_play().unwrap();
    let result = engine.settle().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    assert_eq!(engine.bankroll(), 125.0);
}

#[test]
fn illegal_actions_are_rejected_without_changes() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 2),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 3),
            card(Suit::Hearts, 4),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();

    assert_eq!(
        engine.submit_action(Action::Split).unwrap_err(),
        ActionError::CannotSplit
    );

    engine.submit_action(Action::Hit).unwrap();
    let before = engine.clone();

    assert_eq!(
        engine.submit_action(Action::Double).unwrap_err(),
        ActionError::CannotDouble
    );
    assert_eq!(
        engine.submit_action(Action::Surrender).unwrap_err(),
        ActionError::CannotSurrender
    );

    assert_eq!(engine.bankroll(), before.bankroll());
    assert_eq!(engine.session(), before.session());
    assert_eq!(engine.active_hand(), before.active_hand());
    assert_eq!(engine.session().total_actions(), 1);
    assert_eq!(
        engine.available_actions(),
        vec![Action::Hit, Action::Stand]
    );
}

#[test]
fn double_and_split_need_funds() {
    let mut engine = engine_with_draws(
        1,
        10.0,
        &[
            card(Suit::Hearts, 6),
            card(Suit::Spades, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Hearts, 2),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();

    assert_eq!(
        engine.available_actions(),
        vec![Action::Hit, Action::Stand, Action::Surrender]
    );
    assert_eq!(
        engine.submit_action(Action::Split).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(
        engine.submit_action(Action::Double).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(engine.bankroll(), 0.0);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 5),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 6),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();

    assert_eq!(
        engine.submit_action(Action::Hit).unwrap_err(),
        ActionError::EmptyShoe(bjtrainer::EmptyShoe)
    );
    assert_eq!(engine.active_hand().unwrap().len(), 2);
    assert_eq!(engine.session().total_actions(), 0);
}

#[test]
fn dealer_empty_shoe_can_resume_after_rebuild() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 9),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    engine.submit_action(Action::Stand).unwrap();

    assert_eq!(
        engine.dealer_play().unwrap_err(),
        ShowdownError::EmptyShoe(bjtrainer::EmptyShoe)
    );
    assert_eq!(engine.phase(), RoundPhase::DealerTurn);

    engine.rebuild_shoe().unwrap();
    engine.dealer_play().unwrap();
    assert!(engine.dealer_hand().unwrap().total() >= 17);
    engine.settle().unwrap();
}

#[test]
fn split_short_of_cards_can_retry_after_rebuild() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 8),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 8),
            card(Suit::Diamonds, 2),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.cards_remaining(), 1);

    assert_eq!(
        engine.submit_action(Action::Split).unwrap_err(),
        ActionError::EmptyShoe(bjtrainer::EmptyShoe)
    );
    assert_eq!(engine.bankroll(), 90.0);
    assert_eq!(engine.session().total_actions(), 0);

    engine.rebuild_shoe().unwrap();
    let outcome = engine.submit_action(Action::Split).unwrap();
    assert_eq!(outcome.drawn.len(), 2);
    assert_eq!(engine.bankroll(), 80.0);
    assert_eq!(engine.waiting_hands().count(), 2);
    assert!(engine.active_hand().unwrap().is_from_split());

    // Fresh cards again: no further mid-round rebuild.
    assert_eq!(engine.rebuild_shoe().unwrap_err(), ReshuffleError::InvalidState);
}

#[test]
fn rebuild_rejected_mid_round_while_cards_remain() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 9),
            card(Suit::Diamonds, 2),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();
    assert_eq!(engine.rebuild_shoe().unwrap_err(), ReshuffleError::InvalidState);
    assert_eq!(engine.cards_remaining(), 1);
}

#[test]
fn dealer_hole_card_hidden_until_dealer_turn() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 9),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    engine.deal().unwrap();

    assert_eq!(engine.dealer_up_card().unwrap().rank, 10);
    assert_eq!(engine.dealer_visible_cards().len(), 1);
    assert!(engine.dealer_hand().is_none());

    engine.submit_action(Action::Stand).unwrap();
    engine.dealer_play().unwrap();
    assert!(engine.is_hole_revealed());
    assert_eq!(engine.dealer_visible_cards().len(), 2);
    assert_eq!(engine.dealer_hand().unwrap().total(), 17);
}

#[test]
fn bet_errors() {
    let mut engine = engine_with_draws(1, 50.0, &[]);

    assert_eq!(
        engine.place_bet(0, -1.0).unwrap_err(),
        BetError::InvalidAmount
    );
    assert_eq!(
        engine.place_bet(0, f64::NAN).unwrap_err(),
        BetError::InvalidAmount
    );
    assert_eq!(
        engine.place_bet(0, 60.0).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(
        engine.place_bet(1, 10.0).unwrap_err(),
        BetError::SeatNotFound
    );
    assert_eq!(engine.bankroll(), 50.0);

    engine.place_bet(0, 50.0).unwrap();
    assert_eq!(
        engine.place_bet(0, 0.0).unwrap_err(),
        BetError::AlreadyPlaced
    );
    assert_eq!(engine.seat_bet(0), Some(50.0));
    assert_eq!(engine.start_round().unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_errors() {
    let mut engine = engine_with_draws(
        2,
        100.0,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ],
    );

    engine.place_bet(0, 10.0).unwrap();
    assert_eq!(engine.deal().unwrap_err(), DealError::MissingBets);

    engine.place_bet(1, 10.0).unwrap();
    assert_eq!(
        engine.deal().unwrap_err(),
        DealError::EmptyShoe(bjtrainer::EmptyShoe)
    );
    assert_eq!(engine.phase(), RoundPhase::Betting);
    assert_eq!(engine.cards_remaining(), 3);
}

#[test]
fn actions_rejected_outside_player_turns() {
    let mut engine = RoundEngine::new(SessionOptions::default(), 3).unwrap();
    assert_eq!(
        engine.submit_action(Action::Hit).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(engine.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(engine.settle().unwrap_err(), ShowdownError::InvalidState);
    assert!(engine.available_actions().is_empty());
    assert_eq!(engine.recommended_action(), None);
}

#[test]
fn zero_bet_seat_is_played_but_not_settled() {
    let mut engine = engine_with_draws(
        1,
        100.0,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 9),
        ],
    );

    engine.place_bet(0, 0.0).unwrap();
    engine.deal().unwrap();
    engine.submit_action(Action::Stand).unwrap();
    engine.dealer_play().unwrap();

    let result = engine.settle().unwrap();
    assert!(result.hands.is_empty());
    assert_eq!(engine.bankroll(), 100.0);
    assert_eq!(engine.session().hands_played(), 1);
}

#[test]
fn invalid_session_options_rejected() {
    let options = SessionOptions::default();
    assert_eq!(
        RoundEngine::new(options.clone().with_bankroll(0.0), 1).unwrap_err(),
        SessionError::InvalidBankroll
    );
    assert_eq!(
        RoundEngine::new(options.clone().with_active_hands(7), 1).unwrap_err(),
        SessionError::InvalidHandCount
    );
    assert_eq!(
        RoundEngine::new(options.clone().with_active_hands(0), 1).unwrap_err(),
        SessionError::InvalidHandCount
    );
    assert_eq!(
        RoundEngine::new(options.with_decks(0), 1).unwrap_err(),
        SessionError::InvalidDecks
    );
}

#[test]
fn rounds_repeat_and_adherence_stays_bounded() {
    for seed in 0..40 {
        let options = SessionOptions::default()
            .with_bankroll(10_000.0)
            .with_active_hands(3);
        let mut engine = RoundEngine::new(options, seed).unwrap();
        let mut pick = seed as usize;

        for _ in 0..5 {
            engine.start_round().unwrap();
            for seat in 0..3 {
                engine.place_bet(seat, 10.0).unwrap();
            }
            engine.deal().unwrap();

            while engine.phase() == RoundPhase::PlayerTurns {
                let actions = engine.available_actions();
                pick += 1;
                let action = actions[pick % actions.len()];
                engine.submit_action(action).unwrap();

                let session = engine.session();
                assert!(session.correct_actions() <= session.total_actions());
            }

            engine.dealer_play().unwrap();
            assert!(engine.dealer_hand().unwrap().total() >= 17);
            engine.settle().unwrap();
            assert_eq!(engine.phase(), RoundPhase::RoundComplete);
        }

        assert_eq!(engine.session().hands_played(), 15);
        assert_eq!(engine.session().total_bet(), 150.0);
        assert!(engine.bankroll().is_finite());
    }
}
