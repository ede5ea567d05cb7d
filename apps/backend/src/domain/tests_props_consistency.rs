//! Property tests: room invariants hold after any sequence of seat, leave and
//! ready events.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::test_gens::{self, RoomEvent, POOL};
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::{create_deck, plan_start, ConnId, GameState};

fn apply(state: &mut GameState, pool: &[ConnId], event: RoomEvent, rng: &mut StdRng) {
    match event {
        RoomEvent::Seat(i) => {
            let _ = state.seat(pool[i]);
        }
        RoomEvent::Unseat(i) => {
            state.unseat(pool[i]);
        }
        RoomEvent::Ready(i) => {
            if state.mark_ready(pool[i]) && state.can_start() {
                let plan = plan_start(&state.player_ids(), rng).unwrap();
                state.apply_start(plan).unwrap();
            }
        }
    }
}

fn assert_invariants(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(state.players().len() <= PLAYERS);

    if state.is_started() {
        let mut census = state.card_census();
        prop_assert_eq!(census.len(), DECK_SIZE);
        census.sort();
        let mut canonical = create_deck();
        canonical.sort();
        prop_assert_eq!(census, canonical);

        prop_assert!(state.trump().is_some());
        let turn = state.turn();
        prop_assert!(turn.is_some_and(|id| state.player(id).is_some()));

        let my_turn = state.views().iter().filter(|(_, v)| v.is_my_turn).count();
        prop_assert_eq!(my_turn, 1);
    } else {
        prop_assert!(state.deck().is_empty());
        prop_assert!(state.field().is_empty());
        prop_assert!(state.trump().is_none());
        prop_assert!(state.turn().is_none());
        prop_assert!(state.views().iter().all(|(_, v)| !v.is_my_turn));
    }
    Ok(())
}

proptest! {
    #![proptest_config(backend_test_support::prop_config::config())]

    #[test]
    fn prop_room_invariants_hold(
        events in test_gens::room_events(40),
        seed in any::<u64>(),
    ) {
        let pool: Vec<ConnId> = (0..POOL).map(|_| ConnId::new()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();

        for event in events {
            apply(&mut state, &pool, event, &mut rng);
            assert_invariants(&state)?;
        }
    }

    #[test]
    fn prop_card_tokens_round_trip(card in test_gens::card()) {
        prop_assert_eq!(card.to_string().parse::<crate::domain::Card>().unwrap(), card);
    }
}
