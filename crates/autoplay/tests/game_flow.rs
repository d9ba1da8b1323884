use duelis_autoplay::{GameRunner, RandomAgent, RunStatus, ScriptedAgent};
use duelis_core::{
    Action, AgePreset, BoardPos, CardBoard, CardId, Event, EventBus, Game, GameConfig, GamePreset,
    Phase, RngState,
};
use duelis_data::builtin_catalog;
use std::collections::HashSet;

fn new_game(seed: u64) -> Game {
    Game::new(builtin_catalog().unwrap(), GameConfig::default(), seed)
}

/// Fixed age-1 layout with the six open bottom cards chosen by the test;
/// the covered slots get arbitrary distinct age-1 ids.
fn age0_preset(bottom: [CardId; 6]) -> GamePreset {
    let mut rng = RngState::from_seed(0);
    let mut board = CardBoard::default();
    board.generate_age(0, (0..23).collect(), Vec::new(), None, &mut rng);
    let positions: Vec<BoardPos> = board.slots().iter().map(|slot| slot.pos()).collect();

    let used: HashSet<CardId> = bottom.iter().copied().collect();
    let mut rest = (0..23u16).filter(|id| !used.contains(id));
    let mut map = AgePreset::new();
    for &pos in &positions[..14] {
        map.insert(pos, rest.next().unwrap());
    }
    for (offset, &pos) in positions[14..].iter().enumerate() {
        map.insert(pos, bottom[offset]);
    }
    [map, AgePreset::new(), AgePreset::new()]
}

fn draft_wonders(game: &mut Game, events: &mut EventBus) -> Vec<usize> {
    let mut pickers = Vec::new();
    while game.phase == Phase::PickWonder {
        pickers.push(game.current_player);
        let action = game.legal_actions()[0].clone();
        game.apply_action(&action, events).unwrap();
    }
    pickers
}

fn find_buy(game: &mut Game, card: CardId) -> Action {
    game.legal_actions()
        .into_iter()
        .find(|action| matches!(action, Action::BuyCard { card: c, .. } if *c == card))
        .unwrap_or_else(|| panic!("card {card} is not buyable"))
}

fn find_discard(game: &mut Game, card: CardId) -> Action {
    game.legal_actions()
        .into_iter()
        .find(|action| matches!(action, Action::DiscardCard { card: c, .. } if *c == card))
        .unwrap_or_else(|| panic!("card {card} is not discardable"))
}

#[test]
fn wonder_draft_hand_off_sequence() {
    let mut game = new_game(5);
    let mut events = EventBus::default();
    assert_eq!(game.phase, Phase::PickWonder);
    assert_eq!(game.offered_wonders().len(), 4);

    let pickers = draft_wonders(&mut game, &mut events);
    assert_eq!(pickers, vec![0, 1, 1, 0, 1, 0, 0, 1]);

    assert_eq!(game.phase, Phase::NormalTurn);
    assert_eq!(game.current_player, 0);
    assert_eq!(game.age, 0);
    assert_eq!(game.board.slot_count(), 20);
    assert_eq!(game.board.available_cards().len(), 6);
    assert_eq!(game.players[0].wonders.len(), 4);
    assert_eq!(game.players[1].wonders.len(), 4);
    assert!(game.wonder_pool.is_empty());
}

#[test]
fn offered_wonder_window_shrinks_then_reopens() {
    let mut game = new_game(5);
    let mut events = EventBus::default();
    let mut offered = Vec::new();
    while game.phase == Phase::PickWonder {
        offered.push(game.offered_wonders().len());
        let action = game.legal_actions()[0].clone();
        game.apply_action(&action, &mut events).unwrap();
    }
    assert_eq!(offered, vec![4, 3, 2, 1, 4, 3, 2, 1]);
}

#[test]
fn chain_symbol_buys_a_card_for_free() {
    // Theater (16) produces the mask symbol; Statue (38) consumes it.
    let preset = age0_preset([16, 38, 0, 2, 4, 8]);
    let mut game = new_game(9).with_preset(preset);
    game.enable_price_cache();
    let mut events = EventBus::default();
    draft_wonders(&mut game, &mut events);

    let buy_theater = find_buy(&mut game, 16);
    game.apply_action(&buy_theater, &mut events).unwrap();
    assert_eq!(game.players[0].coins, 7);
    assert_eq!(game.players[0].color_count(duelis_core::CardColor::Blue), 1);

    let discard = find_discard(&mut game, 0);
    game.apply_action(&discard, &mut events).unwrap();

    assert_eq!(game.current_player, 0);
    let buy_statue = find_buy(&mut game, 38);
    game.apply_action(&buy_statue, &mut events).unwrap();

    // the chain made the purchase free and added exactly one blue card
    assert_eq!(game.players[0].coins, 7);
    assert_eq!(game.players[0].color_count(duelis_core::CardColor::Blue), 2);
    assert!(events.drain().any(|event| matches!(
        event,
        Event::CardBought {
            player: 0,
            card: 38,
            price: 0
        }
    )));
}

#[test]
fn second_science_symbol_grants_a_token_pick() {
    // Scriptorium (14) and Library (33) both carry the quill symbol.
    let preset = age0_preset([14, 33, 0, 2, 4, 8]);
    let mut game = new_game(13).with_preset(preset);
    let mut events = EventBus::default();
    draft_wonders(&mut game, &mut events);

    let discard = find_discard(&mut game, 0);
    game.apply_action(&discard, &mut events).unwrap();
    let discard = find_discard(&mut game, 2);
    game.apply_action(&discard, &mut events).unwrap();

    let buy = find_buy(&mut game, 14);
    game.apply_action(&buy, &mut events).unwrap();
    assert_eq!(game.phase, Phase::NormalTurn);

    let discard = find_discard(&mut game, 4);
    game.apply_action(&discard, &mut events).unwrap();

    let buy = find_buy(&mut game, 33);
    game.apply_action(&buy, &mut events).unwrap();
    assert_eq!(game.players[0].science_doubles(), 1);
    assert_eq!(game.phase, Phase::PickProgressToken);
    assert_eq!(game.current_player, 0);

    let tokens_before = game.progress_tokens.len();
    let pick = game.legal_actions()[0].clone();
    game.apply_action(&pick, &mut events).unwrap();
    assert_eq!(game.progress_tokens.len(), tokens_before - 1);
    assert_eq!(game.players[0].progress_tokens.len(), 1);
    assert_eq!(game.phase, Phase::NormalTurn);
    assert_eq!(game.current_player, 1);
}

#[test]
fn military_token_fires_once_through_the_engine() {
    // Guard Tower (8), Stable (9), Garrison (10): one shield each.
    let preset = age0_preset([8, 9, 10, 0, 2, 4]);
    let mut game = new_game(21).with_preset(preset);
    let mut events = EventBus::default();
    draft_wonders(&mut game, &mut events);

    let buy = find_buy(&mut game, 8);
    game.apply_action(&buy, &mut events).unwrap();
    let discard = find_discard(&mut game, 0);
    game.apply_action(&discard, &mut events).unwrap();
    let buy = find_buy(&mut game, 9);
    game.apply_action(&buy, &mut events).unwrap();
    let discard = find_discard(&mut game, 2);
    game.apply_action(&discard, &mut events).unwrap();
    assert_eq!(game.military.conflict_pawn, 2);

    let buy = find_buy(&mut game, 10);
    game.apply_action(&buy, &mut events).unwrap();

    assert_eq!(game.military.conflict_pawn, 3);
    assert!(!game.military.tokens[2]);
    // player 1 banked two discards (+4) and paid the token penalty (-2)
    assert_eq!(game.players[1].coins, 9);
    let losses: Vec<Event> = events
        .drain()
        .filter(|event| matches!(event, Event::MilitaryTokenLost { .. }))
        .collect();
    assert_eq!(
        losses,
        vec![Event::MilitaryTokenLost {
            player: 1,
            coins: -2
        }]
    );
}

#[test]
fn random_games_terminate_with_a_result() {
    for seed in 1..=5u64 {
        let mut game = new_game(seed);
        game.enable_price_cache();
        let agents: [Box<dyn duelis_autoplay::Agent>; 2] = [
            Box::new(RandomAgent::new(seed * 31 + 7)),
            Box::new(RandomAgent::new(seed * 77 + 13)),
        ];
        let mut runner = GameRunner::new(game, agents);
        let report = runner.run(500).unwrap();
        assert_eq!(report.status, RunStatus::Finished, "seed {seed} did not finish");
        assert!(report.winner.is_some());
        assert!(report.steps < 500);
        for player in &runner.game.players {
            assert!(player.coins >= 0, "seed {seed} left negative coins");
        }
    }
}

#[test]
fn seeded_runs_are_deterministic_and_replayable() {
    let seed = 11u64;
    let run = |cache: bool| {
        let mut game = new_game(seed);
        if cache {
            game.enable_price_cache();
        }
        let agents: [Box<dyn duelis_autoplay::Agent>; 2] = [
            Box::new(RandomAgent::new(101)),
            Box::new(RandomAgent::new(202)),
        ];
        let mut runner = GameRunner::new(game, agents);
        let report = runner.run(500).unwrap();
        (report, runner)
    };

    let (report_a, runner_a) = run(false);
    let (report_b, runner_b) = run(false);
    assert_eq!(runner_a.trace.steps, runner_b.trace.steps);
    assert_eq!(report_a.winner, report_b.winner);

    // the price cache must never change outcomes, only skip work
    let (report_c, runner_c) = run(true);
    assert_eq!(runner_a.trace.steps, runner_c.trace.steps);
    assert_eq!(report_a.winner, report_c.winner);

    // replaying the recorded actions reproduces the same final state
    let mut game = new_game(seed);
    game.enable_price_cache();
    let per_player = |player: usize| {
        runner_a
            .trace
            .steps
            .iter()
            .filter(|step| step.player == player)
            .map(|step| step.action.clone())
            .collect::<Vec<_>>()
    };
    let agents: [Box<dyn duelis_autoplay::Agent>; 2] = [
        Box::new(ScriptedAgent::new(per_player(0))),
        Box::new(ScriptedAgent::new(per_player(1))),
    ];
    let mut replay = GameRunner::new(game, agents);
    let replay_report = replay.run(500).unwrap();
    assert_eq!(replay_report.status, RunStatus::Finished);
    assert_eq!(replay_report.winner, report_a.winner);
    assert_eq!(replay_report.scores, report_a.scores);
}

#[test]
fn finished_games_reject_further_actions() {
    let game = new_game(3);
    let agents: [Box<dyn duelis_autoplay::Agent>; 2] = [
        Box::new(RandomAgent::new(1)),
        Box::new(RandomAgent::new(2)),
    ];
    let mut runner = GameRunner::new(game, agents);
    runner.run(500).unwrap();
    assert!(runner.game.is_finished());
    assert!(runner.game.winner.is_some());

    let mut events = EventBus::default();
    let err = runner
        .game
        .apply_action(&Action::PickStartPlayer { player: 0 }, &mut events)
        .unwrap_err();
    assert!(matches!(err, duelis_core::GameError::Finished));
}
