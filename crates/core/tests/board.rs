use duelis_core::{AgePreset, CardBoard, CardId, RngState, SlotFace};

fn deck(range: std::ops::Range<u16>) -> Vec<CardId> {
    range.collect()
}

fn generated(age: u8, seed: u64) -> CardBoard {
    let mut rng = RngState::from_seed(seed);
    let mut board = CardBoard::default();
    let (cards, guilds) = match age {
        0 => (deck(0..23), Vec::new()),
        1 => (deck(23..46), Vec::new()),
        2 => (deck(46..66), deck(66..73)),
        _ => unreachable!(),
    };
    board.generate_age(age, cards, guilds, None, &mut rng);
    board
}

fn row_count(board: &CardBoard, row: usize) -> usize {
    board.slots().iter().filter(|slot| slot.row == row).count()
}

#[test]
fn age_1_layout() {
    let board = generated(0, 7);
    assert_eq!(CardBoard::row_widths(0), vec![2, 3, 4, 5, 6]);
    assert_eq!(board.slot_count(), 20);
    for (row, expected) in [(0, 2), (1, 3), (2, 4), (3, 5), (4, 6)] {
        assert_eq!(row_count(&board, row), expected);
    }
    // the bottom row is uncovered and face up
    let available = board.available_cards();
    assert_eq!(available.len(), 6);
    assert!(available.iter().all(|(_, pos)| pos.0 == 4));
}

#[test]
fn age_2_layout() {
    let board = generated(1, 7);
    assert_eq!(CardBoard::row_widths(1), vec![6, 5, 4, 3, 2]);
    assert_eq!(board.slot_count(), 20);
    // the inverted pyramid starts with only its two lowest cards open
    assert_eq!(board.available_cards().len(), 2);
}

#[test]
fn age_3_layout_and_guild_backs() {
    let board = generated(2, 7);
    assert_eq!(CardBoard::row_widths(2), vec![2, 3, 4, 2, 4, 3, 2]);
    assert_eq!(board.slot_count(), 20);
    let guild_backs = board
        .slots()
        .iter()
        .filter(|slot| slot.guild_back)
        .count();
    assert_eq!(guild_backs, 3);
    assert_eq!(board.available_cards().len(), 2);
}

#[test]
fn no_duplicate_cards_after_generation() {
    for age in 0..3u8 {
        let board = generated(age, 99);
        let mut seen = std::collections::HashSet::new();
        for slot in board.slots() {
            if let SlotFace::Revealed(card) = slot.face {
                assert!(seen.insert(card), "card {card} appears twice");
            }
        }
    }
}

#[test]
fn taking_all_cards_in_available_order_succeeds() {
    for age in 0..3u8 {
        let mut board = generated(age, 42);
        let mut taken = Vec::new();
        loop {
            let available = board.available_cards();
            let Some(&(card, _)) = available.first() else {
                break;
            };
            board.take_card(card).expect("available card must be takeable");
            taken.push(card);
        }
        assert_eq!(taken.len(), 20, "age {age} board was not exhausted");
        let mut unique = taken.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 20);
    }
}

#[test]
fn take_unknown_card_fails() {
    let mut board = generated(0, 3);
    assert!(board.take_card(999).is_err());
}

#[test]
fn reveal_cascades_one_level() {
    // preset the whole age so positions and ids are known
    let reference = generated(0, 1);
    let positions: Vec<_> = reference.slots().iter().map(|slot| slot.pos()).collect();
    let preset: AgePreset = positions
        .iter()
        .enumerate()
        .map(|(index, &pos)| (pos, index as CardId))
        .collect();

    let mut rng = RngState::from_seed(1);
    let mut board = CardBoard::default();
    board.generate_age(0, deck(0..23), Vec::new(), Some(preset), &mut rng);

    // bottom row slots are indices 14..20 in row-major order
    let first = 14 as CardId;
    let second = 15 as CardId;
    board.take_card(first).unwrap();
    // (3,0) still has one remaining cover, nothing new is revealed
    assert_eq!(board.available_cards().len(), 5);
    board.take_card(second).unwrap();
    // both covers of (3,0) are gone now; it is revealed, its own covered
    // row stays face down
    let available = board.available_cards();
    assert!(available.iter().any(|&(card, pos)| card == 9 && pos == (3, 0)));
    assert!(board
        .slots()
        .iter()
        .filter(|slot| slot.row < 3)
        .all(|slot| slot.face != SlotFace::Revealed(9)));
}
