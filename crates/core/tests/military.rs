use duelis_core::MilitaryTrack;

#[test]
fn pawn_direction_and_supremacy() {
    let mut track = MilitaryTrack::new();
    track.apply_shields(0, 9, |_, _| {});
    assert_eq!(track.conflict_pawn, 9);
    assert_eq!(track.supremacist(), Some(0));

    let mut track = MilitaryTrack::new();
    track.apply_shields(1, 9, |_, _| {});
    assert_eq!(track.conflict_pawn, -9);
    assert_eq!(track.supremacist(), Some(1));
}

#[test]
fn pawn_clamps_at_the_limit() {
    let mut track = MilitaryTrack::new();
    track.apply_shields(0, 25, |_, _| {});
    assert_eq!(track.conflict_pawn, 9);
    track.apply_shields(1, 40, |_, _| {});
    assert_eq!(track.conflict_pawn, -9);
}

#[test]
fn crossing_three_revokes_the_first_token_once() {
    let mut track = MilitaryTrack::new();
    track.apply_shields(0, 2, |_, _| panic!("no token at 2"));
    assert_eq!(track.conflict_pawn, 2);

    let mut calls = Vec::new();
    track.apply_shields(0, 1, |player, coins| calls.push((player, coins)));
    assert_eq!(track.conflict_pawn, 3);
    assert_eq!(calls, vec![(1, -2)]);

    // moving past the same threshold again must not fire twice
    let mut calls = Vec::new();
    track.apply_shields(1, 1, |player, coins| calls.push((player, coins)));
    track.apply_shields(0, 2, |player, coins| calls.push((player, coins)));
    assert!(calls.is_empty());
}

#[test]
fn both_thresholds_fire_on_a_long_push() {
    let mut track = MilitaryTrack::new();
    let mut calls = Vec::new();
    track.apply_shields(0, 7, |player, coins| calls.push((player, coins)));
    assert_eq!(calls, vec![(1, -2), (1, -5)]);

    let mut calls = Vec::new();
    track.apply_shields(1, 16, |player, coins| calls.push((player, coins)));
    assert_eq!(calls, vec![(0, -2), (0, -5)]);
}

#[test]
fn weaker_player_follows_the_pawn_sign() {
    let mut track = MilitaryTrack::new();
    assert_eq!(track.weaker_player(), None);
    track.apply_shields(0, 2, |_, _| {});
    assert_eq!(track.weaker_player(), Some(1));
    track.apply_shields(1, 4, |_, _| {});
    assert_eq!(track.weaker_player(), Some(0));
}

#[test]
fn points_step_with_the_pawn() {
    let mut track = MilitaryTrack::new();
    assert_eq!(track.points(0), 0);
    assert_eq!(track.points(1), 0);

    track.apply_shields(0, 2, |_, _| {});
    assert_eq!(track.points(0), 2);
    assert_eq!(track.points(1), 0);

    track.apply_shields(0, 2, |_, _| {});
    assert_eq!(track.points(0), 5);

    track.apply_shields(0, 4, |_, _| {});
    assert_eq!(track.points(0), 10);

    // supremacy ends the game instead of scoring
    track.apply_shields(0, 1, |_, _| {});
    assert_eq!(track.points(0), 0);
}
