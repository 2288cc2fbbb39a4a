//! Position hash tests: which features move the hash, and path independence.

use std::collections::HashSet;

use double_go::zobrist::table;
use double_go::{Action, Board, Color, Phase, Point};

fn play_singles(board: &mut Board, points: &[(usize, usize)]) {
    for &(r, c) in points {
        assert!(board.play_single(Point::new(r, c)), "({r}, {c}) rejected");
    }
}

const KO_SHAPE: [(usize, usize); 8] = [
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 3),
    (2, 1),
    (2, 2),
    (8, 8),
    (1, 1),
];

// =============================================================================
// Basic hash properties
// =============================================================================

#[test]
fn test_empty_boards_hash_identically() {
    assert_eq!(Board::new(9).hash(), Board::new(9).hash());
    // Size is not a hash feature.
    assert_eq!(Board::new(9).hash(), Board::new(19).hash());
}

#[test]
fn test_empty_board_hash_is_phase_and_side() {
    let z = table();
    assert_eq!(
        Board::new(9).hash(),
        z.phase(Phase::First) ^ z.black_to_move()
    );
}

#[test]
fn test_stone_placement_changes_hash() {
    let mut a = Board::new(9);
    let mut b = Board::new(9);
    let initial = a.hash();
    assert!(a.apply(Action::place(3, 3)));
    assert!(b.apply(Action::place(4, 4)));
    assert_ne!(a.hash(), initial);
    assert_ne!(a.hash(), b.hash());
}

#[test]
fn test_corners_hash_differently() {
    let hashes: HashSet<u64> = [(0, 0), (0, 8), (8, 0), (8, 8)]
        .into_iter()
        .map(|(r, c)| {
            let mut b = Board::new(9);
            assert!(b.apply(Action::place(r, c)));
            b.hash()
        })
        .collect();
    assert_eq!(hashes.len(), 4);
}

#[test]
fn test_side_to_move_changes_hash() {
    let a = Board::new(9);
    let mut b = Board::new(9);
    b.pass();
    assert_eq!(b.to_play(), Color::White);
    assert_eq!(a.hash() ^ b.hash(), table().black_to_move());
}

#[test]
fn test_each_phase_hashes_differently() {
    let mut b = Board::new(9);
    let h_first = b.hash();
    assert!(b.apply(Action::place(3, 3)));
    let h_second = b.hash();
    assert!(b.apply(Action::place(4, 4)));
    let h_bonus = b.hash();
    let all: HashSet<u64> = [h_first, h_second, h_bonus].into_iter().collect();
    assert_eq!(all.len(), 3);
}

#[test]
fn test_double_pass_restores_initial_hash() {
    let mut b = Board::new(9);
    let h0 = b.hash();
    b.pass();
    let h1 = b.hash();
    b.pass();
    assert_ne!(h0, h1);
    assert_eq!(b.hash(), h0);
}

// =============================================================================
// Ko and captures
// =============================================================================

#[test]
fn test_ko_is_a_hash_feature() {
    let mut with_ko = Board::new(9);
    play_singles(&mut with_ko, &KO_SHAPE);
    play_singles(&mut with_ko, &[(1, 2)]);
    assert_eq!(with_ko.ko_point(), Some(Point::new(1, 1)));

    // Same stones, White to play in First, but White never played (1,1).
    let mut without_ko = Board::new(9);
    play_singles(&mut without_ko, &KO_SHAPE[..7]);
    without_ko.pass();
    play_singles(&mut without_ko, &[(1, 2)]);
    assert_eq!(without_ko.ko_point(), None);
    assert_eq!(with_ko.grid(), without_ko.grid());
    assert_eq!(with_ko.to_play(), without_ko.to_play());
    assert_eq!(with_ko.phase(), without_ko.phase());

    assert_eq!(
        with_ko.hash() ^ without_ko.hash(),
        table().ko(Point::new(1, 1))
    );
}

#[test]
fn test_filling_ko_in_second_phase_updates_hash() {
    let mut b = Board::new(9);
    play_singles(&mut b, &KO_SHAPE);
    assert!(b.apply(Action::place(1, 2)));
    let with_ko = b.hash();
    assert!(b.ko_point().is_some());
    assert!(b.apply(Action::place(1, 1)));
    assert_ne!(b.hash(), with_ko);
    assert_eq!(b.ko_point(), None);
    assert_eq!(b.hash(), b.compute_hash());
}

#[test]
fn test_capture_matches_position_that_never_had_the_stone() {
    let mut captured = Board::new(9);
    play_singles(&mut captured, &[(0, 1), (1, 1), (1, 0)]);
    captured.pass();
    play_singles(&mut captured, &[(1, 2)]);
    captured.pass();
    play_singles(&mut captured, &[(2, 1)]);
    assert_eq!(captured.at(Point::new(1, 1)), Color::Empty);

    let mut never = Board::new(9);
    for p in [(0, 1), (1, 0), (1, 2)] {
        play_singles(&mut never, &[p]);
        never.pass();
    }
    play_singles(&mut never, &[(2, 1)]);

    assert_eq!(captured.grid(), never.grid());
    assert_eq!(captured.to_play(), never.to_play());
    assert_eq!(captured.hash(), never.hash());
}

#[test]
fn test_group_capture_hash() {
    let mut b = Board::new(9);
    play_singles(&mut b, &[(1, 0), (0, 0), (1, 1), (0, 1)]);
    let before = b.hash();
    play_singles(&mut b, &[(0, 2)]);
    assert_eq!(b.captures(Color::Black), 2);
    assert_ne!(b.hash(), before);
    assert_eq!(b.hash(), b.compute_hash());
}

// =============================================================================
// Path independence
// =============================================================================

#[test]
fn test_transposed_single_moves() {
    let mut a = Board::new(9);
    play_singles(&mut a, &[(3, 3), (4, 4), (5, 5)]);
    let mut b = Board::new(9);
    play_singles(&mut b, &[(5, 5), (4, 4), (3, 3)]);
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_transposed_double_moves() {
    let mut a = Board::new(9);
    assert!(a.apply(Action::place(3, 3)));
    assert!(a.apply(Action::place(4, 4)));
    assert!(a.apply(Action::place(5, 5)));
    assert!(a.apply(Action::place(6, 6)));
    a.pass();

    let mut b = Board::new(9);
    assert!(b.apply(Action::place(4, 4)));
    assert!(b.apply(Action::place(3, 3)));
    assert!(b.apply(Action::place(6, 6)));
    assert!(b.apply(Action::place(5, 5)));
    b.pass();

    assert_eq!(a.to_play(), b.to_play());
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_single_and_double_turns_reach_same_hash() {
    // Black places two stones in one turn...
    let mut a = Board::new(9);
    assert!(a.apply(Action::place(2, 2)));
    assert!(a.apply(Action::place(6, 6)));
    a.pass(); // White declines the bonus stone

    // ...or over two single turns with White passing in between.
    let mut b = Board::new(9);
    play_singles(&mut b, &[(2, 2)]);
    b.pass();
    play_singles(&mut b, &[(6, 6)]);
    b.pass();

    assert_eq!(a.to_play(), b.to_play());
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_long_game_hash_stays_consistent() {
    let mut b = Board::new(9);
    let mut seen = HashSet::new();
    let mut repeats = 0;
    for r in 0..9 {
        for c in 0..9 {
            if b.game_over() {
                break;
            }
            if b.is_legal(Point::new(r, c)) && b.play_single(Point::new(r, c)) {
                assert_eq!(b.hash(), b.compute_hash());
                if !seen.insert(b.hash()) {
                    repeats += 1;
                }
            }
        }
    }
    assert!(repeats < 5, "too many repeated hashes: {repeats}");
}
