use rand::{rngs::StdRng, Rng, SeedableRng};

use plum_rules::pieces::any_piece::AnyPiece;
use plum_rules::pieces::bishop::Bishop;
use plum_rules::pieces::board_location::all_board_locations;
use plum_rules::pieces::chess_piece::ChessPiece;
use plum_rules::pieces::king::King;
use plum_rules::pieces::knight::Knight;
use plum_rules::pieces::pawn::Pawn;
use plum_rules::pieces::piece_class::PieceClass;
use plum_rules::pieces::piece_color::Color;
use plum_rules::pieces::queen::Queen;
use plum_rules::pieces::rook::Rook;

/// Every piece that can legally stand anywhere on the board.
fn every_placed_piece() -> Vec<AnyPiece> {
    let mut pieces = Vec::new();
    for class in PieceClass::ALL {
        for color in Color::ALL {
            for (row, column) in all_board_locations() {
                if let Ok(piece) = AnyPiece::new(class, row, column, color) {
                    pieces.push(piece);
                }
            }
        }
    }
    pieces
}

#[test]
fn every_placement_except_pawn_back_ranks_is_accepted() {
    // 6 classes * 2 colors * 64 squares, minus 8 squares per pawn color
    assert_eq!(every_placed_piece().len(), 6 * 2 * 64 - 2 * 8);
}

#[test]
fn off_board_targets_are_never_reachable() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5_000 {
        let piece = AnyPiece::random(&mut rng);
        let (row, column) = if rng.random_bool(0.5) {
            (rng.random_range(8..1_000), rng.random_range(-1_000..1_000))
        } else {
            (rng.random_range(-1_000..1_000), rng.random_range(-1_000..0))
        };
        assert!(
            !piece.can_move(row, column),
            "{piece:?} should not reach ({row}, {column})"
        );
    }
    for piece in every_placed_piece() {
        assert!(!piece.can_move(i32::MIN, i32::MAX));
        assert!(!piece.can_move(i32::MAX, i32::MIN));
    }
}

#[test]
fn no_piece_can_move_to_its_own_square() {
    for piece in every_placed_piece() {
        assert!(!piece.can_move(piece.row(), piece.column()), "{piece:?}");
    }
}

#[test]
fn same_color_pieces_never_capture_each_other() {
    let pieces = every_placed_piece();
    let mut rng = StdRng::seed_from_u64(7);
    for attacker in &pieces {
        for _ in 0..32 {
            let target = pieces[rng.random_range(0..pieces.len())];
            if target.color() == attacker.color() {
                assert!(!attacker.can_kill(&target), "{attacker:?} vs {target:?}");
            }
        }
        for (row, column) in all_board_locations() {
            let friend = Rook::new(row, column, attacker.color()).expect("rook fits anywhere");
            assert!(!attacker.can_kill(&friend));
        }
    }
}

#[test]
fn non_pawns_capture_exactly_where_they_move() {
    for attacker in every_placed_piece() {
        if attacker.class() == PieceClass::Pawn {
            continue;
        }
        for (row, column) in all_board_locations() {
            let foe = King::new(row, column, attacker.color().opposite()).expect("king fits anywhere");
            assert_eq!(attacker.can_kill(&foe), attacker.can_move(row, column));
        }
    }
}

#[test]
fn pawns_never_capture_straight_ahead_or_move_sideways() {
    for pawn in every_placed_piece() {
        if pawn.class() != PieceClass::Pawn {
            continue;
        }
        for (row, column) in all_board_locations() {
            let foe = Knight::new(row, column, pawn.color().opposite()).expect("knight fits anywhere");
            if pawn.can_kill(&foe) {
                assert_eq!(row - pawn.row(), pawn.color().forward());
                assert_eq!((column - pawn.column()).abs(), 1);
                assert!(!pawn.can_move(row, column));
            }
            if pawn.can_move(row, column) {
                assert_eq!(column, pawn.column());
            }
        }
    }
}

#[test]
fn queen_is_rook_plus_bishop() {
    for (row, column) in all_board_locations() {
        let queen = Queen::new(row, column, Color::White).expect("valid queen");
        let rook = Rook::new(row, column, Color::White).expect("valid rook");
        let bishop = Bishop::new(row, column, Color::White).expect("valid bishop");
        for (r, c) in all_board_locations() {
            assert_eq!(queen.can_move(r, c), rook.can_move(r, c) || bishop.can_move(r, c));
        }
    }
}

#[test]
fn reference_positions() {
    let bishop = Bishop::new(4, 4, Color::White).expect("valid");
    assert!(bishop.can_move(5, 5) && bishop.can_move(3, 5) && !bishop.can_move(5, 4));

    let rook = Rook::new(4, 4, Color::White).expect("valid");
    assert!(rook.can_move(6, 4) && rook.can_move(4, 6) && !rook.can_move(5, 5));

    let queen = Queen::new(4, 4, Color::White).expect("valid");
    assert!(queen.can_move(7, 7) && queen.can_move(7, 4) && !queen.can_move(7, 5));

    let king = King::new(4, 4, Color::White).expect("valid");
    assert!(king.can_move(5, 5) && !king.can_move(6, 4));

    let knight = Knight::new(4, 4, Color::White).expect("valid");
    assert!(knight.can_move(6, 5) && !knight.can_move(6, 4));

    let start = Pawn::new(1, 4, Color::White).expect("valid");
    assert!(start.can_move(3, 4) && start.can_move(2, 4) && !start.can_move(4, 4));
    let moved = Pawn::new(2, 4, Color::White).expect("valid");
    assert!(!moved.can_move(4, 4));

    let white = Pawn::new(4, 4, Color::White).expect("valid");
    assert!(white.can_kill(&Pawn::new(5, 5, Color::Black).expect("valid")));
    assert!(!white.can_kill(&Pawn::new(5, 4, Color::Black).expect("valid")));
}

#[test]
fn invalid_placements_are_rejected() {
    for class in PieceClass::ALL {
        for color in Color::ALL {
            for (row, column) in [(8, 8), (-1, -1), (0, 8), (8, 0)] {
                let err = AnyPiece::new(class, row, column, color).expect_err("off board");
                assert!(err.is_invalid_placement());
            }
        }
    }
    for column in 0..8 {
        assert!(Pawn::new(0, column, Color::White).is_err());
        assert!(Pawn::new(7, column, Color::Black).is_err());
    }
}
