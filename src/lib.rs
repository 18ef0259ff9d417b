//! Crate root module declarations for the Plum Rules project.
//!
//! The chess-piece rule set (placement validation, movement predicates and
//! capture predicates) is the core of the crate. The `exercises` tree holds
//! the smaller validated value objects that share the same conventions, and
//! `shell` exposes the piece rules over a line-oriented stdin/stdout loop.

pub mod errors;

pub mod pieces {
    pub mod any_piece;
    pub mod bishop;
    pub mod board_location;
    pub mod chess_piece;
    pub mod king;
    pub mod knight;
    pub mod pawn;
    pub mod piece_class;
    pub mod piece_color;
    pub mod queen;
    pub mod rook;
}

pub mod utils {
    pub mod algebraic;
    pub mod movement_map;
}

pub mod shell {
    pub mod shell_top;
}

pub mod exercises {
    pub mod book_list;
    pub mod electric_vehicle;
    pub mod fraction;
    pub mod shoe;
}
