//! Chess piece representation and movement tables.

use crate::{Color, Offset};
use serde::{Deserialize, Serialize};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Back rank order from column 0 to column 7.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Returns the notation letter for this kind with the given color.
    pub const fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Returns true if this kind moves along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if pieces of this kind carry a "has moved" flag.
    ///
    /// Kings and rooks need it for castling, pawns for the double step.
    #[inline]
    pub const fn tracks_moved(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

const fn offsets<const N: usize>(table: [(i8, i8); N]) -> [Offset; N] {
    let mut out = [Offset::new(0, 0); N];
    let mut i = 0;
    while i < N {
        out[i] = Offset::new(table[i].0, table[i].1);
        i += 1;
    }
    out
}

const fn mirrored<const N: usize>(table: [Offset; N]) -> [Offset; N] {
    let mut out = table;
    let mut i = 0;
    while i < N {
        out[i] = table[i].mirrored();
        i += 1;
    }
    out
}

pub const KNIGHT_OFFSETS: [Offset; 8] = offsets([
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
]);

pub const BISHOP_DIRECTIONS: [Offset; 4] = offsets([(1, 1), (1, -1), (-1, 1), (-1, -1)]);

pub const ROOK_DIRECTIONS: [Offset; 4] = offsets([(1, 0), (-1, 0), (0, 1), (0, -1)]);

pub const QUEEN_DIRECTIONS: [Offset; 8] = offsets([
    (0, 1),
    (0, -1),
    (1, 0),
    (1, -1),
    (1, 1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
]);

pub const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

/// White pawn before its first move: single step, double step, two captures.
pub const WHITE_PAWN_OFFSETS: [Offset; 4] = offsets([(-1, 0), (-2, 0), (-1, 1), (-1, -1)]);

/// White pawn after its first move.
pub const WHITE_PAWN_OFFSETS_MOVED: [Offset; 3] = offsets([(-1, 0), (-1, 1), (-1, -1)]);

pub const BLACK_PAWN_OFFSETS: [Offset; 4] = mirrored(WHITE_PAWN_OFFSETS);

pub const BLACK_PAWN_OFFSETS_MOVED: [Offset; 3] = mirrored(WHITE_PAWN_OFFSETS_MOVED);

/// Movement geometry of a piece in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// Candidate vectors, in table order.
    pub offsets: &'static [Offset],
    /// Rays are repeated until blocked when true; applied once otherwise.
    pub sliding: bool,
}

/// Returns the movement table for a piece kind, color and moved state.
pub const fn movement(kind: PieceKind, color: Color, moved: bool) -> Movement {
    let offsets: &'static [Offset] = match (kind, color, moved) {
        (PieceKind::Pawn, Color::White, false) => &WHITE_PAWN_OFFSETS,
        (PieceKind::Pawn, Color::White, true) => &WHITE_PAWN_OFFSETS_MOVED,
        (PieceKind::Pawn, Color::Black, false) => &BLACK_PAWN_OFFSETS,
        (PieceKind::Pawn, Color::Black, true) => &BLACK_PAWN_OFFSETS_MOVED,
        (PieceKind::Knight, _, _) => &KNIGHT_OFFSETS,
        (PieceKind::Bishop, _, _) => &BISHOP_DIRECTIONS,
        (PieceKind::Rook, _, _) => &ROOK_DIRECTIONS,
        (PieceKind::Queen, _, _) => &QUEEN_DIRECTIONS,
        (PieceKind::King, _, _) => &KING_OFFSETS,
    };
    Movement {
        offsets,
        sliding: kind.is_slider(),
    }
}

/// A piece on the board.
///
/// Kind and color never change. The `moved` flag is a one-way latch that
/// only kings, rooks and pawns carry; a piece owned by a board can only be
/// reached through shared references, so the engine's move application is
/// the one place that flips it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    moved: bool,
}

impl Piece {
    /// Creates an unmoved piece.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            moved: false,
        }
    }

    pub const fn pawn(color: Color) -> Self {
        Self::new(PieceKind::Pawn, color)
    }

    pub const fn knight(color: Color) -> Self {
        Self::new(PieceKind::Knight, color)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(PieceKind::Bishop, color)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(PieceKind::Rook, color)
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(PieceKind::Queen, color)
    }

    pub const fn king(color: Color) -> Self {
        Self::new(PieceKind::King, color)
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the notation letter, uppercase for White.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    #[inline]
    pub const fn tracks_moved(&self) -> bool {
        self.kind.tracks_moved()
    }

    /// Returns true once a king, rook or pawn has been relocated.
    #[inline]
    pub const fn moved(&self) -> bool {
        self.moved
    }

    /// Latches the moved flag. No-op for kinds that do not track it.
    #[inline]
    pub fn mark_moved(&mut self) {
        if self.tracks_moved() {
            self.moved = true;
        }
    }

    /// Returns this piece with the moved flag latched.
    pub fn into_moved(mut self) -> Self {
        self.mark_moved();
        self
    }

    /// Returns the movement geometry for the piece's current state.
    #[inline]
    pub const fn movement(&self) -> Movement {
        movement(self.kind, self.color, self.moved)
    }

    /// Returns the direction table; a pawn's table shrinks after it moves.
    #[inline]
    pub const fn directions(&self) -> &'static [Offset] {
        self.movement().offsets
    }
}
