//! Static movement descriptors for the vector-driven piece kinds.

use crate::piece_kind::PieceKind;

/// A (rank, file) displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    pub rank: i8,
    pub file: i8,
}

impl Step {
    pub const fn new(rank: i8, file: i8) -> Step {
        Step { rank, file }
    }
}

pub(crate) const ORTHOGONAL: [Step; 4] = [
    Step::new(1, 0),
    Step::new(0, 1),
    Step::new(-1, 0),
    Step::new(0, -1),
];

pub(crate) const DIAGONAL: [Step; 4] = [
    Step::new(1, 1),
    Step::new(1, -1),
    Step::new(-1, 1),
    Step::new(-1, -1),
];

pub(crate) const KNIGHT_JUMPS: [Step; 8] = [
    Step::new(2, 1),
    Step::new(2, -1),
    Step::new(-2, 1),
    Step::new(-2, -1),
    Step::new(1, 2),
    Step::new(1, -2),
    Step::new(-1, 2),
    Step::new(-1, -2),
];

/// A set of step vectors and whether each is followed as a ray or tried once.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Movement {
    pub steps: &'static [Step],
    pub repeat: bool,
}

const ROOK_RAYS: Movement = Movement { steps: &ORTHOGONAL, repeat: true };
const BISHOP_RAYS: Movement = Movement { steps: &DIAGONAL, repeat: true };

static KING: [Movement; 2] = [
    Movement { steps: &ORTHOGONAL, repeat: false },
    Movement { steps: &DIAGONAL, repeat: false },
];
static QUEEN: [Movement; 2] = [ROOK_RAYS, BISHOP_RAYS];
static ROOK: [Movement; 1] = [ROOK_RAYS];
static BISHOP: [Movement; 1] = [BISHOP_RAYS];
static KNIGHT: [Movement; 1] = [Movement { steps: &KNIGHT_JUMPS, repeat: false }];

/// How a piece kind generates its moves.
pub(crate) enum Pattern {
    /// Union of the listed movements, in order.
    Vectors(&'static [Movement]),
    /// Pawns advance and capture along different squares.
    Pawn,
}

pub(crate) fn pattern(kind: PieceKind) -> Pattern {
    match kind {
        PieceKind::King => Pattern::Vectors(&KING),
        PieceKind::Queen => Pattern::Vectors(&QUEEN),
        PieceKind::Bishop => Pattern::Vectors(&BISHOP),
        PieceKind::Knight => Pattern::Vectors(&KNIGHT),
        PieceKind::Rook => Pattern::Vectors(&ROOK),
        PieceKind::Pawn => Pattern::Pawn,
    }
}
