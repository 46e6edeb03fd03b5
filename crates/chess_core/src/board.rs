use crate::error::ParseError;
use crate::types::*;

pub type Board = [[Option<Piece>; 8]; 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn clear(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drops the right tied to a rook standing on `sq`, if `sq` is a home corner.
    fn clear_rook_corner(&mut self, sq: Square) {
        match (sq.row(), sq.col()) {
            (7, 0) => self.wq = false,
            (7, 7) => self.wk = false,
            (0, 0) => self.bq = false,
            (0, 7) => self.bk = false,
            _ => {}
        }
    }
}

/// Everything needed to generate moves: placement, side to move,
/// castling rights and the en-passant target.
///
/// Cloning is a plain copy of the grid, so an exploratory clone never
/// shares storage with the position it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    pub fn startpos() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, kind));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[7][col] = Some(Piece::new(Color::White, kind));
        }
        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
        }
    }

    /// Parses the placement, side, castling and en-passant fields of a FEN
    /// string. Move counters, when present, are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ParseError::MissingFields(parts.len()));
        }
        let castle_part = parts.get(2).copied().unwrap_or("-");
        let ep_part = parts.get(3).copied().unwrap_or("-");

        let mut board: Board = [[None; 8]; 8];
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseError::RankCount(ranks.len()));
        }

        // FEN lists rank 8 first, which is row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_letter(ch).ok_or(ParseError::BadPiece(ch))?;
                    if col >= 8 {
                        return Err(ParseError::BadRank {
                            rank: row,
                            reason: "too many files",
                        });
                    }
                    board[row][col] = Some(pc);
                    col += 1;
                }
                if col > 8 {
                    return Err(ParseError::BadRank {
                        rank: row,
                        reason: "too many files",
                    });
                }
            }
            if col != 8 {
                return Err(ParseError::BadRank {
                    rank: row,
                    reason: "not enough files",
                });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::BadSide(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(ParseError::BadCastling(c)),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            Some(Square::from_coord(ep_part).ok_or_else(|| ParseError::BadSquare(ep_part.to_string()))?)
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
        })
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row() as usize][sq.col() as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        Square::all().find(|&s| self.piece_at(s) == Some(Piece::new(c, PieceKind::King)))
    }

    /// Squares holding a piece of color `c`, in board order.
    pub fn squares_of(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&s| matches!(self.piece_at(s), Some(pc) if pc.color == c))
    }

    /// Applies `mv` in place and passes the turn.
    ///
    /// The move's flags are trusted: castling relocates the rook, en passant
    /// removes the pawn beside the destination, and a pawn reaching the far
    /// rank becomes `mv.promotion` (queen when absent).
    pub fn apply(&mut self, mv: Move) {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).unwrap_or(mv.piece);
        let captured = self.piece_at(to);

        self.en_passant = None;

        if mv.is_en_passant
            && let Some(cs) = Square::new(from.row(), to.col())
        {
            self.set_piece(cs, None);
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if moved.kind == PieceKind::Pawn && to.row() == moved.color.other().home_row() {
            let promo = mv.promotion.unwrap_or(PieceKind::Queen);
            self.set_piece(to, Some(Piece::new(moved.color, promo)));
        }

        if mv.is_castle && moved.kind == PieceKind::King {
            let row = from.row();
            let (rook_from, rook_to) = if to.col() == 6 { (7, 5) } else { (0, 3) };
            if let (Some(rf), Some(rt)) = (Square::new(row, rook_from), Square::new(row, rook_to)) {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
            }
        }

        if moved.kind == PieceKind::King {
            self.castling.clear(moved.color);
        }
        if moved.kind == PieceKind::Rook {
            self.castling.clear_rook_corner(from);
        }
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            self.castling.clear_rook_corner(to);
        }

        if moved.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            self.en_passant = Square::new((from.row() + to.row()) / 2, from.col());
        }

        self.side_to_move = self.side_to_move.other();
    }

    /// Returns a copy of the position with `mv` applied, leaving `self` untouched.
    pub fn after(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.apply(mv);
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
