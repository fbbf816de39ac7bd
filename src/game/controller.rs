//! Game controller implementation.

use log::{debug, info};

use super::record::{GameState, MoveRecord};
use crate::board::{
    translate, Board, Color, MoveError, Piece, RejectReason, Snapshot, Square, SquareSet,
};

/// One atomic chess game: the board, whose turn it is, and the result.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
    history: Vec<MoveRecord>,
    graveyard: Vec<Piece>,
}

impl Game {
    /// A new game from the standard layout, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// A game starting from an arbitrary layout.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            state: GameState::InProgress,
            history: Vec::new(),
            graveyard: Vec::new(),
        }
    }

    /// Current game status
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Side to move
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only picture of the board for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Moves played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces destroyed so far, in the order they left the board
    #[must_use]
    pub fn graveyard(&self) -> &[Piece] {
        &self.graveyard
    }

    /// Destinations of the piece on `square`, whichever side it belongs to.
    #[must_use]
    pub fn destinations(&self, square: Square) -> SquareSet {
        self.board.destinations(square)
    }

    /// Every move the side to move can play; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        if self.state.is_over() {
            return Vec::new();
        }
        self.board.generate_moves(self.turn)
    }

    /// Play a move given in algebraic notation ("e2", "e4").
    ///
    /// Returns `false`, leaving the game untouched, if the move is refused.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like `make_move`, but reports why a move was refused.
    pub fn try_move(&mut self, from: &str, to: &str) -> Result<&MoveRecord, MoveError> {
        self.ensure_in_progress()?;
        let from = translate(from)?;
        let to = translate(to)?;
        self.play(from, to)
    }

    /// Play a move between two already-translated squares.
    pub fn play(&mut self, from: Square, to: Square) -> Result<&MoveRecord, MoveError> {
        self.ensure_in_progress()?;
        let piece = self.validate(from, to).inspect_err(|e| {
            debug!("{} move {from}-{to} rejected: {e}", self.turn);
        })?;

        let explosion = if self.board.is_empty(to) {
            let moved = self.board.relocate(from, to);
            debug_assert!(moved, "validated move {from}-{to} failed to relocate");
            None
        } else {
            let captured = self.board.remove(to);
            let moved = self.board.relocate(from, to);
            debug_assert!(moved, "validated capture {from}-{to} failed to relocate");
            let explosion = self.board.detonate(to, captured);
            self.graveyard.extend_from_slice(explosion.destroyed());
            Some(explosion)
        };

        if let Some(loser) = explosion.as_ref().and_then(|e| e.king_casualty()) {
            self.state = GameState::won_by(loser.opponent());
            info!("{loser} king destroyed on {to}: {}", self.state);
        }

        debug!(
            "{} {} {from}-{to}{}",
            piece.color(),
            piece.kind(),
            if explosion.is_some() { " (capture)" } else { "" }
        );

        self.history.push(MoveRecord {
            color: piece.color(),
            kind: piece.kind(),
            from,
            to,
            explosion,
        });
        self.turn = self.turn.opponent();

        debug_assert!(self.board.is_consistent());
        Ok(&self.history[self.history.len() - 1])
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyOver(self.state));
        }
        Ok(())
    }

    /// Gates 3-5: a piece on `from`, owned by the side to move, able to reach `to`.
    fn validate(&self, from: Square, to: Square) -> Result<Piece, RejectReason> {
        let piece = *self
            .board
            .piece_at(from)
            .ok_or(RejectReason::EmptySource { square: from })?;
        if piece.color() != self.turn {
            return Err(RejectReason::WrongTurn {
                square: from,
                expected: self.turn,
            });
        }
        if !piece.generate_moves(&self.board).contains(to) {
            return Err(RejectReason::Unreachable { from, to });
        }
        Ok(piece)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_move() {
        let mut game = Game::new();
        assert!(game.make_move("e2", "e4"));
        assert_eq!(game.turn(), Color::Black);
        let pawn = game.board().piece_at(sq("e4")).unwrap();
        assert!(pawn.has_moved());
        assert_eq!(pawn.position(), sq("e4"));
        assert!(game.board().is_empty(sq("e2")));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_reasons() {
        let mut game = Game::new();
        assert!(matches!(
            game.try_move("e9", "e4"),
            Err(MoveError::InvalidSquareFormat(_))
        ));
        assert!(matches!(
            game.try_move("e4", "e5"),
            Err(MoveError::IllegalMove(RejectReason::EmptySource { .. }))
        ));
        assert!(matches!(
            game.try_move("e7", "e5"),
            Err(MoveError::IllegalMove(RejectReason::WrongTurn {
                expected: Color::White,
                ..
            }))
        ));
        assert!(matches!(
            game.try_move("e2", "e5"),
            Err(MoveError::IllegalMove(RejectReason::Unreachable { .. }))
        ));
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_capture_explodes_and_wins() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("d1"), Color::White, PieceKind::Queen)
            .piece(sq("d7"), Color::Black, PieceKind::Pawn)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build();
        let mut game = Game::from_board(board, Color::White);

        let record = game.try_move("d1", "d7").unwrap().clone();
        assert!(record.is_capture());
        // d7 pawn, queen, and the e8 king next to it
        assert_eq!(record.explosion.as_ref().unwrap().destroyed().len(), 3);
        assert_eq!(game.state(), GameState::WhiteWon);
        assert_eq!(game.graveyard().len(), 3);
        assert!(game.graveyard().iter().all(|p| !p.is_alive()));
        assert!(game.legal_moves().is_empty());
        assert!(matches!(
            game.try_move("e1", "e2"),
            Err(MoveError::GameAlreadyOver(GameState::WhiteWon))
        ));
    }

    #[test]
    fn test_own_king_in_blast_loses() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e2"), Color::White, PieceKind::Knight)
            .piece(sq("g3"), Color::Black, PieceKind::Bishop)
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .build();
        let mut game = Game::from_board(board, Color::White);
        // Nxg3 is outside e1's ring, so the white king is safe
        assert!(game.make_move("e2", "g3"));
        assert_eq!(game.state(), GameState::InProgress);

        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("d1"), Color::White, PieceKind::Rook)
            .piece(sq("d2"), Color::Black, PieceKind::Bishop)
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .build();
        let mut game = Game::from_board(board, Color::White);
        // Rxd2 detonates next to e1
        assert!(game.make_move("d1", "d2"));
        assert_eq!(game.state(), GameState::BlackWon);
        assert_eq!(game.board().find_king(Color::White), None);
    }

    #[test]
    fn test_capturer_lands_before_blast() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("b2"), Color::White, PieceKind::Bishop)
            .piece(sq("f6"), Color::Black, PieceKind::Knight)
            .piece(sq("a8"), Color::Black, PieceKind::King)
            .build();
        let mut game = Game::from_board(board, Color::White);
        assert!(game.make_move("b2", "f6"));

        // The bishop reached f6 and moved before it was destroyed there
        let bishop = game.graveyard()[1];
        assert_eq!(bishop.kind(), PieceKind::Bishop);
        assert_eq!(bishop.position(), sq("f6"));
        assert!(bishop.has_moved());
        assert!(game.board().is_empty(sq("b2")));
        assert!(game.board().is_empty(sq("f6")));
        assert!(game.board().is_consistent());
    }

    #[test]
    fn test_king_may_capture() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e2"), Color::Black, PieceKind::Pawn)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .build();
        let mut game = Game::from_board(board, Color::White);
        assert!(game.destinations(sq("e1")).contains(sq("e2")));
        assert!(game.make_move("e1", "e2"));
        // The capturing king dies in its own blast
        assert_eq!(game.state(), GameState::BlackWon);
    }
}
