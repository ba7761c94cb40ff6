//! Placement pipeline - turns a drop into a validated board mutation
//!
//! Lifecycle of one drop:
//!
//! ```text
//! start ──► resolve target ──► validate ──► apply ──► pop slot ──► Commit ──► Applied
//!   │              │               │
//!   └──────────────┴───────────────┴──► Cancelled(reason)
//! ```
//!
//! Validation is internal; observers only see `Start`, then either `Cancelled`
//! or `Commit` followed by `Applied`. `Commit` is what the line clearer reacts
//! to, so clearing has finished before anyone sees `Applied`.
//!
//! A drop turned away before it is accepted (pipeline busy, or no piece in the
//! slot) has no complete request to announce, so it emits a lone `Cancelled`
//! with no `Start` in front of it.
//!
//! The pipeline resolves one drop at a time. It is `Busy` from the moment a
//! drop is accepted until both notifications have been delivered; a drop that
//! arrives meanwhile (necessarily from inside an observer callback) is
//! cancelled with [`PlacementError::Busy`] and never retried.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use glow_grid_core::{Board, BoardSnapshot, Piece, Shape, SlotBank};

use crate::error::PlacementError;
use crate::geometry::{calculate_position, BoardRect, GridPos, Point};
use crate::observer::Publisher;
use crate::types::PieceKind;

/// Where a drop should land
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DropTarget {
    /// Raw pointer release, resolved through the piece's anchor kind
    Pointer { point: Point, board_rect: BoardRect },
    /// Explicit top-left cell; skips geometry but is still validated
    Cell { row: i32, col: i32 },
}

/// A complete drop attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropRequest {
    pub piece: PieceKind,
    pub slot: usize,
    pub target: DropTarget,
}

/// A piece written to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: PieceKind,
    pub slot: usize,
    pub row: i32,
    pub col: i32,
}

/// Everything the pipeline reports to observers
///
/// Every `Start` is closed by exactly one `Cancelled` or one `Commit` and
/// `Applied` pair. `Cancelled(Busy)` and `Cancelled(MissingPiece)` are raised
/// before a drop is accepted and are never preceded by their own `Start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementEvent {
    /// Nothing has happened yet
    Idle,
    /// A drop was accepted; the pipeline is busy until it closes
    Start(DropRequest),
    /// The board was mutated; the line clearer runs on this
    Commit(Placement),
    /// Emitted after `Commit`, once clearing is done
    Applied(Placement),
    Cancelled(PlacementError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Busy,
}

/// Holds the pipeline busy for its lifetime
struct BusyGuard<'a> {
    state: &'a Cell<PipelineState>,
}

impl<'a> BusyGuard<'a> {
    fn enter(state: &'a Cell<PipelineState>) -> Self {
        state.set(PipelineState::Busy);
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.set(PipelineState::Idle);
    }
}

pub struct PlacementPipeline {
    board: Rc<RefCell<Board>>,
    slots: Rc<RefCell<SlotBank>>,
    events: Rc<Publisher<PlacementEvent>>,
    board_feed: Rc<Publisher<BoardSnapshot>>,
    preview_offset_px: f64,
    state: Cell<PipelineState>,
}

impl PlacementPipeline {
    pub fn new(
        board: Rc<RefCell<Board>>,
        slots: Rc<RefCell<SlotBank>>,
        board_feed: Rc<Publisher<BoardSnapshot>>,
        preview_offset_px: f64,
    ) -> Self {
        Self {
            board,
            slots,
            events: Rc::new(Publisher::new(PlacementEvent::Idle)),
            board_feed,
            preview_offset_px,
            state: Cell::new(PipelineState::Idle),
        }
    }

    pub fn events(&self) -> &Rc<Publisher<PlacementEvent>> {
        &self.events
    }

    pub fn state(&self) -> PipelineState {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state.get() == PipelineState::Busy
    }

    /// Drop `request.piece` as if dragged from `request.slot`
    pub fn start(&self, request: DropRequest) -> Result<Placement, PlacementError> {
        self.process(request.slot, Some(request.piece), request.target)
    }

    /// Drop whatever piece is in `slot`; an empty or missing slot cancels
    pub fn start_from_slot(
        &self,
        slot: usize,
        target: DropTarget,
    ) -> Result<Placement, PlacementError> {
        if self.is_busy() {
            return self.cancel(PlacementError::Busy);
        }
        let piece = self.slots.borrow().get(slot);
        self.process(slot, piece, target)
    }

    fn process(
        &self,
        slot: usize,
        piece: Option<PieceKind>,
        target: DropTarget,
    ) -> Result<Placement, PlacementError> {
        if self.is_busy() {
            return self.cancel(PlacementError::Busy);
        }
        let _guard = BusyGuard::enter(&self.state);

        let Some(piece) = piece else {
            return self.cancel(PlacementError::MissingPiece { slot });
        };
        let request = DropRequest {
            piece,
            slot,
            target,
        };
        self.events.publish(PlacementEvent::Start(request));

        let placement = match self.resolve_and_apply(&request) {
            Ok(placement) => placement,
            Err(err) => return self.cancel(err),
        };
        debug!(
            piece = placement.piece.as_str(),
            row = placement.row,
            col = placement.col,
            slot = placement.slot,
            "piece placed"
        );

        // Borrows end before any publish so observers can read or clear the board.
        self.slots.borrow_mut().pop(slot);
        let snapshot = self.board.borrow().snapshot();
        self.board_feed.publish(snapshot);

        self.events.publish(PlacementEvent::Commit(placement));
        self.events.publish(PlacementEvent::Applied(placement));
        Ok(placement)
    }

    fn cancel(&self, err: PlacementError) -> Result<Placement, PlacementError> {
        debug!(code = err.code(), reason = %err, "placement cancelled");
        self.events.publish(PlacementEvent::Cancelled(err));
        Err(err)
    }

    fn resolve_and_apply(&self, request: &DropRequest) -> Result<Placement, PlacementError> {
        let piece = Piece::of(request.piece);

        let target = match request.target {
            DropTarget::Pointer { point, board_rect } => {
                let board = self.board.borrow();
                calculate_position(
                    &piece,
                    point,
                    board_rect,
                    board.width(),
                    board.height(),
                    self.preview_offset_px,
                )?
            }
            DropTarget::Cell { row, col } => GridPos::new(row, col),
        };

        validate_placement(&self.board.borrow(), &piece.shape, target)?;
        if !apply_placement(&mut self.board.borrow_mut(), &piece, target) {
            return Err(PlacementError::Overlap {
                row: target.row,
                col: target.col,
            });
        }

        Ok(Placement {
            piece: request.piece,
            slot: request.slot,
            row: target.row,
            col: target.col,
        })
    }
}

/// Check that `shape` at `pos` lies on the board and covers only empty cells.
///
/// Bounds are checked again here even for pointer drops whose geometry already
/// passed its own bounds check.
pub fn validate_placement(board: &Board, shape: &Shape, pos: GridPos) -> Result<(), PlacementError> {
    if !board.footprint_in_bounds(shape, pos.row, pos.col) {
        return Err(PlacementError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        });
    }
    if !board.can_place(shape, pos.row, pos.col) {
        return Err(PlacementError::Overlap {
            row: pos.row,
            col: pos.col,
        });
    }
    Ok(())
}

/// Write the piece's identifier into every cell its matrix occupies.
/// Returns false, touching nothing, if any of those cells is taken or off the board.
pub fn apply_placement(board: &mut Board, piece: &Piece, pos: GridPos) -> bool {
    board.occupy(&Board::footprint(&piece.shape, pos.row, pos.col), piece.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_grid_core::get_shape;

    struct Fixture {
        board: Rc<RefCell<Board>>,
        slots: Rc<RefCell<SlotBank>>,
        pipeline: Rc<PlacementPipeline>,
        log: Rc<RefCell<Vec<PlacementEvent>>>,
    }

    fn fixture() -> Fixture {
        let board = Rc::new(RefCell::new(Board::default()));
        let slots = Rc::new(RefCell::new(SlotBank::new(3, 1)));
        let feed = Rc::new(Publisher::new(BoardSnapshot::default()));
        let pipeline = Rc::new(PlacementPipeline::new(
            Rc::clone(&board),
            Rc::clone(&slots),
            feed,
            0.0,
        ));
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = Rc::clone(&log);
        pipeline
            .events()
            .subscribe(move |e: &PlacementEvent| l.borrow_mut().push(*e));
        Fixture {
            board,
            slots,
            pipeline,
            log,
        }
    }

    fn at(piece: PieceKind, slot: usize, row: i32, col: i32) -> DropRequest {
        DropRequest {
            piece,
            slot,
            target: DropTarget::Cell { row, col },
        }
    }

    #[test]
    fn accepted_drop_emits_start_commit_applied() {
        let f = fixture();
        let placement = f.pipeline.start(at(PieceKind::Square, 0, 2, 3)).unwrap();
        assert_eq!((placement.row, placement.col), (2, 3));

        let log = f.log.borrow();
        assert_eq!(log.len(), 3);
        assert!(matches!(log[0], PlacementEvent::Start(_)));
        assert_eq!(log[1], PlacementEvent::Commit(placement));
        assert_eq!(log[2], PlacementEvent::Applied(placement));
        assert_eq!(f.pipeline.state(), PipelineState::Idle);
    }

    #[test]
    fn accepted_drop_writes_only_footprint_and_pops_slot() {
        let f = fixture();
        f.pipeline.start(at(PieceKind::L, 1, 0, 0)).unwrap();

        let board = f.board.borrow();
        assert_eq!(board.occupied_count(), 5);
        for (r, c) in [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(board.get(r, c), Some(Some(PieceKind::L)));
        }
        assert_eq!(board.get(0, 1), Some(None));
        assert_eq!(f.slots.borrow().get(1), None);
    }

    #[test]
    fn overlap_cancels_without_mutation() {
        let f = fixture();
        f.board.borrow_mut().set(1, 1, Some(PieceKind::Single));
        let before_board = f.board.borrow().clone();
        let before_slots = f.slots.borrow().slots().to_vec();

        let err = f.pipeline.start(at(PieceKind::Square, 0, 0, 0)).unwrap_err();
        assert_eq!(err, PlacementError::Overlap { row: 0, col: 0 });
        assert_eq!(*f.board.borrow(), before_board);
        assert_eq!(f.slots.borrow().slots(), before_slots.as_slice());
        assert_eq!(
            f.log.borrow().last(),
            Some(&PlacementEvent::Cancelled(err))
        );
    }

    #[test]
    fn cell_target_out_of_bounds_is_rejected_by_validation() {
        let f = fixture();
        let err = f.pipeline.start(at(PieceKind::Bar5H, 0, 0, 6)).unwrap_err();
        assert_eq!(err, PlacementError::OutOfBounds { row: 0, col: 6 });
        assert_eq!(f.board.borrow().occupied_count(), 0);
    }

    #[test]
    fn pointer_drop_resolves_geometry() {
        let f = fixture();
        let request = DropRequest {
            piece: PieceKind::Single,
            slot: 0,
            target: DropTarget::Pointer {
                point: Point::new(220.0, 100.0),
                board_rect: BoardRect::new(0.0, 0.0, 400.0),
            },
        };
        let placement = f.pipeline.start(request).unwrap();
        assert_eq!((placement.row, placement.col), (2, 5));
    }

    #[test]
    fn empty_slot_cancels_as_missing_piece() {
        let f = fixture();
        f.slots.borrow_mut().set_slots(&[None, Some(PieceKind::Single), None]);

        let err = f
            .pipeline
            .start_from_slot(0, DropTarget::Cell { row: 0, col: 0 })
            .unwrap_err();
        assert_eq!(err, PlacementError::MissingPiece { slot: 0 });
        assert_eq!(*f.log.borrow(), vec![PlacementEvent::Cancelled(err)]);

        let err = f
            .pipeline
            .start_from_slot(7, DropTarget::Cell { row: 0, col: 0 })
            .unwrap_err();
        assert_eq!(err, PlacementError::MissingPiece { slot: 7 });
        assert!(!f
            .log
            .borrow()
            .iter()
            .any(|e| matches!(e, PlacementEvent::Start(_))));
        assert!(!f.pipeline.is_busy());
    }

    #[test]
    fn out_of_range_slot_still_places_and_pop_is_noop() {
        let f = fixture();
        let before_slots = f.slots.borrow().slots().to_vec();
        f.pipeline.start(at(PieceKind::Single, 9, 0, 0)).unwrap();
        assert_eq!(f.slots.borrow().slots(), before_slots.as_slice());
        assert_eq!(f.board.borrow().occupied_count(), 1);
    }

    #[test]
    fn reentrant_start_is_discarded() {
        let f = fixture();
        let nested = Rc::new(RefCell::new(Vec::new()));
        {
            let weak = Rc::downgrade(&f.pipeline);
            let nested = Rc::clone(&nested);
            f.pipeline.events().subscribe(move |e: &PlacementEvent| {
                if let PlacementEvent::Commit(_) = e {
                    if let Some(p) = weak.upgrade() {
                        nested
                            .borrow_mut()
                            .push(p.start(at(PieceKind::Single, 2, 9, 9)));
                    }
                }
            });
        }

        f.pipeline.start(at(PieceKind::Single, 0, 0, 0)).unwrap();

        assert_eq!(*nested.borrow(), vec![Err(PlacementError::Busy)]);
        assert_eq!(f.board.borrow().get(9, 9), Some(None));
        assert_eq!(f.board.borrow().occupied_count(), 1);

        // The nested cancel is delivered after the Commit round, before Applied,
        // and is not announced with a Start of its own.
        let log = f.log.borrow();
        assert_eq!(log.len(), 4);
        assert!(matches!(log[0], PlacementEvent::Start(_)));
        assert!(matches!(log[1], PlacementEvent::Commit(_)));
        assert_eq!(log[2], PlacementEvent::Cancelled(PlacementError::Busy));
        assert!(matches!(log[3], PlacementEvent::Applied(_)));

        // Released afterwards.
        drop(log);
        assert!(f.pipeline.start(at(PieceKind::Single, 1, 9, 9)).is_ok());
    }

    #[test]
    fn validate_and_apply_agree() {
        let mut board = Board::default();
        let piece = Piece::of(PieceKind::SmallL);
        let pos = GridPos::new(8, 8);

        assert!(validate_placement(&board, &piece.shape, pos).is_ok());
        assert!(apply_placement(&mut board, &piece, pos));
        assert_eq!(
            validate_placement(&board, &get_shape(PieceKind::Single), GridPos::new(9, 9)),
            Err(PlacementError::Overlap { row: 9, col: 9 })
        );
        assert_eq!(
            validate_placement(&board, &piece.shape, GridPos::new(9, 0)),
            Err(PlacementError::OutOfBounds { row: 9, col: 0 })
        );
    }
}
