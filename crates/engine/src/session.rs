//! Session - one game's state and the reactive chain wired around it
//!
//! ```text
//! drop ──► PlacementPipeline ──Commit──► LineClearer ──ClearResult──► ScoreAccumulator
//!               │                             │                              │
//!               └──── board snapshots ◄───────┘                        score feed
//! ```
//!
//! The board and slot bank are created here and handed to the components that
//! write them. Everything else reads through snapshots and feeds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use glow_grid_core::{get_shape, Board, BoardSnapshot, ClearResult, SlotBank};

use crate::config::GameConfig;
use crate::error::{ConfigError, PlacementError};
use crate::geometry::{BoardRect, Point};
use crate::line_clear::LineClearer;
use crate::observer::Publisher;
use crate::placement::{DropRequest, DropTarget, Placement, PlacementEvent, PlacementPipeline};
use crate::score::ScoreAccumulator;
use crate::types::PieceKind;

/// Serializable view of a whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub slots: Vec<Option<PieceKind>>,
    pub score: u64,
    pub lines: u64,
    pub placements: u64,
    pub game_over: bool,
}

pub struct Session {
    config: GameConfig,
    board: Rc<RefCell<Board>>,
    slots: Rc<RefCell<SlotBank>>,
    board_feed: Rc<Publisher<BoardSnapshot>>,
    pipeline: PlacementPipeline,
    clearer: Rc<LineClearer>,
    score: Rc<ScoreAccumulator>,
    lines: Rc<Cell<u64>>,
    placements: Rc<Cell<u64>>,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        // validate() bounds both sides to MAX_BOARD_DIM, so they fit in u8.
        let width = config.board_width as u8;
        let height = config.board_height as u8;

        let board = Rc::new(RefCell::new(Board::new(width, height)));
        let slots = Rc::new(RefCell::new(SlotBank::new(config.slot_count, config.seed)));
        let board_feed = Rc::new(Publisher::new(board.borrow().snapshot()));

        let pipeline = PlacementPipeline::new(
            Rc::clone(&board),
            Rc::clone(&slots),
            Rc::clone(&board_feed),
            config.preview_offset_px,
        );
        let clearer = LineClearer::attach(
            pipeline.events(),
            Rc::clone(&board),
            Rc::clone(&board_feed),
            width,
            height,
        );
        let score = ScoreAccumulator::attach(clearer.cleared());

        let lines = Rc::new(Cell::new(0u64));
        {
            let lines = Rc::clone(&lines);
            clearer.cleared().subscribe(move |result: &ClearResult| {
                lines.set(lines.get() + result.lines() as u64);
            });
        }
        let placements = Rc::new(Cell::new(0u64));
        {
            let placements = Rc::clone(&placements);
            pipeline.events().subscribe(move |event: &PlacementEvent| {
                if let PlacementEvent::Applied(_) = event {
                    placements.set(placements.get() + 1);
                }
            });
        }

        debug!(width, height, slots = config.slot_count, seed = config.seed, "session created");

        Ok(Self {
            config,
            board,
            slots,
            board_feed,
            pipeline,
            clearer,
            score,
            lines,
            placements,
        })
    }

    /// Drop the piece in `slot` where the pointer was released
    pub fn drop_piece(
        &self,
        slot: usize,
        point: Point,
        board_rect: BoardRect,
    ) -> Result<Placement, PlacementError> {
        self.pipeline
            .start_from_slot(slot, DropTarget::Pointer { point, board_rect })
    }

    /// Place the piece in `slot` with its top-left at (row, col)
    pub fn place_at(&self, slot: usize, row: i32, col: i32) -> Result<Placement, PlacementError> {
        self.pipeline
            .start_from_slot(slot, DropTarget::Cell { row, col })
    }

    /// Submit a fully specified request (the piece need not match the slot's)
    pub fn submit(&self, request: DropRequest) -> Result<Placement, PlacementError> {
        self.pipeline.start(request)
    }

    /// Empty the board, refill every slot and zero the score and counters.
    /// Returns false, changing nothing, while a placement is in flight.
    pub fn restart(&self) -> bool {
        if self.pipeline.is_busy() {
            return false;
        }
        self.board.borrow_mut().clear();
        self.slots.borrow_mut().refill();
        self.score.reset();
        self.lines.set(0);
        self.placements.set(0);

        let snapshot = self.board.borrow().snapshot();
        self.board_feed.publish(snapshot);
        debug!("session restarted");
        true
    }

    /// True when no piece waiting in a slot fits anywhere on the board
    pub fn is_game_over(&self) -> bool {
        let board = self.board.borrow();
        let slots = self.slots.borrow();
        let fits = slots
            .pending()
            .any(|(_, kind)| board.fits_anywhere(&get_shape(kind)));
        !fits
    }

    /// First slot (in order) whose piece fits, with its first fitting cell in row-major order
    pub fn first_fit(&self) -> Option<(usize, i32, i32)> {
        let board = self.board.borrow();
        let slots = self.slots.borrow();
        let found = slots.pending().find_map(|(slot, kind)| {
            board
                .first_fit(&get_shape(kind))
                .map(|(row, col)| (slot, row, col))
        });
        found
    }

    pub fn board(&self) -> BoardSnapshot {
        self.board.borrow().snapshot()
    }

    pub fn slots(&self) -> Vec<Option<PieceKind>> {
        self.slots.borrow().slots().to_vec()
    }

    /// Overwrite slot contents (scripted scenarios)
    pub fn set_slots(&self, pieces: &[Option<PieceKind>]) {
        self.slots.borrow_mut().set_slots(pieces);
    }

    pub fn score(&self) -> u64 {
        self.score.total()
    }

    /// Total lines cleared this session
    pub fn lines(&self) -> u64 {
        self.lines.get()
    }

    /// Successful placements this session
    pub fn placements(&self) -> u64 {
        self.placements.get()
    }

    pub fn is_busy(&self) -> bool {
        self.pipeline.is_busy()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board(),
            slots: self.slots(),
            score: self.score(),
            lines: self.lines(),
            placements: self.placements(),
            game_over: self.is_game_over(),
        }
    }

    pub fn events(&self) -> &Rc<Publisher<PlacementEvent>> {
        self.pipeline.events()
    }

    pub fn cleared(&self) -> &Rc<Publisher<ClearResult>> {
        self.clearer.cleared()
    }

    pub fn score_feed(&self) -> &Rc<Publisher<u64>> {
        self.score.feed()
    }

    pub fn board_feed(&self) -> &Rc<Publisher<BoardSnapshot>> {
        &self.board_feed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
