//! Line clearer - reacts to `Commit` by clearing full rows and columns
//!
//! Full rows and full columns are detected from the same board state and
//! cleared in one pass, so an intersection cell is reset once while both of
//! its lines are counted. A result is published for every commit, including
//! commits that cleared nothing.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use glow_grid_core::{Board, BoardSnapshot, ClearResult};

use crate::observer::Publisher;
use crate::placement::PlacementEvent;

pub struct LineClearer {
    board: Rc<RefCell<Board>>,
    board_feed: Rc<Publisher<BoardSnapshot>>,
    cleared: Rc<Publisher<ClearResult>>,
    width: u8,
    height: u8,
}

impl LineClearer {
    /// Subscribe a clearer to `events`. `width`/`height` are the configured
    /// board dimensions the clearer expects to find.
    pub fn attach(
        events: &Publisher<PlacementEvent>,
        board: Rc<RefCell<Board>>,
        board_feed: Rc<Publisher<BoardSnapshot>>,
        width: u8,
        height: u8,
    ) -> Rc<Self> {
        let clearer = Rc::new(Self {
            board,
            board_feed,
            cleared: Rc::new(Publisher::new(ClearResult::default())),
            width,
            height,
        });

        let handler = Rc::clone(&clearer);
        events.subscribe(move |event: &PlacementEvent| {
            if let PlacementEvent::Commit(_) = event {
                handler.on_commit();
            }
        });
        clearer
    }

    /// Clear results, one per commit
    pub fn cleared(&self) -> &Rc<Publisher<ClearResult>> {
        &self.cleared
    }

    /// Result of the most recent commit
    pub fn last(&self) -> ClearResult {
        self.cleared.current()
    }

    fn on_commit(&self) {
        let result = match self.board.try_borrow_mut() {
            Ok(mut board) => clear_lines(&mut board, self.width, self.height),
            Err(_) => {
                warn!("board is borrowed elsewhere during commit; skipping line clear");
                ClearResult::default()
            }
        };

        if !result.is_empty() {
            let snapshot = self.board.borrow().snapshot();
            self.board_feed.publish(snapshot);
        }
        self.cleared.publish(result);
    }
}

/// Clear every full row and column of `board`.
///
/// If the board does not have the expected dimensions it is left untouched
/// and nothing is reported.
pub fn clear_lines(board: &mut Board, width: u8, height: u8) -> ClearResult {
    if board.width() != width || board.height() != height {
        warn!(
            expected_width = width,
            expected_height = height,
            width = board.width(),
            height = board.height(),
            "board dimensions do not match configuration; skipping line clear"
        );
        return ClearResult::default();
    }

    let result = board.clear_full_lines();
    if !result.is_empty() {
        debug!(
            rows = ?result.rows.as_slice(),
            cols = ?result.cols.as_slice(),
            lines = result.lines(),
            "lines cleared"
        );
    }
    result
}
