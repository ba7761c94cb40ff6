//! Score accumulator - running total fed by clear results

use std::rc::Rc;

use glow_grid_core::{calculate_line_score, ClearResult};

use crate::observer::Publisher;

pub struct ScoreAccumulator {
    total: Rc<Publisher<u64>>,
}

impl ScoreAccumulator {
    /// Subscribe an accumulator, starting at 0, to clear results
    pub fn attach(cleared: &Publisher<ClearResult>) -> Rc<Self> {
        let score = Rc::new(Self {
            total: Rc::new(Publisher::new(0)),
        });
        let handler = Rc::clone(&score);
        cleared.subscribe(move |result: &ClearResult| handler.record(result.lines()));
        score
    }

    /// Add the award for one commit that cleared `lines` lines. Zero is ignored.
    pub fn record(&self, lines: u32) {
        if lines == 0 {
            return;
        }
        let total = self.total.current().saturating_add(calculate_line_score(lines));
        self.total.publish(total);
    }

    pub fn reset(&self) {
        self.total.publish(0);
    }

    pub fn total(&self) -> u64 {
        self.total.current()
    }

    /// Running total, published on every change
    pub fn feed(&self) -> &Rc<Publisher<u64>> {
        &self.total
    }
}
