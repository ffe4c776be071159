use std::cell::Cell;

/// One-shot initialization flag owned by a single controller.
#[derive(Debug, Default)]
pub struct InitGuard {
    claimed: Cell<bool>,
}

impl InitGuard {
    pub const fn new() -> Self {
        Self {
            claimed: Cell::new(false),
        }
    }

    /// True the first time only.
    pub fn claim(&self) -> bool {
        !self.claimed.replace(true)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}
