use crate::core::data::viewport::Viewport;

/// Drops pointer updates that stay within a tenth of the viewport width of
/// the last accepted position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PointerDamper {
    last_accepted_x: i32,
}

impl PointerDamper {
    #[must_use]
    pub fn last_accepted_x(&self) -> i32 {
        self.last_accepted_x
    }

    /// Records and accepts `x` when it is far enough from the last accepted x.
    pub fn accept(&mut self, x: i32, viewport: Viewport) -> bool {
        let gap = i64::from(viewport.width / 10);

        if (i64::from(x) - i64::from(self.last_accepted_x)).abs() > gap {
            self.last_accepted_x = x;
            true
        } else {
            false
        }
    }
}
