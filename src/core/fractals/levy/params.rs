pub const LEVY_MAX_DEPTH: u32 = 16;
pub const LEVY_DEFAULT_DEPTH: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LevyParams {
    pub depth: u32,
}

impl LevyParams {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.min(LEVY_MAX_DEPTH),
        }
    }

    /// Depth from an optional argument: absent gives 10, negative gives 0.
    #[must_use]
    pub fn from_arg(arg: Option<i64>) -> Self {
        let depth = match arg {
            None => LEVY_DEFAULT_DEPTH,
            Some(value) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
        };

        Self::new(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_capped() {
        assert_eq!(LevyParams::new(20).depth, 16);
        assert_eq!(LevyParams::new(16).depth, 16);
        assert_eq!(LevyParams::new(3).depth, 3);
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(LevyParams::from_arg(None).depth, 10);
        assert_eq!(LevyParams::from_arg(Some(-4)).depth, 0);
        assert_eq!(LevyParams::from_arg(Some(7)).depth, 7);
        assert_eq!(LevyParams::from_arg(Some(i64::MAX)).depth, 16);
    }
}
