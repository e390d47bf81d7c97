use crate::repr::Repr;

// === Configuration === //

/// Widest window the prober will accept: the width must fit in an `i32`.
pub const MAX_WINDOW_WIDTH: i128 = i32::MAX as i128;

/// Magnitude of the default search window. Override at build time by setting
/// `ENUM_REFLECT_MAX_SEARCH_DEPTH` (e.g. in the `[env]` table of `.cargo/config.toml`).
pub const MAX_SEARCH_DEPTH: i128 = match option_env!("ENUM_REFLECT_MAX_SEARCH_DEPTH") {
    Some(text) => parse_depth(text),
    None => 128,
};

const _: () = {
    assert!(
        MAX_SEARCH_DEPTH > 0,
        "ENUM_REFLECT_MAX_SEARCH_DEPTH must be positive and greater than zero"
    );
    assert!(
        MAX_SEARCH_DEPTH % 8 == 0,
        "ENUM_REFLECT_MAX_SEARCH_DEPTH must be a multiple of 8"
    );
    assert!(
        MAX_SEARCH_DEPTH * 2 <= MAX_WINDOW_WIDTH,
        "ENUM_REFLECT_MAX_SEARCH_DEPTH must be at most half of MAX_WINDOW_WIDTH"
    );
};

const fn parse_depth(text: &str) -> i128 {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "ENUM_REFLECT_MAX_SEARCH_DEPTH is empty");

    let mut value = 0i128;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(
            digit.is_ascii_digit(),
            "ENUM_REFLECT_MAX_SEARCH_DEPTH must be a decimal integer"
        );
        value = value * 10 + (digit - b'0') as i128;
        assert!(
            value <= MAX_WINDOW_WIDTH,
            "ENUM_REFLECT_MAX_SEARCH_DEPTH is out of range"
        );
        i += 1;
    }
    value
}

// === Window === //

/// Closed interval `[min, max]` of integers the prober is willing to visit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Window {
    min: i128,
    max: i128,
}

impl Window {
    pub const SIGNED: Self = Self::new(-MAX_SEARCH_DEPTH, MAX_SEARCH_DEPTH);
    pub const UNSIGNED: Self = Self::new(0, MAX_SEARCH_DEPTH);

    /// Panics (a compile error when evaluated in a constant) unless `max - min` is a
    /// positive multiple of 8 no wider than [`MAX_WINDOW_WIDTH`].
    pub const fn new(min: i128, max: i128) -> Self {
        assert!(min < max, "search window must satisfy min < max");
        let width = match max.checked_sub(min) {
            Some(width) => width,
            None => panic!("search window is wider than MAX_WINDOW_WIDTH"),
        };
        assert!(
            width % 8 == 0,
            "search window width must be a multiple of 8"
        );
        assert!(
            width <= MAX_WINDOW_WIDTH,
            "search window is wider than MAX_WINDOW_WIDTH"
        );
        Self { min, max }
    }

    pub const fn for_signedness(signed: bool) -> Self {
        if signed {
            Self::SIGNED
        } else {
            Self::UNSIGNED
        }
    }

    pub const fn of<R: Repr>() -> Self {
        Self::for_signedness(R::SIGNED)
    }

    pub const fn min(self) -> i128 {
        self.min
    }

    pub const fn max(self) -> i128 {
        self.max
    }

    pub const fn width(self) -> i128 {
        self.max - self.min
    }

    pub const fn contains(self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}

// === Bounds === //

/// Range of a representation, widened to `i128`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bounds {
    min: i128,
    max: i128,
}

impl Bounds {
    pub const fn of<R: Repr>() -> Self {
        Self {
            min: R::MIN,
            max: R::MAX,
        }
    }

    pub const fn min(self) -> i128 {
        self.min
    }

    pub const fn max(self) -> i128 {
        self.max
    }

    pub const fn contains(self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_windows_follow_signedness() {
        assert_eq!(Window::of::<i32>(), Window::SIGNED);
        assert_eq!(Window::of::<u16>(), Window::UNSIGNED);
        assert_eq!(Window::SIGNED.min(), -MAX_SEARCH_DEPTH);
        assert_eq!(Window::UNSIGNED.min(), 0);
        assert_eq!(Window::SIGNED.width() % 8, 0);
    }

    #[test]
    fn window_is_inclusive() {
        let window = Window::new(100, 300);
        assert!(window.contains(100));
        assert!(window.contains(300));
        assert!(!window.contains(99));
        assert!(!window.contains(301));
    }

    #[test]
    #[should_panic(expected = "multiple of 8")]
    fn ragged_window_is_rejected() {
        Window::new(0, 12);
    }

    #[test]
    #[should_panic(expected = "min < max")]
    fn empty_window_is_rejected() {
        Window::new(5, 5);
    }

    #[test]
    fn wide_windows_are_accepted() {
        let window = Window::new(0, 2048);
        assert_eq!(window.width(), 2048);
        assert!(window.contains(2048));

        let widest = Window::new(0, MAX_WINDOW_WIDTH - 7);
        assert_eq!(widest.width(), MAX_WINDOW_WIDTH - 7);
    }

    #[test]
    #[should_panic(expected = "wider than MAX_WINDOW_WIDTH")]
    fn window_past_i32_width_is_rejected() {
        Window::new(0, 1 << 31);
    }

    #[test]
    #[should_panic(expected = "wider than MAX_WINDOW_WIDTH")]
    fn overflowing_window_is_rejected() {
        Window::new(i128::MIN, i128::MAX - 7);
    }

    #[test]
    fn depth_parses_decimal() {
        assert_eq!(parse_depth("256"), 256);
        assert_eq!(parse_depth("8"), 8);
        assert_eq!(parse_depth("4096"), 4096);
    }

    #[test]
    fn bounds_track_representation() {
        let bounds = Bounds::of::<u8>();
        assert!(bounds.contains(255));
        assert!(!bounds.contains(-1));
        assert!(!bounds.contains(256));
    }
}
