use std::error::Error;
use std::fmt::Display;
use std::ops::Range;

/// Inclusive range of character offsets into a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: u32,
    stop:  u32,
}

impl Span {
    #[must_use]
    #[inline]
    pub const fn new(start: u32, stop: u32) -> Self {
        if stop < start {
            Self {
                start: stop,
                stop:  start,
            }
        } else {
            Self { start, stop }
        }
    }

    /// Span covering the single character at `offset`.
    #[must_use]
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Number of characters covered, always at least one.
    #[must_use]
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> u32 {
        self.stop - self.start + 1
    }

    #[must_use]
    #[inline]
    pub const fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    #[inline]
    pub const fn stop(self) -> u32 {
        self.stop
    }

    /// Half-open byte range of `src` covered by this span.
    ///
    /// Returns `None` if the span reaches past the end of `src`.
    #[must_use]
    pub fn byte_range(self, src: &str) -> Option<Range<usize>> {
        let mut offsets = src
            .char_indices()
            .map(|(byte, c)| (byte, byte + c.len_utf8()))
            .skip(self.start as usize);

        let (lo, mut hi) = offsets.next()?;
        if self.len() > 1 {
            (_, hi) = offsets.nth((self.len() - 2) as usize)?;
        }

        Some(lo..hi)
    }
}

impl From<Span> for Range<usize> {
    fn from(value: Span) -> Self {
        value.start as usize..value.stop as usize + 1
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.stop {
            write!(f, "position {}", self.start)
        } else {
            write!(f, "positions {}..={}", self.start, self.stop)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spand<T> {
    pub kind: T,
    pub span: Span,
}

impl<T: Display> Display for Spand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.kind(), f)
    }
}

impl<T: Error> Error for Spand<T> {}

impl<T> Spand<T> {
    #[inline]
    pub const fn new(kind: T, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub const fn kind(&self) -> &T {
        &self.kind
    }
}
