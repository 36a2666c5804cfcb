/// Carousel position over a listing's images. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: usize,
}

impl Gallery {
    /// Out-of-range indices are clamped to the first image.
    pub fn new(len: usize, requested: Option<usize>) -> Self {
        let current = match requested {
            Some(i) if i < len => i,
            _ => 0,
        };
        Self { len, current }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + 1) % self.len
        }
    }

    pub fn previous(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        }
    }
}
