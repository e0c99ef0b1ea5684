/// Projection of the carousel state onto the screen: one horizontal offset
/// per slide (in percent) and exactly one active indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselFrame {
    pub offsets: Vec<i32>,
    pub active: usize,
}

/// Receives frames; implemented by the embedding shell.
pub trait CarouselSurface {
    fn apply(&mut self, frame: &CarouselFrame);
}

/// The slide index state machine. `total` is fixed at construction; the index
/// always wraps modulo `total`, and `total == 0` makes every operation inert.
#[derive(Clone, Debug)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Carousel { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + 1) % self.total;
    }

    /// Retreat one slide, wrapping past the start.
    pub fn previous(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jump to `index`. Callers enumerate the same fixed slide set, so the
    /// index is in range by construction.
    pub fn go_to(&mut self, index: usize) {
        if self.total == 0 {
            return;
        }
        debug_assert!(index < self.total, "slide index out of range");
        self.current = index;
    }

    /// Pure projection of the current state; None when there are no slides.
    pub fn frame(&self) -> Option<CarouselFrame> {
        if self.total == 0 {
            return None;
        }
        let offset = -(self.current as i32) * 100;
        Some(CarouselFrame {
            offsets: vec![offset; self.total],
            active: self.current,
        })
    }
}
