//! Slide selection for the testimonial carousel

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Carousel positioned on `active`, or on the first slide when out of range
    pub fn at(len: usize, active: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.go_to(active);
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = if self.active == 0 { self.len - 1 } else { self.active - 1 };
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    pub fn next_index(&self) -> usize {
        let mut c = *self;
        c.next();
        c.active
    }

    pub fn prev_index(&self) -> usize {
        let mut c = *self;
        c.prev();
        c.active
    }

    /// One `(index, is_active)` pair per slide indicator
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.active))
    }
}
