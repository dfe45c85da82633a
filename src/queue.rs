//! Fixed-length preview of upcoming pieces

use crate::bag::Bag;
use crate::geometry::Shape;
use std::collections::VecDeque;

/// Number of upcoming pieces shown to the player
pub const LOOKAHEAD_LEN: usize = 3;

/// The next [`LOOKAHEAD_LEN`] shapes, always kept full from the bag
#[derive(Debug, Clone)]
pub struct Lookahead {
    shapes: VecDeque<Shape>,
}

impl Lookahead {
    /// Fill a fresh preview from the bag
    pub fn filled(bag: &mut Bag) -> Self {
        let shapes = (0..LOOKAHEAD_LEN).map(|_| bag.draw()).collect();
        Self { shapes }
    }

    /// Take the front shape and top the preview back up from the bag
    pub fn pop_and_refill(&mut self, bag: &mut Bag) -> Shape {
        let next = bag.draw();
        self.shapes.push_back(next);
        // Length was LOOKAHEAD_LEN + 1 > 0 before this pop
        self.shapes.pop_front().unwrap_or(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn front(&self) -> Option<&Shape> {
        self.shapes.front()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
