//! Bounded screen-space history of a body's positions

use std::collections::VecDeque;

/// Number of points kept per body unless configured otherwise
pub const DEFAULT_TRAIL_CAPACITY: usize = 200;

/// FIFO of integer screen points, oldest first.
/// Pushing past capacity evicts the oldest point.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<(i32, i32)>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: (i32, i32)) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &(i32, i32)> {
        self.points.iter()
    }

    /// Open polyline to draw; a trail of 0 or 1 points draws nothing
    pub fn polyline(&self) -> Vec<(i32, i32)> {
        if self.points.len() > 1 {
            self.points.iter().copied().collect()
        } else {
            Vec::new()
        }
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}
