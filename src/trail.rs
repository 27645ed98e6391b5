//! Bounded position history for trailed bodies.

use bevy::prelude::*;
use std::collections::VecDeque;

/// FIFO ring of recent positions, rebuilt into a polyline each frame.
///
/// Capacity is fixed at construction; appending at capacity evicts the
/// oldest point. A buffer is owned by exactly one body and never shared.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<Vec3>,
    max_len: usize,
}

impl TrailBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, evicting the oldest one once at capacity.
    pub fn push(&mut self, point: Vec3) {
        if self.points.len() == self.max_len {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Drop all history, e.g. when a cyclic body leaves its visible window.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Consecutive point pairs, oldest first, for segment drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    /// Rebuild the renderable polyline from the history.
    pub fn polyline(&self) -> Vec<Vec3> {
        self.points.iter().copied().collect()
    }
}
