// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grid geometry: tile coordinates, movement capabilities and paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tile coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours, in N, S, E, W order.
    pub fn neighbours(self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x, self.y + 1),
            Point::new(self.x + 1, self.y),
            Point::new(self.x - 1, self.y),
        ]
    }

    /// Manhattan distance, saturating at `u32::MAX`.
    pub fn distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// True when `other` shares an edge with this tile.
    pub fn is_adjacent(self, other: Point) -> bool {
        self.distance(other) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement qualifier governing which tiles a path may cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Walk,
    Fly,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Walk => write!(f, "walk"),
            Capability::Fly => write!(f, "fly"),
        }
    }
}

/// A route found by the path-search service.
///
/// `points` runs from the start tile to the goal tile inclusive. `cost` is
/// the total traversal cost; lower is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
    cost: u32,
}

impl Path {
    pub fn new(points: Vec<Point>, cost: u32) -> Self {
        Self { points, cost }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Number of tiles to enter after the start tile.
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "geom_tests.rs"]
mod tests;
