// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Four-neighbour A* over a [`TileMap`].

use super::{PathFinder, PathRequest};
use crate::world::TileMap;
use colony_core::{Path, Point};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Cost of entering one orthogonal tile.
pub const STEP_COST: u32 = 10;

#[derive(Debug, PartialEq, Eq)]
struct Node {
    at: Point,
    f_cost: u32,
}

// Reversed so the BinaryHeap pops the cheapest node first. Ties break on the
// point so the search is deterministic.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.at.cmp(&self.at))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reference path finder. The goal must itself be walkable; the start tile
/// is where the agent already stands and is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPathFinder;

impl PathFinder for GridPathFinder {
    fn find_path(&self, map: &dyn TileMap, request: &PathRequest) -> Option<Path> {
        let PathRequest {
            start,
            goal,
            clearance,
            capability,
        } = *request;

        if start == goal {
            return Some(Path::new(vec![start], 0));
        }
        if !map.is_walkable(goal, capability, clearance) {
            return None;
        }

        let heuristic = |p: Point| p.distance(goal) * STEP_COST;
        let mut open = BinaryHeap::new();
        let mut came_from: HashMap<Point, Point> = HashMap::new();
        let mut g_score: HashMap<Point, u32> = HashMap::new();

        g_score.insert(start, 0);
        open.push(Node {
            at: start,
            f_cost: heuristic(start),
        });

        while let Some(Node { at, .. }) = open.pop() {
            let g = g_score.get(&at).copied().unwrap_or(u32::MAX);
            if at == goal {
                let mut points = vec![goal];
                let mut cursor = goal;
                while let Some(&prev) = came_from.get(&cursor) {
                    points.push(prev);
                    cursor = prev;
                }
                points.reverse();
                return Some(Path::new(points, g));
            }

            for next in at.neighbours() {
                if !map.is_walkable(next, capability, clearance) {
                    continue;
                }
                let tentative = g.saturating_add(STEP_COST);
                if tentative < g_score.get(&next).copied().unwrap_or(u32::MAX) {
                    came_from.insert(next, at);
                    g_score.insert(next, tentative);
                    open.push(Node {
                        at: next,
                        f_cost: tentative + heuristic(next),
                    });
                }
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "astar_tests.rs"]
mod tests;
