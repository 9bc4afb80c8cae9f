// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rectangular tile grid.

use super::TileMap;
use colony_core::{Capability, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Rock,
    Water,
}

impl Tile {
    fn passable(self, capability: Capability) -> bool {
        match (self, capability) {
            (Tile::Floor, _) => true,
            (Tile::Water, Capability::Fly) => true,
            (Tile::Water, Capability::Walk) => false,
            (Tile::Rock, _) => false,
        }
    }
}

/// In-memory tile map. Anything outside the grid is solid.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl GridMap {
    /// A `width` by `height` grid of `fill`. Negative sizes are empty, and
    /// so is a grid whose tile count does not fit an `i32`.
    pub fn new(width: i32, height: i32, fill: Tile) -> Self {
        let (width, height) = match width.max(0).checked_mul(height.max(0)) {
            Some(_) => (width.max(0), height.max(0)),
            None => (0, 0),
        };
        let len = usize::try_from(width * height).unwrap_or(0);
        Self {
            width,
            height,
            tiles: vec![fill; len],
        }
    }

    /// Build from rows of `.` (floor), `#` (rock) and `~` (water).
    /// Unknown characters are rock. Short rows are padded with rock.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(width, height, Tile::Rock);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let tile = match c {
                    '.' => Tile::Floor,
                    '~' => Tile::Water,
                    _ => Tile::Rock,
                };
                grid.set(Point::new(x as i32, y as i32), tile);
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile(&self, at: Point) -> Option<Tile> {
        self.index(at).map(|i| self.tiles[i])
    }

    pub fn set(&mut self, at: Point, tile: Tile) {
        if let Some(i) = self.index(at) {
            self.tiles[i] = tile;
        }
    }

    fn index(&self, at: Point) -> Option<usize> {
        if at.x < 0 || at.y < 0 || at.x >= self.width || at.y >= self.height {
            return None;
        }
        usize::try_from(at.y * self.width + at.x).ok()
    }
}

impl TileMap for GridMap {
    fn is_walkable(&self, at: Point, capability: Capability, clearance: u8) -> bool {
        let size = i32::from(clearance.max(1));
        (0..size).all(|dy| {
            (0..size).all(|dx| {
                self.tile(Point::new(at.x + dx, at.y + dy))
                    .is_some_and(|t| t.passable(capability))
            })
        })
    }

    fn is_dug_out(&self, at: Point) -> bool {
        matches!(self.tile(at), Some(Tile::Floor | Tile::Water))
    }

    fn dig_out(&mut self, at: Point) {
        if self.tile(at) == Some(Tile::Rock) {
            self.set(at, Tile::Floor);
        }
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
