// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Orthoroute-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Orthoroute and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! A* search over a [`Grid`] with turn-aware costs and a required final heading.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::model::{Direction, GridPoint};

use super::config::{RouterConfig, BASE_STEP_COST, HEURISTIC_WEIGHT, TURN_PENALTY_SCALE};
use super::grid::Grid;

const NO_PARENT: u32 = u32::MAX;

/// One search: leave `start` heading `heading`, enter `target` moving `arrival`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: GridPoint,
    /// Heading the path is assumed to already have at `start`. The first step
    /// pays the turn penalty when it deviates from it.
    pub heading: Direction,
    pub target: GridPoint,
    /// Direction the last step into `target` must travel.
    pub arrival: Direction,
}

/// Search state kept in arrays parallel to the grid.
///
/// Entries are only valid when their generation stamp matches the current
/// search, so starting a new search is O(1) instead of clearing every array.
#[derive(Debug, Default)]
struct SearchScratch {
    gen: u32,
    state_gen: Vec<u32>,
    closed_gen: Vec<u32>,
    g_cost: Vec<u32>,
    parent: Vec<u32>,
    heading: Vec<u8>,
    heap: BinaryHeap<Reverse<(u32, u32, u32, u32)>>,
}

impl SearchScratch {
    fn configure(&mut self, len: usize) {
        if self.state_gen.len() != len {
            self.state_gen = vec![0; len];
            self.closed_gen = vec![0; len];
            self.g_cost = vec![0; len];
            self.parent = vec![NO_PARENT; len];
            self.heading = vec![0; len];
            self.gen = 0;
        }
        let reserve_hint = len.min(4096);
        self.heap.reserve(reserve_hint.saturating_sub(self.heap.len()));
    }

    fn begin(&mut self) -> u32 {
        self.gen = self.gen.wrapping_add(1);
        if self.gen == 0 {
            self.state_gen.fill(0);
            self.closed_gen.fill(0);
            self.gen = 1;
        }
        self.heap.clear();
        self.gen
    }

    fn g(&self, idx: usize, gen: u32) -> u32 {
        if self.state_gen[idx] == gen {
            self.g_cost[idx]
        } else {
            u32::MAX
        }
    }

    fn heading(&self, idx: usize) -> Option<Direction> {
        Direction::from_index(self.heading[idx])
    }

    fn set(&mut self, idx: usize, gen: u32, cost: u32, parent: u32, heading: Direction) {
        self.state_gen[idx] = gen;
        self.g_cost[idx] = cost;
        self.parent[idx] = parent;
        self.heading[idx] = heading.index();
    }

    fn is_closed(&self, idx: usize, gen: u32) -> bool {
        self.closed_gen[idx] == gen
    }

    fn close(&mut self, idx: usize, gen: u32) {
        self.closed_gen[idx] = gen;
    }
}

/// Reusable A* path finder.
///
/// A single finder may serve any number of searches on grids of any size; its
/// arena is resized on demand and otherwise reset by generation.
#[derive(Debug)]
pub struct PathFinder {
    approach_radius: u32,
    scratch: SearchScratch,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(RouterConfig::default().approach_radius)
    }
}

impl PathFinder {
    pub fn new(approach_radius: u32) -> Self {
        Self { approach_radius, scratch: SearchScratch::default() }
    }

    /// Finds a path from `request.start` to `request.target`, both inclusive.
    ///
    /// Returns an empty path when either point lies outside the grid or when no
    /// arrival with the required heading exists. Start and target are exempt
    /// from the walkability test; every other cell on the path is walkable.
    pub fn find_path(&mut self, grid: &Grid, request: &SearchRequest) -> Vec<GridPoint> {
        let (Some(start_idx), Some(target_idx)) =
            (grid.idx_of(request.start), grid.idx_of(request.target))
        else {
            return Vec::new();
        };
        if start_idx == target_idx {
            return vec![request.start];
        }

        let turn_penalty = turn_penalty(request.start.manhattan(request.target));
        let scratch = &mut self.scratch;
        scratch.configure(grid.len());
        let gen = scratch.begin();

        let h0 = heuristic(request.start, request.target);
        scratch.set(start_idx, gen, 0, NO_PARENT, request.heading);
        scratch.heap.push(Reverse((h0, h0, 0, start_idx as u32)));

        let mut seq = 1u32;
        let mut expanded = 0usize;

        while let Some(Reverse((_f, _h, _seq, idx))) = scratch.heap.pop() {
            let idx = idx as usize;
            if scratch.is_closed(idx, gen) {
                continue;
            }
            let Some(heading) = scratch.heading(idx) else {
                continue;
            };

            if idx == target_idx {
                if heading != request.arrival {
                    // Wrong-side arrival: not terminal, keep searching.
                    continue;
                }
                tracing::trace!(expanded, "path found");
                return reconstruct(grid, scratch, start_idx, target_idx);
            }

            scratch.close(idx, gen);
            expanded += 1;

            let current = grid.point_of(idx);
            let g = scratch.g(idx, gen);
            for direction in
                neighbor_order(current, request.target, request.arrival, self.approach_radius)
            {
                let next = current.step(direction, 1);
                let Some(next_idx) = grid.idx_of(next) else {
                    continue;
                };
                if scratch.is_closed(next_idx, gen) {
                    continue;
                }
                if next_idx == target_idx {
                    if direction != request.arrival {
                        continue;
                    }
                } else if !grid.cell_at(next_idx).is_walkable() {
                    continue;
                }

                let turn = if direction == heading { 0 } else { turn_penalty };
                let next_g = g
                    .saturating_add(grid.cell_at(next_idx).cost())
                    .saturating_add(BASE_STEP_COST)
                    .saturating_add(turn);
                if next_g >= scratch.g(next_idx, gen) {
                    continue;
                }

                let h = heuristic(next, request.target);
                scratch.set(next_idx, gen, next_g, idx as u32, direction);
                scratch.heap.push(Reverse((next_g.saturating_add(h), h, seq, next_idx as u32)));
                seq = seq.wrapping_add(1);
            }
        }

        tracing::trace!(expanded, "open list exhausted");
        Vec::new()
    }
}

fn heuristic(from: GridPoint, to: GridPoint) -> u32 {
    from.manhattan(to).saturating_mul(HEURISTIC_WEIGHT)
}

/// Turns matter more on short connections than on long ones.
pub(crate) fn turn_penalty(distance: u32) -> u32 {
    (TURN_PENALTY_SCALE / distance.max(1)).max(1)
}

fn reconstruct(
    grid: &Grid,
    scratch: &SearchScratch,
    start_idx: usize,
    target_idx: usize,
) -> Vec<GridPoint> {
    let mut path = vec![grid.point_of(target_idx)];
    let mut cursor = target_idx;
    while cursor != start_idx {
        let prev = scratch.parent[cursor];
        if prev == NO_PARENT || path.len() > grid.len() {
            return Vec::new();
        }
        cursor = prev as usize;
        path.push(grid.point_of(cursor));
    }
    path.reverse();
    path
}

/// Expansion order for the neighbors of `current`.
///
/// Close to the target the required arrival heading is tried first. Then the
/// headings that reduce the distance to the target, dominant axis first, and
/// finally the remaining ones, preferring vertical detours.
fn neighbor_order(
    current: GridPoint,
    target: GridPoint,
    arrival: Direction,
    approach_radius: u32,
) -> [Direction; 4] {
    let dx = target.x() - current.x();
    let dy = target.y() - current.y();

    let toward_x = match dx.signum() {
        1 => Some(Direction::Right),
        -1 => Some(Direction::Left),
        _ => None,
    };
    let toward_y = match dy.signum() {
        1 => Some(Direction::Down),
        -1 => Some(Direction::Up),
        _ => None,
    };
    let (dominant, secondary) =
        if dx.abs() >= dy.abs() { (toward_x, toward_y) } else { (toward_y, toward_x) };

    let mut out = [Direction::Up; 4];
    let mut len = 0usize;
    let mut push = |direction: Direction| {
        if !out[..len].contains(&direction) {
            out[len] = direction;
            len += 1;
        }
    };

    if current.manhattan(target) <= approach_radius {
        push(arrival);
    }
    for direction in [dominant, secondary].into_iter().flatten() {
        push(direction);
    }
    for direction in [Direction::Down, Direction::Up, Direction::Right, Direction::Left] {
        push(direction);
    }

    debug_assert_eq!(len, 4);
    out
}
