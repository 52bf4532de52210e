//! Is there a way from start to target
//!
//! Undecided cells count as passable: a maze is solvable as long as the
//! cells decided so far leave some way open. The start cell itself is never
//! inspected, only the cells entered from it.

use std::collections::VecDeque;

use crate::{Maze, Point};

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Up, down, left and right neighbours of `point` that lie inside the maze
pub fn neighbors(maze: &Maze, point: Point) -> impl Iterator<Item = Point> + '_ {
    DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
        let x = point.x.checked_add_signed(dx)?;
        let y = point.y.checked_add_signed(dy)?;
        let next = Point { x, y };
        maze.contains(next).then_some(next)
    })
}

/// Depth-first search from start towards target
///
/// Stops as soon as the target is entered.
pub fn is_solvable(maze: &Maze) -> bool {
    let (start, target) = (maze.start(), maze.target());
    if start == target {
        return true;
    }

    let mut visited = vec![false; maze.cells().len()];
    visited[maze.offset_unchecked(start)] = true;
    let mut stack = vec![start];

    while let Some(point) = stack.pop() {
        for next in neighbors(maze, point) {
            let i = maze.offset_unchecked(next);
            if visited[i] || !maze.cells()[i].is_passable() {
                continue;
            }
            if next == target {
                return true;
            }
            visited[i] = true;
            stack.push(next);
        }
    }
    false
}

/// Shortest way from start to target, both included
///
/// Same passability rules as [is_solvable]. Returns `None` if the target
/// cannot be reached.
pub fn find_route(maze: &Maze) -> Option<Vec<Point>> {
    let (start, target) = (maze.start(), maze.target());

    // Previous step towards start, for every point reached so far
    let mut prev: Vec<Option<Point>> = vec![None; maze.cells().len()];
    prev[maze.offset_unchecked(start)] = Some(start);
    let mut queue = VecDeque::from([start]);

    while let Some(point) = queue.pop_front() {
        if point == target {
            let mut route = vec![target];
            let mut current = target;
            while current != start {
                current = prev[maze.offset_unchecked(current)]?;
                route.push(current);
            }
            route.reverse();
            return Some(route);
        }
        for next in neighbors(maze, point) {
            let i = maze.offset_unchecked(next);
            if prev[i].is_none() && maze.cells()[i].is_passable() {
                prev[i] = Some(point);
                queue.push_back(next);
            }
        }
    }
    None
}
