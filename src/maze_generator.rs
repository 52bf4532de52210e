//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::reachability::is_solvable;
use crate::{Cell, CellState, Maze, Point, Result};

/// Generate a fully decided maze with a way from start to target
///
/// Cells are visited in random order. Each one gets a random state, which
/// is drawn again until the maze is still solvable with the remaining cells
/// undecided. Start and target are opened before the others are visited and
/// are not part of the random order.
///
/// Returns [crate::MazeError::InvalidDimensions] if either dimension is zero
/// or the maze would be too large to store.
pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Maze> {
    let mut maze = Maze::new(width, height)?;
    let (start, target) = (maze.start(), maze.target());
    for endpoint in [start, target] {
        maze[endpoint] = Cell {
            state: CellState::Open,
            winning_route: true,
        };
    }

    let mut order: Vec<Point> = maze
        .points()
        .filter(|&p| p != start && p != target)
        .collect();
    order.shuffle(rng);

    let mut draws = 0;
    for point in order {
        loop {
            let state = if rng.gen_bool(0.5) {
                CellState::Open
            } else {
                CellState::Blocked
            };
            draws += 1;
            maze[point].state = state;

            // Opening a cell cannot break a solvable maze
            if state == CellState::Open || is_solvable(&maze) {
                break;
            }
            trace!("Blocking ({}, {}) would cut off the target", point.x, point.y);
        }
    }

    debug!(
        "Generated {}x{} maze with {} draws for {} cells",
        width,
        height,
        draws,
        maze.cells().len()
    );
    Ok(maze)
}

/// Maze generator with its own random source
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Seeded generator gives the same mazes on every run
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate next maze, see [generate]
    pub fn generate_maze(&mut self, width: usize, height: usize) -> Result<Maze> {
        generate(width, height, &mut self.random)
    }
}
