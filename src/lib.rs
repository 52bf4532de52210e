//! Random grid mazes with a guaranteed way out
//!
//! Every cell of the maze is either open or blocked. The top-left corner is
//! the start, the bottom-right corner is the target, and the generator only
//! ever keeps a blocked cell if the target can still be reached afterwards.
//!
//! # Examples
//! ## Generate a maze
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use solvable_maze::{maze_generator, CellState};
//!
//! let mut rng = StdRng::seed_from_u64(13);
//! let maze = maze_generator::generate(30, 10, &mut rng).unwrap();
//!
//! assert!(maze.is_solvable());
//! assert!(maze.cells().iter().all(|c| c.state != CellState::Undecided));
//! println!("{maze}");
//! ```
//!
//! ## Check a maze drawn by hand
//! ```
//! use solvable_maze::Maze;
//!
//! let mut maze = Maze::parse("  █\n█ █\n█  ").unwrap();
//! assert!(maze.is_solvable());
//! assert_eq!(maze.mark_winning_route(), Some(5));
//! assert_eq!(maze.to_string(), "··█\n█·█\n█··");
//! ```

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use itertools::{iproduct, Itertools};

pub mod error;
pub mod maze_generator;
pub mod reachability;

pub use error::{MazeError, Result};

/// What the generator has decided about a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not assigned yet. Counts as passable when checking for a way out.
    #[default]
    Undecided,
    /// Passable
    Open,
    /// Wall
    Blocked,
}

/// Single square of the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub state: CellState,
    /// Cell lies on the route that proves the maze solvable
    pub winning_route: bool,
}

impl Cell {
    const S_UNDECIDED: char = 'X';
    const S_OPEN: char = ' ';
    const S_BLOCKED: char = '█';
    const S_ROUTE: char = '·';

    pub fn new(state: CellState) -> Self {
        Self {
            state,
            winning_route: false,
        }
    }

    /// Is it possible to walk through this cell
    pub fn is_passable(&self) -> bool {
        matches!(self.state, CellState::Open | CellState::Undecided)
    }

    /// Character used when rendering the cell
    pub fn glyph(&self) -> char {
        match self.state {
            CellState::Undecided => Self::S_UNDECIDED,
            CellState::Blocked => Self::S_BLOCKED,
            CellState::Open if self.winning_route => Self::S_ROUTE,
            CellState::Open => Self::S_OPEN,
        }
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        let cell = match glyph {
            Self::S_UNDECIDED => Self::new(CellState::Undecided),
            Self::S_OPEN => Self::new(CellState::Open),
            Self::S_BLOCKED => Self::new(CellState::Blocked),
            Self::S_ROUTE => Self {
                state: CellState::Open,
                winning_route: true,
            },
            _ => return None,
        };
        Some(cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Location in the maze, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Rectangular maze with fixed start and target corners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Cells in row-major order, index `x + y * width`
    cells: Vec<Cell>,
    start: Point,
    target: Point,
}

impl Maze {
    /// Create maze where every cell is [CellState::Undecided]
    ///
    /// Returns [MazeError::InvalidDimensions] if either dimension is zero,
    /// or if the maze has too many cells to be stored.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let size = width
            .checked_mul(height)
            .filter(|&n| n > 0 && n <= isize::MAX as usize / mem::size_of::<Cell>())
            .ok_or(MazeError::InvalidDimensions { width, height })?;
        Ok(Maze {
            width,
            height,
            cells: vec![Cell::default(); size],
            start: Point::new(0, 0),
            target: Point::new(width - 1, height - 1),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// All points of the maze in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| Point { x, y })
    }

    /// Cell at (x, y), or [MazeError::OutOfBounds]
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        let index = self.offset(Point { x, y })?;
        Ok(self.cells[index])
    }

    /// Change cell state at (x, y), or fail with [MazeError::OutOfBounds]
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        let index = self.offset(Point { x, y })?;
        self.cells[index].state = state;
        Ok(())
    }

    /// Position of `point` in [Self::cells]
    pub fn offset(&self, point: Point) -> Result<usize> {
        if self.contains(point) {
            Ok(self.offset_unchecked(point))
        } else {
            Err(MazeError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Position of a point already known to be inside the maze
    pub(crate) fn offset_unchecked(&self, point: Point) -> usize {
        debug_assert!(self.contains(point));
        point.x + point.y * self.width
    }

    /// Is there a way from start to target, undecided cells counting as open
    pub fn is_solvable(&self) -> bool {
        reachability::is_solvable(self)
    }

    /// Mark every cell on one way from start to target
    ///
    /// Previous route marks are cleared first. Returns the number of cells
    /// on the route, including start and target, or `None` if the target
    /// cannot be reached.
    pub fn mark_winning_route(&mut self) -> Option<usize> {
        for cell in self.cells.iter_mut() {
            cell.winning_route = false;
        }
        let route = reachability::find_route(self)?;
        for &point in &route {
            self[point].winning_route = true;
        }
        Some(route.len())
    }

    /// Parse maze from its rendered form
    ///
    /// Rows are separated by newlines and must all be equally wide. Start
    /// and target are the top-left and bottom-right corners.
    ///
    /// # Examples
    /// ```
    /// use solvable_maze::{CellState, Maze};
    ///
    /// let maze = Maze::parse(" █\n  ").unwrap();
    /// assert_eq!(maze.get(1, 0).unwrap().state, CellState::Blocked);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text.lines().map(|row| row.chars().collect()).collect();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyInput);
        }

        let mut maze = Maze::new(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &glyph) in row.iter().enumerate() {
                maze.cells[x + y * width] =
                    Cell::from_glyph(glyph).ok_or(MazeError::UnexpectedGlyph { glyph, x, y })?;
            }
        }
        Ok(maze)
    }
}

impl Index<Point> for Maze {
    type Output = Cell;

    /// Panics if `point` is outside of the maze
    fn index(&self, point: Point) -> &Cell {
        match self.offset(point) {
            Ok(index) => &self.cells[index],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<Point> for Maze {
    fn index_mut(&mut self, point: Point) -> &mut Cell {
        match self.offset(point) {
            Ok(index) => &mut self.cells[index],
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .cells
            .chunks(self.width)
            .map(|row| row.iter().join(""))
            .join("\n");
        write!(f, "{}", rendered)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cell, CellState, Maze, MazeError, Point};

    #[test]
    fn new_maze_is_undecided() {
        let maze = Maze::new(4, 3).unwrap();

        assert_eq!(maze.cells().len(), 12);
        assert!(maze
            .cells()
            .iter()
            .all(|c| *c == Cell::new(CellState::Undecided)));
        assert_eq!(maze.start(), Point::new(0, 0));
        assert_eq!(maze.target(), Point::new(3, 2));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Maze::new(5, 0).is_err());
    }

    #[test]
    fn too_many_cells_are_rejected() {
        assert_eq!(
            Maze::new(usize::MAX, 2),
            Err(MazeError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(Maze::new(1 << 33, 1 << 31).is_err());
        assert!(Maze::new(usize::MAX / 2, 1).is_err());
    }

    #[test]
    fn single_cell_maze_has_same_start_and_target() {
        let maze = Maze::new(1, 1).unwrap();
        assert_eq!(maze.start(), maze.target());
    }

    #[test]
    fn cells_are_row_major() {
        let mut maze = Maze::new(3, 2).unwrap();
        maze.set(2, 0, CellState::Blocked).unwrap();
        maze.set(0, 1, CellState::Open).unwrap();

        assert_eq!(maze.cells()[2].state, CellState::Blocked);
        assert_eq!(maze.cells()[3].state, CellState::Open);
        assert_eq!(maze.offset(Point::new(1, 1)), Ok(4));
        assert_eq!(maze.offset_unchecked(Point::new(2, 1)), 5);
        assert_eq!(
            maze.points().take(4).collect::<Vec<_>>(),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn access_outside_is_an_error() {
        let mut maze = Maze::new(3, 2).unwrap();

        assert_eq!(
            maze.get(3, 0),
            Err(MazeError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(maze.get(0, 2).is_err());
        assert!(maze.set(0, 2, CellState::Open).is_err());
    }

    #[test]
    #[should_panic(expected = "outside of 3x2 maze")]
    fn indexing_outside_panics() {
        let maze = Maze::new(3, 2).unwrap();
        // Would be a valid flat index (0 + 1 * 3), but x is out of range
        let _cell = maze[Point::new(3, 0)];
    }

    #[test]
    fn parse_rendered_maze() {
        let text = "  █X\n█ · \n██  ";
        let maze = Maze::parse(text).unwrap();

        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.get(2, 0).unwrap().state, CellState::Blocked);
        assert_eq!(maze.get(3, 0).unwrap().state, CellState::Undecided);
        assert_eq!(
            maze.get(2, 1).unwrap(),
            Cell {
                state: CellState::Open,
                winning_route: true
            }
        );
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Maze::parse(""), Err(MazeError::EmptyInput));
        assert_eq!(
            Maze::parse("  \n   "),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Maze::parse(" █\n#"),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Maze::parse(" █\n #"),
            Err(MazeError::UnexpectedGlyph {
                glyph: '#',
                x: 1,
                y: 1
            })
        );
    }

    #[test]
    fn mark_route_through_open_cells() {
        let mut maze = Maze::parse("  █\n█ █\n█  ").unwrap();

        assert_eq!(maze.mark_winning_route(), Some(5));
        let on_route: Vec<Point> = maze
            .points()
            .filter(|p| maze[*p].winning_route)
            .collect();
        assert_eq!(
            on_route,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn no_route_in_walled_maze() {
        let mut maze = Maze::parse(" █\n█ ").unwrap();

        assert!(!maze.is_solvable());
        assert_eq!(maze.mark_winning_route(), None);
        assert!(maze.cells().iter().all(|c| !c.winning_route));
    }

    #[test]
    fn stale_route_is_cleared_when_target_gets_blocked() {
        let mut maze = Maze::parse("··\n█·").unwrap();
        maze.set(1, 1, CellState::Blocked).unwrap();

        assert_eq!(maze.mark_winning_route(), None);
        assert!(maze.cells().iter().all(|c| !c.winning_route));
        assert_eq!(maze.to_string(), "  \n██");
    }
}
