//! Sliding-car ("jam") puzzle.
//!
//! Cars slide one cell at a time along their own axis. The puzzle is solved
//! when the front of car `X` reaches the last column.
//!
//! Description format:
//! ```text
//! rows cols
//! car-count
//! ID back-row back-col front-row front-col   (one line per car)
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::configuration::{Children, Configuration};
use crate::error::PuzzleError;
use crate::puzzles::{board_cells, parse_number, Lines};

/// Id of the car that has to reach the right edge.
pub const SOLVER_ID: &str = "X";

const EMPTY: &str = ".";

/// Board coordinate (row, column); may step off the board while probing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// A car covering the straight run of cells from `back` to `front`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    pub id: String,
    pub back: Position,
    pub front: Position,
}

impl Car {
    pub fn new(id: impl Into<String>, back: Position, front: Position) -> Self {
        Self {
            id: id.into(),
            back,
            front,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.back.row == self.front.row
    }

    /// The car moved `amount` cells forward (positive) or backward along its axis.
    pub fn shifted(&self, amount: i32) -> Car {
        let (dr, dc) = if self.is_horizontal() {
            (0, amount)
        } else {
            (amount, 0)
        };
        Car {
            id: self.id.clone(),
            back: Position::new(self.back.row + dr, self.back.col + dc),
            front: Position::new(self.front.row + dr, self.front.col + dc),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.back.row..=self.front.row)
            .flat_map(move |row| (self.back.col..=self.front.col).map(move |col| Position::new(row, col)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JamConfig {
    rows: i32,
    cols: i32,
    /// Sorted by id, which fixes the neighbor order
    cars: Vec<Car>,
}

impl JamConfig {
    pub fn new(rows: i32, cols: i32, mut cars: Vec<Car>) -> Result<Self, PuzzleError> {
        if rows <= 0 || cols <= 0 {
            return Err(PuzzleError::Layout(format!(
                "board must be at least 1x1, got {rows}x{cols}"
            )));
        }
        // Caps the area so cell indices below fit in i32.
        board_cells(rows as usize, cols as usize)?;
        cars.sort_by(|a, b| a.id.cmp(&b.id));

        let config = Self { rows, cols, cars };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        std::fs::read_to_string(path)?.parse()
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    fn validate(&self) -> Result<(), PuzzleError> {
        let mut seen = std::collections::HashSet::new();
        for car in &self.cars {
            if car.back.row != car.front.row && car.back.col != car.front.col {
                return Err(PuzzleError::Layout(format!("car {} is not straight", car.id)));
            }
            if car.back > car.front {
                return Err(PuzzleError::Layout(format!(
                    "car {} has its back after its front",
                    car.id
                )));
            }
            if !self.in_bounds(car) {
                return Err(PuzzleError::Layout(format!("car {} is off the board", car.id)));
            }
            if self.cars.iter().filter(|other| other.id == car.id).count() > 1 {
                return Err(PuzzleError::Layout(format!("duplicate car id {}", car.id)));
            }
            for cell in car.cells() {
                if !seen.insert(cell) {
                    return Err(PuzzleError::Layout(format!(
                        "car {} overlaps another car at ({}, {})",
                        car.id, cell.row, cell.col
                    )));
                }
            }
        }
        if self.car(SOLVER_ID).is_none() {
            return Err(PuzzleError::MissingCar(SOLVER_ID.to_string()));
        }
        Ok(())
    }

    fn in_bounds(&self, car: &Car) -> bool {
        car.back.row >= 0 && car.back.col >= 0 && car.front.row < self.rows && car.front.col < self.cols
    }

    /// Row-major occupancy: index of the car on each cell.
    fn occupancy(&self) -> Vec<Option<usize>> {
        let mut grid = vec![None; (self.rows * self.cols) as usize];
        for (index, car) in self.cars.iter().enumerate() {
            for cell in car.cells() {
                grid[(cell.row * self.cols + cell.col) as usize] = Some(index);
            }
        }
        grid
    }

    /// Shift car `index` by one cell if it stays on the board and the cell it
    /// moves into is free.
    fn shift(&self, occupancy: &[Option<usize>], index: usize, amount: i32) -> Option<Self> {
        let moved = self.cars[index].shifted(amount);
        if !self.in_bounds(&moved) {
            return None;
        }
        let entered = if amount > 0 { moved.front } else { moved.back };
        if occupancy[(entered.row * self.cols + entered.col) as usize].is_some() {
            return None;
        }

        let mut cars = self.cars.clone();
        cars[index] = moved;
        Some(Self {
            rows: self.rows,
            cols: self.cols,
            cars,
        })
    }
}

impl Configuration for JamConfig {
    fn is_goal(&self) -> bool {
        self.car(SOLVER_ID)
            .is_some_and(|car| car.front.col == self.cols - 1)
    }

    fn neighbors(&self) -> Children<Self> {
        let occupancy = self.occupancy();
        let mut neighbors = Children::new();
        for index in 0..self.cars.len() {
            for amount in [1, -1] {
                if let Some(next) = self.shift(&occupancy, index, amount) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }
}

impl FromStr for JamConfig {
    type Err = PuzzleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = Lines::new(text);
        let dims: Vec<i32> = lines.numbers(2, "board dimensions")?;
        let count: Vec<usize> = lines.numbers(1, "car count")?;

        let mut cars = Vec::new();
        for _ in 0..count[0] {
            let (line, fields) = lines.exact_fields(5, "car description")?;
            let coords = fields[1..]
                .iter()
                .map(|token| parse_number(line, token))
                .collect::<Result<Vec<i32>, _>>()?;
            cars.push(Car::new(
                fields[0],
                Position::new(coords[0], coords[1]),
                Position::new(coords[2], coords[3]),
            ));
        }

        JamConfig::new(dims[0], dims[1], cars)
    }
}

impl fmt::Display for JamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupancy = self.occupancy();
        for row in 0..self.rows {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col != 0 {
                    f.write_str(" ")?;
                }
                match occupancy[(row * self.cols + col) as usize] {
                    Some(index) => f.write_str(&self.cars[index].id)?,
                    None => f.write_str(EMPTY)?,
                }
            }
        }
        Ok(())
    }
}
