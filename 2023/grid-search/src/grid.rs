use std::fmt::Debug;

use chumsky::prelude::*;
use itertools::iproduct;

use crate::{position, Position, SearchError};

/// A dense, immutable 2D lattice stored row-major in a flat vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = char> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Splits the input into rows of raw characters.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<char>>, extra::Err<Rich<'a, char>>> {
    none_of("\r\n")
        .repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|mut rows: Vec<Vec<char>>| {
            // Trailing newlines at EOF produce empty rows
            while rows.last().is_some_and(Vec::is_empty) {
                rows.pop();
            }
            rows
        })
}

impl Grid<char> {
    /// Parses newline separated text into a character grid.
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let rows = parser()
            .parse(input)
            .into_result()
            .map_err(|e| SearchError::malformed(format!("parse failed: {e:?}")))?;

        Self::from_rows(rows)
    }

    /// Builds a character grid from already split lines.
    pub fn load<S: AsRef<str>>(rows: &[S]) -> Result<Self, SearchError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, SearchError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(SearchError::malformed("grid has no cells"));
        }

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SearchError::malformed(format!(
                "row {row} has {} cells, expected {width}",
                cells.len()
            )));
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        (0..self.height as i64).contains(&row) && (0..self.width as i64).contains(&col)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.y, pos.x)
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Returns the cell at `pos`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn at(&self, row: i64, col: i64) -> Result<&T, SearchError> {
        self.get(position(row, col))
            .ok_or_else(|| SearchError::out_of_bounds(position(row, col), self.height, self.width))
    }

    /// Looks up `(row, col)` as if the grid were tiled infinitely in every
    /// direction.
    pub fn toroidal_at(&self, row: i64, col: i64) -> &T {
        let row = row.rem_euclid(self.height as i64) as usize;
        let col = col.rem_euclid(self.width as i64) as usize;
        &self.cells[row * self.width + col]
    }

    #[inline]
    pub fn toroidal(&self, pos: Position) -> &T {
        self.toroidal_at(pos.y, pos.x)
    }

    /// Every in-bounds position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height as i64, 0..self.width as i64).map(|(row, col)| position(row, col))
    }

    /// Converts every cell, failing on the first cell `f` rejects.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(Position, &T) -> Result<U, E>) -> Result<Grid<U>, E> {
        let cells = self
            .positions()
            .zip(&self.cells)
            .map(|(pos, cell)| f(pos, cell))
            .collect::<Result<Vec<_>, E>>()?;

        Ok(Grid {
            width: self.width,
            height: self.height,
            cells,
        })
    }
}

impl<T: PartialEq + Debug> Grid<T> {
    /// Position of the first cell (in row-major order) equal to `symbol`.
    pub fn find(&self, symbol: &T) -> Result<Position, SearchError> {
        self.positions()
            .zip(&self.cells)
            .find_map(|(pos, cell)| (cell == symbol).then_some(pos))
            .ok_or_else(|| SearchError::NotFound {
                symbol: format!("{symbol:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const SAMPLE: &str = "#..
.S.
..#
";

    #[test]
    fn parses_rows_and_drops_trailing_newline() -> Result<(), SearchError> {
        let grid = Grid::parse(SAMPLE)?;
        assert_eq!(3, grid.width());
        assert_eq!(3, grid.height());
        assert_eq!(&'S', grid.at(1, 1)?);
        assert_eq!(&'#', grid.at(2, 2)?);
        Ok(())
    }

    #[test]
    fn parses_crlf_line_endings() -> Result<(), SearchError> {
        let grid = Grid::parse("ab\r\ncd\r\n")?;
        assert_eq!(&'d', grid.at(1, 1)?);
        Ok(())
    }

    #[rstest]
    #[case("..\n\n..\n")]
    #[case("\n..\n..")]
    #[case("")]
    fn rejects_blank_rows_inside_the_grid(#[case] input: &str) {
        assert!(matches!(
            Grid::parse(input),
            Err(SearchError::MalformedInput { .. })
        ));
    }

    #[test]
    fn drops_every_trailing_blank_row() -> Result<(), SearchError> {
        let grid = Grid::parse("..\n..\n\n\n")?;
        assert_eq!((2, 2), (grid.height(), grid.width()));
        Ok(())
    }

    #[rstest]
    #[case(&[] as &[&str])]
    #[case(&[""])]
    #[case(&["...", ".."])]
    fn rejects_empty_and_ragged_rows(#[case] rows: &[&str]) {
        assert!(matches!(
            Grid::load(rows),
            Err(SearchError::MalformedInput { .. })
        ));
    }

    #[rstest]
    #[case(-1, 0)]
    #[case(0, -1)]
    #[case(3, 0)]
    #[case(0, 3)]
    fn bounds_checked_lookup_fails_outside(#[case] row: i64, #[case] col: i64) -> Result<(), SearchError> {
        let grid = Grid::parse(SAMPLE)?;
        assert!(!grid.in_bounds(row, col));
        assert_eq!(
            Err(SearchError::OutOfBounds {
                row,
                col,
                height: 3,
                width: 3
            }),
            grid.at(row, col)
        );
        Ok(())
    }

    #[rstest]
    #[case(-1, -1, '#')]
    #[case(4, 4, 'S')]
    #[case(-3, 6, '#')]
    #[case(-301, -301, '#')]
    fn toroidal_lookup_wraps_with_floored_modulo(
        #[case] row: i64,
        #[case] col: i64,
        #[case] expected: char,
    ) -> Result<(), SearchError> {
        let grid = Grid::parse(SAMPLE)?;
        assert_eq!(&expected, grid.toroidal_at(row, col));
        Ok(())
    }

    #[test]
    fn find_locates_marker_or_reports_it_missing() -> Result<(), SearchError> {
        let grid = Grid::parse(SAMPLE)?;
        assert_eq!(position(1, 1), grid.find(&'S')?);
        assert!(matches!(grid.find(&'E'), Err(SearchError::NotFound { .. })));
        Ok(())
    }

    #[test]
    fn try_map_converts_digits() -> Result<(), SearchError> {
        let grid = Grid::load(&["12", "34"])?;
        let costs = grid.try_map(|_, c| {
            c.to_digit(10)
                .ok_or_else(|| SearchError::malformed("not a digit"))
        })?;
        assert_eq!(Some(&4), costs.get(position(1, 1)));

        let rejected = grid.try_map(|pos, c| if *c == '3' { Err(pos) } else { Ok(*c) });
        assert_eq!(Err(position(1, 0)), rejected);
        Ok(())
    }
}
