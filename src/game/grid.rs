use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Two-dimensional array that stores values and allows to mutate them.
/// Dimensions are picked by the caller at construction time and stay fixed
/// for the lifetime of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    contents: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Constructs a grid of `rows` x `cols` default-initialized cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            contents: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Index<GridIndex> for Grid<T> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row() * self.cols + index.col()]
    }
}

impl<T> IndexMut<GridIndex> for Grid<T> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row() * self.cols + index.col()]
    }
}

impl<T> Grid<T> {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns an iterator over all elements row by row.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.contents.iter()
    }

    /// Returns an iterator to indexed grid elements row by row
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        (0..self.rows)
            .map(|i| self.right_iter((i, 0).into()).indexed())
            .flatten()
    }

    /// Returns an iterator with rightwards direction that starts with a `pos`.
    pub fn right_iter(&self, pos: GridIndex) -> RightGridIterator<T> {
        RightGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns an iterator with upwards direction that starts with a `pos`.
    pub fn top_iter(&self, pos: GridIndex) -> TopGridIterator<T> {
        TopGridIterator {
            current: Some(pos),
            grid: self,
        }
    }

    /// Returns an iterator with downwards direction that starts with a `pos`.
    pub fn bottom_iter(&self, pos: GridIndex) -> BottomGridIterator<T> {
        BottomGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns a diagonal iterator with bottom-right direction that starts with a `pos`.
    pub fn bottom_right_iter(&self, pos: GridIndex) -> BottomRightGridIterator<T> {
        BottomRightGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns a diagonal iterator with bottom-left direction that starts with a `pos`.
    pub fn bottom_left_iter(&self, pos: GridIndex) -> BottomLeftGridIterator<T> {
        BottomLeftGridIterator {
            current: Some(pos),
            grid: self,
        }
    }

    fn contains(&self, index: GridIndex) -> bool {
        index.row() < self.rows && index.col() < self.cols
    }
}

/// An iterator with rightwards direction.
/// On each step it's incrementing `col` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct RightGridIterator<'a, T> {
    current: GridIndex, // no need for an Option as we're only incrementing
    grid: &'a Grid<T>,
}

impl<'a, T> Iterator for RightGridIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.grid.contains(self.current) {
            let old_current = self.current;
            self.current = GridIndex::new(self.current.row, self.current.col + 1);
            return Some(&self.grid[old_current]);
        }
        None
    }
}

/// An iterator with upwards direction.
/// On each step it's decrementing `row` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct TopGridIterator<'a, T> {
    current: Option<GridIndex>,
    grid: &'a Grid<T>,
}

impl<'a, T> Iterator for TopGridIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.current {
            if self.grid.contains(current) {
                let old_current = current;
                if current.row == 0 {
                    self.current = None;
                } else {
                    self.current = Some(GridIndex::new(current.row - 1, current.col));
                }
                return Some(&self.grid[old_current]);
            }
        }
        None
    }
}

/// An iterator with downwards direction.
/// On each step it's incrementing `row` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct BottomGridIterator<'a, T> {
    current: GridIndex, // no need for an Option as we're only incrementing
    grid: &'a Grid<T>,
}

impl<'a, T> Iterator for BottomGridIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.grid.contains(self.current) {
            let old_current = self.current;
            self.current = GridIndex::new(self.current.row + 1, self.current.col);
            return Some(&self.grid[old_current]);
        }
        None
    }
}

/// A diagonal iterator with bottom-right direction.
/// On each step it's incrementing `col` and `row` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct BottomRightGridIterator<'a, T> {
    current: GridIndex, // no need for an Option as we're only incrementing
    grid: &'a Grid<T>,
}

impl<'a, T> Iterator for BottomRightGridIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.grid.contains(self.current) {
            let old_current = self.current;
            self.current = GridIndex::new(self.current.row + 1, self.current.col + 1);
            return Some(&self.grid[old_current]);
        }
        None
    }
}

/// A diagonal iterator with bottom-left direction.
/// On each step it's incrementing `row` and decrementing `col` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct BottomLeftGridIterator<'a, T> {
    current: Option<GridIndex>,
    grid: &'a Grid<T>,
}

impl<'a, T> Iterator for BottomLeftGridIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.current {
            if self.grid.contains(current) {
                let old_current = current;
                if current.col == 0 {
                    self.current = None;
                } else {
                    self.current = Some(GridIndex::new(current.row + 1, current.col - 1));
                }
                return Some(&self.grid[old_current]);
            }
        }
        None
    }
}

/// Needed to create iterator adapter which gives the current iteration [`GridIndex`]
/// as well as the next value.
pub trait WithGridIndex {
    /// Returns current [`GridIndex`] if it is valid, otherwise [`None`].
    fn get_index(&self) -> Option<GridIndex>;

    /// Returns an iterator which gives the current iteration [`GridIndex`]
    /// as well as the next value.
    fn indexed(self) -> IndexedGridIterator<Self>
    where
        Self: Sized,
    {
        IndexedGridIterator { it: self }
    }
}

impl<T> WithGridIndex for RightGridIterator<'_, T> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T> WithGridIndex for TopGridIterator<'_, T> {
    fn get_index(&self) -> Option<GridIndex> {
        self.current
    }
}

impl<T> WithGridIndex for BottomGridIterator<'_, T> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T> WithGridIndex for BottomRightGridIterator<'_, T> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T> WithGridIndex for BottomLeftGridIterator<'_, T> {
    fn get_index(&self) -> Option<GridIndex> {
        self.current
    }
}

/// An iterator that yields the current [`GridIndex`] and the element during iteration.
pub struct IndexedGridIterator<It> {
    it: It,
}

impl<It> Iterator for IndexedGridIterator<It>
where
    It: Iterator + WithGridIndex,
{
    type Item = (GridIndex, It::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.it.get_index();
        match self.it.next() {
            // unwrap() here is ok if next() returned Some()
            Some(item) => Some((index.unwrap(), item)),
            None => None,
        }
    }
}
