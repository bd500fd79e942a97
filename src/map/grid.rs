use super::TilePos;

/// Row-major grid of optional cells.
///
/// Both the tile storage and the render cache use this so that their
/// dimensions can only change together through [`Grid::resized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, || None);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Fully occupied grid from `width * height` values in row-major order.
    pub fn from_row_major(width: u32, height: u32, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells: values.into_iter().map(Some).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// `None` for unset cells and for positions outside the grid.
    pub fn get(&self, pos: TilePos) -> Option<&T> {
        self.index(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Store a value; returns false when `pos` is outside the grid.
    pub fn set(&mut self, pos: TilePos, value: Option<T>) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// New grid of the given size keeping values at overlapping coordinates.
    pub fn resized(mut self, width: u32, height: u32) -> Self {
        let mut resized = Grid::new(width, height);
        for y in 0..self.height.min(height) {
            for x in 0..self.width.min(width) {
                let pos = TilePos::new(x, y);
                if let Some(i) = self.index(pos) {
                    resized.set(pos, self.cells[i].take());
                }
            }
        }
        resized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_out_of_range_reads_none() {
        let grid: Grid<u8> = Grid::new(2, 2);
        assert!(grid.get(TilePos::new(2, 0)).is_none());
        assert!(grid.get(TilePos::new(0, 5)).is_none());
    }

    #[test]
    fn test_grid_set_rejects_out_of_range() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set(TilePos::new(1, 1), Some(7u8)));
        assert!(!grid.set(TilePos::new(2, 1), Some(7u8)));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn test_grid_from_row_major() {
        let grid = Grid::from_row_major(2, 2, vec![1u8, 2, 3, 4]);
        assert_eq!(grid.get(TilePos::new(1, 0)), Some(&2));
        assert_eq!(grid.get(TilePos::new(0, 1)), Some(&3));
        assert_eq!(grid.occupied(), 4);
    }

    #[test]
    fn test_grid_resize_keeps_overlap() {
        let mut grid = Grid::new(3, 3);
        grid.set(TilePos::new(0, 0), Some(1u8));
        grid.set(TilePos::new(2, 2), Some(2u8));
        grid.set(TilePos::new(1, 0), Some(3u8));

        let grid = grid.resized(2, 4);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.get(TilePos::new(0, 0)), Some(&1));
        assert_eq!(grid.get(TilePos::new(1, 0)), Some(&3));
        assert!(grid.get(TilePos::new(1, 3)).is_none());
        assert_eq!(grid.occupied(), 2);
    }
}
