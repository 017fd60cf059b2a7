//! The block rectangle value type, a rectangular region on a row/column grid.

/// An axis-aligned block on a row/column grid.
///
/// The block spans rows `[row_start, row_start + height)` and columns
/// `[col_start, col_start + width)`, both half-open. Nothing is validated at
/// construction; a block with non-positive height or width simply contains no
/// cells.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BlockRect {
    row_start: i32,
    col_start: i32,
    height: i32,
    width: i32,
}

impl BlockRect {
    /// Create a block from its starting row, starting column and extents.
    /// The four values are stored verbatim.
    pub const fn new(row_start: i32, col_start: i32, height: i32, width: i32) -> BlockRect {
        BlockRect {
            row_start,
            col_start,
            height,
            width,
        }
    }

    /// Returns the first row of the block.
    pub fn get_row_start(&self) -> i32 {
        self.row_start
    }

    /// Returns the first column of the block.
    pub fn get_col_start(&self) -> i32 {
        self.col_start
    }

    /// Returns the number of rows the block spans.
    pub fn get_height(&self) -> i32 {
        self.height
    }

    /// Returns the number of columns the block spans.
    pub fn get_width(&self) -> i32 {
        self.width
    }

    /// Returns true if the cell at (row_index, col_index) falls inside the block.
    ///
    /// The upper bounds are exclusive: the last row inside the block is
    /// `row_start + height - 1`, so `contains(row_start + height, ..)` is false.
    pub fn contains(&self, row_index: i32, col_index: i32) -> bool {
        row_index >= self.row_start
            && row_index < self.row_start + self.height
            && col_index >= self.col_start
            && col_index < self.col_start + self.width
    }
}
