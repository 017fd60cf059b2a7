//! Block rectangles for row/column addressed raster grids.
//!
//! A [`BlockRect`] identifies a rectangular block of cells in a larger raster
//! by its starting row, starting column, height and width. It is a plain
//! immutable value type: construct it, query containment, compare for
//! equality. How the raster gets cut into blocks is up to the caller.
pub mod block_rect;

pub use block_rect::BlockRect;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_addressing() {
        // Address a 30x30 raster as a 3x3 grid of 10x10 blocks and check that
        // every cell lands in exactly one block.
        let mut blocks: Vec<BlockRect> = Vec::with_capacity(9);
        for block_row in 0..3 {
            for block_col in 0..3 {
                blocks.push(BlockRect::new(block_row * 10, block_col * 10, 10, 10));
            }
        }

        for row in 0..30 {
            for col in 0..30 {
                let owners = blocks.iter().filter(|b| b.contains(row, col)).count();
                assert_eq!(owners, 1, "cell ({}, {}) owned by {} blocks", row, col, owners);
            }
        }

        // Cells outside the raster belong to no block.
        assert!(blocks.iter().all(|b| !b.contains(30, 0)));
        assert!(blocks.iter().all(|b| !b.contains(0, 30)));
        assert!(blocks.iter().all(|b| !b.contains(-1, 15)));
    }
}
