//! Parallel row scheduling and per-row pruning.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::coords::{column_coordinates, row_coordinate};
use crate::kernel::{escape_block, Policy, BLOCK};
use crate::raster::pack;
use crate::size::Size;

/// Render the membership bitmap for `size`.
///
/// Returns the packed raster buffer, `size.buffer_len()` bytes,
/// row-major. Rows are independent: each works on its own disjoint
/// slice of the buffer and carries its own pruning state, so the only
/// synchronization is the join when the parallel loop finishes.
pub fn render(size: Size) -> Vec<u8> {
    trace!("begin render");

    let columns = column_coordinates(size);
    let mut pixels = vec![0u8; size.buffer_len()];
    if pixels.is_empty() {
        return pixels;
    }

    pixels
        .par_chunks_mut(size.bytes_per_row())
        .enumerate()
        .for_each(|(y, row)| {
            render_row(&columns, row_coordinate(size, y as u32), row);
        });

    trace!("end render");
    pixels
}

/// Fill one row of packed bytes, left to right.
///
/// The policy for each block comes from its left neighbour's outcome:
/// an all-white byte lets the next block try the early-exit policy,
/// anything else forces the full budget. Block 0 always runs full.
fn render_row(columns: &[f64], c_im: f64, row: &mut [u8]) {
    debug_assert_eq!(columns.len(), row.len() * BLOCK);

    let mut policy = Policy::Full;
    for (byte, c_re) in row.iter_mut().zip(columns.chunks_exact(BLOCK)) {
        let c_re: &[f64; BLOCK] = c_re.try_into().unwrap();
        *byte = pack(escape_block(c_re, c_im, policy));
        policy = if *byte == 0x00 {
            Policy::Prune
        } else {
            Policy::Full
        };
    }
}
