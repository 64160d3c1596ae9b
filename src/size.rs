/// Image dimensions. Always square, always a whole number of packed
/// bytes per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// A square image with `edge` rounded up to the next multiple of 8,
    /// so every row divides evenly into 8-pixel blocks.
    pub fn square(edge: u32) -> Self {
        let edge = (edge + 7) / 8 * 8;
        Self {
            width: edge,
            height: edge,
        }
    }

    /// Packed bytes per row (one byte per 8 pixels).
    pub fn bytes_per_row(&self) -> usize {
        self.width as usize / 8
    }

    /// Total length of the packed pixel buffer.
    pub fn buffer_len(&self) -> usize {
        self.height as usize * self.bytes_per_row()
    }
}
