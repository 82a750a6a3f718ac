/// Borrowed single-channel 8-bit image view, used for the per-frame edge map.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Row `y` as a slice borrowing the underlying frame data.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn as_slice(&self) -> Option<&'a [u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
