pub const FONT_SCALE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontScale {
    pub sizes: [f64; FONT_SCALE_LEN],
    pub line_heights: [f64; FONT_SCALE_LEN],
}

// Exponential step table clamped to even pixel sizes; the line box of every
// entry is size + 8, so line heights always land on a whole pixel.
pub fn font_scale(base: f64) -> FontScale {
    let mut sizes = [0.0; FONT_SCALE_LEN];
    for (index, slot) in sizes.iter_mut().enumerate() {
        let exponent = (index as f64 - 1.0) / 5.0;
        let raw = base * exponent.exp();
        let snapped = if index > 1 { raw.floor() } else { raw.ceil() };
        *slot = (snapped / 2.0).floor() * 2.0;
    }
    sizes[1] = base;

    let mut line_heights = [0.0; FONT_SCALE_LEN];
    for (slot, size) in line_heights.iter_mut().zip(sizes) {
        *slot = (size + 8.0) / size;
    }
    FontScale { sizes, line_heights }
}
