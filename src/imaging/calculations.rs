//! Pure calculation functions for canvas geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Side length of the square canvas that holds an image unscaled.
///
/// # Examples
/// ```
/// # use instasquare::imaging::canvas_side;
/// assert_eq!(canvas_side(100, 200), 200);
/// assert_eq!(canvas_side(300, 150), 300);
/// assert_eq!(canvas_side(64, 64), 64);
/// ```
pub fn canvas_side(width: u32, height: u32) -> u32 {
    width.max(height)
}

/// Where the source's top-left corner lands on a canvas of `side` pixels.
///
/// The source is always anchored at the origin, leaving the margin on the
/// right and/or bottom. Existing squared photos were produced this way.
pub fn placement_offset(_source: (u32, u32), _side: u32) -> (u32, u32) {
    (0, 0)
}

/// Whether the square canvas for a `width × height` source is over a pixel
/// budget.
///
/// The canvas, not the source, is what gets allocated: a 3000000×1 strip is
/// only 3 megapixels but pads to 9 terapixels. A `limit` of 0 disables the
/// check.
pub fn canvas_exceeds_limit(width: u32, height: u32, limit: u64) -> bool {
    let side = u64::from(canvas_side(width, height));
    limit != 0 && side * side > limit
}
