/// A pixel position, with `(0, 0)` at the top-left of the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
