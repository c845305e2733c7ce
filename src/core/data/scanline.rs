use crate::core::data::colour::Colour;

/// One computed row of the image, tagged with its row index so rows can be
/// produced in any order and still be placed correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanline {
    pub y: u32,
    pub pixels: Vec<Colour>,
}

impl Scanline {
    #[must_use]
    pub fn new(y: u32, pixels: Vec<Colour>) -> Self {
        Self { y, pixels }
    }
}
