use crate::controllers::ports::grid_encoder::GridEncoder;
use crate::presenters::file::png::PngGridEncoder;
use crate::presenters::file::ppm::PpmGridEncoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridEncoderKind {
    #[default]
    Png,
    Ppm,
}

impl GridEncoderKind {
    pub const ALL: &'static [Self] = &[Self::Png, Self::Ppm];
}

#[must_use]
pub fn grid_encoder_factory(kind: GridEncoderKind) -> Box<dyn GridEncoder> {
    match kind {
        GridEncoderKind::Png => Box::new(PngGridEncoder::new()),
        GridEncoderKind::Ppm => Box::new(PpmGridEncoder::new()),
    }
}
