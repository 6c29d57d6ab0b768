pub(crate) mod background;
pub(crate) mod frame;
pub(crate) mod surface;
pub(crate) mod text;
pub(crate) mod title;
