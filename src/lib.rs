//! Movie collage compositing engine.
//!
//! Turns a watch history into one or more portrait collage images: a vertical gradient, a
//! title with per-frame stats, and a grid of rounded, shadowed, bordered posters.
//!
//! - Load a [`RunConfig`] and a watch history ([`load_history`])
//! - Create a [`CollageSession`] (validates the layout and fixes the grid capacity)
//! - [`CollageSession::generate`] renders every frame into a [`FrameSink`] such as
//!   [`PngDirSink`]
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod encode;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod stats;

pub use crate::foundation::error::{CollageError, CollageResult};

pub use crate::assets::color::{Rgba8, parse_hex};
pub use crate::assets::poster::{
    DirPosterSource, POSTER_STEM_FORMAT, PosterSource, load_image, poster_file_name,
    resize_poster,
};
pub use crate::config::{CollageConfig, RunConfig};
pub use crate::effects::rounded::RoundedRect;
pub use crate::encode::png::PngDirSink;
pub use crate::encode::sink::{FrameInfo, FrameSink, InMemorySink, output_file_name};
pub use crate::layout::config::LayoutConfig;
pub use crate::layout::pagination::{FrameSlice, frame_count, plan_frames};
pub use crate::model::history::{
    HistoryEntry, MediaKind, MovieIds, WatchAction, WatchedMovie, history_from_reader,
    load_history,
};
pub use crate::model::movie::{
    MovieCatalog, MovieDetailProvider, MovieDetails, poster_url, poster_urls,
};
pub use crate::render::frame::{CellOutcome, FrameCompositor, FrameReport, RenderedFrame};
pub use crate::render::surface::Surface;
pub use crate::session::collage_session::{
    CollageReport, CollageSession, FrameOutput, generate_collage,
};
pub use crate::stats::{MovieStats, compute_stats};
