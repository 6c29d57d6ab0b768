pub mod collage_session;
