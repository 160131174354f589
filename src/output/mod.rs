//! Output module - serialization of collected files to the context document

pub mod writer;
