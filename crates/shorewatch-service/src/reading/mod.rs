//! Water-quality reading resource service.

pub mod service;

pub use service::ReadingService;
