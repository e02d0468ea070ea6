//! Service implementations.

pub mod gif_service_impl;

pub use gif_service_impl::GifServiceImpl;
