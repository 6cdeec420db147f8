//! Configuration infrastructure module

pub mod xdg;

pub use xdg::XdgConfigStore;
