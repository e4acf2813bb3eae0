pub mod dirty;
pub mod editor;
pub mod models;
pub mod ports;
pub mod projection;
pub mod services;
pub mod validate;
pub mod viewer;
