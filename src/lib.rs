pub mod app;
pub mod domain;
pub mod engine;
pub mod gateway;
pub mod io;
pub mod prelude;
pub mod source;
