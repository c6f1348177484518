pub mod app;
pub mod demos;

pub use app::App;
