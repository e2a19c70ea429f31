pub mod app;
pub mod components;
pub mod export;
pub mod live;

pub use app::App;
pub use export::export_to_path;
