pub mod content;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod resolve;

pub use content::*;
pub use footer::*;
pub use hero::*;
pub use navigation::*;
pub use resolve::Resolve;
