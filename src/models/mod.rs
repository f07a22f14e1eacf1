pub mod category;
pub mod config;
pub mod events;
pub mod priority;
pub mod status;
pub mod summary;

pub use category::*;
pub use config::*;
pub use events::*;
pub use priority::*;
pub use status::*;
pub use summary::*;
