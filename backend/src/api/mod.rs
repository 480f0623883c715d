pub mod home;
pub mod search;
pub mod video;

pub use home::*;
pub use search::*;
pub use video::*;
