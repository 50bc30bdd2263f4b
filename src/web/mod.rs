pub mod error;
pub mod predict;
pub mod routes;
pub mod scores;

pub use error::*;
pub use predict::*;
pub use routes::*;
pub use scores::*;
