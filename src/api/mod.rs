pub mod interface;
pub mod server;

pub use self::interface::{DynAPI, API};
pub use self::server::serve;
