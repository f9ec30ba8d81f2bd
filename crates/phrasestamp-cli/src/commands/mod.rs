pub mod config;
pub mod locate;
pub mod tokens;

pub use locate::{run_locate, LocateArgs};
pub use tokens::show_tokens;
