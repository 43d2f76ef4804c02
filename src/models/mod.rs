pub mod environment;
pub mod node;

pub use self::environment::*;
pub use self::node::*;
