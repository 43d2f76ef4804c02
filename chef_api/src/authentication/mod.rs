pub mod auth13;

pub use self::auth13::Auth13;

/// The only signing protocol version this client speaks.
pub const SIGN_VERSION: &str = "1.3";
