//! Default values for configuration options.

/// Default `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("adobe-client-rust/", env!("CARGO_PKG_VERSION"));

/// Default container listed by the content fragments client.
pub const FRAGMENT_CONTAINER: &str = "/content/dam";

/// Default root listed by the sites client.
pub const PAGES_ROOT: &str = "/content";
