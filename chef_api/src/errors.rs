use failure::Fail;

#[derive(Debug, Fail)]
pub enum ChefError {
    #[fail(display = "No Chef configuration found; searched {}", _0)]
    NoConfiguration(String),
    #[fail(display = "No profile named '{}' in the credentials file", _0)]
    UnknownProfile(String),
    #[fail(display = "Chef configuration is missing '{}'", _0)]
    MissingSetting(&'static str),
    #[fail(display = "Unsupported value '{}' for ssl_verify_mode", _0)]
    InvalidVerifyMode(String),
    #[fail(display = "Unsupported authentication protocol version '{}'", _0)]
    UnsupportedSignVersion(String),
    #[fail(display = "Unable to read client key {}: {}", path, reason)]
    KeyError { path: String, reason: String },
    #[fail(display = "Chef Server returned {} for {}: {}", status, path, body)]
    ServerError {
        status: u16,
        path: String,
        body: String,
    },
    #[fail(display = "Chef server URL {} cannot carry a path", _0)]
    InvalidServerUrl(String),
    #[fail(display = "Malformed search response: missing '{}'", _0)]
    MalformedResponse(&'static str),
}
