use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {service} failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("HTTP client config error: {0}")]
    Config(String),
}
