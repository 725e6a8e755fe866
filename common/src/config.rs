/// Endpoint of the maclookup.app v2 API. The address is appended verbatim.
pub const DEFAULT_API_URL: &str = "https://api.maclookup.app/v2/macs/";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL the resolver appends each address to.
    ///
    /// Must end with the path separator expected by the service.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
