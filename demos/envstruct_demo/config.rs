//! Configuration record for the envstruct demo.
//!
//! | Env var              | Field             | Notes                     |
//! |----------------------|-------------------|---------------------------|
//! | `DEMO_NAME`          | `name`            | required                  |
//! | `DEMO_HOST`          | `host`            |                           |
//! | `DEMO_PORT`          | `port`            | `u16`, range-checked      |
//! | `DEMO_VERBOSE`       | `verbose`         | `true` or `1`             |
//! | `DEMO_TIMEOUT`       | `timeout`         | e.g. `2h30m`              |
//! | `DEMO_UPSTREAMS`     | `upstreams`       | comma-separated URLs      |
//! | `DEMO_API_TOKEN`     | `api_token`       | redacted in reports       |
//! | `DEMO_RATIO`         | `ratio`           | `f64`, no conversion rule |

use std::time::Duration;

use envstruct::Envstruct;
use url::Url;

#[derive(Envstruct, Debug)]
pub struct DemoConfig {
    /// Application name shown in the echo banner.
    #[env("demo_name,required")]
    pub name: String,

    /// Hostname to bind to.
    #[env("demo_host")]
    pub host: String,

    /// Port number.
    #[env("demo_port")]
    pub port: u16,

    /// Enable verbose output.
    #[env("demo_verbose")]
    pub verbose: bool,

    /// Request timeout.
    #[env("demo_timeout")]
    pub timeout: Duration,

    /// Upstream servers.
    #[env("demo_upstreams")]
    pub upstreams: Vec<Url>,

    /// Credential for upstream calls.
    #[env("demo_api_token,,noreport")]
    pub api_token: Option<String>,

    /// Sampling ratio. Not bindable: `--env-strict` rejects `DEMO_RATIO`.
    #[env("demo_ratio")]
    pub ratio: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: "127.0.0.1".into(),
            port: 3000,
            verbose: false,
            timeout: Duration::from_secs(30),
            upstreams: Vec::new(),
            api_token: None,
            ratio: 1.0,
        }
    }
}
