//! Runtime configuration, from flags or the environment.

use clap::Parser;

/// Settings for the genre registry service.
///
/// Every flag has an environment-variable twin, so containerized deployments
/// can configure the service without touching the command line.
#[derive(Debug, Parser)]
#[command(name = "genre-registry", version, about)]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: String,
}

impl Config {
    /// The `host:port` string [`Server::bind`](crate::Server::bind) expects.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
