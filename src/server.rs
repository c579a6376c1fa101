//! Runtime parameters of the keeper server, loaded from `server.config`.
//!
//! ```toml
//! ip = "127.0.0.1"
//! port = "25565"
//! timeout = 10000
//!
//! [threads]
//! queue = 4
//! request = 8
//!
//! [responses]
//! not_found = "./respond/404.json"
//! success = "./respond/found.json"
//! timeout = "./respond/timeout.json"
//! ```
//!
//! Every key is optional. Missing or mistyped keys keep the defaults shown
//! above.

use serde::Serialize;

use crate::configurable::Configurable;
use crate::document::Document;
use crate::value::read_value;

/// Server configuration. Immutable once built.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    ip: String,
    port: String,
    timeout: u64,
    threads: ThreadsConfig,
    responses: ResponsesConfig,
}

/// Worker pool sizes, under `[threads]`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ThreadsConfig {
    queue: u32,
    request: u32,
}

/// Paths of canned response bodies, under `[responses]`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponsesConfig {
    not_found: String,
    success: String,
    timeout: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".into(),
            port: "25565".into(),
            timeout: 10_000,
            threads: ThreadsConfig::default(),
            responses: ResponsesConfig::default(),
        }
    }
}

impl Default for ThreadsConfig {
    fn default() -> Self {
        Self {
            queue: 4,
            request: 8,
        }
    }
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            not_found: "./respond/404.json".into(),
            success: "./respond/found.json".into(),
            timeout: "./respond/timeout.json".into(),
        }
    }
}

impl Configurable for ServerConfig {
    const NAME: &'static str = "server.config";

    fn from_document(document: &Document) -> Self {
        let default = Self::default();
        let threads = document.node("threads");
        let responses = document.node("responses");

        Self {
            ip: read_value(document.node("ip"), default.ip),
            port: read_value(document.node("port"), default.port),
            timeout: read_value(document.node("timeout"), default.timeout),
            threads: ThreadsConfig {
                queue: read_value(threads.get("queue"), default.threads.queue),
                request: read_value(threads.get("request"), default.threads.request),
            },
            responses: ResponsesConfig {
                not_found: read_value(responses.get("not_found"), default.responses.not_found),
                success: read_value(responses.get("success"), default.responses.success),
                timeout: read_value(responses.get("timeout"), default.responses.timeout),
            },
        }
    }
}

impl ServerConfig {
    /// Address to bind to.
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Port to bind to, kept as text.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Request timeout in milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn threads(&self) -> &ThreadsConfig {
        &self.threads
    }

    pub fn responses(&self) -> &ResponsesConfig {
        &self.responses
    }
}

impl ThreadsConfig {
    /// Threads draining the connection queue.
    pub fn queue(&self) -> u32 {
        self.queue
    }

    /// Threads serving requests.
    pub fn request(&self) -> u32 {
        self.request
    }
}

impl ResponsesConfig {
    pub fn not_found(&self) -> &str {
        &self.not_found
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn timeout(&self) -> &str {
        &self.timeout
    }
}
