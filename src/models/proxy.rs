//! Proxy model definitions
//!
//! Contains the core data structure for a decoded shadowsocks node.

use serde::{Deserialize, Serialize};

use crate::utils::base64::url_safe_base64_encode;

/// Display name used when a share-link carries no `#fragment`.
pub const SS_DEFAULT_NAME: &str = "SS";

/// Represents the type of a proxy.
///
/// Only shadowsocks is produced; the enum keeps the `type` key typed rather
/// than a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyType {
    #[serde(rename = "ss")]
    Shadowsocks,
}

impl ProxyType {
    /// The value written to the `type` key of a Clash proxy.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "ss",
        }
    }
}

/// A shadowsocks node as it appears in a Clash `proxies` list.
///
/// Field order here is the key order in the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyNode {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: ProxyType,
    pub server: String,
    pub port: u16,
    pub cipher: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<bool>,
}

impl ProxyNode {
    pub fn new(
        name: impl Into<String>,
        server: impl Into<String>,
        port: u16,
        cipher: impl Into<String>,
        password: impl Into<String>,
        udp: Option<bool>,
    ) -> Self {
        ProxyNode {
            name: name.into(),
            proxy_type: ProxyType::Shadowsocks,
            server: server.into(),
            port,
            cipher: cipher.into(),
            password: password.into(),
            udp,
        }
    }

    /// Encodes the node back into an `ss://` share-link.
    ///
    /// The payload is `method:password@server:port` in unpadded URL-safe
    /// Base64; IPv6 servers are bracketed. The name is appended verbatim.
    pub fn to_link(&self) -> String {
        let server = if self.server.contains(':') {
            format!("[{}]", self.server)
        } else {
            self.server.clone()
        };
        let payload = format!("{}:{}@{}:{}", self.cipher, self.password, server, self.port);
        format!("ss://{}#{}", url_safe_base64_encode(&payload), self.name)
    }
}
