use crate::models::{ProxyNode, SS_DEFAULT_NAME};
use crate::utils::base64::url_safe_base64_decode;
use crate::utils::url::url_decode;
use thiserror::Error;

const SS_SCHEME: &str = "ss://";

/// Reasons a single share-link is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("not an ss:// link")]
    UnsupportedScheme,

    #[error("payload is not valid base64")]
    InvalidBase64,

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid port: {0}")]
    InvalidPort(String),
}

/// Knobs for turning a share-link into a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Name given to links without a `#fragment`.
    pub default_name: String,
    /// Emit `udp: true` on every node.
    pub udp: bool,
    /// Percent-decode the `#fragment`.
    pub url_decode_remark: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            default_name: SS_DEFAULT_NAME.to_string(),
            udp: true,
            url_decode_remark: false,
        }
    }
}

/// Parse a Shadowsocks link into a ProxyNode
///
/// Accepts the legacy form `ss://base64(method:password@server:port)#name`.
/// The payload is split on the first `:` (method), then the first `@`
/// (password), then the last `:` (port).
pub fn explode_ss(ss: &str, options: &DecodeOptions) -> Result<ProxyNode, DecodeError> {
    let ss_content = ss
        .strip_prefix(SS_SCHEME)
        .ok_or(DecodeError::UnsupportedScheme)?;

    // Only the first '#' separates the name; the name may contain more.
    let (payload, remark) = ss_content.split_once('#').unwrap_or((ss_content, ""));
    let name = if remark.is_empty() {
        options.default_name.clone()
    } else if options.url_decode_remark {
        url_decode(remark)
    } else {
        remark.to_string()
    };

    let decoded = url_safe_base64_decode(payload).ok_or(DecodeError::InvalidBase64)?;

    let (method, rest) = decoded
        .split_once(':')
        .ok_or(DecodeError::MissingField("method"))?;
    let (password, server_port) = rest
        .split_once('@')
        .ok_or(DecodeError::MissingField("server"))?;
    let (server, port) = server_port
        .rsplit_once(':')
        .ok_or(DecodeError::MissingField("port"))?;

    let server = server
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(server);

    if method.is_empty() {
        return Err(DecodeError::MissingField("method"));
    }
    if server.is_empty() {
        return Err(DecodeError::MissingField("server"));
    }

    let port = match port.parse::<u16>() {
        Ok(p) if p != 0 => p,
        _ => return Err(DecodeError::InvalidPort(port.to_string())),
    };

    Ok(ProxyNode::new(
        name,
        server,
        port,
        method,
        password,
        options.udp.then_some(true),
    ))
}
