//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the application,
//! separated from the logic that operates on them.
//!
//! # Usage
//!
//! ```rust
//! use ss2clash::models::{ProxyNode, ProxyType};
//!
//! let node = ProxyNode::new("MyNode", "1.2.3.4", 8388, "aes-256-gcm", "secret", Some(true));
//! assert_eq!(node.proxy_type, ProxyType::Shadowsocks);
//! ```
//!
//! Or use the re-exports from the crate root:
//!
//! ```rust
//! use ss2clash::ProxyNode;
//!
//! let node = ProxyNode::new("MyNode", "1.2.3.4", 8388, "aes-256-gcm", "secret", None);
//! assert!(node.to_link().starts_with("ss://"));
//! ```

mod proxy;

pub use proxy::*;
