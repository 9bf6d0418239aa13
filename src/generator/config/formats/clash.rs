use crate::error::GenError;
use crate::models::ProxyNode;
use crate::utils::yaml::YamlNode;
use serde_yaml::{self, Value};

/// Convert proxies to Clash format
///
/// Parses `base_conf` as the template, merges `nodes` into it and returns the
/// serialized document.
///
/// # Arguments
/// * `nodes` - Decoded proxy nodes, in output order
/// * `base_conf` - Base Clash configuration as a string
pub fn proxy_to_clash(nodes: &[ProxyNode], base_conf: &str) -> Result<String, GenError> {
    let mut yaml_node = YamlNode::from_str(base_conf)?;
    proxy_to_clash_yaml(nodes, &mut yaml_node)?;
    Ok(yaml_node.to_string()?)
}

/// Convert proxies to Clash format with YAML node
///
/// Replaces the top-level `proxies` list with `nodes` and the `proxies`
/// member list of the first entry in `proxy-groups` with the node names.
/// Every other key is left as it was, in place.
///
/// # Errors
/// `GenError::InvalidTemplate` if the root is not a mapping, or
/// `proxy-groups` is missing, not a list, empty, or starts with a non-mapping.
/// The node is not modified in that case.
pub fn proxy_to_clash_yaml(nodes: &[ProxyNode], yaml_node: &mut YamlNode) -> Result<(), GenError> {
    let root = match yaml_node.value {
        Value::Mapping(ref mut map) => map,
        _ => {
            return Err(GenError::InvalidTemplate(
                "root is not a mapping".to_string(),
            ))
        }
    };

    let proxies = nodes
        .iter()
        .map(serde_yaml::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    let names = nodes
        .iter()
        .map(|node| Value::String(node.name.clone()))
        .collect();

    let first_group = match root.get_mut("proxy-groups") {
        Some(Value::Sequence(groups)) => groups.first_mut().ok_or_else(|| {
            GenError::InvalidTemplate("proxy-groups is empty".to_string())
        })?,
        Some(_) => {
            return Err(GenError::InvalidTemplate(
                "proxy-groups is not a list".to_string(),
            ))
        }
        None => {
            return Err(GenError::InvalidTemplate(
                "missing proxy-groups".to_string(),
            ))
        }
    };
    let group = first_group.as_mapping_mut().ok_or_else(|| {
        GenError::InvalidTemplate("proxy-groups[0] is not a mapping".to_string())
    })?;

    group.insert(Value::String("proxies".to_string()), Value::Sequence(names));
    root.insert(Value::String("proxies".to_string()), Value::Sequence(proxies));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"
port: 7890
allow-lan: false
proxies: []
proxy-groups:
  - name: Proxy
    type: select
    proxies: []
  - name: Auto
    type: url-test
    proxies: [DIRECT]
rules:
  - MATCH,Proxy
"#;

    fn sample_nodes() -> Vec<ProxyNode> {
        vec![
            ProxyNode::new("MyNode", "1.2.3.4", 8388, "aes-256-gcm", "secret", Some(true)),
            ProxyNode::new(
                "香港 02",
                "b.example.org",
                9000,
                "chacha20-ietf-poly1305",
                "pw2",
                Some(true),
            ),
        ]
    }

    #[test]
    fn test_proxy_to_clash_yaml_replaces_lists() {
        let mut yaml_node = YamlNode::from_str(TEMPLATE).unwrap();
        proxy_to_clash_yaml(&sample_nodes(), &mut yaml_node).unwrap();

        let names = yaml_node.get_value("proxy-groups.0.proxies").unwrap();
        assert_eq!(
            names,
            &Value::Sequence(vec![
                Value::String("MyNode".to_string()),
                Value::String("香港 02".to_string()),
            ])
        );

        let proxies: Vec<ProxyNode> =
            serde_yaml::from_value(yaml_node.get_value("proxies").unwrap().clone()).unwrap();
        assert_eq!(proxies, sample_nodes());
    }

    #[test]
    fn test_proxy_to_clash_yaml_keeps_other_fields() {
        let original = YamlNode::from_str(TEMPLATE).unwrap();
        let mut yaml_node = original.clone();
        proxy_to_clash_yaml(&sample_nodes(), &mut yaml_node).unwrap();

        for path in [
            "port",
            "allow-lan",
            "rules",
            "proxy-groups.1",
            "proxy-groups.0.name",
            "proxy-groups.0.type",
        ] {
            assert_eq!(yaml_node.get_value(path), original.get_value(path), "{}", path);
        }

        let keys: Vec<&str> = yaml_node
            .value
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["port", "allow-lan", "proxies", "proxy-groups", "rules"]);
    }

    #[test]
    fn test_proxy_to_clash_yaml_inserts_missing_proxies_key() {
        let mut yaml_node =
            YamlNode::from_str("proxy-groups:\n  - name: Proxy\n    type: select\n").unwrap();
        proxy_to_clash_yaml(&sample_nodes(), &mut yaml_node).unwrap();

        assert!(yaml_node.get_value("proxies.1").is_some());
        assert_eq!(
            yaml_node.get_value("proxy-groups.0.proxies.0"),
            Some(&Value::String("MyNode".to_string()))
        );
    }

    #[test]
    fn test_proxy_to_clash_yaml_rejects_bad_templates() {
        for template in [
            "- just\n- a list\n",
            "port: 7890\n",
            "proxy-groups: Proxy\n",
            "proxy-groups: []\n",
            "proxy-groups:\n  - Proxy\n",
        ] {
            let mut yaml_node = YamlNode::from_str(template).unwrap();
            let before = yaml_node.value.clone();
            let err = proxy_to_clash_yaml(&sample_nodes(), &mut yaml_node).unwrap_err();
            assert!(matches!(err, GenError::InvalidTemplate(_)), "{}", template);
            assert_eq!(yaml_node.value, before);
        }
    }

    #[test]
    fn test_proxy_to_clash_writes_non_ascii_verbatim() {
        let output = proxy_to_clash(&sample_nodes(), TEMPLATE).unwrap();
        assert!(output.contains("香港 02"));
        assert!(!output.contains("\\u"));
    }

    #[test]
    fn test_proxy_to_clash_empty_node_list() {
        let output = proxy_to_clash(&[], TEMPLATE).unwrap();
        let yaml_node = YamlNode::from_str(&output).unwrap();
        assert_eq!(yaml_node.get_value("proxies"), Some(&Value::Sequence(vec![])));
        assert_eq!(
            yaml_node.get_value("proxy-groups.0.proxies"),
            Some(&Value::Sequence(vec![]))
        );
    }
}
