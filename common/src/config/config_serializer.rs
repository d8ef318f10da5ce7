use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// A blank or comment-only file is reported as empty instead of as a parse failure.
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        let has_content = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Err("Config file is empty".to_string());
        }

        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pacing {
        delay_ms: u64,
    }

    #[test]
    fn test_blank_and_comment_only_content_is_empty() {
        let serializer = YamlConfigSerializer::new();
        let blank: Result<Pacing, String> = serializer.deserialize("  \n\n");
        assert_eq!(blank, Err("Config file is empty".to_string()));
        let comments: Result<Pacing, String> = serializer.deserialize("# delay_ms: 5\n");
        assert_eq!(comments, Err("Config file is empty".to_string()));
    }

    #[test]
    fn test_commented_yaml_is_read() {
        let serializer = YamlConfigSerializer::new();
        let pacing: Pacing = serializer.deserialize("# pacing\ndelay_ms: 40 # ms\n").unwrap();
        assert_eq!(pacing, Pacing { delay_ms: 40 });
    }

    #[test]
    fn test_wrong_type_is_a_deserialize_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Pacing, String> = serializer.deserialize("delay_ms: soon\n");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }
}
