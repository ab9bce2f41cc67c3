use crate::utils::template_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

/// Ordered workload-configuration keys recognized by the report. Keys absent
/// from the input still render, with an `undefined` value.
pub const WORKLOAD_CONFIG_KEYS: [&str; 22] = [
    "name",
    "topics",
    "partitionsPerTopic",
    "partitionsPerTopicList",
    "randomTopicNames",
    "keyDistributor",
    "messageSize",
    "useRandomizedPayloads",
    "randomBytesRatio",
    "randomizedPayloadPoolSize",
    "payloadFile",
    "subscriptionsPerTopic",
    "producersPerTopic",
    "producersPerTopicList",
    "consumerPerSubscription",
    "producerRate",
    "producerRateList",
    "consumerBacklogSizeGB",
    "backlogDrainRatio",
    "testDurationMinutes",
    "warmupDurationMinutes",
    "logIntervalMillis",
];

/// Run metadata and derived metrics extracted from one system's benchmark
/// logs. Every field is optional on the wire; the loosely-typed scalars
/// arrive as either strings or numbers and are carried as raw JSON values.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ExtractedRunData {
    #[serde(default)]
    pub workload_config: Option<Value>,
    #[serde(default)]
    pub producer_config: Option<String>,
    #[serde(default)]
    pub consumer_config: Option<String>,
    #[serde(default)]
    pub topic_config: Option<String>,
    #[serde(default)]
    pub replication_factor: Option<Value>,
    #[serde(default)]
    pub average_throughput: Option<Value>,
    #[serde(default)]
    pub average_pub_latency: Option<Value>,
    #[serde(default)]
    pub p99_pub_latency: Option<Value>,
}

impl ExtractedRunData {
    /// Renders the workload configuration as `key: value` lines over the
    /// fixed key list. A missing or null configuration renders empty.
    pub fn workload_config_pairs(&self) -> String {
        let config = match &self.workload_config {
            Some(config) if !config.is_null() => config,
            _ => {
                error!("Workload configuration is undefined or null");
                return String::new();
            }
        };

        WORKLOAD_CONFIG_KEYS
            .iter()
            .map(|key| format!("{key}: {}", template_value(config.get(key))))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn producer_config_pairs(&self) -> String {
        config_to_key_value_pairs(self.producer_config.as_deref())
    }

    pub fn consumer_config_pairs(&self) -> String {
        config_to_key_value_pairs(self.consumer_config.as_deref())
    }

    pub fn topic_config_pairs(&self) -> String {
        config_to_key_value_pairs(self.topic_config.as_deref())
    }
}

/// Reinterprets a comma-space-delimited `key=value` string as
/// newline-delimited `key: value` pairs. Only the first `=` of each pair is
/// rewritten, so values may themselves contain `=`.
fn config_to_key_value_pairs(config: Option<&str>) -> String {
    let Some(config) = config else {
        return String::new();
    };

    config
        .split(", ")
        .map(|pair| pair.replacen('=', ": ", 1))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_convert_config_string_to_key_value_pairs() {
        let data = ExtractedRunData {
            producer_config: Some("acks=1, linger.ms=5".to_string()),
            ..Default::default()
        };

        assert_eq!(data.producer_config_pairs(), "acks: 1\nlinger.ms: 5");
    }

    #[test]
    fn should_rewrite_only_the_first_equals_sign() {
        let data = ExtractedRunData {
            topic_config: Some("compression.type=producer, note=a=b".to_string()),
            ..Default::default()
        };

        assert_eq!(
            data.topic_config_pairs(),
            "compression.type: producer\nnote: a=b"
        );
    }

    #[test]
    fn should_render_missing_config_string_as_empty() {
        let data = ExtractedRunData::default();

        assert_eq!(data.consumer_config_pairs(), "");
    }

    #[test]
    fn should_render_workload_pairs_in_declared_order() {
        let data = ExtractedRunData {
            workload_config: Some(json!({
                "name": "1-topic-16-partitions-4kb",
                "topics": 1,
                "partitionsPerTopic": 16,
                "messageSize": 4096
            })),
            ..Default::default()
        };

        let pairs = data.workload_config_pairs();
        let lines = pairs.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), WORKLOAD_CONFIG_KEYS.len());
        assert_eq!(lines[0], "name: 1-topic-16-partitions-4kb");
        assert_eq!(lines[1], "topics: 1");
        assert_eq!(lines[2], "partitionsPerTopic: 16");
        assert_eq!(lines[3], "partitionsPerTopicList: undefined");
        assert_eq!(lines[6], "messageSize: 4096");
        assert_eq!(lines[21], "logIntervalMillis: undefined");
    }

    #[test]
    fn should_render_missing_workload_config_as_empty() {
        let data = ExtractedRunData::default();

        assert_eq!(data.workload_config_pairs(), "");
    }

    #[test]
    fn should_render_null_workload_config_as_empty() {
        let data = ExtractedRunData {
            workload_config: Some(Value::Null),
            ..Default::default()
        };

        assert_eq!(data.workload_config_pairs(), "");
    }

    #[test]
    fn should_be_deserialized_with_missing_fields() {
        let json = r#"{"replication_factor": "3", "average_throughput": 198.3}"#;

        let data = serde_json::from_str::<ExtractedRunData>(json).unwrap();

        assert_eq!(data.replication_factor, Some(json!("3")));
        assert_eq!(data.average_throughput, Some(json!(198.3)));
        assert!(data.workload_config.is_none());
        assert!(data.producer_config.is_none());
    }
}
