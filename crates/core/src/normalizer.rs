//! Record normalizer
//!
//! Turns caller descriptions into canonical [`MetricRecord`]s. This is a pure
//! transform: names are canonicalized and a batch-level default step is
//! backfilled. Values are not inspected here.

use mldiag_domain::{MetricDescription, MetricRecord};

/// Normalize a batch of descriptions, preserving order.
///
/// A record-level step always wins over `default_step`.
pub fn normalize(
    descriptions: Vec<MetricDescription>,
    default_step: Option<u64>,
) -> Vec<MetricRecord> {
    descriptions.into_iter().map(|description| normalize_one(description, default_step)).collect()
}

pub fn normalize_one(description: MetricDescription, default_step: Option<u64>) -> MetricRecord {
    let MetricDescription { metric_name, value, step, labels } = description;

    MetricRecord { name: metric_name.into(), value, step: step.or(default_step), labels }
}

#[cfg(test)]
mod tests {
    use mldiag_domain::{Labels, MetricType};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_record_step_wins_over_default() {
        for (own, default) in [(0, 1), (5, 1), (7, 7), (10, 0)] {
            let record =
                normalize_one(MetricDescription::new("loss", 1.0).with_step(own), Some(default));
            assert_eq!(record.step, Some(own));
        }
    }

    #[test]
    fn test_default_step_backfilled() {
        let record = normalize_one(MetricDescription::new("loss", 1.0), Some(9));
        assert_eq!(record.step, Some(9));

        let record = normalize_one(MetricDescription::new("loss", 1.0), None);
        assert_eq!(record.step, None);
    }

    #[test]
    fn test_known_metric_type_unwrapped() {
        let record = normalize_one(MetricDescription::new(MetricType::LearningRate, 0.01), None);
        assert_eq!(record.name, "learning_rate");

        let record = normalize_one(MetricDescription::new("my_metric", 0.01), None);
        assert_eq!(record.name, "my_metric");
    }

    #[test]
    fn test_values_and_labels_untouched() {
        let mut labels = Labels::new();
        labels.insert("hostname".into(), "h".into());

        let record = normalize_one(
            MetricDescription::new("bad", "not a number").with_labels(labels.clone()),
            Some(2),
        );

        assert_eq!(record.value, json!("not a number"));
        assert_eq!(record.labels, Some(labels));
    }

    #[test]
    fn test_batch_scenario() {
        let records = normalize(
            vec![
                MetricDescription::new("loss", 0.42),
                MetricDescription::new("lr", 0.01).with_step(5),
            ],
            Some(1),
        );

        assert_eq!(
            records,
            vec![
                MetricRecord::new("loss", 0.42).with_step(1),
                MetricRecord::new("lr", 0.01).with_step(5),
            ]
        );
    }
}
