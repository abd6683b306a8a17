//! One hop of a traversal: which edges to follow from a vertex

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HugeError, HugeResult};
use crate::structure::constant::Direction;
use crate::structure::graph::PropertyMap;
use crate::structure::traverser::{DEFAULT_DEGREE, NO_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStep {
    pub direction: Direction,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: PropertyMap,
    pub degree: i64,
    #[serde(default)]
    pub skip_degree: i64,
}

impl Default for EdgeStep {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            labels: Vec::new(),
            properties: PropertyMap::new(),
            degree: DEFAULT_DEGREE,
            skip_degree: 0,
        }
    }
}

impl EdgeStep {
    pub fn builder() -> EdgeStepBuilder {
        EdgeStepBuilder::default()
    }

    pub fn validate(&self) -> HugeResult<()> {
        check_degree(self.degree)?;
        if self.skip_degree < 0 {
            return Err(HugeError::Client(format!(
                "The skipped degree must be >= 0, but got '{}'",
                self.skip_degree
            )));
        }
        if self.skip_degree > 0 && (self.degree == NO_LIMIT || self.skip_degree < self.degree) {
            return Err(HugeError::Client(format!(
                "The skipped degree must be >= degree, but got skipped degree '{}' and degree '{}'",
                self.skip_degree, self.degree
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_degree(degree: i64) -> HugeResult<()> {
    if degree > 0 || degree == NO_LIMIT {
        Ok(())
    } else {
        Err(HugeError::Client(format!(
            "The degree must be > 0 or == -1, but got: {}",
            degree
        )))
    }
}

/// Mutable builder for [`EdgeStep`], usually reached through
/// [`JaccardSimilarityRequestBuilder::step`](super::JaccardSimilarityRequestBuilder::step)
#[derive(Debug, Clone, Default)]
pub struct EdgeStepBuilder {
    step: EdgeStep,
}

impl EdgeStepBuilder {
    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.step.direction = direction;
        self
    }

    /// Edge labels to follow; repeated labels are kept once
    pub fn labels<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            let label = label.into();
            if !self.step.labels.contains(&label) {
                self.step.labels.push(label);
            }
        }
        self
    }

    /// Only follow edges whose property `key` equals `value`
    pub fn properties(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.step.properties.insert(key.into(), value.into());
        self
    }

    pub fn degree(&mut self, degree: i64) -> &mut Self {
        self.step.degree = degree;
        self
    }

    pub fn skip_degree(&mut self, skip_degree: i64) -> &mut Self {
        self.step.skip_degree = skip_degree;
        self
    }

    pub fn build(&self) -> HugeResult<EdgeStep> {
        self.step.validate()?;
        Ok(self.step.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let step = EdgeStep::builder().build().unwrap();
        assert_eq!(step.direction, Direction::Both);
        assert_eq!(step.degree, 10_000);
        assert_eq!(step.skip_degree, 0);
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({
                "direction": "BOTH",
                "labels": [],
                "properties": {},
                "degree": 10000,
                "skip_degree": 0
            })
        );
    }

    #[test]
    fn test_degree_rules() {
        let mut builder = EdgeStep::builder();
        assert!(builder.degree(0).build().is_err());
        assert!(builder.degree(-1).build().is_ok());
        assert!(builder.degree(-5).build().is_err());

        builder.degree(100).skip_degree(50);
        assert!(builder.build().is_err());
        builder.skip_degree(100);
        assert!(builder.build().is_ok());
        builder.skip_degree(-1);
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_labels_are_deduplicated() {
        let step = EdgeStep::builder()
            .labels(["knows", "created"])
            .labels(["knows"])
            .direction(Direction::Out)
            .build()
            .unwrap();
        assert_eq!(step.labels, vec!["knows", "created"]);
        assert_eq!(step.direction, Direction::Out);
    }
}
