//! Plan-level containers: fields of energy layers.

use crate::{Error, Result, SpotMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One treatment field (beam) and its energy layers in delivery order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Beam number, if the plan provides one.
    pub beam_number: Option<i32>,
    /// Beam name, if the plan provides one.
    pub beam_name: Option<String>,
    layers: Vec<SpotMap>,
}

impl Field {
    /// Creates a field without beam metadata.
    #[must_use]
    pub fn new(layers: Vec<SpotMap>) -> Self {
        Self {
            beam_number: None,
            beam_name: None,
            layers,
        }
    }

    /// Sets the beam number.
    #[must_use]
    pub fn with_beam_number(mut self, number: Option<i32>) -> Self {
        self.beam_number = number;
        self
    }

    /// Sets the beam name.
    #[must_use]
    pub fn with_beam_name(mut self, name: Option<String>) -> Self {
        self.beam_name = name;
        self
    }

    /// Energy layers of the field.
    #[must_use]
    pub fn layers(&self) -> &[SpotMap] {
        &self.layers
    }

    /// Number of energy layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Short human-readable description, e.g. `Beam 2 "RAO"`.
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.beam_number, self.beam_name.as_deref()) {
            (Some(n), Some(name)) => format!("Beam {n} \"{name}\""),
            (Some(n), None) => format!("Beam {n}"),
            (None, Some(name)) => format!("\"{name}\""),
            (None, None) => "Unnamed beam".to_string(),
        }
    }
}

/// All spot maps of a plan: fields in file order, each with its layers.
///
/// Built once after reading the file and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanMaps {
    /// RT plan label, if present.
    pub label: Option<String>,
    fields: Vec<Field>,
}

impl PlanMaps {
    /// Creates a plan from its fields.
    ///
    /// # Errors
    /// Returns [`Error::EmptyPlan`] for zero fields and
    /// [`Error::EmptyField`] for a field without layers.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::EmptyPlan);
        }
        if let Some(field) = fields.iter().position(|f| f.layers.is_empty()) {
            return Err(Error::EmptyField { field });
        }
        Ok(Self {
            label: None,
            fields,
        })
    }

    /// Sets the plan label.
    #[must_use]
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Fields of the plan.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the field at `index`.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Returns a single layer.
    #[must_use]
    pub fn layer(&self, field: usize, layer: usize) -> Option<&SpotMap> {
        self.fields.get(field)?.layers.get(layer)
    }

    /// Iterates over every layer of every field.
    pub fn all_layers(&self) -> impl Iterator<Item = &SpotMap> {
        self.fields.iter().flat_map(|f| f.layers.iter())
    }

    /// Layer counts per field, in field order.
    #[must_use]
    pub fn layer_counts(&self) -> Vec<usize> {
        self.fields.iter().map(Field::layer_count).collect()
    }

    /// Total number of spots across the plan.
    #[must_use]
    pub fn spot_count(&self) -> usize {
        self.all_layers().map(SpotMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Energy;

    fn layer(weights: &[f64]) -> SpotMap {
        SpotMap::new(vec![0.0; weights.len() * 2], weights.to_vec(), Energy::Unknown).unwrap()
    }

    #[test]
    fn test_plan_rejects_empty() {
        assert_eq!(PlanMaps::new(Vec::new()).unwrap_err(), Error::EmptyPlan);

        let fields = vec![Field::new(vec![layer(&[1.0])]), Field::new(Vec::new())];
        assert_eq!(
            PlanMaps::new(fields).unwrap_err(),
            Error::EmptyField { field: 1 }
        );
    }

    #[test]
    fn test_plan_lookup() {
        let plan = PlanMaps::new(vec![
            Field::new(vec![layer(&[1.0]), layer(&[2.0, 3.0])]),
            Field::new(vec![layer(&[4.0, 5.0, 6.0])]),
        ])
        .unwrap();

        assert_eq!(plan.layer_counts(), vec![2, 1]);
        assert_eq!(plan.spot_count(), 6);
        assert_eq!(plan.layer(0, 1).map(SpotMap::len), Some(2));
        assert!(plan.layer(1, 1).is_none());
        assert!(plan.layer(2, 0).is_none());
    }

    #[test]
    fn test_field_describe() {
        let f = Field::new(vec![layer(&[1.0])]);
        assert_eq!(f.describe(), "Unnamed beam");
        let f = f.with_beam_number(Some(2)).with_beam_name(Some("RAO".into()));
        assert_eq!(f.describe(), "Beam 2 \"RAO\"");
    }
}
