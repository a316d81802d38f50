// form_values.rs
use crate::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Valores recogidos del formulario, en el orden de declaración de los
/// campos. Se serializa como un objeto JSON plano.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(IndexMap<String, FieldValue>);

impl FormValues {
  pub fn new() -> Self {
    Self(IndexMap::new())
  }

  pub fn insert(&mut self, name: &str, value: FieldValue) -> Option<FieldValue> {
    self.0.insert(name.to_string(), value)
  }

  pub fn get(&self, name: &str) -> Option<&FieldValue> {
    self.0.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.0.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
    self.0.iter()
  }

  pub fn to_json(&self) -> Result<serde_json::Value, crate::DomainError> {
    Ok(serde_json::to_value(self)?)
  }
}

impl FromIterator<(String, FieldValue)> for FormValues {
  fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}
