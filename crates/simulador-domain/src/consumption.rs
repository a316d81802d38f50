// consumption.rs
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Consumo usado cuando la combinación vivienda/habitantes no está en la tabla.
pub const FALLBACK_CONSUMPTION_KWH: u32 = 4000;

/// kWh/año estimados por tipo de vivienda y número de habitantes (1..=5).
static CONSUMPTION_TABLE: Lazy<HashMap<&'static str, [u32; 5]>> = Lazy::new(|| {
  HashMap::from([("piso", [1800, 2500, 3200, 3800, 4500]),
                 ("casa", [2200, 3000, 3800, 4500, 5500]),
                 ("chalet", [2800, 3800, 4800, 5800, 7000])])
});

/// Estima el consumo anual en kWh a partir del tipo de vivienda y los
/// habitantes. Devuelve `FALLBACK_CONSUMPTION_KWH` fuera de la tabla.
pub fn estimate_annual_consumption(tipo_vivienda: &str, habitantes: &str) -> u32 {
  let row = CONSUMPTION_TABLE.get(tipo_vivienda.trim().to_lowercase().as_str());
  let idx = habitantes.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1));
  match (row, idx) {
    (Some(row), Some(i)) if i < row.len() => row[i],
    _ => {
      debug!("sin estimación para {}/{}: se usa {} kWh", tipo_vivienda, habitantes, FALLBACK_CONSUMPTION_KWH);
      FALLBACK_CONSUMPTION_KWH
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_lookup() {
    assert_eq!(estimate_annual_consumption("piso", "1"), 1800);
    assert_eq!(estimate_annual_consumption("casa", "4"), 4500);
    assert_eq!(estimate_annual_consumption("chalet", "5"), 7000);
  }

  #[test]
  fn fallback_outside_table() {
    assert_eq!(estimate_annual_consumption("casa", "6"), FALLBACK_CONSUMPTION_KWH);
    assert_eq!(estimate_annual_consumption("casa", "0"), FALLBACK_CONSUMPTION_KWH);
    assert_eq!(estimate_annual_consumption("iglú", "2"), FALLBACK_CONSUMPTION_KWH);
  }
}
