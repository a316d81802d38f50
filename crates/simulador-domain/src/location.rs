// location.rs
//
// Catálogo de provincias argentinas seleccionables en el campo `ubicacion`,
// con las coordenadas usadas para centrar el mapa de la página.
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provincia {
  pub code: &'static str,
  pub name: &'static str,
  pub lat: f64,
  pub lng: f64,
}

const fn p(code: &'static str, lat: f64, lng: f64, name: &'static str) -> Provincia {
  Provincia { code, name, lat, lng }
}

static PROVINCIAS: Lazy<HashMap<&'static str, Provincia>> = Lazy::new(|| {
  [p("caba", -34.6131, -58.3772, "Ciudad de Buenos Aires"),
   p("buenos_aires", -34.9214, -57.9544, "La Plata, Buenos Aires"),
   p("catamarca", -28.4696, -65.7795, "San Fernando del Valle de Catamarca"),
   p("chaco", -27.4512, -58.9867, "Resistencia, Chaco"),
   p("chubut", -43.2481, -65.3055, "Rawson, Chubut"),
   p("cordoba", -31.4201, -64.1888, "Córdoba"),
   p("corrientes", -27.4806, -58.8341, "Corrientes"),
   p("entre_rios", -31.7413, -60.5115, "Paraná, Entre Ríos"),
   p("formosa", -26.1775, -58.1781, "Formosa"),
   p("jujuy", -24.1858, -65.2995, "San Salvador de Jujuy"),
   p("la_pampa", -36.6167, -64.2833, "Santa Rosa, La Pampa"),
   p("la_rioja", -29.4139, -66.8561, "La Rioja"),
   p("mendoza", -32.8833, -68.8167, "Mendoza"),
   p("misiones", -27.3621, -55.9008, "Posadas, Misiones"),
   p("neuquen", -38.9516, -68.0591, "Neuquén"),
   p("rio_negro", -40.8135, -62.9967, "Viedma, Río Negro"),
   p("salta", -24.7821, -65.4232, "Salta"),
   p("san_juan", -31.5375, -68.5364, "San Juan"),
   p("san_luis", -33.2949, -66.3281, "San Luis"),
   p("santa_cruz", -51.6230, -69.2168, "Río Gallegos, Santa Cruz"),
   p("santa_fe", -31.6333, -60.7000, "Santa Fe"),
   p("santiago_del_estero", -27.7824, -64.2642, "Santiago del Estero"),
   p("tierra_del_fuego", -54.8019, -68.3030, "Ushuaia, Tierra del Fuego"),
   p("tucuman", -26.8083, -65.2176, "San Miguel de Tucumán")].into_iter()
                                                               .map(|prov| (prov.code, prov))
                                                               .collect()
});

/// Busca una provincia por su código de formulario.
pub fn provincia(code: &str) -> Option<&'static Provincia> {
  PROVINCIAS.get(code.trim())
}

/// Códigos disponibles, ordenados alfabéticamente.
pub fn provincia_codes() -> Vec<&'static str> {
  let mut codes: Vec<_> = PROVINCIAS.keys().copied().collect();
  codes.sort_unstable();
  codes
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalog_has_all_jurisdictions() {
    assert_eq!(provincia_codes().len(), 24);
    assert_eq!(provincia("cordoba").unwrap().name, "Córdoba");
    assert!(provincia("madrid").is_none());
    assert!(provincia("").is_none());
  }
}
