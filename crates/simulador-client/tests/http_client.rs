use serde_json::{json, Value};
use simulador_client::{ClientConfig, HttpSimulationClient};
use simulador_domain::{FieldValue, FormValues};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wizard::{SimulationClient, WizardError};

/// Petición capturada por el servidor falso.
struct Captured {
  head: String,
  body: Value,
}

/// Servidor HTTP de un solo uso: lee una petición y responde con `status` y
/// `body`.
async fn fake_server(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let handle = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let (head, body_start) = loop {
      let n = socket.read(&mut chunk).await.unwrap();
      assert!(n > 0, "conexión cerrada antes de las cabeceras");
      buf.extend_from_slice(&chunk[..n]);
      if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
        break (String::from_utf8_lossy(&buf[..pos]).to_string(), pos + 4);
      }
    };
    let length = head.lines()
                     .find_map(|l| {
                       let (k, v) = l.split_once(':')?;
                       k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().unwrap())
                     })
                     .unwrap_or(0);
    while buf.len() < body_start + length {
      let n = socket.read(&mut chunk).await.unwrap();
      buf.extend_from_slice(&chunk[..n]);
    }
    let reply = format!("HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body);
    socket.write_all(reply.as_bytes()).await.unwrap();
    socket.shutdown().await.ok();
    let body = serde_json::from_slice(&buf[body_start..body_start + length]).unwrap_or(Value::Null);
    Captured { head, body }
  });
  (format!("http://{}/simulador/", addr), handle)
}

fn client_for(url: &str) -> HttpSimulationClient {
  HttpSimulationClient::new(ClientConfig::new(url, Duration::from_secs(5)).unwrap()).unwrap()
}

fn sample_values() -> FormValues {
  let mut values = FormValues::new();
  values.insert("consumo_anual", FieldValue::Number(3500.0));
  values.insert("ubicacion", FieldValue::Text("cordoba".into()));
  values.insert("bateria", FieldValue::Bool(true));
  values
}

const SUCCESS_BODY: &str = r#"{"success":true,"resultados":{"potencia_instalada":3.3,"num_paneles":6,"produccion_anual":5200,"ahorro_total_anual":640.5,"autoconsumo_porcentaje":65,"periodo_retorno":7.2,"costo_instalacion":4600,"superficie_necesaria":12,"ahorro_25_anos":16012.5,"incluye_bateria":true,"datos_anuales":[{"ano":1,"ahorro_acumulado":640.5}],"co2_evitado":2.1}}"#;

#[tokio::test]
async fn posts_json_and_decodes_success() {
  let (url, server) = fake_server("200 OK", SUCCESS_BODY).await;
  let resp = client_for(&url).simulate(&sample_values()).await.unwrap();
  assert!(resp.success);
  let r = resp.resultados.unwrap();
  assert_eq!(r.num_paneles, Some(6));
  assert!(r.incluye_bateria);
  assert_eq!(r.datos_anuales.len(), 1);
  assert_eq!(r.extra.get("co2_evitado"), Some(&json!(2.1)));

  let captured = server.await.unwrap();
  let head = captured.head.to_lowercase();
  assert!(head.starts_with("post /simulador/ http/1.1"));
  assert!(head.contains("content-type: application/json"));
  assert!(head.contains("accept: application/json"));
  assert_eq!(captured.body, json!({"consumo_anual": 3500.0, "ubicacion": "cordoba", "bateria": true}));
}

#[tokio::test]
async fn loose_result_numbers_still_decode() {
  let body = r#"{"success":true,"resultados":{"potencia_instalada":2.2,"num_paneles":4.0,"periodo_retorno":null,"datos_anuales":[]}}"#;
  let (url, server) = fake_server("200 OK", body).await;
  let resp = client_for(&url).simulate(&sample_values()).await.unwrap();
  assert!(resp.success);
  let r = resp.resultados.unwrap();
  assert_eq!(r.num_paneles, Some(4));
  assert_eq!(r.periodo_retorno, None);
  assert_eq!(r.costo_instalacion, None);
  server.await.unwrap();
}

#[tokio::test]
async fn logic_failure_is_returned_as_response() {
  let (url, server) = fake_server("200 OK", r#"{"success":false,"error":"Ubicación no soportada"}"#).await;
  let resp = client_for(&url).simulate(&sample_values()).await.unwrap();
  assert!(!resp.success);
  assert_eq!(resp.error.as_deref(), Some("Ubicación no soportada"));
  server.await.unwrap();
}

#[tokio::test]
async fn server_error_is_transport() {
  let (url, server) = fake_server("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
  let err = client_for(&url).simulate(&sample_values()).await.unwrap_err();
  assert!(matches!(err, WizardError::Transport(ref m) if m.contains("500")), "{:?}", err);
  server.await.unwrap();
}

#[tokio::test]
async fn undecodable_body_is_transport() {
  let (url, server) = fake_server("200 OK", "<html>no json</html>").await;
  let err = client_for(&url).simulate(&sample_values()).await.unwrap_err();
  assert!(matches!(err, WizardError::Transport(_)));
  server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_is_transport() {
  // Reserva un puerto y lo libera para que nadie escuche en él.
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);
  let err = client_for(&format!("http://{}/simulador/", addr)).simulate(&sample_values())
                                                               .await
                                                               .unwrap_err();
  assert!(matches!(err, WizardError::Transport(_)));
}
