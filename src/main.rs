use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

use simulador_domain::{WizardDefinition, WizardVariant};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use wizard::stubs::InMemoryForm;
use wizard::{FormAdapter, NextOutcome, WizardController};

mod console;

use console::ConsoleView;

type Input = Lines<BufReader<Stdin>>;

/// Simulador solar en consola.
///
/// Opciones soportadas:
/// 1) Siguiente paso (en el penúltimo, calcular)
/// 2) Paso anterior
/// 3) Ir a un paso
/// 4) Editar un campo
/// 5) Estimar el consumo anual
/// 6) Ver los datos que se enviarían
/// 7) Reiniciar
/// 8) Salir
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();
    dotenvy::dotenv().ok();

    let definition = load_definition()?;
    let client = simulador_client::new_from_env()?;
    tracing::info!("endpoint de simulación: {}", client.config().endpoint);

    let form = Arc::new(InMemoryForm::new());
    let view = Arc::new(ConsoleView::new(definition.clone(), Arc::clone(&form)));
    let mut ctl = WizardController::new(definition, form.clone(), view, Arc::new(client));
    ctl.initialize();

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("\n== Simulador solar ({}/{}) ==", ctl.current_step(), ctl.total_steps());
        println!("1) Siguiente");
        println!("2) Anterior");
        println!("3) Ir al paso");
        println!("4) Editar campo");
        println!("5) Estimar consumo anual");
        println!("6) Ver datos recogidos");
        println!("7) Reiniciar");
        println!("8) Salir");
        let Some(choice) = prompt(&mut input, "Elige una opción: ").await? else {
            break;
        };
        match choice.trim() {
            "1" => match ctl.next_step().await {
                NextOutcome::Blocked(v) => println!("Campos pendientes: {}", v.invalid_fields().join(", ")),
                NextOutcome::AtLastStep => println!("Ya estás en el último paso"),
                NextOutcome::Advanced(_) | NextOutcome::Submitted(_) => {}
            },
            "2" => {
                if !ctl.prev_step() {
                    println!("Ya estás en el primer paso");
                }
            }
            "3" => {
                let Some(raw) = prompt(&mut input, "Número de paso: ").await? else { break };
                match raw.trim().parse::<usize>() {
                    Ok(n) if ctl.go_to_step(n) => {}
                    _ => eprintln!("Paso inválido: {}", raw.trim()),
                }
            }
            "4" => {
                let Some(name) = prompt(&mut input, "Campo: ").await? else { break };
                let name = name.trim().to_string();
                if ctl.definition().field(&name).is_none() {
                    eprintln!("Campo desconocido: {}", name);
                    continue;
                }
                let Some(value) = prompt(&mut input, "Valor (enter para vaciar): ").await? else { break };
                let value = value.trim();
                form.set_field_value(&name, if value.is_empty() { None } else { Some(value.to_string()) });
                ctl.on_field_edited(&name);
            }
            "5" => {
                let Some(habitantes) = prompt(&mut input, "Habitantes (1-5): ").await? else { break };
                let Some(tipo) = prompt(&mut input, "Tipo de vivienda (piso/casa/chalet): ").await? else { break };
                form.set("habitantes", habitantes.trim());
                form.set("tipo_vivienda", tipo.trim());
                ctl.estimate_consumption();
            }
            "6" => match ctl.collect_form_data().to_json().map_err(|e| e.to_string())
                            .and_then(|v| serde_json::to_string_pretty(&v).map_err(|e| e.to_string()))
            {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializando los datos: {}", e),
            },
            "7" => ctl.reset(),
            "8" => {
                println!("Saliendo...");
                break;
            }
            other => println!("Opción inválida: {}", other),
        }
    }

    ctl.shutdown();
    Ok(())
}

/// `SIMULADOR_PASOS` (definición JSON) tiene prioridad sobre
/// `SIMULADOR_VARIANTE`.
fn load_definition() -> Result<WizardDefinition, Box<dyn Error>> {
    if let Ok(path) = std::env::var("SIMULADOR_PASOS") {
        let json = std::fs::read_to_string(&path)?;
        tracing::info!("definición de pasos cargada desde {}", path);
        return Ok(WizardDefinition::from_json(&json)?);
    }
    let variant = match std::env::var("SIMULADOR_VARIANTE") {
        Ok(v) => v.parse::<WizardVariant>()?,
        Err(_) => WizardVariant::default(),
    };
    tracing::info!("variante del simulador: {}", variant);
    Ok(variant.definition())
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_target(true)
                                                                      .with_writer(io::stderr))
                                  .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                                                                 "info".into()
                                                                                             }))
                                  .init();
}

/// Lee una línea; `None` al cerrarse la entrada.
async fn prompt(input: &mut Input, msg: &str) -> io::Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    input.next_line().await
}
