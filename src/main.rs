/*
Análisis de golpes de bádminton - Rust + ONNX

Toma una muestra IMU de 9 campos desde un JSON de entrada, la trata como
ventana de longitud 1, extrae las 48 características y clasifica el golpe
con el modelo ONNX preentrenado. Si el modelo no está disponible, cae a
una etiqueta uniformemente aleatoria y lo avisa por stderr: nunca se hace
pasar por una predicción real.

Uso:
    raquetoscopio --input golpe.json --output resultado.json

Cualquier error (entrada malformada, ventana inválida, salida no
escribible) termina el proceso con código 1 y un diagnóstico en stderr,
sin dejar un artefacto de salida parcial.
*/

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use raquetoscopio::analyzer::{analyze_sample, ShotPrediction};
use raquetoscopio::shot_classifier::ShotClassifier;
use raquetoscopio::types::SensorSample;

const MODEL_PATH: &str = "modelo_golpes.onnx";
const CLASSES_PATH: &str = "classes.json";

fn parse_args() -> Result<(PathBuf, PathBuf)> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args.next().ok_or_else(|| anyhow!("--input requiere una ruta"))?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args.next().ok_or_else(|| anyhow!("--output requiere una ruta"))?;
                output = Some(PathBuf::from(value));
            }
            other => {
                bail!(
                    "Argumento desconocido: {} (uso: raquetoscopio --input <entrada.json> --output <salida.json>)",
                    other
                );
            }
        }
    }

    let input = input.ok_or_else(|| anyhow!("Falta el argumento --input"))?;
    let output = output.ok_or_else(|| anyhow!("Falta el argumento --output"))?;
    Ok((input, output))
}

fn main() -> Result<()> {
    let (input_path, output_path) = parse_args()?;

    let raw = fs::read_to_string(&input_path)
        .with_context(|| format!("No se pudo leer la entrada {:?}", input_path))?;
    let sample: SensorSample = serde_json::from_str(&raw)
        .with_context(|| format!("JSON de entrada inválido en {:?}", input_path))?;

    // El modelo ausente no es un fallo: es el modo degradado explícito
    let mut classifier = match ShotClassifier::new(MODEL_PATH, CLASSES_PATH) {
        Ok(clf) => Some(clf),
        Err(e) => {
            eprintln!("⚠️  Modelo no disponible ({}); se usará una etiqueta aleatoria", e);
            None
        }
    };

    let outcome = analyze_sample(&sample, classifier.as_mut())?;

    match &outcome.prediction {
        ShotPrediction::Model { label, confidence } => {
            println!("🎯 Golpe: {} (conf: {:.1}%)", label, confidence * 100.0);
        }
        ShotPrediction::Fallback { label } => {
            println!("🎲 Golpe (aleatorio, sin modelo): {}", label);
        }
    }

    // Serializar antes de tocar el archivo: nunca un JSON parcial
    let json = serde_json::to_string(&outcome.analysis)?;
    fs::write(&output_path, json)
        .with_context(|| format!("No se pudo escribir la salida {:?}", output_path))?;

    println!("✅ Resultado escrito en {:?}", output_path);
    Ok(())
}
