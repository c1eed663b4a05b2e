use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use raquetoscopio::csv_loader::load_samples_from_csv;
use raquetoscopio::training::train;
use raquetoscopio::types::{STEP_SIZE, WINDOW_SIZE};

fn parse_args() -> Result<(PathBuf, PathBuf)> {
    let mut csv_path: Option<PathBuf> = None;
    let mut model_path: Option<PathBuf> = None;

    for arg in env::args().skip(1) {
        if csv_path.is_none() {
            csv_path = Some(PathBuf::from(arg));
        } else if model_path.is_none() {
            model_path = Some(PathBuf::from(arg));
        } else {
            bail!("Uso: train_model <grabacion.csv> [modelo_salida.json]");
        }
    }

    let csv_path = csv_path.ok_or_else(|| anyhow!("Debes especificar el CSV de la grabación"))?;
    let model_path = model_path.unwrap_or_else(|| PathBuf::from("modelo_knn.json"));
    Ok((csv_path, model_path))
}

fn main() -> Result<()> {
    let (csv_path, model_path) = parse_args()?;
    println!("🏸 Entrenando modelo de golpes desde {:?}", csv_path);

    let samples = load_samples_from_csv(&csv_path)?;
    println!("📈 {} muestras cargadas", samples.len());

    let model = train(&samples, WINDOW_SIZE, STEP_SIZE)?;
    println!(
        "🪟 {} ventanas (W={}, S={})",
        model.num_windows(),
        WINDOW_SIZE,
        STEP_SIZE
    );

    // Las etiquetas son aleatorias: este entrenamiento es de juguete y
    // solo deja el pipeline completo listo para un dataset etiquetado real
    println!("\nDistribución de etiquetas (aleatorias):");
    let mut counts: Vec<(&str, usize)> = model.label_counts().into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (label, count) in counts {
        println!("  {:<8} {:>4}", label, count);
    }

    model.save(&model_path)?;
    println!("\n✅ Modelo guardado en {:?}", model_path);
    Ok(())
}
