use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::feature_extractor::FeatureExtractor;
use crate::types::{FeatureVector, SensorSample, NUM_FEATURES, SHOT_TYPES};
use crate::windowing::sliding_windows;

/// Vecinos considerados en la votación k-NN
const K_NEIGHBORS: usize = 5;

/// Modelo k-NN sobre los vectores de características por ventana.
///
/// Es el artefacto del pipeline de entrenamiento de juguete: guarda los
/// vectores etiquetados y clasifica por mayoría entre los k vecinos más
/// cercanos en distancia euclídea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnShotModel {
    k: usize,
    feature_names: Vec<String>,
    samples: Vec<Vec<f32>>,
    labels: Vec<String>,
}

impl KnnShotModel {
    /// Número de ventanas con las que se entrenó el modelo
    pub fn num_windows(&self) -> usize {
        self.samples.len()
    }

    /// Recuento de ventanas por etiqueta
    pub fn label_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for label in &self.labels {
            *counts.entry(label.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Clasifica un vector de características por votación k-NN.
    /// La confianza es la fracción de vecinos que votó por la ganadora.
    pub fn predict(&self, features: &FeatureVector) -> Result<(String, f32)> {
        if self.samples.is_empty() {
            bail!("El modelo no contiene ventanas de entrenamiento");
        }
        if features.len() != self.feature_names.len() {
            bail!(
                "Vector de características de tamaño {}; el modelo espera {}",
                features.len(),
                self.feature_names.len()
            );
        }

        let query = features.values();
        let mut dists: Vec<(f32, &str)> = self
            .samples
            .iter()
            .zip(&self.labels)
            .map(|(stored, label)| (euclidean_distance(&query, stored), label.as_str()))
            .collect();
        dists.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let k = self.k.min(dists.len()).max(1);
        let mut votes: HashMap<&str, usize> = HashMap::new();
        for &(_, label) in &dists[..k] {
            *votes.entry(label).or_insert(0) += 1;
        }

        // votes nunca está vacío: k >= 1
        let (winner, count) = votes
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(a.0)))
            .unwrap();

        Ok((winner.to_string(), count as f32 / k as f32))
    }

    /// Guarda el modelo como artefacto JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("No se pudo escribir el modelo {:?}", path))
    }

    /// Carga un modelo guardado con `save`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("No se pudo leer el modelo {:?}", path))?;
        let model: Self = serde_json::from_str(&content)
            .with_context(|| format!("Modelo corrupto en {:?}", path))?;
        Ok(model)
    }
}

/// Entrena el modelo de juguete sobre una grabación completa.
///
/// Trocea la grabación en ventanas deslizantes, extrae las 48
/// características de cada una y asigna etiquetas uniformemente aleatorias
/// (no hay dataset etiquetado real; la calidad del modelo no es objetivo
/// de este pipeline). Todo el trabajo ocurre dentro de esta función; no
/// hay efectos al cargar el módulo.
pub fn train(
    samples: &[SensorSample],
    window_size: usize,
    step_size: usize,
) -> Result<KnnShotModel> {
    let windows = sliding_windows(samples, window_size, step_size);
    if windows.is_empty() {
        bail!(
            "La grabación tiene {} muestras; se necesita al menos una ventana de {}",
            samples.len(),
            window_size
        );
    }

    let extractor = FeatureExtractor::new();
    let mut rng = rand::thread_rng();

    let mut feature_names: Vec<String> = Vec::new();
    let mut vectors = Vec::with_capacity(windows.len());
    let mut labels = Vec::with_capacity(windows.len());

    for window in &windows {
        let (features, _intensity) = extractor.extract(window)?;
        if feature_names.is_empty() {
            feature_names = features.names().map(String::from).collect();
            debug_assert_eq!(feature_names.len(), NUM_FEATURES);
        }
        vectors.push(features.values());
        labels.push(SHOT_TYPES[rng.gen_range(0..SHOT_TYPES.len())].to_string());
    }

    Ok(KnnShotModel {
        k: K_NEIGHBORS,
        feature_names,
        samples: vectors,
        labels,
    })
}

fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    (0..len).map(|i| (a[i] - b[i]).powi(2)).sum::<f32>().sqrt()
}
