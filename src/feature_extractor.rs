use thiserror::Error;

use crate::types::{FeatureVector, SensorSample, NUM_FEATURES, SENSOR_FIELDS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("empty sensor window")]
    EmptyWindow,

    #[error("non-finite value in {field} at sample {index}")]
    NonFiniteValue { field: &'static str, index: usize },
}

/// Extractor de características estadísticas por ventana.
///
/// Función pura sobre la ventana: mismos datos de entrada producen
/// exactamente el mismo vector. La desviación estándar es muestral
/// (divide entre n-1) y vale 0.0 para ventanas de una sola muestra;
/// la misma convención se aplica en entrenamiento e inferencia.
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extrae las 48 características de una ventana y la intensidad
    /// (media de la magnitud de aceleración).
    ///
    /// Por cada una de las 9 columnas: mean, std, min, max, range, en el
    /// orden de SENSOR_FIELDS; al final los tres estadísticos de la
    /// magnitud: ACC_mag_mean, ACC_mag_max, ACC_mag_std.
    pub fn extract(&self, window: &[SensorSample]) -> Result<(FeatureVector, f32), WindowError> {
        if window.is_empty() {
            return Err(WindowError::EmptyWindow);
        }
        self.validate(window)?;

        let mut features = FeatureVector::with_capacity(NUM_FEATURES);

        for (col_idx, col_name) in SENSOR_FIELDS.iter().enumerate() {
            let vals: Vec<f32> = window.iter().map(|s| s.field(col_idx)).collect();
            let min = self.min(&vals);
            let max = self.max(&vals);

            features.push(format!("{}_mean", col_name), self.mean(&vals));
            features.push(format!("{}_std", col_name), self.std(&vals));
            features.push(format!("{}_min", col_name), min);
            features.push(format!("{}_max", col_name), max);
            features.push(format!("{}_range", col_name), max - min);
        }

        // Magnitud de aceleración por muestra; su media se expone dos
        // veces: como característica y como intensidad del golpe
        let acc_mag: Vec<f32> = window.iter().map(|s| s.acc_magnitude()).collect();
        let intensity = self.mean(&acc_mag);
        features.push("ACC_mag_mean", intensity);
        features.push("ACC_mag_max", self.max(&acc_mag));
        features.push("ACC_mag_std", self.std(&acc_mag));

        debug_assert_eq!(features.len(), NUM_FEATURES);
        Ok((features, intensity))
    }

    /// Rechaza ventanas con valores NaN o infinitos en cualquier canal.
    /// Sin sustitución silenciosa: un valor inválido invalida la ventana.
    fn validate(&self, window: &[SensorSample]) -> Result<(), WindowError> {
        for (index, sample) in window.iter().enumerate() {
            for (col_idx, col_name) in SENSOR_FIELDS.iter().enumerate() {
                if !sample.field(col_idx).is_finite() {
                    return Err(WindowError::NonFiniteValue {
                        field: col_name,
                        index,
                    });
                }
            }
        }
        Ok(())
    }

    // ========== Funciones estadísticas ==========

    fn mean(&self, data: &[f32]) -> f32 {
        if data.is_empty() {
            return 0.0;
        }
        data.iter().sum::<f32>() / data.len() as f32
    }

    /// Desviación estándar muestral (n-1); 0.0 si hay una sola muestra
    fn std(&self, data: &[f32]) -> f32 {
        if data.len() <= 1 {
            return 0.0;
        }
        let mean = self.mean(data);
        let variance =
            data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (data.len() - 1) as f32;
        variance.sqrt()
    }

    fn min(&self, data: &[f32]) -> f32 {
        data.iter().fold(f32::INFINITY, |a, &b| a.min(b))
    }

    fn max(&self, data: &[f32]) -> f32 {
        data.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b))
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
