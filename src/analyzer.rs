use anyhow::Result;
use rand::Rng;
use serde::Serialize;

use crate::feature_extractor::FeatureExtractor;
use crate::shot_classifier::ShotClassifier;
use crate::suggestions::suggest_variation;
use crate::types::{SensorSample, SHOT_TYPES};

/// Predicción etiquetada: distingue la salida de un modelo real del modo
/// degradado sin modelo, para que quien llama decida qué hacer con él en
/// vez de recibir una etiqueta aleatoria disfrazada de predicción.
#[derive(Debug, Clone, PartialEq)]
pub enum ShotPrediction {
    /// Salida genuina del clasificador preentrenado
    Model { label: String, confidence: f32 },
    /// Etiqueta uniformemente aleatoria; solo cuando no hay modelo
    Fallback { label: String },
}

impl ShotPrediction {
    pub fn label(&self) -> &str {
        match self {
            ShotPrediction::Model { label, .. } => label,
            ShotPrediction::Fallback { label } => label,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ShotPrediction::Fallback { .. })
    }
}

/// Artefacto de salida de la inferencia, serializado tal cual a JSON
#[derive(Debug, Clone, Serialize)]
pub struct ShotAnalysis {
    #[serde(rename = "Shot")]
    pub shot: String,
    #[serde(rename = "Intensity")]
    pub intensity: f32,
    #[serde(rename = "Suggestions")]
    pub suggestions: Vec<String>,
}

/// Resultado completo: el artefacto serializable más la predicción
/// etiquetada que lo originó
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: ShotAnalysis,
    pub prediction: ShotPrediction,
}

/// Analiza una única muestra tratándola como ventana de longitud 1,
/// como hace la ruta de inferencia de referencia.
pub fn analyze_sample(
    sample: &SensorSample,
    classifier: Option<&mut ShotClassifier>,
) -> Result<AnalysisOutcome> {
    analyze_window(std::slice::from_ref(sample), classifier)
}

/// Analiza una ventana: características + intensidad, clasificación (o
/// etiqueta aleatoria si no hay clasificador) y sugerencias.
pub fn analyze_window(
    window: &[SensorSample],
    classifier: Option<&mut ShotClassifier>,
) -> Result<AnalysisOutcome> {
    let extractor = FeatureExtractor::new();
    let (features, intensity) = extractor.extract(window)?;

    let prediction = match classifier {
        Some(clf) => {
            let (label, confidence) = clf.predict(&features)?;
            ShotPrediction::Model { label, confidence }
        }
        None => {
            let idx = rand::thread_rng().gen_range(0..SHOT_TYPES.len());
            ShotPrediction::Fallback {
                label: SHOT_TYPES[idx].to_string(),
            }
        }
    };

    let suggestions = suggest_variation(prediction.label());

    Ok(AnalysisOutcome {
        analysis: ShotAnalysis {
            shot: prediction.label().to_string(),
            intensity,
            suggestions,
        },
        prediction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_acc_x_sample() -> SensorSample {
        SensorSample::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
    }

    #[test]
    fn test_fallback_analysis_end_to_end() {
        // Sin clasificador: modo degradado explícito
        let outcome = analyze_sample(&unit_acc_x_sample(), None).unwrap();

        assert!(outcome.prediction.is_fallback());
        assert_eq!(outcome.analysis.intensity, 1.0);
        assert!(SHOT_TYPES.contains(&outcome.analysis.shot.as_str()));
        // Las sugerencias corresponden a la etiqueta elegida
        assert_eq!(
            outcome.analysis.suggestions,
            suggest_variation(&outcome.analysis.shot)
        );
    }

    #[test]
    fn test_analysis_serializes_with_exact_field_names() {
        let outcome = analyze_sample(&unit_acc_x_sample(), None).unwrap();
        let value = serde_json::to_value(&outcome.analysis).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["Intensity"], serde_json::json!(1.0));
        assert!(obj["Shot"].is_string());
        assert!(obj["Suggestions"].is_array());
    }

    #[test]
    fn test_empty_window_propagates_error() {
        assert!(analyze_window(&[], None).is_err());
    }

    #[test]
    fn test_multi_sample_window_intensity() {
        // Magnitudes 3 y 5: intensidad media 4
        let window = vec![
            SensorSample::from_array([3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            SensorSample::from_array([3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ];
        let outcome = analyze_window(&window, None).unwrap();
        assert_eq!(outcome.analysis.intensity, 4.0);
    }
}
