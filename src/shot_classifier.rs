use ort::session::Session;
use ort::value::{TensorElementType, ValueType};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use thiserror::Error;

use crate::types::{FeatureVector, NUM_FEATURES};

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("ONNX Runtime error: {0}")]
    OnnxError(#[from] ort::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid feature size: expected {expected}, got {actual}")]
    InvalidFeatureSize { expected: usize, actual: usize },

    #[error("No output tensor found")]
    NoOutputTensor,

    #[error("Missing ONNX {kind}")]
    MissingIo { kind: &'static str },
}

#[derive(Debug, Deserialize)]
struct ClassesJson {
    index_to_class: HashMap<String, String>,
}

/// Clasificador de golpes preentrenado, cargado desde un artefacto ONNX.
///
/// El modelo es una caja negra: consume el vector de 48 características y
/// devuelve probabilidades por clase. El orden de las etiquetas viene del
/// classes.json adjunto, porque el grafo exportado no las incluye.
pub struct ShotClassifier {
    session: Session,
    labels: Vec<String>,
    input_name: String,
    prob_output_name: String,
}

impl ShotClassifier {
    pub fn new(model_path: &str, classes_path: &str) -> Result<Self, ClassifierError> {
        // Cargar etiquetas
        let labels = Self::load_classes(classes_path)?;

        // Cargar modelo ONNX
        let session = Session::builder()?.commit_from_file(model_path)?;

        let input_name = session
            .inputs()
            .get(0)
            .map(|input| input.name().to_string())
            .ok_or(ClassifierError::MissingIo { kind: "input" })?;

        let prob_output_name = session
            .outputs()
            .iter()
            .find(|output| {
                matches!(
                    output.dtype(),
                    ValueType::Tensor {
                        ty: TensorElementType::Float32,
                        ..
                    }
                )
            })
            .or_else(|| session.outputs().get(0))
            .map(|output| output.name().to_string())
            .ok_or(ClassifierError::MissingIo { kind: "output" })?;

        println!("[ONNX] Modelo cargado: {}", model_path);
        println!("[ONNX] Clases: {:?}", labels);

        Ok(Self {
            session,
            labels,
            input_name,
            prob_output_name,
        })
    }

    fn load_classes(path: &str) -> Result<Vec<String>, ClassifierError> {
        let content = fs::read_to_string(path)?;
        let data: ClassesJson = serde_json::from_str(&content)?;

        // Convertir el mapa a Vec ordenado por índice de salida
        let mut pairs: Vec<(usize, String)> = data
            .index_to_class
            .into_iter()
            .filter_map(|(k, v)| k.parse::<usize>().ok().map(|idx| (idx, v)))
            .collect();

        pairs.sort_by_key(|(idx, _)| *idx);
        Ok(pairs.into_iter().map(|(_, name)| name).collect())
    }

    /// Predice el tipo de golpe de un vector de características
    pub fn predict(&mut self, features: &FeatureVector) -> Result<(String, f32), ClassifierError> {
        let scores = self.predict_scores(features)?;

        let (label, &score) = scores
            .iter()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .ok_or(ClassifierError::NoOutputTensor)?;

        Ok((label.clone(), score))
    }

    /// Predice probabilidades para todas las clases
    pub fn predict_scores(
        &mut self,
        features: &FeatureVector,
    ) -> Result<HashMap<String, f32>, ClassifierError> {
        if features.len() != NUM_FEATURES {
            return Err(ClassifierError::InvalidFeatureSize {
                expected: NUM_FEATURES,
                actual: features.len(),
            });
        }

        // Tensor de entrada [1, 48] en el orden estable del vector
        let input_data = features.values();
        let shape_vec = vec![1_usize, NUM_FEATURES];
        let input_value = ort::value::Value::from_array((shape_vec, input_data))?;

        let outputs = self.session.run(ort::inputs![
            self.input_name.as_str() => &input_value,
        ])?;

        let (prob_shape, prob_data) =
            outputs[self.prob_output_name.as_str()].try_extract_tensor::<f32>()?;

        let mut scores = HashMap::new();
        let num_classes = if prob_shape.len() >= 2 {
            prob_shape[1] as usize
        } else {
            prob_shape[0] as usize
        };

        for (i, label) in self.labels.iter().enumerate().take(num_classes) {
            scores.insert(label.clone(), prob_data[i]);
        }

        Ok(scores)
    }

    /// Etiquetas de clase en el orden de salida del modelo
    pub fn get_labels(&self) -> &[String] {
        &self.labels
    }
}
