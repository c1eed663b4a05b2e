/*!
Raquetoscopio: análisis de golpes de bádminton a partir de sensores IMU.

Pipeline offline en dos mitades que comparten el extractor de
características:

1. Entrenamiento por lotes: grabación CSV → ventanas deslizantes →
   vectores de 48 características → modelo k-NN de juguete.
2. Inferencia de un golpe: muestra JSON (ventana de longitud 1) →
   características → clasificador ONNX preentrenado (o etiqueta aleatoria
   si no hay modelo) → sugerencias → resultado JSON.
*/

pub mod analyzer;
pub mod csv_loader;
pub mod feature_extractor;
pub mod shot_classifier;
pub mod suggestions;
pub mod training;
pub mod types;
pub mod windowing;
