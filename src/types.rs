use serde::Deserialize;

/// Columnas del sensor en el orden fijo del dataset: tres ejes de
/// aceleración, tres de giroscopio y tres de magnetómetro.
pub const SENSOR_FIELDS: [&str; 9] = [
    "ACC_X", "ACC_Y", "ACC_Z", "GYR_X", "GYR_Y", "GYR_Z", "MAG_X", "MAG_Y", "MAG_Z",
];

/// Estadísticos calculados por columna
pub const STATS_PER_FIELD: usize = 5; // mean, std, min, max, range

/// Tamaño de ventana por defecto (muestras)
pub const WINDOW_SIZE: usize = 50;

/// Paso entre ventanas por defecto (50% de solapamiento)
pub const STEP_SIZE: usize = 25;

/// Ancho total del vector de características: 9 columnas x 5 estadísticos
/// más 3 estadísticos de la magnitud de aceleración
pub const NUM_FEATURES: usize = SENSOR_FIELDS.len() * STATS_PER_FIELD + 3; // 48

/// Conjunto cerrado de tipos de golpe que el clasificador puede devolver
pub const SHOT_TYPES: [&str; 6] = ["Smash", "Drop", "Lift", "Clear", "Drive", "Net"];

/// Una muestra cruda de los 9 canales IMU.
///
/// Los nombres JSON coinciden exactamente con las columnas del dataset;
/// campos desconocidos o ausentes se rechazan en la deserialización.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorSample {
    #[serde(rename = "ACC_X")]
    pub acc_x: f32,
    #[serde(rename = "ACC_Y")]
    pub acc_y: f32,
    #[serde(rename = "ACC_Z")]
    pub acc_z: f32,
    #[serde(rename = "GYR_X")]
    pub gyr_x: f32,
    #[serde(rename = "GYR_Y")]
    pub gyr_y: f32,
    #[serde(rename = "GYR_Z")]
    pub gyr_z: f32,
    #[serde(rename = "MAG_X")]
    pub mag_x: f32,
    #[serde(rename = "MAG_Y")]
    pub mag_y: f32,
    #[serde(rename = "MAG_Z")]
    pub mag_z: f32,
}

impl SensorSample {
    /// Construye una muestra desde los 9 valores en el orden de SENSOR_FIELDS
    pub fn from_array(values: [f32; 9]) -> Self {
        Self {
            acc_x: values[0],
            acc_y: values[1],
            acc_z: values[2],
            gyr_x: values[3],
            gyr_y: values[4],
            gyr_z: values[5],
            mag_x: values[6],
            mag_y: values[7],
            mag_z: values[8],
        }
    }

    /// Valor del canal `idx` según el orden de SENSOR_FIELDS
    pub fn field(&self, idx: usize) -> f32 {
        match idx {
            0 => self.acc_x,
            1 => self.acc_y,
            2 => self.acc_z,
            3 => self.gyr_x,
            4 => self.gyr_y,
            5 => self.gyr_z,
            6 => self.mag_x,
            7 => self.mag_y,
            8 => self.mag_z,
            _ => unreachable!("índice de canal fuera de rango: {}", idx),
        }
    }

    /// Norma euclídea de los tres ejes de aceleración
    pub fn acc_magnitude(&self) -> f32 {
        let x2 = self.acc_x * self.acc_x;
        let y2 = self.acc_y * self.acc_y;
        let z2 = self.acc_z * self.acc_z;
        (x2 + y2 + z2).sqrt()
    }
}

/// Vector de características con nombre por entrada y orden de inserción
/// estable. El orden es parte del contrato: el tensor de entrada del
/// clasificador se construye con `values()` en este mismo orden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(String, f32)>,
}

impl FeatureVector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: f32) {
        self.entries.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nombres de las características en orden de inserción
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Valores en el mismo orden que `names()`, listos para el tensor [1, N]
    pub fn values(&self) -> Vec<f32> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    /// Busca una característica por nombre
    pub fn get(&self, name: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acc_magnitude() {
        let sample = SensorSample::from_array([3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(sample.acc_magnitude(), 5.0);
    }

    #[test]
    fn test_field_order_matches_sensor_fields() {
        let sample = SensorSample::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        for idx in 0..SENSOR_FIELDS.len() {
            assert_eq!(sample.field(idx), (idx + 1) as f32);
        }
    }

    #[test]
    fn test_sample_rejects_missing_field() {
        // Falta MAG_Z
        let json = r#"{"ACC_X":1,"ACC_Y":0,"ACC_Z":0,"GYR_X":0,"GYR_Y":0,
                       "GYR_Z":0,"MAG_X":0,"MAG_Y":0}"#;
        assert!(serde_json::from_str::<SensorSample>(json).is_err());
    }

    #[test]
    fn test_sample_rejects_unknown_field() {
        let json = r#"{"ACC_X":1,"ACC_Y":0,"ACC_Z":0,"GYR_X":0,"GYR_Y":0,
                       "GYR_Z":0,"MAG_X":0,"MAG_Y":0,"MAG_Z":0,"EXTRA":1}"#;
        assert!(serde_json::from_str::<SensorSample>(json).is_err());
    }

    #[test]
    fn test_sample_rejects_non_numeric_field() {
        let json = r#"{"ACC_X":"alto","ACC_Y":0,"ACC_Z":0,"GYR_X":0,"GYR_Y":0,
                       "GYR_Z":0,"MAG_X":0,"MAG_Y":0,"MAG_Z":0}"#;
        assert!(serde_json::from_str::<SensorSample>(json).is_err());
    }

    #[test]
    fn test_feature_vector_preserves_order() {
        let mut features = FeatureVector::with_capacity(2);
        features.push("b_mean", 1.0);
        features.push("a_mean", 2.0);

        let names: Vec<&str> = features.names().collect();
        assert_eq!(names, vec!["b_mean", "a_mean"]);
        assert_eq!(features.values(), vec![1.0, 2.0]);
        assert_eq!(features.get("a_mean"), Some(2.0));
        assert_eq!(features.get("c_mean"), None);
    }
}
