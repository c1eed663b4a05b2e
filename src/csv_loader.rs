use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;

use crate::types::{SensorSample, SENSOR_FIELDS};

/// Carga una grabación completa desde un CSV con las columnas
/// ACC_X,...,MAG_Z (con encabezado), en orden temporal.
///
/// El formato original de captura es una hoja de cálculo; aquí se consume
/// su exportación a CSV como artefacto externo opaco.
pub fn load_samples_from_csv(path: impl AsRef<Path>) -> Result<Vec<SensorSample>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("No se pudo abrir el CSV {:?}", path))?;

    let mut samples = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.with_context(|| format!("Fila {} inválida en {:?}", row_idx + 1, path))?;
        if record.len() < SENSOR_FIELDS.len() {
            bail!(
                "La fila {} tiene {} columnas; se esperan {}",
                row_idx + 1,
                record.len(),
                SENSOR_FIELDS.len()
            );
        }

        let mut values = [0.0f32; 9];
        for (col_idx, value) in values.iter_mut().enumerate() {
            *value = record[col_idx].trim().parse().with_context(|| {
                format!(
                    "Valor no numérico en fila {}, columna {}",
                    row_idx + 1,
                    SENSOR_FIELDS[col_idx]
                )
            })?;
        }

        samples.push(SensorSample::from_array(values));
    }

    if samples.is_empty() {
        bail!("El CSV {:?} no contiene muestras", path);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_csv() {
        let path = temp_csv(
            "raquetoscopio_valid.csv",
            "ACC_X,ACC_Y,ACC_Z,GYR_X,GYR_Y,GYR_Z,MAG_X,MAG_Y,MAG_Z\n\
             1.0,2.0,3.0,4.0,5.0,6.0,7.0,8.0,9.0\n\
             -1.5,0.0,0.25,0,0,0,40,41,42\n",
        );

        let samples = load_samples_from_csv(&path).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].acc_x, 1.0);
        assert_eq!(samples[0].mag_z, 9.0);
        assert_eq!(samples[1].acc_x, -1.5);
        assert_eq!(samples[1].mag_x, 40.0);
    }

    #[test]
    fn test_row_with_missing_columns_fails() {
        let path = temp_csv(
            "raquetoscopio_short_row.csv",
            "ACC_X,ACC_Y,ACC_Z,GYR_X,GYR_Y,GYR_Z,MAG_X,MAG_Y,MAG_Z\n\
             1.0,2.0,3.0\n",
        );
        assert!(load_samples_from_csv(&path).is_err());
    }

    #[test]
    fn test_non_numeric_cell_fails() {
        let path = temp_csv(
            "raquetoscopio_bad_cell.csv",
            "ACC_X,ACC_Y,ACC_Z,GYR_X,GYR_Y,GYR_Z,MAG_X,MAG_Y,MAG_Z\n\
             1.0,alto,3.0,4.0,5.0,6.0,7.0,8.0,9.0\n",
        );
        assert!(load_samples_from_csv(&path).is_err());
    }

    #[test]
    fn test_header_only_csv_fails() {
        let path = temp_csv(
            "raquetoscopio_empty.csv",
            "ACC_X,ACC_Y,ACC_Z,GYR_X,GYR_Y,GYR_Z,MAG_X,MAG_Y,MAG_Z\n",
        );
        assert!(load_samples_from_csv(&path).is_err());
    }
}
