use crate::types::SensorSample;

/// Genera las ventanas deslizantes de una grabación.
///
/// Produce ventanas en los offsets 0, S, 2S, ... mientras quepa una ventana
/// completa (`offset + W <= N`); la cola parcial se descarta, nunca se
/// rellena. Para `N >= W` el resultado tiene exactamente
/// `(N - W) / S + 1` ventanas; en otro caso, ninguna.
pub fn sliding_windows(
    samples: &[SensorSample],
    window_size: usize,
    step_size: usize,
) -> Vec<&[SensorSample]> {
    let mut windows = Vec::new();
    if window_size == 0 || step_size == 0 || samples.len() < window_size {
        return windows;
    }

    let mut offset = 0;
    while offset + window_size <= samples.len() {
        windows.push(&samples[offset..offset + window_size]);
        offset += step_size;
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{STEP_SIZE, WINDOW_SIZE};

    fn recording(len: usize) -> Vec<SensorSample> {
        (0..len)
            .map(|i| SensorSample::from_array([i as f32, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .collect()
    }

    #[test]
    fn test_window_count_1000_samples() {
        let samples = recording(1000);
        let windows = sliding_windows(&samples, WINDOW_SIZE, STEP_SIZE);
        // floor((1000 - 50) / 25) + 1 = 39
        assert_eq!(windows.len(), 39);
    }

    #[test]
    fn test_no_windows_when_recording_too_short() {
        let samples = recording(40);
        assert!(sliding_windows(&samples, WINDOW_SIZE, STEP_SIZE).is_empty());
    }

    #[test]
    fn test_exact_fit_yields_one_window() {
        let samples = recording(WINDOW_SIZE);
        let windows = sliding_windows(&samples, WINDOW_SIZE, STEP_SIZE);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), WINDOW_SIZE);
    }

    #[test]
    fn test_windows_overlap_at_step_offsets() {
        let samples = recording(100);
        let windows = sliding_windows(&samples, 50, 25);
        assert_eq!(windows.len(), 3);

        // Cada ventana empieza en un múltiplo del paso
        assert_eq!(windows[0][0].acc_x, 0.0);
        assert_eq!(windows[1][0].acc_x, 25.0);
        assert_eq!(windows[2][0].acc_x, 50.0);
        // La última ventana termina exactamente en la última muestra
        assert_eq!(windows[2][49].acc_x, 99.0);
    }

    #[test]
    fn test_partial_tail_dropped() {
        // 110 muestras: ventanas en 0, 25 y 50; el offset 75 dejaría
        // una cola de 35 muestras que se descarta
        let samples = recording(110);
        let windows = sliding_windows(&samples, 50, 25);
        assert_eq!(windows.len(), 3);
    }

    #[test]
    fn test_zero_step_produces_nothing() {
        let samples = recording(100);
        assert!(sliding_windows(&samples, 50, 0).is_empty());
    }
}
