/// Variaciones sugeridas para cada tipo de golpe.
///
/// Función total: cualquier etiqueta no reconocida recibe la sugerencia
/// por defecto. Las cadenas son salida observable del pipeline y se
/// mantienen tal cual.
pub fn suggest_variation(shot: &str) -> Vec<String> {
    let suggestions: &[&str] = match shot {
        "Smash" => &["Try steeper angle", "Mix with Drop"],
        "Drop" => &["Fast Drop as variation", "Follow up with Net shot"],
        "Lift" => &["Deep lifts to corners", "Try more cross-court"],
        "Clear" => &["Use to reset rally", "Try attacking clear"],
        "Drive" => &["Use in fast rallies", "Work on flat drive timing"],
        "Net" => &["Add tumble", "Try net kill after it"],
        _ => &["Keep it up!"],
    };
    suggestions.iter().map(|s| s.to_string()).collect()
}
