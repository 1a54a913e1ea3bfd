/// Human-scale population display: "1.43 billion", "67.75 million",
/// "812.34 thousand", or the bare count below a thousand.
pub fn format_population(count: f64) -> String {
    if count >= 1_000_000_000.0 {
        format!("{:.2} billion", count / 1_000_000_000.0)
    } else if count >= 1_000_000.0 {
        format!("{:.2} million", count / 1_000_000.0)
    } else if count >= 1_000.0 {
        format!("{:.2} thousand", count / 1_000.0)
    } else {
        format!("{count}")
    }
}
