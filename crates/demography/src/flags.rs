/// Deterministic flag asset path for a country code. The engine only
/// computes the path; loading the image is the host's job.
pub fn flag_path(base: &str, code: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{code}.png")
}
