//! Formatting utilities shared by console and CSV output.

/// Render a cell value without floating-point noise.
///
/// Values are rounded to six decimals; whole numbers print without a
/// fraction (`8`, `0`), others with their shortest form (`7.5`, `0.3`).
pub fn format_value(v: f64) -> String {
    let rounded = (v * 1_000_000.0).round() / 1_000_000.0;
    if rounded == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

