/// Parse a strictly positive count (`--top`).
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|_| format!("Invalid number: {s}"))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}
