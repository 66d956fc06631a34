use crate::models::QrSymbol;

/// Terminal rendering, two characters per module so the symbol stays square
pub fn to_text(symbol: &QrSymbol, quiet_zone: usize) -> String {
    let span = symbol.size() + 2 * quiet_zone;
    let mut out = String::with_capacity(span * (span * 2 * 3 + 1));
    for y in 0..span {
        for x in 0..span {
            let dark = match (y.checked_sub(quiet_zone), x.checked_sub(quiet_zone)) {
                (Some(row), Some(col)) => symbol.get(row, col),
                _ => false,
            };
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
