use crate::models::QrSymbol;
use std::fmt::Write;

/// SVG document for the symbol: one square per dark module on a white
/// background, `quiet_zone` modules of margin on each side. Uses Unix newlines.
pub fn to_svg_string(symbol: &QrSymbol, quiet_zone: usize) -> String {
    let size = symbol.size();
    let dimension = size + 2 * quiet_zone;

    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    let _ = writeln!(
        result,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" shape-rendering=\"crispEdges\">",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    for row in 0..size {
        for col in 0..size {
            if symbol.get(row, col) {
                let _ = writeln!(
                    result,
                    "\t<rect x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" fill=\"#000000\"/>",
                    col + quiet_zone,
                    row + quiet_zone
                );
            }
        }
    }
    result += "</svg>\n";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_symbol;

    #[test]
    fn test_to_svg_string() {
        let symbol = generate_symbol("HELLO WORLD").unwrap();
        let svg = to_svg_string(&symbol, 2);

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("viewBox=\"0 0 33 33\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        // background + one rect per dark module
        let rects = svg.matches("<rect").count();
        assert_eq!(rects, 1 + symbol.modules().count_dark());
        // top-left finder corner shifted by the margin
        assert!(svg.contains("<rect x=\"2\" y=\"2\" width=\"1\" height=\"1\""));
    }
}
