// src/csv.rs

/* ---------------- Parsing ---------------- */

/// Naive CSV split: trim the input, split lines on `\n`, cells on `,`, trim each cell.
///
/// There is no quoting or escaping. A comma inside a value shifts every later
/// cell of that row; this is a known limitation of the input format and is kept
/// as-is. Empty input gives one row holding a single empty cell.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.trim()
        .split('\n')
        .map(|line| line.split(',').map(|cell| s!(cell.trim())).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_rows;

    #[test]
    fn splits_and_trims() {
        let rows = parse_rows("  a , b,c \n d,e ,f\n");
        assert_eq!(rows, vec![
            vec!["a", "b", "c"],
            vec!["d", "e", "f"],
        ]);
    }

    #[test]
    fn crlf_is_trimmed_away() {
        let rows = parse_rows("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn empty_input_is_one_empty_cell() {
        assert_eq!(parse_rows(""), vec![vec![""]]);
        assert_eq!(parse_rows(" \n \n"), vec![vec![""]]);
    }

    #[test]
    fn quotes_are_not_special() {
        // "Smith, John" breaks into two cells.
        let rows = parse_rows("\"Smith, John\",x");
        assert_eq!(rows, vec![vec!["\"Smith", "John\"", "x"]]);
    }

    #[test]
    fn join_recovers_trimmed_cells() {
        let src = "Donor,Memory,Tribute,Image\nAnn,Bob Lee,Cy,u.png";
        let rebuilt = parse_rows(src)
            .iter()
            .map(|r| r.join(","))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn blank_inner_lines_survive() {
        let rows = parse_rows("h\n\nx");
        assert_eq!(rows, vec![vec!["h"], vec![""], vec!["x"]]);
    }
}
