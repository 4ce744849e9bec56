// src/csv.rs
/* ---------------- Writing ---------------- */

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n')
}

/// Double internal quotes; wrap in quotes only when the field needs it.
pub fn escape_field(field: &str) -> String {
    let escaped = field.replace('"', "\"\"");
    if needs_quotes(field) {
        join!("\"", &escaped, "\"")
    } else {
        escaped
    }
}

/// One CSV line, no terminator.
pub fn join_row<S: AsRef<str>>(row: &[S]) -> String {
    row.iter()
        .map(|cell| escape_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(escape_field("Amherst"), "Amherst");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn quotes_commas_newlines() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("one\ntwo"), "\"one\ntwo\"");
    }

    #[test]
    fn carriage_return_alone_is_not_quoted() {
        assert_eq!(escape_field("a\rb"), "a\rb");
    }

    #[test]
    fn row_joining() {
        assert_eq!(join_row(&["x", "y,z", "N/A"]), "x,\"y,z\",N/A");
        assert_eq!(join_row::<&str>(&[]), "");
    }
}
