/// Delimited field extraction without splitting the whole line
use super::TaxonId;

/// Return the `index`-th field counted from `cursor`.
///
/// `cursor` is a byte offset at the start of a field. On success the cursor is
/// left on the delimiter that terminates the returned field, so the next field
/// is reached with a one-delimiter step. A field only counts as found when a
/// delimiter terminates it: if fewer than `index + 1` delimiters follow the
/// cursor, `None` is returned and the cursor is not moved.
pub fn nth_field<'a>(
    line: &'a str,
    delim: char,
    index: usize,
    cursor: &mut usize,
) -> Option<&'a str> {
    let mut start = *cursor;
    for _ in 0..index {
        start += line.get(start..)?.find(delim)? + delim.len_utf8();
    }
    let end = start + line.get(start..)?.find(delim)?;
    *cursor = end;
    Some(&line[start..end])
}

/// Sequential reader of delimited fields over a single line.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    line: &'a str,
    delim: char,
    pos: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(line: &'a str, delim: char) -> Self {
        Self { line, delim, pos: 0 }
    }

    /// See [`nth_field`].
    pub fn nth(&mut self, index: usize) -> Option<&'a str> {
        nth_field(self.line, self.delim, index, &mut self.pos)
    }

    /// Step over the delimiter the cursor currently rests on, if any.
    pub fn skip_delimiter(&mut self) {
        if let Some(tail) = self.line.get(self.pos..) {
            if tail.starts_with(self.delim) {
                self.pos += self.delim.len_utf8();
            }
        }
    }

    /// Everything from the cursor to the end of the line, verbatim.
    pub fn rest(&self) -> &'a str {
        self.line.get(self.pos..).unwrap_or("")
    }
}

/// Permissive integer parse in the manner of C `atoi`.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// digits is used. Text without leading digits yields 0 and out-of-range
/// values saturate; this never fails.
pub fn parse_taxon_id(field: &str) -> TaxonId {
    let s = field.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: TaxonId = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = TaxonId::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_field_starts_at_cursor() {
        let mut pos = 0;
        assert_eq!(nth_field("12\t34\t56", '\t', 0, &mut pos), Some("12"));
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_skips_index_delimiters_from_cursor() {
        let line = "a\tb\tc\td\te\tf\tg";
        let mut pos = 0;
        assert_eq!(nth_field(line, '\t', 0, &mut pos), Some("a"));
        pos += 1;
        assert_eq!(nth_field(line, '\t', 4, &mut pos), Some("f"));
        assert_eq!(&line[pos..pos + 1], "\t");
    }

    #[test]
    fn test_unterminated_field_is_not_found() {
        let mut pos = 0;
        assert_eq!(nth_field("a,b", ',', 1, &mut pos), None);
        assert_eq!(pos, 0, "cursor must not move on failure");
        assert_eq!(nth_field("", ',', 0, &mut pos), None);
    }

    #[test]
    fn test_empty_fields() {
        let mut cursor = FieldCursor::new(",,name", ',');
        assert_eq!(cursor.nth(0), Some(""));
        cursor.skip_delimiter();
        assert_eq!(cursor.nth(0), Some(""));
        cursor.skip_delimiter();
        assert_eq!(cursor.rest(), "name");
    }

    #[test]
    fn test_cursor_past_end() {
        let mut pos = 10;
        assert_eq!(nth_field("a,b", ',', 0, &mut pos), None);
        let cursor = FieldCursor {
            line: "abc",
            delim: ',',
            pos: 7,
        };
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_rest_keeps_embedded_delimiters() {
        let mut cursor = FieldCursor::new("5,1,Homo sapiens, 1758", ',');
        cursor.nth(1);
        cursor.skip_delimiter();
        assert_eq!(cursor.rest(), "Homo sapiens, 1758");
    }

    #[test]
    fn test_parse_taxon_id() {
        assert_eq!(parse_taxon_id("9606"), 9606);
        assert_eq!(parse_taxon_id("  42"), 42);
        assert_eq!(parse_taxon_id("-7"), -7);
        assert_eq!(parse_taxon_id("+3"), 3);
        assert_eq!(parse_taxon_id("12abc"), 12);
        assert_eq!(parse_taxon_id("abc"), 0);
        assert_eq!(parse_taxon_id(""), 0);
        assert_eq!(parse_taxon_id("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_taxon_id("-99999999999999999999999"), i64::MIN);
    }
}
