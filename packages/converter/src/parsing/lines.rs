/// Iterate over `\n`-separated lines together with their byte offsets.
pub fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').scan(0usize, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let lines: Vec<_> = lines_with_offsets("ab\n\ncd").collect();
        assert_eq!(lines, vec![(0, "ab"), (3, ""), (4, "cd")]);
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let lines: Vec<_> = lines_with_offsets("ab\n").collect();
        assert_eq!(lines, vec![(0, "ab"), (3, "")]);
    }
}
