use std::ops::Range;

/// Byte offset of the `char_index`th character, or `s.len()` past the end
pub fn byte_index_from_char_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}

/// Convert a char range to a byte range, clamping both ends to the text
pub fn byte_range(s: &str, chars: &Range<usize>) -> Range<usize> {
    let start = byte_index_from_char_index(s, chars.start);
    let end = byte_index_from_char_index(s, chars.end.max(chars.start));
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_index_multibyte() {
        let s = "aé→b";
        assert_eq!(byte_index_from_char_index(s, 0), 0);
        assert_eq!(byte_index_from_char_index(s, 1), 1);
        assert_eq!(byte_index_from_char_index(s, 2), 3);
        assert_eq!(byte_index_from_char_index(s, 3), 6);
        assert_eq!(byte_index_from_char_index(s, 4), 7);
        assert_eq!(byte_index_from_char_index(s, 99), 7);
    }

    #[test]
    fn test_byte_range_clamps() {
        let s = "void";
        assert_eq!(byte_range(s, &(1..3)), 1..3);
        assert_eq!(byte_range(s, &(2..10)), 2..4);
        assert_eq!(byte_range(s, &(3..1)), 3..3);
    }
}
