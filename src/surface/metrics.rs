//! Advance widths for the standard Helvetica font.
//!
//! Widths are in thousandths of an em and cover ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32. Other fonts are measured with the same
//! table, which is close enough for centering digits.

const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for characters outside the table
const FALLBACK_WIDTH: u16 = 556;

/// Advance width of a character in thousandths of an em
pub fn char_width(c: char) -> u16 {
    let code = c as usize;
    if (0x20..=0x7E).contains(&code) {
        HELVETICA_WIDTHS[code - 0x20]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` at `font_size`, in the same unit as `font_size`
pub fn text_width(text: &str, font_size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    f64::from(units) * font_size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_share_width() {
        for c in '0'..='9' {
            assert_eq!(char_width(c), 556);
        }
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('@'), 1015);
        assert_eq!(char_width('W'), 944);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('~'), 584);
    }

    #[test]
    fn test_text_width() {
        assert!((text_width("12", 10.0) - 11.12).abs() < 1e-9);
        assert_eq!(text_width("", 12.0), 0.0);
    }
}
