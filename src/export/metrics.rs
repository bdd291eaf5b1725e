//! Helvetica 字宽与自动换行

use phf::phf_map;

/// 未收录字符的默认字宽（这些字符在编码阶段就会被拒绝）
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica 标准字宽（千分之一字号）
static HELVETICA_WIDTHS: phf::Map<char, u16> = phf_map! {
    ' ' => 278, '!' => 278, '"' => 355, '#' => 556, '$' => 556, '%' => 889,
    '&' => 667, '\'' => 191, '(' => 333, ')' => 333, '*' => 389, '+' => 584,
    ',' => 278, '-' => 333, '.' => 278, '/' => 278,
    '0' => 556, '1' => 556, '2' => 556, '3' => 556, '4' => 556,
    '5' => 556, '6' => 556, '7' => 556, '8' => 556, '9' => 556,
    ':' => 278, ';' => 278, '<' => 584, '=' => 584, '>' => 584, '?' => 556,
    '@' => 1015,
    'A' => 667, 'B' => 667, 'C' => 722, 'D' => 722, 'E' => 667, 'F' => 611,
    'G' => 778, 'H' => 722, 'I' => 278, 'J' => 500, 'K' => 667, 'L' => 556,
    'M' => 833, 'N' => 722, 'O' => 778, 'P' => 667, 'Q' => 778, 'R' => 722,
    'S' => 667, 'T' => 611, 'U' => 722, 'V' => 667, 'W' => 944, 'X' => 667,
    'Y' => 667, 'Z' => 611,
    '[' => 278, '\\' => 278, ']' => 278, '^' => 469, '_' => 556, '`' => 333,
    'a' => 556, 'b' => 556, 'c' => 500, 'd' => 556, 'e' => 556, 'f' => 278,
    'g' => 556, 'h' => 556, 'i' => 222, 'j' => 222, 'k' => 500, 'l' => 222,
    'm' => 833, 'n' => 556, 'o' => 556, 'p' => 556, 'q' => 556, 'r' => 333,
    's' => 500, 't' => 278, 'u' => 556, 'v' => 500, 'w' => 722, 'x' => 500,
    'y' => 500, 'z' => 500,
    '{' => 334, '|' => 260, '}' => 334, '~' => 584,
    // WinAnsi 0x80-0x9F
    '€' => 556, '‚' => 222, 'ƒ' => 556, '„' => 333, '…' => 1000, '†' => 556,
    '‡' => 556, 'ˆ' => 333, '‰' => 1000, 'Š' => 667, '‹' => 333, 'Œ' => 1000,
    'Ž' => 611, '‘' => 222, '’' => 222, '“' => 333, '”' => 333, '•' => 350,
    '–' => 556, '—' => 1000, '˜' => 333, '™' => 1000, 'š' => 500, '›' => 333,
    'œ' => 944, 'ž' => 500, 'Ÿ' => 667,
    // Latin-1 0xA0-0xFF
    '\u{A0}' => 278, '¡' => 333, '¢' => 556, '£' => 556, '¤' => 556, '¥' => 556,
    '¦' => 260, '§' => 556, '¨' => 333, '©' => 737, 'ª' => 370, '«' => 556,
    '¬' => 584, '\u{AD}' => 333, '®' => 737, '¯' => 333, '°' => 400, '±' => 584,
    '²' => 333, '³' => 333, '´' => 333, 'µ' => 556, '¶' => 537, '·' => 278,
    '¸' => 333, '¹' => 333, 'º' => 365, '»' => 556, '¼' => 834, '½' => 834,
    '¾' => 834, '¿' => 611,
    'À' => 667, 'Á' => 667, 'Â' => 667, 'Ã' => 667, 'Ä' => 667, 'Å' => 667,
    'Æ' => 1000, 'Ç' => 722, 'È' => 667, 'É' => 667, 'Ê' => 667, 'Ë' => 667,
    'Ì' => 278, 'Í' => 278, 'Î' => 278, 'Ï' => 278, 'Ð' => 722, 'Ñ' => 722,
    'Ò' => 778, 'Ó' => 778, 'Ô' => 778, 'Õ' => 778, 'Ö' => 778, '×' => 584,
    'Ø' => 778, 'Ù' => 722, 'Ú' => 722, 'Û' => 722, 'Ü' => 722, 'Ý' => 667,
    'Þ' => 667, 'ß' => 611,
    'à' => 556, 'á' => 556, 'â' => 556, 'ã' => 556, 'ä' => 556, 'å' => 556,
    'æ' => 889, 'ç' => 500, 'è' => 556, 'é' => 556, 'ê' => 556, 'ë' => 556,
    'ì' => 278, 'í' => 278, 'î' => 278, 'ï' => 278, 'ð' => 556, 'ñ' => 556,
    'ò' => 556, 'ó' => 556, 'ô' => 556, 'õ' => 556, 'ö' => 556, '÷' => 584,
    'ø' => 611, 'ù' => 556, 'ú' => 556, 'û' => 556, 'ü' => 556, 'ý' => 500,
    'þ' => 556, 'ÿ' => 500,
};

/// 字符在 Helvetica 中的字宽，未收录时为 None
pub fn glyph_width(c: char) -> Option<u16> {
    HELVETICA_WIDTHS.get(&c).copied()
}

/// 计算文本在给定字号下的宽度（pt）
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| u32::from(glyph_width(c).unwrap_or(DEFAULT_WIDTH)))
        .sum();
    units as f32 * font_size / 1000.0
}

/// 按最大宽度折行
///
/// 显式换行符强制断行；单词按空白分隔贪心填充；
/// 超过整行宽度的单词按字符切分。至少返回一行。
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let space = text_width(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, font_size);

            if current.is_empty() {
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let (done, rest, rest_width) = split_long_word(word, font_size, max_width);
                    lines.extend(done);
                    current = rest;
                    current_width = rest_width;
                }
                continue;
            }

            if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let (done, rest, rest_width) = split_long_word(word, font_size, max_width);
                    lines.extend(done);
                    current = rest;
                    current_width = rest_width;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// 切分超长单词，返回完整的行以及剩余部分及其宽度
fn split_long_word(word: &str, font_size: f32, max_width: f32) -> (Vec<String>, String, f32) {
    let mut done = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0.0_f32;

    for c in word.chars() {
        let w = text_width(c.encode_utf8(&mut [0; 4]), font_size);
        if !chunk.is_empty() && chunk_width + w > max_width {
            done.push(std::mem::take(&mut chunk));
            chunk_width = 0.0;
        }
        chunk.push(c);
        chunk_width += w;
    }

    (done, chunk, chunk_width)
}
