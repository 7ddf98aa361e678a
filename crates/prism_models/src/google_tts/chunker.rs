//! Splitting text into request-sized pieces.

/// Longest piece the speech endpoint accepts, in characters.
pub const MAX_CHUNK_CHARS: usize = 100;

const BREAK_CHARS: &[char] = &[
    '.', '!', '?', ';', ':', ',', '\n', '。', '！', '？', '；', '：', '，', '、', '…',
];

/// Split `text` into pieces of at most `max_chars` characters.
///
/// Pieces end at punctuation where possible, then at whitespace; words
/// longer than the limit are cut. Adjacent short pieces are merged while
/// they fit, and pieces without any letters or digits are dropped.
///
/// # Examples
///
/// ```
/// use prism_models::split_for_speech;
///
/// let pieces = split_for_speech("Hello there. How are you?", 15);
/// assert_eq!(pieces, vec!["Hello there.", "How are you?"]);
/// ```
pub fn split_for_speech(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut pieces = Vec::new();
    for sentence in split_keep_breaks(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if sentence.chars().count() <= max_chars {
            pieces.push(sentence.to_string());
        } else {
            pieces.extend(pack_words(sentence, max_chars));
        }
    }

    merge_short(pieces, max_chars)
        .into_iter()
        .filter(|p| p.chars().any(char::is_alphanumeric))
        .collect()
}

fn split_keep_breaks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if BREAK_CHARS.contains(&ch) {
            let end = idx + ch.len_utf8();
            out.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

fn pack_words(sentence: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for slice in chars.chunks(max_chars) {
                out.push(slice.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn merge_short(pieces: Vec<String>, max_chars: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for piece in pieces {
        if let Some(last) = out.last_mut() {
            if last.chars().count() + 1 + piece.chars().count() <= max_chars {
                last.push(' ');
                last.push_str(&piece);
                continue;
            }
        }
        out.push(piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_piece() {
        assert_eq!(split_for_speech("Hello world", 100), vec!["Hello world"]);
    }

    #[test]
    fn test_pieces_respect_limit() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(10);
        let pieces = split_for_speech(&text, MAX_CHUNK_CHARS);
        assert!(pieces.len() > 1);
        for piece in &pieces {
            assert!(piece.chars().count() <= MAX_CHUNK_CHARS, "{piece}");
        }
        let rejoined: Vec<&str> = pieces.iter().flat_map(|p| p.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_long_word_is_cut() {
        let pieces = split_for_speech(&"a".repeat(25), 10);
        assert_eq!(pieces, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    }

    #[test]
    fn test_multibyte_text_counts_characters() {
        let text = "こんにちは。今日はいい天気ですね。";
        let pieces = split_for_speech(text, 8);
        assert_eq!(pieces, vec!["こんにちは。", "今日はいい天気で", "すね。"]);
    }

    #[test]
    fn test_punctuation_only_pieces_dropped() {
        assert!(split_for_speech("... !!! ,,,", 100).is_empty());
        assert!(split_for_speech("   ", 100).is_empty());
    }
}
