//! 搜索文本清洗

use once_cell::sync::Lazy;
use regex::Regex;

/// 字母、数字、连字符和空格以外的连续字符
static PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\- ]+").expect("valid regex"));

/// 连续空白
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// 标记标签
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// 不换行空格的各种写法：原始字符、HTML 实体、二次转义的实体
const NBSP_FORMS: [&str; 3] = ["\u{a0}", "&nbsp;", "&amp;nbsp;"];

/// 清洗待搜索文本
///
/// 依次：标点替换为空格、合并空白、替换不换行空格、去除标签、去除首尾空白。
/// 纯函数，幂等；只含标点的输入得到空字符串。
///
/// ```rust
/// assert_eq!(rugeo::normalize_text("г. Москва,  ул. Ленина!"), "г Москва ул Ленина");
/// assert_eq!(rugeo::normalize_text("!!!"), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    let text = PUNCTUATION_RE.replace_all(text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");

    let mut text = text.into_owned();
    for form in NBSP_FORMS {
        if text.contains(form) {
            text = text.replace(form, " ");
        }
    }

    let text = TAG_RE.replace_all(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(normalize_text("Москва, ул. Тверская, д.1"), "Москва ул Тверская д 1");
        assert_eq!(normalize_text("(Казань)"), "Казань");
    }

    #[test]
    fn test_keep_hyphen() {
        assert_eq!(normalize_text("г. Ростов-на-Дону"), "г Ростов-на-Дону");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(normalize_text("  проживаю \t в\n\nг   Севастополь "), "проживаю в г Севастополь");
    }

    #[test]
    fn test_nbsp() {
        assert_eq!(normalize_text("г\u{a0}Сочи"), "г Сочи");
        assert_eq!(normalize_text("г&nbsp;Сочи"), "г nbsp Сочи");
        assert_eq!(normalize_text("г&amp;nbsp;Сочи"), "г amp nbsp Сочи");
    }

    #[test]
    fn test_markup() {
        assert_eq!(normalize_text("<b>Уфа</b>"), "b Уфа b");
        assert_eq!(normalize_text("<p>Грозный</p><br/>"), "p Грозный p br");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("!!! ... ,,,"), "");
        assert_eq!(normalize_text("12345 !!!"), "12345");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "проживаю в г. Севастополь",
            "  <i>Санкт-Петербург</i>;; Невский пр., 1 ",
            "г&amp;nbsp;Ялта\u{a0}\u{a0}",
            "--- __ ---",
            "12345 !!!",
        ];
        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "input: {:?}", input);
        }
    }
}
