/// 表情符号码点区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiRange {
    pub start: char,
    pub end: char,
    pub category: &'static str,
}

impl EmojiRange {
    const fn new(start: char, end: char, category: &'static str) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// 判断字符是否落在区间内
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

/// 视为表情符号的固定码点区间表
pub const EMOJI_RANGES: &[EmojiRange] = &[
    EmojiRange::new('\u{1F300}', '\u{1FAF6}', "Emoticons & symbols"),
    EmojiRange::new('\u{2600}', '\u{26FF}', "Misc symbols"),
    EmojiRange::new('\u{2700}', '\u{27BF}', "Dingbats"),
    EmojiRange::new('\u{2B00}', '\u{2BFF}', "Misc symbols and pictographs"),
    EmojiRange::new('\u{231A}', '\u{23FF}', "Misc technical"),
    EmojiRange::new('\u{FE00}', '\u{FE0F}', "Variation selectors"),
];

/// 判断单个字符是否为表情符号
pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|range| range.contains(c))
}

/// 文本中是否包含表情符号
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// 统计文本中表情符号码点的数量
pub fn count_emojis(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}

/// 删除所有表情符号，然后把连续空格压缩为一个
///
/// 空格压缩作用于整个文本，原本就存在的连续空格也会被压缩。
pub fn remove_emojis(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| !is_emoji(c)).collect();
    collapse_spaces(&stripped)
}

/// 把两个及以上的连续 ASCII 空格压缩为一个，制表符和换行保持不变
pub fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_space = false;

    for c in text.chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        result.push(c);
    }

    result
}
