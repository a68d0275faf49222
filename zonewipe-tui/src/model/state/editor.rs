//! 域名编辑器状态
//!
//! 一个极简的多行文本编辑器：每行一个域名，支持插入、换行、退格和
//! 光标移动。`parse_domains` 负责把文本整理成待删除的域名列表。

/// 每个批次最多处理的域名数
pub const MAX_BATCH: usize = 10;

/// 编辑器状态
#[derive(Debug, Clone)]
pub struct EditorState {
    /// 文本行（始终至少一行）
    pub lines: Vec<String>,
    /// 光标所在行
    pub cursor_line: usize,
    /// 光标所在列（字符索引，非字节索引）
    pub cursor_col: usize,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_line: 0,
            cursor_col: 0,
        }
    }

    /// 解析出待删除的域名列表：逐行修剪、丢弃空行、保序去重
    pub fn parse_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = Vec::new();
        for line in &self.lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let normalized = trimmed.to_ascii_lowercase();
            if !domains.contains(&normalized) {
                domains.push(normalized);
            }
        }
        domains
    }

    /// 解析后的域名数量（用于标题栏计数）
    pub fn domain_count(&self) -> usize {
        self.parse_domains().len()
    }

    /// 在光标处插入字符
    pub fn insert_char(&mut self, ch: char) {
        let line = &mut self.lines[self.cursor_line];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.insert(byte_idx, ch);
        self.cursor_col += 1;
    }

    /// 在光标处换行
    pub fn newline(&mut self) {
        let line = &mut self.lines[self.cursor_line];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        let rest = line.split_off(byte_idx);
        self.lines.insert(self.cursor_line + 1, rest);
        self.cursor_line += 1;
        self.cursor_col = 0;
    }

    /// 退格：删除光标前的字符，行首时与上一行合并
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_line];
            let byte_idx = char_to_byte_index(line, self.cursor_col - 1);
            line.remove(byte_idx);
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            let current = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            let prev = &mut self.lines[self.cursor_line];
            self.cursor_col = prev.chars().count();
            prev.push_str(&current);
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.clamp_col();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.cursor_col = self.lines[self.cursor_line].chars().count();
        }
    }

    pub fn move_right(&mut self) {
        let line_len = self.lines[self.cursor_line].chars().count();
        if self.cursor_col < line_len {
            self.cursor_col += 1;
        } else if self.cursor_line + 1 < self.lines.len() {
            self.cursor_line += 1;
            self.cursor_col = 0;
        }
    }

    fn clamp_col(&mut self) {
        let line_len = self.lines[self.cursor_line].chars().count();
        self.cursor_col = self.cursor_col.min(line_len);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// 字符索引 → 字节索引
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> EditorState {
        let mut e = EditorState::new();
        e.lines = text.split('\n').map(str::to_string).collect();
        e
    }

    #[test]
    fn parse_trims_and_drops_empty_lines() {
        let e = editor_with("  example.com  \n\n   \nfoo.net");
        assert_eq!(e.parse_domains(), vec!["example.com", "foo.net"]);
    }

    #[test]
    fn parse_dedupes_preserving_first_occurrence_order() {
        let e = editor_with("b.com\na.com\nb.com\nB.COM\na.com");
        assert_eq!(e.parse_domains(), vec!["b.com", "a.com"]);
    }

    #[test]
    fn parse_lowercases_domains() {
        let e = editor_with("Example.COM");
        assert_eq!(e.parse_domains(), vec!["example.com"]);
    }

    #[test]
    fn parse_empty_editor_yields_no_domains() {
        let e = EditorState::new();
        assert!(e.parse_domains().is_empty());
        assert_eq!(e.domain_count(), 0);
    }

    #[test]
    fn insert_and_newline() {
        let mut e = EditorState::new();
        for ch in "a.com".chars() {
            e.insert_char(ch);
        }
        e.newline();
        for ch in "b.com".chars() {
            e.insert_char(ch);
        }
        assert_eq!(e.lines, vec!["a.com", "b.com"]);
        assert_eq!(e.cursor_line, 1);
        assert_eq!(e.cursor_col, 5);
    }

    #[test]
    fn newline_splits_line_at_cursor() {
        let mut e = editor_with("abcdef");
        e.cursor_col = 3;
        e.newline();
        assert_eq!(e.lines, vec!["abc", "def"]);
        assert_eq!(e.cursor_line, 1);
        assert_eq!(e.cursor_col, 0);
    }

    #[test]
    fn backspace_joins_lines_at_line_start() {
        let mut e = editor_with("abc\ndef");
        e.cursor_line = 1;
        e.cursor_col = 0;
        e.backspace();
        assert_eq!(e.lines, vec!["abcdef"]);
        assert_eq!(e.cursor_line, 0);
        assert_eq!(e.cursor_col, 3);
    }

    #[test]
    fn backspace_removes_char_before_cursor() {
        let mut e = editor_with("abc");
        e.cursor_col = 2;
        e.backspace();
        assert_eq!(e.lines, vec!["ac"]);
        assert_eq!(e.cursor_col, 1);
    }

    #[test]
    fn cursor_movement_clamps_to_line_length() {
        let mut e = editor_with("abcdef\nxy");
        e.cursor_col = 6;
        e.move_down();
        assert_eq!(e.cursor_line, 1);
        assert_eq!(e.cursor_col, 2);
    }

    #[test]
    fn move_left_wraps_to_previous_line_end() {
        let mut e = editor_with("abc\ndef");
        e.cursor_line = 1;
        e.cursor_col = 0;
        e.move_left();
        assert_eq!(e.cursor_line, 0);
        assert_eq!(e.cursor_col, 3);
    }
}
