use std::ops::Range;
use std::rc::Rc;

pub const COMMENT_MARKER: char = ';';

/// Splits `source` into cleaned command lines.
///
/// Comments and surrounding whitespace are removed, but blank lines stay so
/// that the position of each line is its line number. A trailing blank line
/// left by a final line break is dropped.
pub fn load(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = source.split('\n').map(clean).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

pub fn clean(line: &str) -> &str {
    let code = match line.split_once(COMMENT_MARKER) {
        Some((code, _)) => code,
        None => line,
    };
    code.trim()
}

/// Byte ranges of the raw source lines, for pointing diagnostics at a line.
#[derive(Debug, Clone)]
pub struct LineBreaks {
    line_breaks: Rc<[Range<usize>]>,
}

impl LineBreaks {
    pub fn new(text: &str) -> Self {
        let mut line_breaks = Vec::new();
        let mut cursor = 0;
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_breaks.push(cursor..offset);
                cursor = offset + 1;
            }
        }
        if cursor < text.len() || text.is_empty() {
            line_breaks.push(cursor..text.len());
        }
        Self {
            line_breaks: line_breaks.into(),
        }
    }

    pub fn get_max_line(&self) -> u32 {
        self.line_breaks.len() as u32
    }

    /// Range of the 1-indexed `line`, without its line break.
    pub fn get_line_range(&self, line: u32) -> Option<Range<usize>> {
        let index = (line as usize).checked_sub(1)?;
        self.line_breaks.get(index).cloned()
    }
}
