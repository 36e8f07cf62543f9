use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`, `-5` → `"-$5.00"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = val.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max - 1).collect();
    format!("{truncated}…")
}

/// Lay out `left` and `right` on one line of `width` columns, truncating
/// `left` when both do not fit.
pub(crate) fn spread(left: &str, right: &str, width: usize) -> String {
    let right_len = right.chars().count();
    let room = width.saturating_sub(right_len + 1);
    let left = truncate(left, room);
    let pad = width.saturating_sub(left.chars().count() + right_len).max(1);
    format!("{left}{}{right}", " ".repeat(pad))
}

/// Selection and scroll offset of a list that shows `page` rows at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

impl ListCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 < len {
            self.index += 1;
            self.follow(page);
        }
    }

    pub(crate) fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        if self.index < self.scroll {
            self.scroll = self.index;
        }
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        if len > 0 {
            self.index = len - 1;
            self.follow(page);
        }
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub(crate) fn clamp(&mut self, len: usize, page: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
        if self.scroll > self.index {
            self.scroll = self.index;
        }
        self.follow(page);
    }

    fn follow(&mut self, page: usize) {
        let page = page.max(1);
        if self.index >= self.scroll + page {
            self.scroll = self.index + 1 - page;
        }
    }
}
