/// Whitespace used when rendering selection sets and arguments.
///
/// Every token is followed by the end-of-line marker and preceded by one indentation
/// unit per nesting level. Both layouts produce the same tokens in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout<'a> {
    indent: &'a str,
    eol: &'a str,
}

impl Layout<'static> {
    /// Single line, tokens separated by one space.
    pub const COMPACT: Layout<'static> = Layout { indent: "", eol: " " };

    /// One token per line, indented by two spaces per level.
    pub const PRETTY: Layout<'static> = Layout::pretty("  ");
}

impl<'a> Layout<'a> {
    /// One token per line, indented by `indent` per level.
    pub const fn pretty(indent: &'a str) -> Self {
        Layout { indent, eol: "\n" }
    }

    pub fn indent(&self) -> &'a str {
        self.indent
    }

    pub fn eol(&self) -> &'a str {
        self.eol
    }

    pub(crate) fn buffer(self) -> Buffer<'a> {
        Buffer {
            inner: String::with_capacity(256),
            layout: self,
            depth: 0,
        }
    }
}

impl Default for Layout<'static> {
    fn default() -> Self {
        Layout::COMPACT
    }
}

pub(crate) struct Buffer<'a> {
    inner: String,
    layout: Layout<'a>,
    depth: usize,
}

impl Buffer<'_> {
    pub(crate) fn into_string(self) -> String {
        self.inner
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.inner.push_str(self.layout.indent);
        }
    }

    /// Writes a single token line made of `parts`.
    pub(crate) fn line(&mut self, parts: &[&str]) {
        self.write_indent();

        for part in parts {
            self.inner.push_str(part);
        }

        self.inner.push_str(self.layout.eol);
    }

    /// Writes `parts` followed by an opening brace and enters a nested level.
    pub(crate) fn open(&mut self, parts: &[&str]) {
        self.write_indent();

        for part in parts {
            self.inner.push_str(part);
        }

        self.inner.push_str(" {");
        self.inner.push_str(self.layout.eol);
        self.depth += 1;
    }

    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&["}"]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(layout: Layout<'_>) -> String {
        let mut buffer = layout.buffer();
        buffer.line(&["id"]);
        buffer.open(&["header"]);
        buffer.line(&["height"]);
        buffer.close();
        buffer.into_string()
    }

    #[test]
    fn compact() {
        assert_eq!(sample(Layout::COMPACT), "id header { height } ");
        assert_eq!(sample(Layout::default()), "id header { height } ");
    }

    #[test]
    fn pretty() {
        assert_eq!(sample(Layout::PRETTY), "id\nheader {\n  height\n}\n");
        assert_eq!(sample(Layout::pretty("\t")), "id\nheader {\n\theight\n}\n");
    }
}
