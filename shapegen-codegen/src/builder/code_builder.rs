//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use shapegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export interface User {")
///     .push_indent()
///     .push_line("name?: string;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "export interface User {\n  name?: string;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment block.
    ///
    /// Each line of `text` becomes one ` * ` line. A literal `*/` in the text
    /// is escaped so it cannot close the comment early.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.push_line("/**");
        for line in text.replace("*/", "*\\/").lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_line("const x = 1;");
        assert_eq!(builder.build(), "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("function foo() {")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder.emit(&CodeFragment::block(
            "namespace A {",
            vec![CodeFragment::block(
                "const f = () => ({",
                vec![CodeFragment::line("...obj,")],
                Some("});".to_string()),
            )],
            Some("}".to_string()),
        ));
        assert_eq!(
            builder.build(),
            "namespace A {\n    const f = () => ({\n        ...obj,\n    });\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_jsdoc() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_jsdoc("First line.\n\nSecond */ line.");
        assert_eq!(
            builder.build(),
            "  /**\n   * First line.\n   *\n   * Second *\\/ line.\n   */\n"
        );
    }

    #[test]
    fn test_emit_block_fragment() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&vec![CodeFragment::block(
            "export interface Empty {",
            vec![],
            Some("}".to_string()),
        )]);
        assert_eq!(builder.build(), "export interface Empty {\n}\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::jsdoc("A value."),
                    CodeFragment::line("value?: string;"),
                    CodeFragment::Blank,
                    CodeFragment::block("{", vec![CodeFragment::line("nested;")], None),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&SimpleNode);
        assert_eq!(
            builder.build(),
            "/**\n * A value.\n */\nvalue?: string;\n\n{\n  nested;\n"
        );
    }
}
