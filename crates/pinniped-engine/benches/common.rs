// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *content* and `code`.\n\n- Bullet point\n- Another [item](https://example.com)\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_wide_table(rows: usize, cols: usize) -> String {
    let mut content = String::new();
    for row in 0..rows {
        content.push('|');
        for col in 0..cols {
            content.push_str(&format!(" r{row}c{col} |"));
        }
        content.push('\n');
        if row == 0 {
            content.push('|');
            content.push_str(&"---|".repeat(cols));
            content.push('\n');
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_nested_emphasis(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(if level % 2 == 0 { "**" } else { "*" });
        content.push_str("word ");
    }
    for level in (0..depth).rev() {
        content.push_str(if level % 2 == 0 { "**" } else { "*" });
    }
    content
}
