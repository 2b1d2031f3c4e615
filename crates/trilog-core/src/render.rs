//! Plain-text rendering of log entries
//!
//! An entry is the message framed by blank lines, followed by one block per
//! auxiliary value:
//!
//! ```text
//!
//! message text
//!
//! ________________________________________________________________________________
//! {"a": [1, 2]}
//! <mapping>
//! 	a: [1, 2]
//! 	Values:
//! 	1
//! 	<int>
//! 	2
//! 	<int>
//! ```
//!
//! Each nesting level adds one tab of indentation. Rendering is pure; the
//! sink layer appends the finished text with a single write.

use crate::aux_data::AuxValue;

/// Width of the separator line written above each top-level value
pub const SEPARATOR_WIDTH: usize = 80;

/// Character repeated to form the separator line
pub const SEPARATOR_CHAR: char = '_';

const INDENT: char = '\t';

/// Render one complete entry: framed message plus all aux blocks in order
pub fn render_entry(message: &str, aux: &[AuxValue]) -> String {
    let mut out = String::with_capacity(message.len() + 4);
    out.push('\n');
    out.push_str(message);
    out.push_str("\n\n");
    for value in aux {
        render_value(&mut out, value, 0);
    }
    out
}

/// Render a single value at the given depth, recursing into containers
pub fn render_value(out: &mut String, value: &AuxValue, depth: usize) {
    if depth == 0 {
        out.extend(std::iter::repeat(SEPARATOR_CHAR).take(SEPARATOR_WIDTH));
        out.push('\n');
    }
    push_line(out, depth, &value.to_string());
    push_line(out, depth, &format!("<{}>", value.type_tag()));

    match value {
        AuxValue::Scalar(_) => {}
        AuxValue::Sequence(items) => {
            push_line(out, depth, "Items:");
            for item in items {
                render_value(out, item, depth + 1);
            }
        }
        AuxValue::Mapping(entries) => {
            for (key, entry) in entries {
                push_line(out, depth + 1, &format!("{}: {}", key, entry));
                match entry {
                    AuxValue::Scalar(_) => {}
                    AuxValue::Sequence(items) => {
                        push_line(out, depth + 1, "Values:");
                        for item in items {
                            render_value(out, item, depth + 1);
                        }
                    }
                    nested @ AuxValue::Mapping(_) => render_value(out, nested, depth + 1),
                }
            }
        }
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    out.extend(std::iter::repeat(INDENT).take(depth));
    out.push_str(text);
    out.push('\n');
}
