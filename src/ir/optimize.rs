//! # IR Optimizer
//!
//! Optimization passes that shrink a program before codegen.
//!
//! ## Passes
//!
//! 1. **Remove redundant init**: only the first Init survives
//! 2. **Collapse style toggles**: off/on pairs produced by components
//!    resetting after themselves cancel out
//! 3. **Remove redundant styles**: a style change matching the current
//!    state emits nothing
//! 4. **Merge adjacent text**: consecutive Text ops become one run

use super::ops::{Op, Program, StyleState};

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = self.ops;
        let ops = remove_redundant_init(ops);
        let ops = collapse_style_toggles(ops);
        let ops = remove_redundant_styles(ops);
        let ops = merge_adjacent_text(ops);
        Program { ops }
    }
}

/// Remove duplicate Init ops, keeping only the first one.
fn remove_redundant_init(ops: Vec<Op>) -> Vec<Op> {
    let mut seen_init = false;
    ops.into_iter()
        .filter(|op| {
            if matches!(op, Op::Init) {
                if seen_init {
                    return false;
                }
                seen_init = true;
            }
            true
        })
        .collect()
}

/// Remove style off/on pairs (e.g. SetBold(false) immediately followed
/// by SetBold(true)). Components reset the styles they set, so back to
/// back emphasized lines produce exactly this pattern.
fn collapse_style_toggles(ops: Vec<Op>) -> Vec<Op> {
    if ops.is_empty() {
        return ops;
    }

    let mut result = Vec::with_capacity(ops.len());
    let mut i = 0;

    while i < ops.len() {
        if i + 1 < ops.len() {
            let collapse = match (&ops[i], &ops[i + 1]) {
                (Op::SetBold(false), Op::SetBold(true)) => true,
                (Op::SetUnderline(false), Op::SetUnderline(true)) => true,
                // A size reset directly followed by a new size keeps
                // only the new size
                (
                    Op::SetSize {
                        height: 0,
                        width: 0,
                    },
                    Op::SetSize { height, width },
                ) if *height > 0 || *width > 0 => {
                    result.push(ops[i + 1].clone());
                    i += 2;
                    continue;
                }
                _ => false,
            };

            if collapse {
                i += 2;
                continue;
            }
        }

        result.push(ops[i].clone());
        i += 1;
    }

    result
}

/// Remove style changes that don't change the current state.
fn remove_redundant_styles(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = StyleState::default();

    for op in ops {
        match &op {
            Op::Init => {
                state = StyleState::default();
                result.push(op);
            }

            Op::SetAlign(a) => {
                if *a != state.alignment {
                    state.alignment = *a;
                    result.push(op);
                }
            }
            Op::SetBold(b) => {
                if *b != state.bold {
                    state.bold = *b;
                    result.push(op);
                }
            }
            Op::SetUnderline(u) => {
                if *u != state.underline {
                    state.underline = *u;
                    result.push(op);
                }
            }
            Op::SetSize { height, width } => {
                if *height != state.height_mult || *width != state.width_mult {
                    state.height_mult = *height;
                    state.width_mult = *width;
                    result.push(op);
                }
            }
            Op::SetCodepage(page) => {
                if *page != state.codepage {
                    state.codepage = *page;
                    result.push(op);
                }
            }

            // Non-style ops pass through unchanged
            _ => result.push(op),
        }
    }

    result
}

/// Merge consecutive Text ops into a single op.
fn merge_adjacent_text(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut pending_text: Option<String> = None;

    for op in ops {
        match op {
            Op::Text(s) => {
                if let Some(ref mut pending) = pending_text {
                    pending.push_str(&s);
                } else {
                    pending_text = Some(s);
                }
            }
            other => {
                if let Some(text) = pending_text.take() {
                    result.push(Op::Text(text));
                }
                result.push(other);
            }
        }
    }

    if let Some(text) = pending_text {
        result.push(Op::Text(text));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::Alignment;

    #[test]
    fn test_remove_redundant_init() {
        let ops = vec![
            Op::Init,
            Op::Text("a".into()),
            Op::Init,
            Op::Text("b".into()),
        ];
        let result = remove_redundant_init(ops);
        assert_eq!(result.len(), 3);
        assert!(matches!(result[0], Op::Init));
    }

    #[test]
    fn test_collapse_bold_toggle() {
        let ops = vec![
            Op::SetBold(true),
            Op::Text("a".into()),
            Op::SetBold(false),
            Op::SetBold(true),
            Op::Text("b".into()),
            Op::SetBold(false),
        ];
        let result = collapse_style_toggles(ops);
        // The middle off/on pair cancels
        assert_eq!(
            result,
            vec![
                Op::SetBold(true),
                Op::Text("a".into()),
                Op::Text("b".into()),
                Op::SetBold(false),
            ]
        );
    }

    #[test]
    fn test_collapse_size_reset_then_set() {
        let ops = vec![
            Op::SetSize {
                height: 0,
                width: 0,
            },
            Op::SetSize {
                height: 1,
                width: 1,
            },
            Op::Text("big".into()),
        ];
        let result = collapse_style_toggles(ops);
        assert_eq!(result.len(), 2);
        assert_eq!(
            result[0],
            Op::SetSize {
                height: 1,
                width: 1
            }
        );
    }

    #[test]
    fn test_remove_redundant_styles_bold() {
        let ops = vec![
            Op::Init,
            Op::SetBold(true),
            Op::SetBold(true), // Redundant
            Op::Text("bold".into()),
            Op::SetBold(false),
            Op::SetBold(false), // Redundant
        ];
        let result = remove_redundant_styles(ops);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_remove_redundant_styles_after_init() {
        let ops = vec![
            Op::Init,
            Op::SetAlign(Alignment::Left), // Redundant (default after init)
            Op::SetBold(false),            // Redundant (default)
            Op::Text("text".into()),
        ];
        let result = remove_redundant_styles(ops);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_redundant_codepage() {
        let ops = vec![
            Op::Init,
            Op::SetCodepage(0), // Redundant (default)
            Op::Text("text".into()),
        ];
        let result = remove_redundant_styles(ops);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_merge_adjacent_text() {
        let ops = vec![
            Op::Text("Latte".into()),
            Op::Text(" ".into()),
            Op::Text("(Hot)".into()),
        ];
        let result = merge_adjacent_text(ops);
        assert_eq!(result, vec![Op::Text("Latte (Hot)".into())]);
    }

    #[test]
    fn test_merge_text_interrupted_by_newline() {
        let ops = vec![
            Op::Text("Line 1".into()),
            Op::Newline,
            Op::Text("Line 2".into()),
        ];
        let result = merge_adjacent_text(ops);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_full_optimization() {
        let ops = vec![
            Op::Init,
            Op::Init,           // Redundant
            Op::SetBold(false), // Redundant (default)
            Op::SetAlign(Alignment::Center),
            Op::SetAlign(Alignment::Center), // Redundant
            Op::Text("Brew".into()),
            Op::Text(" & Shine".into()), // Merges with previous
            Op::Newline,
        ];

        let optimized = Program { ops }.optimize();

        assert_eq!(optimized.len(), 4);
        assert_eq!(optimized.ops[0], Op::Init);
        assert_eq!(optimized.ops[1], Op::SetAlign(Alignment::Center));
        assert_eq!(optimized.ops[2], Op::Text("Brew & Shine".into()));
        assert_eq!(optimized.ops[3], Op::Newline);
    }
}
