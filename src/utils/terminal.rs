//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! Catalog text may come from a user-supplied file and is printed to the terminal by the
//! `list` command and drawn by the interactive browser. Malicious escape sequences could
//! clear the screen, move the cursor, retitle the window or change colors, so every item
//! field goes through [`sanitize_for_terminal`] before it reaches the terminal.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove escape sequences and control characters from text bound for the terminal
///
/// Strips CSI sequences (`ESC [ ... final`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`), lone two-byte escapes, and every other control character
/// except tab and newline.
///
/// # Examples
///
/// ```
/// use catalog_explorer::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mKernelForge\x1b[0m"), "KernelForge");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                // CSI: parameters until a byte in 0x40..=0x7e
                Some('[') => {
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                // OSC: until BEL or string terminator
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-byte escape: drop both
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and cut to at most `max_chars` characters, marking the cut with "…"
pub fn truncate_for_terminal(text: &str, max_chars: usize) -> String {
    let clean = sanitize_for_terminal(text);
    if clean.chars().count() <= max_chars {
        return clean;
    }
    let mut cut: String = clean.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
