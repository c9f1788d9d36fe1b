//! Primitive memory cards
//!
//! Scalars bound to a name are shown as a small inspection card:
//!
//! ```text
//! x
//! ┌─────────────────────────┐
//! │ Address: 0x7ffe1c2a3b40 │
//! │ type: int               │
//! │ size: 8 bytes           │
//! │ bits: 00101010          │
//! │ value: 42               │
//! └─────────────────────────┘
//! ```
//!
//! Scalars have no heap identity, so the address is derived from the name.
//! Sizes are the native sizes of the value kinds (`i64`, `f64`, one byte for
//! a bool or an ASCII char, the UTF-8 length for a string).

use super::text::{ljust, rule, width};
use crate::memory::value::format_float;
use crate::memory::Value;
use rustc_hash::FxHasher;
use std::hash::Hasher;

const STACK_BASE: u64 = 0x7ffe_0000_0000;
const MANTISSA_PREVIEW: usize = 9;

pub fn render_primitive(name: &str, value: &Value) -> String {
    let address = format!("Address: 0x{:x}", synthetic_address(name));
    let lines: Vec<String> = match value {
        Value::None => vec![
            "type: NULL".into(),
            "size: 0 bytes".into(),
            "meaning: no object".into(),
        ],
        Value::Bool(b) => vec![
            address,
            "type: bool".into(),
            "size: 1 bytes".into(),
            format!("bits: {}", bits(&[u8::from(*b)])),
            format!("value: {}", b),
        ],
        Value::Int(n) => vec![
            address,
            "type: int".into(),
            "size: 8 bytes".into(),
            format!("bits: {}", bits(&int_bytes(*n))),
            format!("value: {}", n),
        ],
        Value::Float(x) => {
            let pattern = format!("{:064b}", x.to_bits());
            let (sign, rest) = pattern.split_at(1);
            let (exponent, mantissa) = rest.split_at(11);
            vec![
                address,
                "type: float64".into(),
                "size: 8 bytes".into(),
                "sign | exponent | mantissa".into(),
                format!("  {}  | {} | {}", sign, exponent, shorten(mantissa)),
                format!("value: {}", format_float(*x)),
            ]
        }
        Value::Str(s) if s.len() == 1 => {
            let code = s.as_bytes()[0];
            vec![
                address,
                "type: char (ASCII)".into(),
                "size: 1 bytes".into(),
                format!("bits: {}", bits(&[code])),
                format!("value: '{}' ({})", s, code),
            ]
        }
        Value::Str(s) => vec![
            address,
            "type: string".into(),
            format!("size: {} bytes", s.len()),
            format!("bits: {}", bits(s.as_bytes())),
            format!("value: \"{}\"", s),
        ],
        other => vec![
            address,
            format!("type: {}", other.type_name()),
            "size: 8 bytes".into(),
            format!("value: {}", other.repr()),
        ],
    };
    boxed(name, &lines)
}

fn synthetic_address(name: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(name.as_bytes());
    STACK_BASE | (hasher.finish() & 0xffff_fff0)
}

/// Shortest big-endian bytes holding `n` (two's complement when negative)
fn int_bytes(n: i64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let mut start = 0;
    while start < bytes.len() - 1 {
        let redundant = if n < 0 {
            bytes[start] == 0xff && bytes[start + 1] & 0x80 != 0
        } else {
            bytes[start] == 0x00
        };
        if !redundant {
            break;
        }
        start += 1;
    }
    bytes[start..].to_vec()
}

fn bits(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:08b}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shorten(bits: &str) -> String {
    if bits.len() <= MANTISSA_PREVIEW {
        bits.to_string()
    } else {
        format!("{}...", &bits[..MANTISSA_PREVIEW])
    }
}

fn boxed(name: &str, lines: &[String]) -> String {
    let body: Vec<&String> = lines.iter().filter(|line| !line.is_empty()).collect();
    let inner = body.iter().map(|line| width(line)).max().unwrap_or(0);
    let mut out = vec![name.to_string(), format!("┌{}┐", rule(inner + 2))];
    out.extend(body.iter().map(|line| format!("│ {} │", ljust(line, inner))));
    out.push(format!("└{}┘", rule(inner + 2)));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_bytes_minimal() {
        assert_eq!(int_bytes(0), vec![0]);
        assert_eq!(int_bytes(255), vec![0xff]);
        assert_eq!(int_bytes(256), vec![0x01, 0x00]);
        assert_eq!(int_bytes(-1), vec![0xff]);
        assert_eq!(int_bytes(-129), vec![0xff, 0x7f]);
    }

    #[test]
    fn test_null_card() {
        let expected = [
            "p",
            "┌────────────────────┐",
            "│ type: NULL         │",
            "│ size: 0 bytes      │",
            "│ meaning: no object │",
            "└────────────────────┘",
        ]
        .join("\n");
        assert_eq!(render_primitive("p", &Value::None), expected);
    }

    #[test]
    fn test_char_and_float_cards() {
        let card = render_primitive("c", &Value::str("A"));
        assert!(card.contains("│ bits: 01000001"));
        assert!(card.contains("value: 'A' (65)"));

        let card = render_primitive("f", &Value::Float(1.0));
        assert!(card.contains("  0  | 01111111111 | 000000000..."));
        assert!(card.contains("value: 1.0"));
    }

    #[test]
    fn test_address_is_stable_per_name() {
        let a = render_primitive("x", &Value::Int(1));
        let b = render_primitive("x", &Value::Int(2));
        assert_eq!(a.lines().nth(2), b.lines().nth(2));
    }
}
