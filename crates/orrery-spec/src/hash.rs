//! Canonical hashing of preset records.
//!
//! A preset's hash is the BLAKE3 digest of its canonical JSON form (RFC
//! 8785 JCS: sorted keys, no whitespace, minimal escaping). Because the
//! serialized record carries every reproducibility-critical field, two
//! presets with the same hash regenerate the same texture.

use crate::error::PresetError;
use crate::preset::PlanetPreset;

/// Computes the canonical BLAKE3 hash of a preset.
///
/// # Example
/// ```
/// use orrery_spec::{PlanetPreset, hash::canonical_preset_hash};
///
/// let preset = PlanetPreset::builder("test-01", 0.42).build();
/// let hash = canonical_preset_hash(&preset).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_preset_hash(preset: &PlanetPreset) -> Result<String, PresetError> {
    let value = preset.to_value()?;
    let canonical = canonicalize_json(&value);
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Computes a BLAKE3 hash of arbitrary bytes as 64 lowercase hex characters.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Canonicalizes a JSON value per RFC 8785 (JCS).
///
/// Object keys are sorted lexicographically, there is no inter-token
/// whitespace, and strings use minimal escaping. NaN and infinities
/// canonicalize to null; serde_json already refuses to produce them.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => canonicalize_number(n),
        serde_json::Value::String(s) => canonicalize_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            let pairs: Vec<String> = keys
                .iter()
                .map(|k| format!("{}:{}", canonicalize_string(k), canonicalize_json(&obj[*k])))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn canonicalize_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
            // Rust's shortest round-trip float formatting matches JCS for
            // the non-exponent range these records live in.
            let s = format!("{}", f);
            if s.contains('.') && !s.contains('e') && !s.contains('E') {
                return s.trim_end_matches('0').trim_end_matches('.').to_string();
            }
            s
        }
        _ => "null".to_string(),
    }
}

fn canonicalize_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
