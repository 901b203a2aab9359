//! Shared fixtures for integration tests.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use prodia_params::Operation;
use serde_json::{Value, json};

pub const IMAGE_URL: &str = "https://images.example/input.png";
pub const MASK_URL: &str = "https://images.example/mask.png";

/// Base64 of a PNG signature followed by an IHDR length, enough to sniff as PNG.
pub fn png_data() -> String {
    STANDARD.encode([0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D])
}

/// Smallest valid input for each operation: required fields only.
pub fn minimal_input(op: Operation) -> Value {
    match op {
        Operation::Generate | Operation::SdxlGenerate => json!({"prompt": "a red fox"}),
        Operation::Transform | Operation::SdxlTransform => {
            json!({"prompt": "a red fox", "imageUrl": IMAGE_URL})
        }
        Operation::Inpaint | Operation::SdxlInpaint => {
            json!({"prompt": "a red fox", "imageUrl": IMAGE_URL, "maskUrl": MASK_URL})
        }
        Operation::ControlNet => {
            json!({"prompt": "a red fox", "model": "sd15.safetensors", "imageUrl": IMAGE_URL})
        }
        Operation::Upscale => json!({"imageUrl": IMAGE_URL, "resize": 2}),
        Operation::FaceSwap => json!({
            "sourceUrl": "https://images.example/source.jpg",
            "targetUrl": "https://images.example/target.jpg",
        }),
        Operation::FaceRestore => json!({"imageUrl": IMAGE_URL}),
    }
}

/// `minimal_input(op)` with `key` set to `value`.
pub fn with_field(op: Operation, key: &str, value: Value) -> Value {
    let mut raw = minimal_input(op);
    raw.as_object_mut()
        .expect("fixtures are objects")
        .insert(key.to_string(), value);
    raw
}

/// `minimal_input(op)` with `key` removed.
pub fn without_field(op: Operation, key: &str) -> Value {
    let mut raw = minimal_input(op);
    raw.as_object_mut().expect("fixtures are objects").remove(key);
    raw
}
