//! Style presets are a closed set, checked for every operation kind.

mod support;

use prodia_params::{Operation, ParamsError, StylePreset, Validator, ValidatorConfig, validate};
use serde_json::json;
use support::{minimal_input, with_field};

#[test]
fn unrecognized_preset_rejected_for_every_operation() {
    for op in Operation::ALL {
        let raw = with_field(op, "style_preset", json!("cyberpunk"));
        assert_eq!(
            validate(op, &raw).unwrap_err(),
            ParamsError::UnrecognizedStylePreset("cyberpunk".into()),
            "{op}"
        );
    }
}

#[test]
fn unrecognized_preset_rejected_even_in_lenient_mode() {
    let validator = Validator::new(ValidatorConfig::new().with_strict_fields(false));
    let raw = with_field(Operation::Upscale, "style_preset", json!("cyberpunk"));
    assert_eq!(
        validator.validate(Operation::Upscale, &raw).unwrap_err(),
        ParamsError::UnrecognizedStylePreset("cyberpunk".into())
    );
}

#[test]
fn known_presets_are_kept() {
    for op in Operation::ALL.into_iter().filter(|op| op.is_generation()) {
        for preset in StylePreset::ALL {
            let raw = with_field(op, "style_preset", json!(preset.as_str()));
            let req = validate(op, &raw).unwrap();
            assert_eq!(req.sampling().unwrap().style_preset(), Some(preset));
        }
    }
}

#[test]
fn non_string_preset_is_an_invalid_value() {
    let raw = with_field(Operation::Generate, "style_preset", json!(3));
    let err = validate(Operation::Generate, &raw).unwrap_err();
    assert_eq!(err.field(), Some("style_preset"));
    assert!(matches!(err, ParamsError::InvalidFieldValue { .. }));
}

#[test]
fn valid_preset_on_non_generation_operation_is_not_accepted() {
    let raw = with_field(Operation::FaceRestore, "style_preset", json!("anime"));
    let err = validate(Operation::FaceRestore, &raw).unwrap_err();
    assert!(matches!(err, ParamsError::InvalidFieldValue { ref field, .. } if field == "style_preset"));

    let lenient = Validator::new(ValidatorConfig::new().with_strict_fields(false));
    assert!(lenient.validate(Operation::FaceRestore, &raw).is_ok());
    assert!(
        lenient
            .validate(Operation::FaceRestore, &minimal_input(Operation::FaceRestore))
            .is_ok()
    );
}
