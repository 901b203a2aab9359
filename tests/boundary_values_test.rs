//! Field domains: every value is either accepted as-is or rejected.

mod support;

use prodia_params::{ControlMode, GenerationRequest, Operation, ParamsError, validate};
use serde_json::{Value, json};
use support::{minimal_input, with_field};

fn rejected_field(op: Operation, key: &str, value: Value) -> String {
    let err = validate(op, &with_field(op, key, value.clone()))
        .err()
        .unwrap_or_else(|| panic!("{op}: {key}={value} was accepted"));
    match err {
        ParamsError::InvalidFieldValue { field, .. } => field,
        other => panic!("{op}: {key}={value} gave {other:?}"),
    }
}

#[test]
fn cfg_scale_must_be_positive() {
    for op in Operation::ALL.into_iter().filter(|op| op.is_generation()) {
        assert_eq!(rejected_field(op, "cfg_scale", json!(0)), "cfg_scale");
        assert_eq!(rejected_field(op, "cfg_scale", json!(0.0)), "cfg_scale");
        assert_eq!(rejected_field(op, "cfg_scale", json!(-3.5)), "cfg_scale");

        let req = validate(op, &with_field(op, "cfg_scale", json!(0.001))).unwrap();
        assert_eq!(req.sampling().unwrap().cfg_scale(), 0.001);
    }
}

#[test]
fn invalid_value_carries_domain() {
    let err = validate(
        Operation::Generate,
        &with_field(Operation::Generate, "cfg_scale", json!(0)),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParamsError::InvalidFieldValue {
            field: "cfg_scale".into(),
            value: "0".into(),
            allowed: "number > 0".into(),
        }
    );
}

#[test]
fn steps_must_be_at_least_one() {
    let op = Operation::SdxlGenerate;
    assert_eq!(rejected_field(op, "steps", json!(0)), "steps");
    assert_eq!(rejected_field(op, "steps", json!(12.5)), "steps");
    assert_eq!(rejected_field(op, "steps", json!("20")), "steps");
    let req = validate(op, &with_field(op, "steps", json!(1))).unwrap();
    assert_eq!(req.sampling().unwrap().steps(), Some(1));
}

#[test]
fn dimensions_must_be_positive_integers() {
    let op = Operation::Generate;
    assert_eq!(rejected_field(op, "width", json!(0)), "width");
    assert_eq!(rejected_field(op, "height", json!(-512)), "height");
    assert_eq!(rejected_field(op, "height", json!(u64::MAX)), "height");
}

#[test]
fn full_res_inpaint_needs_a_positive_canvas() {
    for (op, side) in [(Operation::Inpaint, 512), (Operation::SdxlInpaint, 1024)] {
        let mut raw = minimal_input(op);
        raw["inpainting_full_res"] = json!(true);
        for field in ["width", "height"] {
            let mut zeroed = raw.clone();
            zeroed[field] = json!(0);
            assert_eq!(
                validate(op, &zeroed).unwrap_err(),
                ParamsError::invalid(field, "0", "integer >= 1"),
                "{op}"
            );
        }

        let sampling = validate(op, &raw).unwrap().sampling().cloned().unwrap();
        assert_eq!((sampling.width(), sampling.height()), (side, side), "{op}");
    }
}

#[test]
fn denoising_strength_is_a_unit_interval() {
    let op = Operation::Transform;
    assert_eq!(
        rejected_field(op, "denoising_strength", json!(1.01)),
        "denoising_strength"
    );
    assert_eq!(
        rejected_field(op, "denoising_strength", json!(-0.1)),
        "denoising_strength"
    );
    for edge in [0.0, 1.0] {
        let GenerationRequest::Transform(req) =
            validate(op, &with_field(op, "denoising_strength", json!(edge))).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(req.denoising_strength(), edge);
    }
}

#[test]
fn inpainting_enums_and_blur() {
    for op in [Operation::Inpaint, Operation::SdxlInpaint] {
        assert_eq!(rejected_field(op, "mask_blur", json!(-1)), "mask_blur");
        assert_eq!(rejected_field(op, "inpainting_fill", json!(4)), "inpainting_fill");
        assert_eq!(
            rejected_field(op, "inpainting_mask_invert", json!(2)),
            "inpainting_mask_invert"
        );
        assert_eq!(
            rejected_field(op, "inpainting_full_res", json!(1)),
            "inpainting_full_res"
        );

        let req = validate(op, &with_field(op, "mask_blur", json!(0))).unwrap();
        let (GenerationRequest::Inpaint(req) | GenerationRequest::SdxlInpaint(req)) = req else {
            panic!("wrong variant");
        };
        assert_eq!(req.inpainting().mask_blur(), 0);
    }
}

#[test]
fn control_mode_domain() {
    let op = Operation::ControlNet;
    assert_eq!(rejected_field(op, "control_mode", json!(3)), "control_mode");
    assert_eq!(rejected_field(op, "resize_mode", json!(-1)), "resize_mode");

    let mut raw = minimal_input(op);
    raw["control_mode"] = json!(2);
    raw["threshold_a"] = json!(-10);
    raw["resize_mode"] = json!(1);
    let GenerationRequest::ControlNet(req) = validate(op, &raw).unwrap() else {
        panic!("wrong variant");
    };
    assert_eq!(
        req.controlnet().control_mode(),
        Some(ControlMode::ControlNetMoreImportant)
    );
    assert_eq!(req.controlnet().threshold_a(), -10.0);
    assert_eq!(req.controlnet().resize_mode(), Some(1));
}

#[test]
fn upscale_resize_is_required_and_positive() {
    let op = Operation::Upscale;
    let raw = json!({"imageUrl": support::IMAGE_URL});
    assert_eq!(validate(op, &raw).unwrap_err(), ParamsError::missing("resize"));
    assert_eq!(rejected_field(op, "resize", json!(0)), "resize");
    assert_eq!(rejected_field(op, "resize", json!("2")), "resize");
}

#[test]
fn blank_identifiers_are_rejected() {
    assert_eq!(
        rejected_field(Operation::Generate, "sampler", json!(" ")),
        "sampler"
    );
    assert_eq!(
        rejected_field(Operation::Upscale, "model", json!("")),
        "model"
    );
}

#[test]
fn prompt_is_required_for_generation_family() {
    for op in Operation::ALL.into_iter().filter(|op| op.is_generation()) {
        let mut raw = minimal_input(op);
        raw.as_object_mut().unwrap().remove("prompt");
        assert_eq!(validate(op, &raw).unwrap_err(), ParamsError::missing("prompt"), "{op}");

        raw["prompt"] = json!("  \t");
        assert_eq!(validate(op, &raw).unwrap_err(), ParamsError::missing("prompt"), "{op}");

        raw["prompt"] = json!(["a", "b"]);
        assert_eq!(validate(op, &raw).unwrap_err().field(), Some("prompt"), "{op}");
    }
}

#[test]
fn non_object_input_is_malformed() {
    for raw in [json!(null), json!("prompt"), json!(42)] {
        assert!(matches!(
            validate(Operation::Generate, &raw).unwrap_err(),
            ParamsError::MalformedInput(_)
        ));
    }
}

#[test]
fn one_bad_call_does_not_affect_the_next() {
    let op = Operation::Generate;
    assert!(validate(op, &with_field(op, "cfg_scale", json!(-1))).is_err());
    assert!(validate(op, &minimal_input(op)).is_ok());
}
