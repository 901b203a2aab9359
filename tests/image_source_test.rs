//! Image and mask sources resolve to exactly one variant.

mod support;

use prodia_params::{
    ImageReference, MaskReference, Operation, ParamsError, Validator, ValidatorConfig, validate,
};
use serde_json::json;
use support::{IMAGE_URL, MASK_URL, minimal_input, png_data, with_field, without_field};

fn image_operations() -> impl Iterator<Item = Operation> {
    Operation::ALL.into_iter().filter(|op| op.takes_image())
}

#[test]
fn both_image_keys_are_ambiguous_for_every_image_operation() {
    for op in image_operations() {
        let raw = with_field(op, "imageData", json!(png_data()));
        assert_eq!(
            validate(op, &raw).unwrap_err(),
            ParamsError::AmbiguousImageSource {
                url_field: "imageUrl",
                data_field: "imageData",
            },
            "{op}"
        );
    }
}

#[test]
fn no_image_key_is_missing_for_every_image_operation() {
    for op in image_operations() {
        let raw = without_field(op, "imageUrl");
        assert_eq!(
            validate(op, &raw).unwrap_err(),
            ParamsError::MissingImageSource {
                url_field: "imageUrl",
                data_field: "imageData",
            },
            "{op}"
        );
    }
}

#[test]
fn inline_image_data_resolves_to_data_variant() {
    for op in image_operations() {
        let mut raw = without_field(op, "imageUrl");
        raw["imageData"] = json!(png_data());
        let req = validate(op, &raw).unwrap_or_else(|e| panic!("{op}: {e}"));
        assert_eq!(req.image(), Some(&ImageReference::data(png_data())), "{op}");
    }
}

#[test]
fn mask_follows_the_same_rules() {
    for op in [Operation::Inpaint, Operation::SdxlInpaint] {
        let raw = with_field(op, "maskData", json!(png_data()));
        assert_eq!(
            validate(op, &raw).unwrap_err(),
            ParamsError::AmbiguousImageSource {
                url_field: "maskUrl",
                data_field: "maskData",
            }
        );

        let raw = without_field(op, "maskUrl");
        assert_eq!(
            validate(op, &raw).unwrap_err(),
            ParamsError::MissingImageSource {
                url_field: "maskUrl",
                data_field: "maskData",
            }
        );

        let req = validate(op, &minimal_input(op)).unwrap();
        assert_eq!(req.mask(), Some(&MaskReference::url(MASK_URL)));
    }
}

#[test]
fn image_is_resolved_before_mask() {
    let raw = json!({"prompt": "p"});
    let err = validate(Operation::Inpaint, &raw).unwrap_err();
    assert_eq!(err.field(), Some("imageUrl"));
}

#[test]
fn generate_does_not_take_an_image() {
    let raw = with_field(Operation::Generate, "imageUrl", json!(IMAGE_URL));
    let err = validate(Operation::Generate, &raw).unwrap_err();
    assert_eq!(err.field(), Some("imageUrl"));
}

#[test]
fn face_swap_rejects_inline_data() {
    let raw = json!({
        "sourceUrl": "https://images.example/source.jpg",
        "targetUrl": "https://images.example/target.jpg",
        "imageData": png_data(),
    });
    let err = validate(Operation::FaceSwap, &raw).unwrap_err();
    assert_eq!(err.field(), Some("imageData"));
}

#[test]
fn face_swap_requires_both_urls() {
    let err = validate(Operation::FaceSwap, &without_field(Operation::FaceSwap, "targetUrl"))
        .unwrap_err();
    assert_eq!(err, ParamsError::missing("targetUrl"));

    let err = validate(
        Operation::FaceSwap,
        &with_field(Operation::FaceSwap, "sourceUrl", json!("")),
    )
    .unwrap_err();
    assert_eq!(err, ParamsError::missing("sourceUrl"));
}

#[test]
fn unverified_inline_data_passes_through() {
    let validator = Validator::new(ValidatorConfig::new().with_verify_inline_data(false));
    let raw = json!({"imageData": "opaque"});
    let req = validator.validate(Operation::FaceRestore, &raw).unwrap();
    assert_eq!(req.image().and_then(ImageReference::as_data), Some("opaque"));
}

#[test]
fn size_cap_alone_only_asks_for_base64() {
    let config = ValidatorConfig::new()
        .with_verify_inline_data(false)
        .with_max_inline_bytes(100);
    let validator = Validator::new(config);
    let err = validator
        .validate(Operation::FaceRestore, &json!({"imageData": "opaque!"}))
        .unwrap_err();
    assert_eq!(
        err,
        ParamsError::invalid("imageData", "<7 base64 chars>", "base64-encoded data")
    );
}
