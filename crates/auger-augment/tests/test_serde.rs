#![cfg(feature = "serde")]

use auger_augment::{params::DataShape, AugmentError, AugmentParams};

#[test]
fn params_from_json_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let params: AugmentParams =
        serde_json::from_str(r#"{ "data_shape": [3, 32, 32], "pad": 4, "rand_crop": true }"#)?;

    assert_eq!(params.pad, 4);
    assert!(params.rand_crop);
    assert_eq!(params.inter_method, 1);
    assert_eq!(params.data_shape, Some(DataShape::new(3, 32, 32)?));
    Ok(())
}

#[test]
fn params_json_rejects_bad_shape() {
    let res = serde_json::from_str::<AugmentParams>(r#"{ "data_shape": [3, 32] }"#);
    assert!(res.is_err());
}

#[test]
fn params_json_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let params = AugmentParams {
        max_rotate_angle: 15,
        data_shape: Some(DataShape::new(3, 8, 8)?),
        ..Default::default()
    };
    let json = serde_json::to_string(&params)?;
    let back: AugmentParams = serde_json::from_str(&json)?;
    assert_eq!(back, params);
    assert_eq!(back.validate(), Ok(DataShape::new(3, 8, 8)?));
    Ok(())
}

#[test]
fn shape_error_is_config() {
    assert!(AugmentError::InvalidDataShape(vec![1]).is_config());
}
