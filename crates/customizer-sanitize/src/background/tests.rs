//! Tests for background keyword sanitizing.

use super::*;
use serde_json::json;

#[test]
fn repeat_accepts_every_keyword() {
    for k in ["no-repeat", "repeat", "repeat-x", "repeat-y", "inherit"] {
        assert_eq!(sanitize_bg_repeat(&json!(k)).as_str(), k);
    }
}

#[test]
fn repeat_falls_back_to_inherit() {
    assert_eq!(sanitize_bg_repeat(&json!("repeat-z")), BackgroundRepeat::Inherit);
    assert_eq!(sanitize_bg_repeat(&json!("Repeat")), BackgroundRepeat::Inherit);
    assert_eq!(sanitize_bg_repeat(&json!("")), BackgroundRepeat::Inherit);
    assert_eq!(sanitize_bg_repeat(&json!(1)), BackgroundRepeat::Inherit);
}

#[test]
fn size_accepts_and_falls_back() {
    assert_eq!(sanitize_bg_size(&json!("cover")), BackgroundSize::Cover);
    assert_eq!(sanitize_bg_size(&json!("contain")), BackgroundSize::Contain);
    assert_eq!(sanitize_bg_size(&json!("auto")), BackgroundSize::Inherit);
}

#[test]
fn attachment_accepts_and_falls_back() {
    assert_eq!(sanitize_bg_attach(&json!("fixed")), BackgroundAttachment::Fixed);
    assert_eq!(sanitize_bg_attach(&json!("scroll")), BackgroundAttachment::Scroll);
    assert_eq!(sanitize_bg_attach(&json!("local")), BackgroundAttachment::Inherit);
}

#[test]
fn position_accepts_all_nine() {
    for k in BackgroundPosition::ALL {
        assert_eq!(sanitize_bg_position(&json!(k.as_str())), *k);
    }
    assert_eq!(BackgroundPosition::ALL.len(), 9);
}

#[test]
fn position_falls_back_to_center_center() {
    assert_eq!(
        sanitize_bg_position(&json!("top-left")),
        BackgroundPosition::CenterCenter
    );
    assert_eq!(
        sanitize_bg_position(&json!("center")),
        BackgroundPosition::CenterCenter
    );
    assert_eq!(
        sanitize_bg_position(&json!(["left-top"])),
        BackgroundPosition::CenterCenter
    );
}

#[test]
fn defaults_are_the_fallbacks() {
    assert_eq!(BackgroundRepeat::default(), BackgroundRepeat::Inherit);
    assert_eq!(BackgroundSize::default(), BackgroundSize::Inherit);
    assert_eq!(BackgroundAttachment::default(), BackgroundAttachment::Inherit);
    assert_eq!(BackgroundPosition::default(), BackgroundPosition::CenterCenter);
}

#[test]
fn from_str_and_display() {
    let repeat: BackgroundRepeat = "repeat-x".parse().unwrap();
    assert_eq!(repeat, BackgroundRepeat::RepeatX);
    assert_eq!(repeat.to_string(), "repeat-x");

    let err = "sideways".parse::<BackgroundPosition>().unwrap_err();
    assert_eq!(err.to_string(), "'sideways' is not a valid background-position");
}

#[test]
fn serde_uses_css_spelling() {
    assert_eq!(
        serde_json::to_string(&BackgroundRepeat::NoRepeat).unwrap(),
        r#""no-repeat""#
    );
    let pos: BackgroundPosition = serde_json::from_str(r#""right-bottom""#).unwrap();
    assert_eq!(pos, BackgroundPosition::RightBottom);
}

#[test]
fn serde_spelling_matches_as_str() {
    for k in BackgroundPosition::ALL {
        assert_eq!(serde_json::to_value(k).unwrap(), json!(k.as_str()));
    }
    for k in BackgroundRepeat::ALL {
        assert_eq!(serde_json::to_value(k).unwrap(), json!(k.as_str()));
    }
}
