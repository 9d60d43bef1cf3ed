// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Theme;

#[test]
fn test_theme_defaults_to_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn test_theme_toggles() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn test_theme_serializes_as_bool() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "true");
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "false");

    let theme: Theme = serde_json::from_str("true").unwrap();
    assert_eq!(theme, Theme::Dark);
    assert!(serde_json::from_str::<Theme>("\"dark\"").is_err());
}

#[test]
fn test_theme_display() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}
