use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn stored_dark_is_dark() {
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
}

#[test]
fn stored_light_and_unexpected_values_are_light() {
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("true"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("Dark"), Some(Theme::Light));
}

#[test]
fn stored_empty_value_counts_as_absent() {
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn toggled_flips_and_returns() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn dark_mode_flag_maps_onto_theme() {
    assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
    assert_eq!(Theme::from_dark_mode(false), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn persisted_values_are_lowercase_words() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// ThemeClasses
// =============================================================

#[test]
fn class_table_follows_theme() {
    assert_eq!(ThemeClasses::for_theme(Theme::Light), &LIGHT_CLASSES);
    assert_eq!(ThemeClasses::for_theme(Theme::Dark), &DARK_CLASSES);
}

#[test]
fn themed_slots_differ_between_tables() {
    let light = ThemeClasses::for_theme(Theme::Light);
    let dark = ThemeClasses::for_theme(Theme::Dark);

    for (a, b) in [
        (light.primary, dark.primary),
        (light.secondary, dark.secondary),
        (light.card, dark.card),
        (light.nav, dark.nav),
        (light.text, dark.text),
        (light.text_muted, dark.text_muted),
        (light.border, dark.border),
        (light.hover, dark.hover),
        (light.gradient_hero, dark.gradient_hero),
        (light.gradient_section, dark.gradient_section),
    ] {
        assert_ne!(a, b);
    }
}

#[test]
fn transparent_nav_is_shared() {
    assert_eq!(LIGHT_CLASSES.nav_transparent, DARK_CLASSES.nav_transparent);
}
