use super::*;

struct BrokenDocument;

impl ThemeTarget for BrokenDocument {
    fn apply(&self, _theme: Theme) -> Result<()> {
        Err(anyhow::Error::msg("document unavailable"))
    }
}

struct BrokenViewport;

impl Viewport for BrokenViewport {
    fn scroll_to_top(&self) -> Result<()> {
        Err(anyhow::Error::msg("no window"))
    }

    fn scroll_to_section(&self, _anchor: &str) -> Result<bool> {
        Err(anyhow::Error::msg("no document"))
    }
}

#[test]
fn detached_host_defaults_to_light() {
    let host = Host::detached();
    assert_eq!(host.initial_theme(), Theme::Light);
}

#[test]
fn detached_host_has_no_sections() {
    let host = Host::detached();
    assert!(!host.scroll_to_section("about-section"));
}

#[test]
fn failing_adapters_do_not_propagate() {
    let host = Host {
        document: Rc::new(BrokenDocument),
        viewport: Rc::new(BrokenViewport),
        ..Host::detached()
    };

    host.apply_theme(Theme::Dark);
    host.scroll_to_top();
    assert!(!host.scroll_to_section("about-section"));
}
