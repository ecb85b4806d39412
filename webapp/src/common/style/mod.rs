use constcat::concat;

mod components;
mod pages;
mod variables;

use components::{BASE_COMPONENTS, THEME_SLOTS};
use pages::PAGE_STYLES;
use variables::CSS_VARIABLES;

// the whole stylesheet, injected once by the root component
pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html { scroll-behavior: smooth; }

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-main);
  background-color: var(--surface);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

h3 { font-size: 1.5rem; font-weight: 600; margin-bottom: var(--space-4); }
h4 { font-size: 1.125rem; font-weight: 600; margin-bottom: var(--space-2); }

.leading { line-height: 1.625; }
"#,
    CSS_VARIABLES,
    THEME_SLOTS,
    BASE_COMPONENTS,
    PAGE_STYLES
);
