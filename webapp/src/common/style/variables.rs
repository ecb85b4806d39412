pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #2563EB;
  --primary-light: #60A5FA;
  --accent: #9333EA;
  --success: #16A34A;

  /* Grays */
  --gray-50: #F9FAFB;
  --gray-100: #F3F4F6;
  --gray-200: #E5E7EB;
  --gray-300: #D1D5DB;
  --gray-400: #9CA3AF;
  --gray-500: #6B7280;
  --gray-600: #4B5563;
  --gray-700: #374151;
  --gray-800: #1F2937;
  --gray-900: #111827;

  /* Surfaces and text, light palette */
  --surface: #FFFFFF;
  --surface-alt: var(--gray-50);
  --text-main: var(--gray-900);
  --text-soft: var(--gray-600);
  --text-muted: var(--gray-500);
  --border: var(--gray-200);
  --chip-border: var(--gray-300);
  --hover: var(--gray-100);

  /* Layout */
  --header-height: 72px;
  --container-width: 1152px;
  --radius-lg: 1rem;
  --radius-full: 9999px;
  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
  --transition: all 0.3s ease;
}

/* Dark palette, switched on by the class applied to <html> */
html.dark {
  --surface: var(--gray-900);
  --surface-alt: var(--gray-800);
  --text-main: #FFFFFF;
  --text-soft: var(--gray-300);
  --text-muted: var(--gray-400);
  --border: var(--gray-700);
  --chip-border: var(--gray-500);
  --hover: var(--gray-800);
  color-scheme: dark;
}
"#;
