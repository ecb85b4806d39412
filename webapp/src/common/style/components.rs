// theme slots, one class per entry of the light and dark ThemeClasses tables
pub const THEME_SLOTS: &str = r#"
.surface-primary { background-color: #FFFFFF; color: var(--gray-900); }
.surface-primary-dark { background-color: var(--gray-900); color: #FFFFFF; }
.surface-secondary { background-color: var(--gray-50); color: var(--gray-900); }
.surface-secondary-dark { background-color: var(--gray-800); color: #FFFFFF; }
.surface-card { background-color: #FFFFFF; color: var(--gray-900); }
.surface-card-dark { background-color: var(--gray-800); color: #FFFFFF; }

.nav-clear { background-color: transparent; }
.nav-solid { background-color: rgba(255, 255, 255, 0.9); }
.nav-solid-dark { background-color: rgba(17, 24, 39, 0.9); }

.text-main { color: var(--gray-900); }
.text-main-dark { color: #FFFFFF; }
.text-soft { color: var(--gray-600); }
.text-soft-dark { color: var(--gray-300); }
.text-muted { color: var(--gray-500); }
.text-muted-dark { color: var(--gray-400); }

.border-soft { border-color: var(--gray-200); }
.border-soft-dark { border-color: var(--gray-700); }
.hover-soft:hover { background-color: var(--gray-50); }
.hover-soft-dark:hover { background-color: var(--gray-700); }

.gradient-hero { background: linear-gradient(to bottom right, #2563EB, #9333EA, #DB2777); }
.gradient-hero-dark { background: linear-gradient(to bottom right, var(--gray-900), #1E3A8A, #581C87); }
.gradient-section { background: linear-gradient(to bottom right, #EFF6FF, #FAF5FF); }
.gradient-section-dark { background: linear-gradient(to bottom right, var(--gray-800), var(--gray-900)); }

.footer-gradient { background: linear-gradient(to right, #BFDBFE, #E9D5FF, #FBCFE8); color: #000000; }
.footer-gradient-dark { background: linear-gradient(to right, var(--gray-900), #1E3A8A, #581C87); color: #FFFFFF; }

.bullet { background-color: var(--gray-400); }
.bullet-dark { background-color: var(--gray-500); }
"#;

pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.btn {
  display: inline-flex;
  align-items: center;
  padding: 12px 32px;
  border-radius: var(--radius-full);
  font-weight: 500;
  transition: var(--transition);
}

.btn-glass {
  color: #FFFFFF;
  background-color: rgba(255, 255, 255, 0.2);
  border: 1px solid rgba(255, 255, 255, 0.3);
  backdrop-filter: blur(4px);
}

.btn-glass:hover { background-color: rgba(255, 255, 255, 0.3); }

.btn-light {
  color: var(--accent);
  background-color: #FFFFFF;
}

.btn-light:hover { background-color: var(--gray-100); }

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  font-size: 1.25rem;
  transition: var(--transition);
}

.icon-button:hover {
  color: var(--primary);
  background-color: var(--hover);
}

/* Cards */
.card {
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-xl);
  padding: var(--space-8);
  transition: var(--transition);
}

.card.lift:hover { transform: scale(1.05); }

.chip {
  display: inline-block;
  padding: 4px 12px;
  margin: 0 8px 8px 0;
  border-radius: var(--radius-full);
  border: 1px solid var(--chip-border);
  font-size: 0.875rem;
}

.badge {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: 4px 12px;
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
  white-space: nowrap;
}

.badge.current { background-color: #DCFCE7; color: #166534; }
.badge.period { background-color: #DBEAFE; color: #1E40AF; }
.badge.year { background-color: #DCFCE7; color: #166534; }

.bullet-row {
  display: flex;
  align-items: flex-start;
  gap: 12px;
  margin-bottom: 8px;
}

.dot {
  flex-shrink: 0;
  width: 8px;
  height: 8px;
  margin-top: 8px;
  border-radius: var(--radius-full);
  background-color: #3B82F6;
}

/* Navigation */
.app-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  transition: var(--transition);
}

.app-header.scrolled {
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-xl);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-4) var(--space-6);
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  padding: 4px 8px;
  border-radius: 0.75rem;
  color: var(--text-main);
  transition: var(--transition);
}

.brand:hover {
  color: var(--primary);
  background-color: #DBEAFE;
}

html.dark .brand:hover { background-color: #1E3A8A; }

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-link {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: 8px 16px;
  border-radius: var(--radius-full);
  color: var(--text-main);
  transition: var(--transition);
}

.nav-link:hover {
  color: var(--primary);
  background-color: var(--hover);
}

.nav-link.active,
.nav-link.active:hover {
  color: #FFFFFF;
  background-color: var(--primary);
  box-shadow: var(--shadow-md);
}

.nav-mobile {
  align-items: center;
  gap: var(--space-2);
}

.mobile-drawer {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-4) var(--space-6);
  border-top: 1px solid;
  backdrop-filter: blur(12px);
}

.drawer-link {
  border-radius: 0.5rem;
  padding: 12px 16px;
}

.mobile-only { display: none; }

@media (max-width: 767px) {
  .desktop-only { display: none; }
  .mobile-only { display: flex; }
}

/* Footer */
.app-footer {
  margin-top: 64px;
  padding: 40px 0;
  border-radius: 1.5rem 1.5rem 0 0;
  box-shadow: var(--shadow-xl);
  transition: var(--transition);
}

.footer-main {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-6);
}

.footer-name {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.5rem;
  font-weight: 800;
}

.footer-title { color: #1D4ED8; font-weight: 500; }
html.dark .footer-title { color: #93C5FD; }

.footer-motto {
  font-size: 0.875rem;
  font-style: italic;
  color: var(--text-soft);
}

.footer-icons {
  display: flex;
  gap: var(--space-4);
  margin-top: 12px;
}

.footer-icons a { color: inherit; font-size: 1.25rem; }
.footer-icons a:hover { color: var(--primary); text-decoration: none; }

.footer-nav {
  display: flex;
  gap: var(--space-6);
}

.footer-button {
  padding: 8px 20px;
  border-radius: 0.75rem;
  font-weight: 600;
  box-shadow: var(--shadow-md);
  background-color: rgba(255, 255, 255, 0.7);
  transition: var(--transition);
}

html.dark .footer-button { background-color: rgba(31, 41, 55, 0.7); }

.footer-button:hover,
.footer-button.active,
html.dark .footer-button.active {
  color: #FFFFFF;
  background-color: var(--primary);
}

.footer-button:hover { transform: scale(1.05); }

.footer-legal {
  margin-top: var(--space-8);
  padding-top: var(--space-6);
  border-top: 1px solid var(--chip-border);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.pulse {
  display: inline-block;
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: #3B82F6;
  animation: pulse 2s infinite;
}

@keyframes pulse {
  50% { opacity: 0.5; }
}
"#;
