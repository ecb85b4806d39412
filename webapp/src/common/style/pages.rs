pub const PAGE_STYLES: &str = r#"
.page {
  min-height: 100vh;
  transition: var(--transition);
}

.page.offset { padding-top: 80px; }

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.narrow { max-width: 896px; margin: 0 auto; }

.section { padding: 80px 0; transition: var(--transition); }

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 64px;
}

.section-subtitle {
  text-align: center;
  font-weight: 700;
  margin-bottom: var(--space-8);
}

.grid-2, .grid-3, .grid-4 {
  display: grid;
  gap: var(--space-8);
}

@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, 1fr); }
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
  .grid-4 { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .grid-4 { grid-template-columns: repeat(4, 1fr); }
}

/* Breadcrumb */
.breadcrumb {
  padding: var(--space-4) 0;
  font-size: 0.875rem;
}

.breadcrumb .container {
  display: flex;
  gap: var(--space-2);
}

.breadcrumb button:hover { color: var(--primary); }
.breadcrumb .here { color: var(--primary); font-weight: 500; }

/* Hero */
.hero {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  overflow: hidden;
  color: #FFFFFF;
  text-align: center;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.2);
}

.hero-content {
  position: relative;
  z-index: 10;
  max-width: 896px;
}

.hero-title {
  font-size: clamp(3rem, 8vw, 4.5rem);
  font-weight: 700;
  margin-bottom: var(--space-6);
  animation: fade-in 0.8s ease both;
}

.hero-subtitle {
  font-size: clamp(1.5rem, 4vw, 1.875rem);
  margin-bottom: var(--space-8);
  opacity: 0.9;
  animation: fade-in 0.8s ease 0.2s both;
}

.hero-summary {
  font-size: clamp(1.25rem, 3vw, 1.5rem);
  margin: 0 auto 48px;
  max-width: 768px;
  opacity: 0.8;
  animation: fade-in 0.8s ease 0.4s both;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  animation: fade-in 0.8s ease 0.6s both;
}

.scroll-hint {
  position: absolute;
  bottom: 32px;
  left: 50%;
  transform: translateX(-50%);
  font-size: 2rem;
  color: rgba(255, 255, 255, 0.7);
  animation: bounce 1s infinite;
}

.scroll-hint:hover { color: #FFFFFF; }

@keyframes fade-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, -25%); }
  50% { transform: translate(-50%, 0); }
}

/* About */
.about-grid {
  display: grid;
  gap: 48px;
  align-items: center;
}

@media (min-width: 768px) {
  .about-grid { grid-template-columns: repeat(2, 1fr); }
}

.about-cards { display: flex; flex-direction: column; gap: var(--space-6); }

.about-icon { font-size: 3rem; margin-bottom: var(--space-4); }

.stats-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
}

.stat-card { text-align: center; padding: var(--space-6); }

.stat-value {
  color: #FFFFFF;
  font-size: 1.875rem;
  font-weight: 700;
  padding: 8px 16px;
  border-radius: 0.5rem;
  margin-bottom: 12px;
}

.skill-icon {
  display: inline-block;
  color: #FFFFFF;
  padding: 12px;
  border-radius: 0.5rem;
  margin-bottom: var(--space-4);
}

/* Work */
.job-header {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.company { color: var(--primary); font-size: 1.25rem; font-weight: 600; }
.organization { color: var(--primary); font-weight: 600; }

.project-card { padding: 0; overflow: hidden; }

.project-banner {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 128px;
  color: #FFFFFF;
  font-size: 3rem;
}

.project-body { padding: var(--space-8); }

.achievement {
  padding: var(--space-4);
  border-radius: 0.5rem;
  font-weight: 500;
  color: #166534;
  background-color: #F0FDF4;
}

html.dark .achievement {
  color: #86EFAC;
  background-color: rgba(20, 83, 45, 0.3);
}

/* Contact */
.contact-intro { font-size: 1.25rem; margin-bottom: 48px; opacity: 0.9; }

.contact-card {
  display: block;
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  color: #FFFFFF;
  background-color: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(4px);
  transition: var(--transition);
}

.contact-card:hover {
  text-decoration: none;
  background-color: rgba(255, 255, 255, 0.2);
  transform: scale(1.05);
}

.contact-icon { font-size: 2rem; margin-bottom: var(--space-4); }
.contact-info { font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); }

.entry {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: var(--space-4);
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
}

.accent-dot {
  display: inline-block;
  width: 12px;
  height: 12px;
  margin-right: 12px;
  border-radius: var(--radius-full);
}

.info-list li {
  display: flex;
  align-items: center;
  gap: 12px;
  margin-bottom: 8px;
  list-style: none;
}

.info-list .dot { margin-top: 0; }
"#;
