//! Global CSS styles for ChainKnight.
//!
//! Dark gray-950 canvas, blue to purple brand gradient.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #030712;
  --night-panel: rgba(17, 24, 39, 0.5);
  --night-border: #1f2937;
  --night-raised: #1f2937;

  /* BLUE (Selection, Interactive) */
  --blue: #3b82f6;
  --blue-light: #60a5fa;
  --blue-glow: rgba(59, 130, 246, 0.2);

  /* PURPLE (Brand gradient partner) */
  --purple: #9333ea;
  --purple-light: #c084fc;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --danger: #f87171;
  --success: #34d399;

  --brand-gradient: linear-gradient(135deg, var(--blue), var(--purple));
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

/* === Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--night-border);
  background: rgba(17, 24, 39, 0.5);
  backdrop-filter: blur(8px);
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--brand-gradient);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-primary);
}

.brand-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  background: linear-gradient(90deg, var(--blue-light), var(--purple-light));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.brand-subtitle {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.nav-right {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.nav-link {
  text-decoration: none;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

.gate-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--text-muted);
}

.status-dot.active {
  background: var(--blue);
  box-shadow: 0 0 10px var(--blue);
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

/* === Dashboard === */
.dashboard {
  flex: 1;
  width: 100%;
  max-width: 1400px;
  margin: 0 auto;
  padding: 1.5rem;
}

.dashboard.fullscreen {
  max-width: none;
  padding: 0;
}

.hero {
  margin-bottom: 1.5rem;
}

.hero h2 {
  font-size: var(--text-xl);
  font-weight: 600;
}

.hero p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Catalog Cards === */
.catalog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.tool-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  text-align: left;
  color: inherit;
  font: inherit;
  background: var(--night-panel);
  border: 1px solid #374151;
  border-radius: 0.75rem;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal), border-color var(--transition-normal);
}

.tool-card:hover {
  transform: scale(1.03);
  border-color: #4b5563;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
}

.tool-card.selected {
  background: linear-gradient(135deg, rgba(37, 99, 235, 0.2), rgba(147, 51, 234, 0.2));
  border-color: rgba(59, 130, 246, 0.5);
  box-shadow: 0 10px 15px -3px var(--blue-glow);
}

.tool-card-row {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.tool-card-icon {
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  border-radius: 0.5rem;
  background: var(--night-raised);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background var(--transition-normal);
}

.tool-card.selected .tool-card-icon {
  background: var(--brand-gradient);
}

.tool-card-name {
  font-size: var(--text-lg);
  font-weight: 600;
}

.tool-card.selected .tool-card-name {
  color: var(--blue-light);
}

.tool-card-description {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.tool-card-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.selected-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--blue);
  animation: pulse 2s ease-in-out infinite;
}

/* === Tool Panel === */
.tool-panel {
  display: flex;
  flex-direction: column;
  background: var(--night-panel);
  border: 1px solid #374151;
  border-radius: 0.75rem;
  padding: 1rem;
}

.tool-panel.fullscreen {
  border: none;
  border-radius: 0;
  padding: 0;
  height: calc(100vh - 65px);
}

.tool-panel-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1rem;
}

.tool-panel.fullscreen .tool-panel-header {
  margin: 0;
  padding: 0.75rem 1.5rem;
  border-bottom: 1px solid var(--night-border);
}

.tool-panel-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--blue-light);
}

.tool-panel-title h2 {
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--text-primary);
}

.tool-panel-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.frame-container {
  position: relative;
  width: 100%;
  height: calc(100vh - 280px);
  min-height: 600px;
  border: 1px solid #374151;
  border-radius: 0.5rem;
  overflow: hidden;
  background: #111827;
}

.tool-panel.fullscreen .frame-container {
  flex: 1;
  height: auto;
  min-height: 0;
  border: none;
  border-radius: 0;
}

.tool-frame {
  width: 100%;
  height: 100%;
  border: 0;
  opacity: 1;
  transition: opacity var(--transition-normal);
}

.tool-frame.behind {
  opacity: 0;
}

.loading-overlay,
.failed-panel,
.frame-placeholder {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
  background: #111827;
}

.loading-overlay .progress {
  width: min(360px, 80%);
}

.loading-dots {
  display: flex;
  gap: 0.5rem;
}

.loading-dots span {
  width: 1rem;
  height: 1rem;
  border-radius: 50%;
  background: var(--blue);
  animation: pulse 1.2s ease-in-out infinite;
}

.loading-dots span:nth-child(2) {
  background: var(--purple);
  animation-delay: 150ms;
}

.loading-dots span:nth-child(3) {
  animation-delay: 300ms;
}

.loading-caption,
.frame-placeholder p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.failed-panel h3 {
  font-size: var(--text-lg);
  color: var(--danger);
}

.failed-panel p {
  max-width: 420px;
  text-align: center;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.failed-actions {
  display: flex;
  gap: 0.75rem;
}

/* === Tabs === */
.tab-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1rem;
  border-bottom: 1px solid var(--night-border);
}

.tab-list,
.tab-picker {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.tab {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  color: var(--text-secondary);
  font: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
}

.tab.active {
  color: var(--text-primary);
  border-bottom-color: var(--blue);
}

.tab-pending {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--purple);
  animation: pulse 1.2s ease-in-out infinite;
}

.tab-failed {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--danger);
}

.tab-chip {
  padding: 0.25rem 0.75rem;
  background: none;
  border: 1px dashed #374151;
  border-radius: 999px;
  color: var(--text-secondary);
  font: inherit;
  font-size: var(--text-xs);
  cursor: pointer;
}

.tab-chip:hover {
  border-color: var(--blue);
  color: var(--text-primary);
}

.tab-frames .frame-container {
  height: calc(100vh - 200px);
}

.tab-frames .frame-container.hidden {
  display: none;
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost,
.btn-danger {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
  font: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--brand-gradient);
  border: none;
  color: var(--text-primary);
}

.btn-primary:hover {
  box-shadow: 0 0 20px var(--blue-glow);
  transform: translateY(-1px);
}

.btn-outline {
  background: transparent;
  border: 1px solid #4b5563;
  color: #d1d5db;
}

.btn-outline:hover {
  border-color: #6b7280;
  color: var(--text-primary);
}

.btn-ghost {
  background: transparent;
  border: none;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

.btn-danger {
  background: transparent;
  border: 1px solid rgba(248, 113, 113, 0.5);
  color: var(--danger);
}

.btn-danger:hover {
  background: rgba(248, 113, 113, 0.1);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.25rem;
  height: 1.25rem;
  background: none;
  border: none;
  border-radius: 0.25rem;
  color: var(--text-muted);
  cursor: pointer;
}

.icon-btn:hover {
  background: var(--night-raised);
  color: var(--text-primary);
}

/* === Progress === */
.progress-label {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.progress-track {
  height: 4px;
  border-radius: 2px;
  background: var(--night-raised);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: linear-gradient(90deg, var(--blue), var(--purple));
  transition: width 180ms linear;
}

/* === Access Gate === */
.gate-page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}

.gate-card {
  width: min(420px, 100%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.25rem;
  padding: 2.5rem 2rem;
  background: var(--night-panel);
  border: 1px solid #374151;
  border-radius: 0.75rem;
  text-align: center;
}

.gate-card .brand-mark {
  width: 3rem;
  height: 3rem;
}

.gate-card form,
.form-field {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.gate-card .btn-primary {
  justify-content: center;
}

.gate-note {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  background: #111827;
  border: 1px solid #374151;
  border-radius: 0.375rem;
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder {
  color: var(--text-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--blue);
  box-shadow: 0 0 0 1px var(--blue), 0 0 20px var(--blue-glow);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-error {
  text-align: left;
  font-size: var(--text-sm);
  color: var(--danger);
}

/* === Settings === */
.settings-page {
  max-width: 720px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.settings-section {
  padding: 1.5rem;
  background: var(--night-panel);
  border: 1px solid #374151;
  border-radius: 0.75rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
}

.body-text {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.settings-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.settings-value {
  font-family: ui-monospace, 'SF Mono', Consolas, monospace;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Footer === */
.site-footer {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1.5rem;
  margin-top: 2rem;
  border-top: 1px solid var(--night-border);
  background: rgba(17, 24, 39, 0.3);
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.footer-tools {
  display: flex;
  gap: 1.5rem;
}

.startup-error {
  max-width: 640px;
  margin: 4rem auto;
  padding: 0 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.startup-error pre {
  padding: 1rem;
  background: #111827;
  border-radius: 0.5rem;
  color: var(--danger);
  white-space: pre-wrap;
}

@media (max-width: 768px) {
  .brand-subtitle {
    display: none;
  }

  .frame-container {
    min-height: 420px;
  }
}
"#;
