//! Global CSS styles for OpsConsole.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #141414;
  --bg-raised: #1f1f1f;
  --border: #303030;
  --primary: #1677ff;
  --text-primary: rgba(255, 255, 255, 0.88);
  --text-secondary: rgba(255, 255, 255, 0.65);
  --text-muted: rgba(255, 255, 255, 0.45);
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
}

/* === Layout === */
.console { min-height: 100vh; display: flex; flex-direction: column; }

.console-header {
  display: flex;
  align-items: center;
  gap: 16px;
  padding: 0 24px;
  height: 56px;
  background: var(--bg-raised);
  border-bottom: 1px solid var(--border);
}

.console-title { font-weight: 600; flex: 1; }

.console-locales { display: flex; gap: 4px; }

.locale-option {
  background: none;
  border: 1px solid transparent;
  border-radius: 4px;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 2px 8px;
}

.locale-option.active { border-color: var(--primary); color: var(--text-primary); }

.console-main { padding: 16px 24px; flex: 1; }

/* === Breadcrumbs === */
.breadcrumbs {
  display: flex;
  align-items: center;
  gap: 8px;
  padding: 12px 24px 0;
  color: var(--text-muted);
  position: relative;
}

.breadcrumb-link { color: var(--text-secondary); text-decoration: none; }
.breadcrumb-link:hover { color: var(--primary); }
.breadcrumb-current { color: var(--text-primary); }
.breadcrumb-separator { color: var(--text-muted); }

.breadcrumb-menu {
  list-style: none;
  margin: 0;
  padding: 4px 0;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 4px;
}

.breadcrumb-menu a { display: block; padding: 2px 12px; color: var(--text-secondary); }

/* === Account badge === */
.account-badge { display: flex; align-items: center; gap: 8px; }
.account-badge.loading { opacity: 0.5; }

.account-avatar, .account-initials {
  width: 28px;
  height: 28px;
  border-radius: 50%;
}

.account-initials {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--primary);
  font-size: 12px;
}

/* === Icons === */
.anticon svg { width: 100%; height: 100%; }
.icon-placeholder { background: var(--border); border-radius: 2px; }

/* === Pages === */
.dashboard-menu, .dashboard-hosts { list-style: none; padding: 0; display: flex; gap: 16px; }
.dashboard-menu li { display: flex; align-items: center; gap: 6px; }
.dashboard-hosts a { color: var(--primary); }

.host-actions { display: flex; gap: 8px; }
.host-actions button {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 6px;
}
"#;
