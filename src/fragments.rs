//! Process-wide constant templates and marker tokens.

/// Markup for the login control and the (initially hidden) profile block.
/// Inserted just before a nav container closes.
pub const NAV_FRAGMENT: &str = r#"
                <button id="authButton" class="nav-link" style="background: var(--accent-gradient); border: none; padding: 0.5rem 1.5rem; border-radius: 6px; font-weight: 600; cursor: pointer; color: var(--bg-dark); display: none;">Login</button>
                <div id="userProfile" style="display: none; align-items: center; gap: 0.5rem;">
                    <img id="userAvatar" style="width: 32px; height: 32px; border-radius: 50%; border: 2px solid var(--primary-color); cursor: pointer;" title="" />
                    <button id="logoutButton" class="nav-link" style="background: rgba(255, 95, 87, 0.1); border: 1px solid #ff5f57; padding: 0.4rem 1rem; border-radius: 6px; font-weight: 500; cursor: pointer; color: #ff5f57;">Logout</button>
                </div>"#;

/// Script includes appended before the closing body tag: the hosted auth
/// client library plus the sibling `auth.js` glue script.
pub const SCRIPT_FRAGMENT: &str = r#"

    <!-- Supabase Client & Auth -->
    <script src="https://cdn.jsdelivr.net/npm/@supabase/supabase-js@2"></script>
    <script src="auth.js"></script>"#;

/// Idempotence key. A page containing this substring has already been
/// injected and is never touched again.
pub const AUTH_MARKER: &str = r#"id="authButton""#;

/// A page containing this substring already includes the auth scripts.
pub const SCRIPT_MARKER: &str = "auth.js";

/// Container pattern for the nav-links block: optional leading whitespace,
/// the opening tag, arbitrary inner content (non-greedy, across line
/// breaks), and the first closing tag after it.
pub const NAV_PATTERN: &str = r#"(?s)\s*<div class="nav-links">.*?</div>"#;

/// Closing-tag anchor inside a matched nav container span.
pub const NAV_CLOSE: &str = "</div>";

/// Indentation that re-aligns the container's closing tag after the
/// fragment is inserted above it.
pub const NAV_CLOSE_INDENT: &str = "\n            ";

/// Anchor for the script fragment.
pub const BODY_CLOSE: &str = "</body>";
