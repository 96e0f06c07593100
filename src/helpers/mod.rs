pub mod fzf_invoker;

use self::fzf_invoker::FzfInvoker;
use anyhow::Result;
use anyhow::bail;
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub const CODENAME_PLACEHOLDER: &str = "{codename}";
pub const ARCH_PLACEHOLDER: &str = "{arch}";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{[^{}]*\}").expect("invalid placeholder regex"))
}

/// Wrapper around the `termenu` picker that keeps the UX consistent across the
/// project. The helper converts the supplied items into `String`s so callers do
/// not have to worry about ownership.
pub fn choose_one<S: ToString>(title: &str, items: Vec<S>) -> Result<String> {
    let display_items: Vec<String> = items.into_iter().map(|s| s.to_string()).collect();
    let picker = FzfInvoker::new(title.to_string(), display_items);
    if let Some(choice) = picker.invoke()? {
        Ok(choice)
    } else {
        bail!("No selection made");
    }
}

/// Every `{...}` token of a URL template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_regex().find_iter(template).map(|m| m.as_str()).collect()
}

/// Substitute the codename and architecture into a catalog URL template.
///
/// Values are inserted verbatim; templates without an `{arch}` token keep
/// their fixed architecture.
pub fn render_template(template: &str, codename: &str, arch: &str) -> String {
    // Single pass, so substituted values are never re-scanned for tokens.
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match &caps[0] {
            CODENAME_PLACEHOLDER => codename.to_string(),
            ARCH_PLACEHOLDER => arch.to_string(),
            other => other.to_string(),
        })
        .into_owned()
}
