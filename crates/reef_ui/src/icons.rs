//! Placeholder icon assets for the Reef dashboard.
//!
//! Provides the IconName enum with the glyphs shown while dashboard content
//! is loading, and lookup from name to inline SVG markup. The markup strings
//! are opaque blobs: embedded at compile time and handed to the rendering
//! layer untouched, never parsed or mutated here.

use std::fmt;
use std::str::FromStr;

use reef_core::ReefError;
use serde::{Deserialize, Serialize};

/// Greyed-out pipeline graph with every stage still queued.
const PIPELINE_EMPTY: &str = r##"<svg width="120" height="24" viewBox="0 0 120 24" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><defs><path d="M12 0C5.376 0 0 5.376 0 12s5.376 12 12 12 12-5.376 12-12S18.624 0 12 0z" id="a"/><mask id="d" x="0" y="0" width="24" height="24" fill="#fff"><use xlink:href="#a"/></mask><path d="M12 0C5.376 0 0 5.376 0 12s5.376 12 12 12 12-5.376 12-12S18.624 0 12 0z" id="b"/><mask id="e" x="0" y="0" width="24" height="24" fill="#fff"><use xlink:href="#b"/></mask><path d="M12 0C5.376 0 0 5.376 0 12s5.376 12 12 12 12-5.376 12-12S18.624 0 12 0z" id="c"/><mask id="f" x="0" y="0" width="24" height="24" fill="#fff"><use xlink:href="#c"/></mask></defs><g transform="translate(-4 -12)" fill="none" fill-rule="evenodd"><path d="M0 0h128v48H0z"/><path fill="#AFAEAE" d="M24 22h83v4H24z"/><use mask="url(#d)" xlink:href="#a" stroke-width="7" transform="translate(4 12)" stroke="#949393" fill="#FFF"/><g transform="translate(100 12)"><path d="M0 0h24v24H0z"/><use stroke="#949393" mask="url(#e)" stroke-width="7" fill="#FFF" xlink:href="#b"/></g><circle fill="#FFF" cx="64" cy="24" r="10"/><use mask="url(#f)" xlink:href="#c" stroke-width="7" transform="translate(52 12)" stroke="#949393" fill="#FFF"/></g></svg>"##;

/// Pipeline graph with the first stage passed and the middle stage spinning.
const PIPELINE_RUNNING: &str = r##"<svg width="120" height="24" viewBox="0 0 120 24" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"><defs><path d="M12 0C5.376 0 0 5.376 0 12s5.376 12 12 12 12-5.376 12-12S18.624 0 12 0z" id="a"/><mask id="b" x="0" y="0" width="24" height="24" fill="#fff"><use xlink:href="#a"/></mask></defs><g transform="translate(-4 -12)" fill="none" fill-rule="evenodd"><path d="M0 0h128v48H0z"/><path fill="#AFAEAE" d="M24 22h83v4H24z"/><path d="M4 12h24v24H4z"/><path d="M4 24c0 6.624 5.376 12 12 12s12-5.376 12-12-5.376-12-12-12S4 17.376 4 24z" fill="#78B037"/><path fill="#FFF" d="M14 26.8L11.2 24l-.933.933L14 28.667l8-8-.933-.934z"/><g transform="translate(100 12)"><path d="M0 0h24v24H0z"/><use stroke="#949393" mask="url(#b)" stroke-width="7" fill="#FFF" xlink:href="#a"/></g><circle fill="#FFF" cx="64" cy="24" r="10"/><g transform="translate(52 12)"><path d="M12 24c6.627 0 12-5.373 12-12S18.627 0 12 0 0 5.373 0 12s5.373 12 12 12zm0-3.5a8.5 8.5 0 1 1 0-17 8.5 8.5 0 0 1 0 17z" fill="#A7C7F2" fill-rule="nonzero"/><circle fill="#60A6D9" cx="12" cy="12" r="3"/><path d="M.213 9.751A12 12 0 1 0 12.001 0v3.5a8.5 8.5 0 1 1-8.35 6.907L.213 9.751z" fill="#1D7DCF" fill-rule="nonzero"/></g></g></svg>"##;

/// Branch-and-merge pull request marker.
const PULL_REQUEST: &str = r##"<svg width="28" height="35" viewBox="0 0 28 35" xmlns="http://www.w3.org/2000/svg"><g fill="none" fill-rule="evenodd"><path d="M-10-7h48v48h-48z"/><path d="M25.667 26.32V11.667c-.07-1.82-.794-3.43-2.194-4.807-1.4-1.377-2.986-2.123-4.806-2.193h-2.334V0l-7 7 7 7V9.333h2.334c.63.047 1.12.257 1.61.724.49.466.7.98.723 1.61V26.32A4.65 4.65 0 0 0 23.333 35a4.65 4.65 0 0 0 2.334-8.68zm-2.334 6.813c-1.54 0-2.8-1.283-2.8-2.8 0-1.516 1.284-2.8 2.8-2.8 1.517 0 2.8 1.284 2.8 2.8 0 1.517-1.283 2.8-2.8 2.8zM9.333 7a4.65 4.65 0 0 0-4.666-4.667 4.65 4.65 0 0 0-2.334 8.68V26.32A4.65 4.65 0 0 0 4.667 35 4.65 4.65 0 0 0 7 26.32V11.013A4.64 4.64 0 0 0 9.333 7zM7.467 30.333c0 1.54-1.284 2.8-2.8 2.8-1.517 0-2.8-1.283-2.8-2.8 0-1.516 1.283-2.8 2.8-2.8 1.516 0 2.8 1.284 2.8 2.8zM4.667 9.8c-1.54 0-2.8-1.283-2.8-2.8s1.283-2.8 2.8-2.8c1.516 0 2.8 1.283 2.8 2.8s-1.284 2.8-2.8 2.8z" fill="#4A4A4A" fill-rule="nonzero"/></g></svg>"##;

/// Warning triangle with an exclamation mark.
const WARNING: &str = r##"<svg width="44" height="38" viewBox="0 0 44 38" xmlns="http://www.w3.org/2000/svg"><g fill="none" fill-rule="evenodd"><path d="M-2-4h48v48H-2z"/><path d="M0 38h44L22 0 0 38zm24-6h-4v-4h4v4zm0-8h-4v-8h4v8z" fill="#000" fill-rule="nonzero"/></g></svg>"##;

/// Placeholder icons shown while dashboard content loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconName {
    // Pipeline placeholders
    /// Pipeline graph with no runs yet
    PipelineEmpty,
    /// Pipeline graph with a run in progress
    PipelineRunning,

    // Activity placeholders
    /// Pull request marker
    PullRequest,
    /// Warning triangle
    Warning,
}

impl IconName {
    /// Get the icon name as a string for lookups and wire formats.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PipelineEmpty => "pipeline_empty",
            Self::PipelineRunning => "pipeline_running",
            Self::PullRequest => "pull_request",
            Self::Warning => "warning",
        }
    }

    /// Resolve an icon from its string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pipeline_empty" => Some(Self::PipelineEmpty),
            "pipeline_running" => Some(Self::PipelineRunning),
            "pull_request" => Some(Self::PullRequest),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Get the inline SVG markup for this icon.
    ///
    /// The returned string is a complete standalone SVG document. Callers
    /// embed it in rendered output as-is.
    pub fn markup(&self) -> &'static str {
        match self {
            Self::PipelineEmpty => PIPELINE_EMPTY,
            Self::PipelineRunning => PIPELINE_RUNNING,
            Self::PullRequest => PULL_REQUEST,
            Self::Warning => WARNING,
        }
    }

    /// Intrinsic size the markup declares, in CSS pixels (width, height).
    ///
    /// Lets the layout layer reserve space without inspecting the markup.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Self::PipelineEmpty => (120, 24),
            Self::PipelineRunning => (120, 24),
            Self::PullRequest => (28, 35),
            Self::Warning => (44, 38),
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconName {
    type Err = ReefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            ReefError::icon_with_hint(
                format!("unknown icon name: {s}"),
                "Expected one of: pipeline_empty, pipeline_running, pull_request, warning",
            )
        })
    }
}

/// Look up markup by string name, for callers that receive icon names over
/// the wire.
///
/// Prefer [`IconName::markup`] where the icon is known at compile time; the
/// closed enum makes missing lookups unrepresentable there.
pub fn markup_for(name: &str) -> Result<&'static str, ReefError> {
    match name.parse::<IconName>() {
        Ok(icon) => Ok(icon.markup()),
        Err(err) => {
            tracing::warn!(icon = name, "icon lookup failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EVERY_ICON: [IconName; 4] = [
        IconName::PipelineEmpty,
        IconName::PipelineRunning,
        IconName::PullRequest,
        IconName::Warning,
    ];

    #[test]
    fn test_icon_names() {
        assert_eq!(IconName::PipelineEmpty.name(), "pipeline_empty");
        assert_eq!(IconName::PipelineRunning.name(), "pipeline_running");
        assert_eq!(IconName::PullRequest.name(), "pull_request");
        assert_eq!(IconName::Warning.name(), "warning");
    }

    #[test]
    fn test_markup_is_total_and_well_formed() {
        for icon in EVERY_ICON {
            let markup = icon.markup();
            assert!(!markup.is_empty(), "{icon} markup is empty");
            assert!(markup.starts_with("<svg"), "{icon} markup is not an svg document");
            assert!(markup.ends_with("</svg>"), "{icon} markup is not terminated");
            assert!(markup.contains("viewBox="), "{icon} markup has no viewBox");
        }
    }

    #[test]
    fn test_markup_is_distinct_per_icon() {
        let distinct: HashSet<&str> = EVERY_ICON.iter().map(|icon| icon.markup()).collect();
        assert_eq!(distinct.len(), EVERY_ICON.len());
    }

    #[test]
    fn test_markup_is_idempotent() {
        for icon in EVERY_ICON {
            assert_eq!(icon.markup(), icon.markup());
        }
    }

    #[test]
    fn test_warning_markup_content() {
        let markup = IconName::Warning.markup();
        assert!(markup.contains(r#"viewBox="0 0 44 38""#));
        assert!(markup.contains(r##"fill="#000""##));
    }

    #[test]
    fn test_pull_request_markup_content() {
        let markup = IconName::PullRequest.markup();
        assert!(markup.contains(r#"width="28""#));
        assert!(markup.contains(r#"height="35""#));
    }

    #[test]
    fn test_sizes_match_declared_dimensions() {
        for icon in EVERY_ICON {
            let (width, height) = icon.size();
            assert!(icon.markup().contains(&format!(r#"width="{width}""#)));
            assert!(icon.markup().contains(&format!(r#"height="{height}""#)));
        }
    }

    #[test]
    fn test_from_name_round_trip() {
        for icon in EVERY_ICON {
            assert_eq!(IconName::from_name(icon.name()), Some(icon));
            assert_eq!(icon.name().parse::<IconName>().unwrap(), icon);
            assert_eq!(icon.to_string(), icon.name());
        }
    }

    #[test]
    fn test_unknown_name_is_an_icon_error() {
        let err = "bogus".parse::<IconName>().unwrap_err();
        assert_eq!(err.category(), "Icon");
        assert!(err.hint().unwrap().contains("pipeline_empty"));
        assert!(markup_for("bogus").is_err());
    }

    #[test]
    fn test_markup_for_known_name() {
        assert_eq!(markup_for("warning").unwrap(), IconName::Warning.markup());
    }

    #[test]
    fn test_serde_names_match_wire_format() {
        for icon in EVERY_ICON {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
            let parsed: IconName = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, icon);
        }
    }
}
