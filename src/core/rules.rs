//! The fixed rule sequence that turns a GitHub-rendered Markdown page into
//! plain article HTML.
//!
//! Order matters: the container and heading rules key on class names, so
//! `class` runs after them. `link-target` only recognises `<a href=` once
//! every attribute in front of `href` (`class`, `dir`, `rel`) is gone, and
//! `existing-target` cleans up behind it.

use crate::core::sanitizer::{Rule, RuleSet};
use crate::utils::error::Result;

pub const CONTAINER: &str = "container";

pub fn github_rules() -> Result<RuleSet> {
    let rules = vec![
        Rule::new(
            CONTAINER,
            r#"(?s)\A.*?<article[^>]*\bclass="markdown-body[^"]*"[^>]*>(.*?)</article>.*\z"#,
            "$1",
        )?
        .required(),
        Rule::new(
            "heading-wrapper",
            r#"<div class="markdown-heading"[^>]*><h([1-6])[^>]*>(.*?)</h[1-6]><a id="user-content-([^"]*)"[^>]*>.*?</svg></a></div>"#,
            r#"<h$1 id="$3">$2</h$1>"#,
        )?,
        Rule::new(
            "heading-anchor",
            r#"<h([0-9])><a id="user-content-([^"]*).*<svg.*/svg></a>"#,
            r#"<h$1 id="$2">"#,
        )?,
        Rule::new("user-content-id", r#" id="user-content-([^"]*)""#, r#" id="$1""#)?,
        Rule::new("class", r#" class="[^"]*""#, "")?,
        Rule::new("dir", r#" dir="auto""#, "")?,
        Rule::new("rel", r#" rel="[^"]*""#, "")?,
        Rule::new(
            "community-link",
            r#"href="https://community\.dynamics\.com/"#,
            r#"href="https://"#,
        )?,
        Rule::new(
            "link-target",
            r#"<a href="([^#"][^"]*)""#,
            r#"<a href="$1" target="_blank""#,
        )?,
        // an author-supplied target later in the tag wins
        Rule::new(
            "existing-target",
            r#"<a href="([^"]*)" target="_blank"([^>]*? target="[^"]*")"#,
            r#"<a href="$1"$2"#,
        )?,
        Rule::new("table-wrapper", r"</?markdown-accessiblity-table[^>]*>", "")?,
    ];

    Ok(RuleSet::new(rules))
}
