//! Key-based label lookup for the settings GUI
//!
//! Every user-visible label and description goes through [`t`], keeping the
//! render code free of literal strings and leaving a single seam for locale
//! catalogs later. Unknown keys fall back to the key itself so a typo shows
//! up on screen instead of panicking.

/// Resolve a label key to its display string.
pub fn t(key: &str) -> &str {
    match key {
        "settings.title" => "Settings",

        "global.title" => "Global",
        "view.title" => "Apply conversion to",
        "view.desc" => "Which view the copy commands read from.",
        "view.all" => "Both views",
        "view.reading" => "Reading view only",
        "view.edit" => "Edit view only",

        "reading.title" => "Reading",
        "reading.desc" => "Copying from the reading view",
        "edit.title" => "Edit",
        "edit.desc" => "Copying from the edit view",

        "copyAsHTML" => "Copy as HTML",

        "links" => "Links",
        "copyLinksAsText.title" => "Links conversion",
        "copyLinksAsText.desc" => "How links are rewritten in the copied text.",
        "copyLinksAsText.keep" => "Keep links",
        "copyLinksAsText.remove" => "Replace links with their text",
        "copyLinksAsText.external" => "Keep only external links",

        "removeFootnotesLinks.title" => "Footnotes conversion",
        "removeFootnotesLinks.desc" => "How footnote references are rewritten.",
        "removeFootnotesLinks.keep" => "Keep footnotes",
        "removeFootnotesLinks.remove" => "Remove footnotes",
        "removeFootnotesLinks.format" => "Format footnotes inline",

        "unconventionalMarkdown.title" => "Unconventional Markdown",
        "unconventionalMarkdown.desc" => {
            "Syntax that is not part of standard Markdown and may not render elsewhere."
        }

        "highlight.title" => "Highlight",
        "highlight.desc" => "Convert ==highlight== marks to standard Markdown.",

        "callout.title" => "Callout title",
        "callout.desc" => "What happens to the [!type] title line of callouts.",
        "callout.obsidian" => "Keep Obsidian syntax",
        "callout.strong" => "Bold title",
        "callout.remove" => "Remove title",

        "other" => "Other",
        "hardBreaks.title" => "Hard line breaks",
        "hardBreaks.desc" => "Add a forced line break after every line.",

        "wikiToMarkdown.title" => "Wiki links to Markdown",
        "wikiToMarkdown.desc" => "Convert [[wiki links]] to standard Markdown links.",
        "tabToSpace" => "Convert tabs to spaces",
        "tabSpaceSize" => "Spaces per tab",

        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_resolves() {
        assert_eq!(t("copyAsHTML"), "Copy as HTML");
        assert_eq!(t("callout.strong"), "Bold title");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("no.such.key"), "no.such.key");
    }
}
