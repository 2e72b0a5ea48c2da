use redline_config::RedlineConfig;
use redline_core::responses::SectionSummary;
use redline_engine::SectionIndex;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SectionsArgs;
use crate::commands::shared::input::read_text;
use crate::output::output;

/// Section summaries of `doc_text` using `marker` headings.
pub fn summarize(doc_text: &str, marker: &str) -> Vec<SectionSummary> {
    SectionIndex::build_with_marker(doc_text, marker)
        .sections()
        .iter()
        .map(|section| section.summary())
        .collect()
}

/// Handle `redline sections`.
pub fn handle(args: &SectionsArgs, config: &RedlineConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let doc_text = read_text(&args.doc_file)?;
    let marker = args
        .marker
        .as_deref()
        .unwrap_or(&config.general.section_marker);
    let sections = summarize(&doc_text, marker);
    if sections.is_empty() {
        tracing::warn!(marker, "no headings found");
    }
    output(&sections, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn summaries_follow_the_marker() {
        let doc = "Preamble\n## 1. Term\nA\n### 1.1 Renewal\nB\n## 2. Fees\n";
        let level2 = summarize(doc, "## ");
        assert_eq!(
            level2.iter().map(|s| s.heading.as_str()).collect::<Vec<_>>(),
            vec!["## 1. Term", "## 2. Fees"]
        );
        assert_eq!((level2[0].body_start, level2[0].body_end), (2, 5));

        let level3 = summarize(doc, "### ");
        assert_eq!(level3.len(), 1);
        assert_eq!(level3[0].heading, "### 1.1 Renewal");
    }
}
