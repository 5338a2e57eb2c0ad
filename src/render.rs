//! Rendering of instruction records for the panel and hover surfaces.
//!
//! Both renderers are pure: the same record always produces byte-identical
//! output, and absent optional fields degrade to an empty string rather than
//! placeholder text.

use crate::instruction_table::InstructionRecord;

/// Render the HTML fragment shown in the cheat sheet side panel.
///
/// The fragment contains a zero-margin rule for `<pre>` blocks, the mnemonic
/// as a bold heading, the usage summary, one `<pre>` block per variant in
/// stored order, and the extended notes if present.
pub fn render_panel(record: &InstructionRecord) -> String {
    let blocks: String = record
        .variants
        .iter()
        .map(|variant| format!("<pre>{}</pre>", variant.text))
        .collect();

    format!(
        "<style>pre{{margin:0px}}</style><b>{}</br></b>{}</br></br>{}</br>{}",
        record.mnemonic,
        record.usage,
        blocks,
        record.usage_extended.as_deref().unwrap_or(""),
    )
}

/// Render a record as Markdown for a standard LSP hover reply.
pub fn render_hover(record: &InstructionRecord) -> String {
    let forms = if record.variants.is_empty() {
        record.mnemonic.clone()
    } else {
        record
            .variants
            .iter()
            .map(|variant| variant.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut hover = format!("```z80\n{}\n```\n\n---\n\n{}", forms, record.usage);
    if let Some(extended) = &record.usage_extended {
        hover.push_str("\n\n");
        hover.push_str(extended);
    }
    hover
}
