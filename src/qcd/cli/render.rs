use colored::Colorize;
use qcd::api::{CmdMessage, MessageLevel};
use qcd::model::Entry;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Two aligned columns: labels padded to the widest label, then paths.
/// An empty registry renders as an empty string.
pub(super) fn render_entries(entries: &[Entry], use_color: bool) -> String {
    let label_width = entries
        .iter()
        .map(|e| e.label.width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for entry in entries {
        let padding = " ".repeat(label_width.saturating_sub(entry.label.width()));
        let label = if use_color {
            entry.label.cyan().bold().to_string()
        } else {
            entry.label.clone()
        };
        output.push_str(&format!(
            "{}{}{}{}\n",
            label, padding, COLUMN_GAP, entry.path
        ));
    }
    output
}

pub(super) fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match (use_color, &message.level) {
            (false, _) => message.content.clone(),
            (true, MessageLevel::Info) => message.content.dimmed().to_string(),
            (true, MessageLevel::Success) => message.content.green().to_string(),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_paths_after_widest_label() {
        let entries = vec![
            Entry::new("1", "/tmp/only-path"),
            Entry::new("docs", "/usr/share/doc"),
            Entry::new("x", "/var"),
        ];
        let output = render_entries(&entries, false);
        assert_eq!(
            output,
            "1     /tmp/only-path\ndocs  /usr/share/doc\nx     /var\n"
        );
    }

    #[test]
    fn measures_display_width_not_bytes() {
        let entries = vec![Entry::new("日本", "/jp"), Entry::new("ab", "/ab")];
        let output = render_entries(&entries, false);
        assert_eq!(output, "日本  /jp\nab    /ab\n");
    }

    #[test]
    fn empty_listing_renders_nothing() {
        assert_eq!(render_entries(&[], false), "");
    }

    #[test]
    fn plain_messages_one_per_line() {
        let messages = vec![CmdMessage::success("Added x -> /tmp"), CmdMessage::info("hi")];
        assert_eq!(render_messages(&messages, false), "Added x -> /tmp\nhi\n");
    }
}
