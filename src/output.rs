//! Renders a decoded access event as text or json

use accesslog::AccessEvent;

pub fn display(event: &AccessEvent, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(event)?);
            Ok(())
        }
        "text" => {
            println!("{}", render_text(event));
            Ok(())
        }
        other => anyhow::bail!("unknown format: {}", other),
    }
}

fn render_text(event: &AccessEvent) -> String {
    format!(
        "[{:<5}] {:<8} {:<16} {:>12}  {}",
        event.access_type(),
        event.process_id(),
        truncate_string(event.process_name(), 16),
        event.file_size(),
        event.file_path()
    )
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let skip = s.chars().count() - max_len.saturating_sub(3);
        format!("...{}", s.chars().skip(skip).collect::<String>())
    }
}
