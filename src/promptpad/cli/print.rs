use colored::Colorize;
use promptpad::index::display_index;
use promptpad::model::Prompt;
use promptpad::render::{ListItem, ListView};
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

pub fn print_message(level: MessageLevel, message: &str) {
    match level {
        MessageLevel::Success => println!("{}", message.green()),
        MessageLevel::Warning => println!("{}", message.yellow()),
        MessageLevel::Error => println!("{}", message.red()),
    }
}

/// Prints the list view. Indexes come from `prompts`, the unfiltered collection.
pub fn print_list(view: &ListView, prompts: &[Prompt]) {
    for item in &view.items {
        let entry = match item {
            ListItem::Prompt(entry) => entry,
            ListItem::Placeholder { message } => {
                println!("{}", message.dimmed());
                continue;
            }
        };

        let index = display_index(prompts, &entry.id).unwrap_or(0);
        let idx_str = format!("{:>3}. ", index);

        let available = LINE_WIDTH.saturating_sub(idx_str.width());
        let title = truncate_to_width(&entry.title, available);
        let remaining = available.saturating_sub(title.width() + 2);
        let preview = truncate_to_width(&entry.preview, remaining);

        if preview.is_empty() {
            println!("{}{}", idx_str.yellow(), title.bold());
        } else {
            println!("{}{}  {}", idx_str.yellow(), title.bold(), preview.dimmed());
        }
    }
}

pub fn print_prompt(index: usize, title: &str, text: &str) {
    println!("{} {}", index.to_string().yellow(), title.bold());
    println!("--------------------------------");
    println!("{}", text);
}

pub fn print_info(data_dir: &Path, store_path: &Path, key: &str, count: usize, discarded: usize) {
    println!("{} {}", format!("{:<12}", "data dir").dimmed(), data_dir.display());
    println!("{} {}", format!("{:<12}", "store").dimmed(), store_path.display());
    println!("{} {}", format!("{:<12}", "key").dimmed(), key);
    println!("{} {}", format!("{:<12}", "prompts").dimmed(), count);
    if discarded > 0 {
        print_message(
            MessageLevel::Warning,
            &format!("{} malformed entries are ignored on load", discarded),
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
