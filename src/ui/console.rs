// ui/console.rs

use crate::ui::{
    Page, RESULT_ID, SEARCH_FORM_ID, SEARCH_INPUT_ID, SUGGESTION_ITEM_CLASS, SUGGESTIONS_ID,
    UiBinder, UiEvent,
};
use crate::utils::html_to_text;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// Terminal rendition of the page. Output goes to any `Write`, stdout in the binary.
pub struct ConsolePage<W: Write> {
    input: String,
    out: W,
}

impl<W: Write> ConsolePage<W> {
    pub fn new(out: W) -> Self {
        Self {
            input: String::new(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("Failed to write to console: {}", e);
        }
    }
}

impl<W: Write> Page for ConsolePage<W> {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        debug!("#{} = {:?}", SEARCH_INPUT_ID, value);
        self.input = value.to_string();
        self.emit(&format!("> {}", value));
    }

    fn set_result_html(&mut self, html: &str) {
        debug!("#{} <- {}", RESULT_ID, html);
        self.emit(&html_to_text(html));
    }

    fn show_suggestions(&mut self, items: &[String]) {
        debug!("#{}: {} .{} entries", SUGGESTIONS_ID, items.len(), SUGGESTION_ITEM_CLASS);
        for (i, item) in items.iter().enumerate() {
            self.emit(&format!("  {}. {}", i + 1, item));
        }
    }

    fn clear_suggestions(&mut self) {
        debug!("#{} cleared", SUGGESTIONS_ID);
    }
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Type(&'a str),
    Submit,
    Clear,
    Pick(usize),
    Quit,
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let trimmed = line.trim();
    match trimmed {
        "" | ":go" => Some(Command::Submit),
        ":clear" => Some(Command::Clear),
        ":quit" => Some(Command::Quit),
        _ => match trimmed.strip_prefix(":pick") {
            // 1-based on the terminal, 0-based for the binder.
            Some(n) => match n.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(Command::Pick(n - 1)),
                _ => None,
            },
            None => Some(Command::Type(line)),
        },
    }
}

/// Feeds terminal lines to the binder until `:quit` or end of input.
pub async fn run<R, W>(binder: &mut UiBinder, page: &mut ConsolePage<W>, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    page.emit(&format!(
        "[{}] type a product name, empty line or :go to search, :pick N to choose, :clear to list all, :quit to exit",
        SEARCH_FORM_ID
    ));

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Type(text)) => {
                page.input = text.to_string();
                binder.dispatch(page, UiEvent::InputChanged);
            }
            Some(Command::Clear) => {
                page.input.clear();
                binder.dispatch(page, UiEvent::InputChanged);
            }
            Some(Command::Submit) => {
                binder.dispatch(page, UiEvent::Submit);
            }
            Some(Command::Pick(index)) => {
                binder.dispatch(page, UiEvent::SuggestionClicked(index));
            }
            Some(Command::Quit) => break,
            None => page.emit("Unrecognized command"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, ProductRecord};
    use std::sync::Arc;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(""), Some(Command::Submit));
        assert_eq!(parse_command(" :go "), Some(Command::Submit));
        assert_eq!(parse_command(":pick 2"), Some(Command::Pick(1)));
        assert_eq!(parse_command(":pick 0"), None);
        assert_eq!(parse_command(":pick x"), None);
        assert_eq!(parse_command(":quit"), Some(Command::Quit));
        assert_eq!(parse_command(" :clear"), Some(Command::Clear));
        assert_eq!(parse_command("Smart TV"), Some(Command::Type("Smart TV")));
    }

    #[tokio::test]
    async fn session_suggests_picks_and_searches() {
        let catalog = Catalog::new(
            "test",
            vec![
                ProductRecord::new("smart tv".into(), [500.0, 480.0, 510.0, 490.0]),
                ProductRecord::new("smart watch".into(), [90.0, 95.0, 85.0, 99.0]),
            ],
            0,
        );
        let mut binder = UiBinder::new(Arc::new(catalog), "$");
        let mut page = ConsolePage::new(Vec::new());

        let script: &[u8] = b"Sma\n:pick 1\n\n:quit\nignored\n";
        run(&mut binder, &mut page, script).await.unwrap();

        let output = String::from_utf8(page.into_inner()).unwrap();
        assert!(output.contains("  1. smart tv\n  2. smart watch\n"));
        assert!(output.contains("> smart tv\n"));
        assert!(output.contains(
            "The platform with the lowest price for \"smart tv\" is: flipkart at a price of $480.00"
        ));
        assert!(!output.contains("ignored"));
    }

    #[tokio::test]
    async fn clear_lists_every_name_up_to_the_cap() {
        let records = (1..=9)
            .map(|i| ProductRecord::new(format!("item {}", i), [1.0; 4]))
            .collect();
        let mut binder = UiBinder::new(Arc::new(Catalog::new("test", records, 0)), "");
        let mut page = ConsolePage::new(Vec::new());

        let script: &[u8] = b"item 9
:clear
";
        run(&mut binder, &mut page, script).await.unwrap();

        assert_eq!(page.input_value(), "");
        let output = String::from_utf8(page.into_inner()).unwrap();
        let after_clear = output.split("  1. item 9\n").nth(1).unwrap();
        assert!(after_clear.contains("  1. item 1\n"));
        assert!(after_clear.contains("  7. item 7\n"));
        assert!(!after_clear.contains("item 8"));
    }
}
