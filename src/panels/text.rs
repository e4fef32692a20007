//! src/panels/text.rs
//!
//! Static text panel used for the header and the key help line.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct TextPanel {
    pub text: String,
    pub title: Option<String>,
    pub emphasis: bool,
}

impl TextPanel {
    /// Bold, centered header without a block title.
    pub fn header(text: &str) -> Self {
        Self {
            text: text.to_string(),
            title: None,
            emphasis: true,
        }
    }

    pub fn titled(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: Some(title.to_string()),
            emphasis: false,
        }
    }
}

impl crate::ui::Panel for TextPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut block = Block::default().borders(Borders::ALL);
        if let Some(title) = &self.title {
            block = block.title(title.clone());
        }
        let mut p = Paragraph::new(self.text.clone())
            .wrap(Wrap { trim: true })
            .block(block);
        if self.emphasis {
            p = p
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD));
        }
        f.render_widget(p, area);
    }
}
