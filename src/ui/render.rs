use crate::ui::app::App;
use crate::ui::binding::ControlEvent;
use crate::ui::layout::{counter_rows, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, SPINNER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " +/→: Increase │ -/←: Decrease │ q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(header_widget(), header);

    let (strip, spinner) = counter_rows(body);
    frame.render_widget(counter_strip(app), strip);
    if let Some(glyph) = app.spinner() {
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, Style::default().fg(SPINNER)))
                .alignment(Alignment::Center),
            spinner,
        );
    }

    frame.render_widget(footer_widget(footer), footer);
}

fn header_widget() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        " Counter",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn counter_strip(app: &App) -> Paragraph<'_> {
    let line = Line::from(vec![
        button(" − ", app.is_pressed(ControlEvent::DecreasePressed)),
        Span::raw("     "),
        Span::styled(
            app.value_text(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("     "),
        button(" + ", app.is_pressed(ControlEvent::IncreasePressed)),
    ]);
    Paragraph::new(line).alignment(Alignment::Center)
}

fn button(label: &'static str, pressed: bool) -> Span<'static> {
    let style = if pressed {
        Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(ACCENT)
    };
    Span::styled(format!("[{label}]"), style)
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);

    // Pad by char count, not bytes: the hints contain multi-byte arrows.
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(HINTS.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(HINTS, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
