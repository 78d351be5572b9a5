use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::modal::ModalContent;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        Paragraph::new(app.page().lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        body,
    );
    frame.render_widget(footer_widget(), footer);

    if app.modal().is_open() {
        let popup = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup);
        let (title, lines) = modal_body(app);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(POPUP_BORDER)),
                ),
            popup,
        );
    }
}

fn modal_body(app: &App) -> (&'static str, Vec<Line<'static>>) {
    match app.modal().content() {
        ModalContent::Preview => ("Product", app.card_view().lines()),
        ModalContent::Basket => ("Basket", app.basket_view().lines()),
        ModalContent::OrderForm => ("Checkout 1/2: delivery", app.order_form_view().lines()),
        ModalContent::ContactsForm => ("Checkout 2/2: contacts", app.contacts_form_view().lines()),
        ModalContent::Success => ("Done", app.success_view().lines()),
        ModalContent::None => ("", Vec::new()),
    }
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            "  Lavka",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(DIM_TEXT)),
        Span::styled(
            format!("Basket: {}", app.page().counter()),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget() -> Paragraph<'static> {
    let hints = " ↑/↓: Browse │ Enter: Open │ b: Basket │ Esc: Close │ Ctrl+Q: Quit";
    Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
