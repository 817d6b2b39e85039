//! Widget rendering for the storefront UI

use chrono::{DateTime, Local, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Wrap};
use shared::models::Availability;
use shared::order::{ConfirmedOrder, FieldErrors};

use super::app::{App, InputMode, OrdersTab, Screen, SettingsTab};
use super::form::TextForm;
use super::toast::ToastVariant;
use crate::session::money;

const PRIMARY: Color = Color::Red;
const DIMMED: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    match app.screen {
        Screen::Orders => draw_orders(frame, chunks[1], app),
        Screen::Settings => draw_settings(frame, chunks[1], app),
    }
    draw_toast(frame, chunks[2], app);
    draw_help(frame, chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let screens = vec!["Zamówienia [z]", "Ustawienia [u]"];
    let selected = match app.screen {
        Screen::Orders => 0,
        Screen::Settings => 1,
    };
    let tabs = Tabs::new(screens)
        .select(selected)
        .highlight_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .block(
            Block::bordered().title(format!(" {} ", app.state.settings.company().name)),
        );
    frame.render_widget(tabs, area);
}

// ── Orders screen ───────────────────────────────────────────────────

fn draw_orders(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

    let form_enabled = !app.state.session.is_empty();
    let confirmation_enabled = app.state.session.confirmed_order().is_some();

    let titles = vec![
        Line::from("1 Produkty"),
        tab_title("2 Formularz zamówienia", form_enabled),
        tab_title("3 Potwierdzenie", confirmation_enabled),
    ];
    let selected = match app.orders_tab {
        OrdersTab::Products => 0,
        OrdersTab::Form => 1,
        OrdersTab::Confirmation => 2,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    match app.orders_tab {
        OrdersTab::Products => draw_products(frame, chunks[1], app),
        OrdersTab::Form => draw_order_form(frame, chunks[1], app),
        OrdersTab::Confirmation => draw_confirmation(frame, chunks[1], app),
    }
}

fn tab_title(title: &str, enabled: bool) -> Line<'_> {
    if enabled {
        Line::from(title)
    } else {
        Line::from(Span::styled(title, Style::default().fg(DIMMED)))
    }
}

fn draw_products(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);

    // Filter bar
    let all = "Wszystkie";
    let search_style = if app.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let filter_line = Line::from(vec![
        Span::raw("Szukaj [/]: "),
        Span::styled(
            if app.search.value().is_empty() && app.input_mode != InputMode::Editing {
                "Szukaj produktu...".to_string()
            } else {
                app.search.value().to_string()
            },
            search_style,
        ),
        Span::raw("   Kategoria [c]: "),
        Span::raw(app.filter.category.as_deref().unwrap_or(all)),
        Span::raw("   Podkategoria [v]: "),
        Span::raw(app.filter.subcategory.as_deref().unwrap_or(all)),
        Span::raw("   Dostępność [b]: "),
        Span::raw(
            app.filter
                .availability
                .map(|a| a.label())
                .unwrap_or(all),
        ),
        Span::raw("   Ilość [+/-]: "),
        Span::styled(
            app.pending_quantity.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let filter_bar = Paragraph::new(filter_line)
        .block(Block::bordered().title(" Filtrowanie "));
    frame.render_widget(filter_bar, chunks[0]);

    // Product table
    let visible = app.visible_products();
    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let style = if i == app.product_cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(product.code().to_string()),
                Cell::from(product.name.clone()),
                Cell::from(format!("{} / {}", product.category, product.subcategory)),
                Cell::from(Span::styled(
                    product.availability.label(),
                    availability_style(product.availability),
                )),
                Cell::from(format!("{:.2} / {}", product.price, product.unit)),
            ])
            .style(style)
        })
        .collect();

    let table = if rows.is_empty() {
        Table::new(
            vec![Row::new(vec![Cell::from(
                "Nie znaleziono produktów spełniających kryteria.",
            )])],
            [Constraint::Percentage(100)],
        )
    } else {
        Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Length(14),
                Constraint::Length(16),
            ],
        )
        .header(
            Row::new(vec!["Kod", "Nazwa produktu", "Kategoria", "Dostępność", "Cena (zł)"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
    };
    frame.render_widget(
        table.block(Block::bordered().title(format!(" Produkty ({}) ", visible.len()))),
        chunks[1],
    );
}

fn availability_style(availability: Availability) -> Style {
    match availability {
        Availability::Available => Style::default().fg(Color::Green),
        Availability::Low => Style::default().fg(Color::Yellow),
        Availability::Unavailable => Style::default().fg(Color::Red),
    }
}

fn draw_order_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)]).split(area);

    draw_cart(frame, chunks[0], app);
    draw_form(
        frame,
        chunks[1],
        &app.order_form,
        Some(&app.form_errors),
        app.input_mode == InputMode::Editing,
        " Formularz zamówienia ",
    );
}

fn draw_cart(frame: &mut Frame, area: Rect, app: &App) {
    let items = app.state.session.line_items();
    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.cart_cursor {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(format!("{} {}", item.quantity, item.unit)),
                Cell::from(format!("{:.2} zł", item.price)),
                Cell::from(format!("{:.2} zł", money::line_subtotal(item))),
            ])
            .style(style)
        })
        .collect();

    let total = app.state.session.compute_total();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["Produkt", "Ilość", "Cena jedn.", "Wartość"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .footer(
        Row::new(vec![
            Cell::from("Suma:"),
            Cell::from(""),
            Cell::from(""),
            Cell::from(Span::styled(
                format!("{:.2} zł", total),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            )),
        ]),
    )
    .block(Block::bordered().title(" Zamówienie "));
    frame.render_widget(table, area);
}

fn draw_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let Some(order) = app.state.session.confirmed_order() else {
        frame.render_widget(
            Paragraph::new("Brak potwierdzonego zamówienia.")
                .block(Block::bordered().title(" Potwierdzenie zamówienia ")),
            area,
        );
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Min(0),
        Constraint::Length(4),
    ])
    .split(area);

    let details_chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

    let customer = &order.customer;
    let customer_lines = vec![
        Line::from(vec![Span::raw("Firma: "), Span::raw(&customer.customer_name)]),
        Line::from(vec![Span::raw("Email: "), Span::raw(&customer.customer_email)]),
        Line::from(vec![Span::raw("Telefon: "), Span::raw(&customer.customer_phone)]),
        Line::from(vec![
            Span::raw("Adres dostawy: "),
            Span::raw(&customer.delivery_address),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(customer_lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Dane zamawiającego ")),
        details_chunks[0],
    );

    let order_lines = vec![
        Line::from(vec![
            Span::raw("Numer zamówienia: "),
            Span::styled(&order.order_number, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw("Data złożenia: "),
            Span::raw(format_millis(order.order_date)),
        ]),
        Line::from(vec![
            Span::raw("Data dostawy: "),
            Span::raw(customer.delivery_date.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(
                "Oczekujące na potwierdzenie",
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(order_lines).block(Block::bordered().title(" Szczegóły zamówienia ")),
        details_chunks[1],
    );

    draw_confirmed_items(frame, chunks[1], order);

    let mut footer_lines = Vec::new();
    if let Some(notes) = &customer.notes {
        footer_lines.push(Line::from(vec![
            Span::styled("Uwagi: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(notes.as_str()),
        ]));
    }
    footer_lines.push(Line::from(Span::styled(
        "[n] Złóż nowe zamówienie",
        Style::default().fg(PRIMARY),
    )));
    frame.render_widget(
        Paragraph::new(footer_lines).wrap(Wrap { trim: true }),
        chunks[2],
    );
}

fn draw_confirmed_items(frame: &mut Frame, area: Rect, order: &ConfirmedOrder) {
    let rows: Vec<Row> = order
        .line_items
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(format!("{} {}", item.quantity, item.unit)),
                Cell::from(format!("{:.2} zł", item.price)),
                Cell::from(format!("{:.2} zł", money::line_subtotal(item))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["Produkt", "Ilość", "Cena jedn.", "Wartość"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .footer(Row::new(vec![
        Cell::from("Suma:"),
        Cell::from(""),
        Cell::from(""),
        Cell::from(Span::styled(
            format!("{:.2} zł", order.total_amount),
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ]))
    .block(Block::bordered().title(" Pozycje zamówienia "));
    frame.render_widget(table, area);
}

// ── Settings screen ─────────────────────────────────────────────────

fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

    let titles = vec!["1 Dane firmy", "2 Certyfikaty", "3 Media Społecznościowe"];
    let selected = match app.settings_tab {
        SettingsTab::Company => 0,
        SettingsTab::Certifications => 1,
        SettingsTab::Social => 2,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    match app.settings_tab {
        SettingsTab::Company => {
            draw_form(frame, chunks[1], &app.company_form, None, editing, " Dane firmy ")
        }
        SettingsTab::Certifications => draw_certifications(frame, chunks[1], app),
        SettingsTab::Social => draw_form(
            frame,
            chunks[1],
            &app.social_form,
            None,
            editing,
            " Media Społecznościowe ",
        ),
    }
}

fn draw_certifications(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).split(area);

    let certifications = app.state.settings.certifications();
    let items: Vec<ListItem> = if certifications.is_empty() {
        vec![ListItem::new("Brak dodanych certyfikatów.")]
    } else {
        certifications
            .iter()
            .enumerate()
            .map(|(i, cert)| {
                let style = if i == app.cert_cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                let mut lines =
                    vec![Line::from(Span::styled(cert.name.clone(), style.bold()))];
                if let Some(description) = &cert.description {
                    lines.push(Line::from(Span::styled(
                        description.clone(),
                        Style::default().fg(DIMMED),
                    )));
                }
                ListItem::new(lines).style(style)
            })
            .collect()
    };
    frame.render_widget(
        List::new(items).block(Block::bordered().title(" Aktualne certyfikaty [d: usuń] ")),
        chunks[0],
    );

    draw_form(
        frame,
        chunks[1],
        &app.cert_form,
        None,
        app.input_mode == InputMode::Editing,
        " Dodaj nowy certyfikat [a: dodaj] ",
    );
}

// ── Shared widgets ──────────────────────────────────────────────────

fn draw_form(
    frame: &mut Frame,
    area: Rect,
    form: &TextForm,
    errors: Option<&FieldErrors>,
    editing: bool,
    title: &str,
) {
    let mut lines = Vec::new();
    for (i, field) in form.fields().iter().enumerate() {
        let focused = i == form.focus();
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if focused && editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{}: ", field.label), label_style),
            Span::styled(field.input.value().to_string(), value_style),
        ]));
        if let Some(message) = errors.and_then(|e| e.get(field.key)) {
            lines.push(Line::from(Span::styled(
                format!("    {}", message),
                Style::default().fg(Color::Red),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(title.to_string())),
        area,
    );
}

fn draw_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = app.toasts.current() else {
        frame.render_widget(Paragraph::new(""), area);
        return;
    };
    let style = match toast.variant {
        ToastVariant::Success => Style::default().fg(Color::Green),
        ToastVariant::Error => Style::default().fg(Color::Red),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(toast.message, style)),
        area,
    );
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let help = match (app.screen, app.orders_tab, app.input_mode) {
        (_, _, InputMode::Editing) => "Esc: zakończ edycję | Tab: następne pole",
        (Screen::Orders, OrdersTab::Products, _) => {
            "q: wyjście | ↑↓: wybór | +/-: ilość | Enter: dodaj | /: szukaj | c/v/b: filtry | x: wyczyść"
        }
        (Screen::Orders, OrdersTab::Form, _) => {
            "q: wyjście | ↑↓: pozycja | +/-: ilość | d: usuń | Tab: pole | i: edytuj | s: złóż zamówienie"
        }
        (Screen::Orders, OrdersTab::Confirmation, _) => "q: wyjście | n: nowe zamówienie",
        (Screen::Settings, _, _) => {
            "q: wyjście | 1/2/3: zakładki | Tab: pole | i: edytuj | s: zapisz | a: dodaj | d: usuń"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(DIMMED))),
        area,
    );
}

fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
