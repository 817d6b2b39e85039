//! Terminal UI application
//!
//! Keyboard-driven front-end standing in for the original browser pages:
//! an Orders screen (product table, order form, confirmation) and a
//! Settings screen. The UI holds only view state; all order state lives
//! in the session manager and is mutated through its operations.

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use shared::models::{Availability, CompanyProfileUpdate, Product, SocialLinksUpdate};
use shared::order::{CustomerInfo, FieldErrors, Stage};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use super::form::TextForm;
use super::render;
use super::toast::ToastFeed;
use crate::catalog::CatalogFilter;
use crate::core::{AppState, Config};
use crate::session::{SessionError, money};
use crate::utils::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Orders,
    Settings,
}

/// Tabs of the Orders screen, mirroring the original page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersTab {
    Products,
    Form,
    Confirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Company,
    Certifications,
    Social,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

pub struct App {
    pub config: Config,
    pub state: AppState,
    pub toasts: ToastFeed,

    pub screen: Screen,
    pub orders_tab: OrdersTab,
    pub settings_tab: SettingsTab,
    pub input_mode: InputMode,

    // Products tab
    pub filter: CatalogFilter,
    pub search: Input,
    pub product_cursor: usize,
    pub pending_quantity: i32,

    // Order form tab
    pub cart_cursor: usize,
    pub order_form: TextForm,
    pub form_errors: FieldErrors,

    // Settings screen
    pub company_form: TextForm,
    pub cert_form: TextForm,
    pub social_form: TextForm,
    pub cert_cursor: usize,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, state: AppState, toasts: ToastFeed) -> Self {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let order_form = TextForm::new(&[
            ("customer_name", "Imię i Nazwisko", ""),
            ("customer_email", "Email", ""),
            ("customer_phone", "Telefon", ""),
            ("delivery_address", "Adres Dostawy", ""),
            ("delivery_date", "Data dostawy (RRRR-MM-DD)", &today),
            ("notes", "Uwagi do zamówienia", ""),
        ]);

        let company = state.settings.company().clone();
        let company_form = TextForm::new(&[
            ("name", "Nazwa firmy", &company.name),
            ("address", "Adres", &company.address),
            ("phone", "Telefon", &company.phone),
            ("email", "Email", &company.email),
            ("description", "Opis firmy", &company.description),
        ]);

        let cert_form = TextForm::new(&[
            ("name", "Nazwa certyfikatu", ""),
            ("description", "Opis (opcjonalnie)", ""),
        ]);

        let social = state.settings.social().clone();
        let social_form = TextForm::new(&[
            ("facebook", "Facebook URL", social.facebook.as_deref().unwrap_or("")),
            ("instagram", "Instagram URL", social.instagram.as_deref().unwrap_or("")),
            ("twitter", "Twitter (X) URL", social.twitter.as_deref().unwrap_or("")),
        ]);

        Self {
            config,
            state,
            toasts,
            screen: Screen::Orders,
            orders_tab: OrdersTab::Products,
            settings_tab: SettingsTab::Company,
            input_mode: InputMode::default(),
            filter: CatalogFilter::default(),
            search: Input::default(),
            product_cursor: 0,
            pending_quantity: 1,
            cart_cursor: 0,
            order_form,
            form_errors: FieldErrors::new(),
            company_form,
            cert_form,
            social_form,
            cert_cursor: 0,
            should_quit: false,
        }
    }

    /// Products passing the active filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(self.state.catalog.products())
    }

    /// The product under the cursor, if any.
    fn selected_product(&self) -> Option<Product> {
        self.visible_products().get(self.product_cursor).map(|p| (*p).clone())
    }

    fn clamp_cursors(&mut self) {
        let visible = self.visible_products().len();
        self.product_cursor = self.product_cursor.min(visible.saturating_sub(1));
        let cart = self.state.session.item_count();
        self.cart_cursor = self.cart_cursor.min(cart.saturating_sub(1));
        let certs = self.state.settings.certifications().len();
        self.cert_cursor = self.cert_cursor.min(certs.saturating_sub(1));
    }

    // ── Key dispatch ────────────────────────────────────────────────

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.input_mode {
            InputMode::Normal => self.on_key_normal(key),
            InputMode::Editing => self.on_key_editing(key),
        }
        self.clamp_cursors();
    }

    fn on_key_normal(&mut self, key: KeyEvent) {
        // Global navigation
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('z') => {
                self.screen = Screen::Orders;
                return;
            }
            KeyCode::Char('u') => {
                self.screen = Screen::Settings;
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Orders => self.on_key_orders(key),
            Screen::Settings => self.on_key_settings(key),
        }
    }

    fn on_key_orders(&mut self, key: KeyEvent) {
        // Tab switching, gated the way the original disables triggers
        match key.code {
            KeyCode::Char('1') => {
                self.orders_tab = OrdersTab::Products;
                return;
            }
            KeyCode::Char('2') => {
                if !self.state.session.is_empty() {
                    self.orders_tab = OrdersTab::Form;
                }
                return;
            }
            KeyCode::Char('3') => {
                if self.state.session.confirmed_order().is_some() {
                    self.orders_tab = OrdersTab::Confirmation;
                }
                return;
            }
            _ => {}
        }

        match self.orders_tab {
            OrdersTab::Products => self.on_key_products(key),
            OrdersTab::Form => self.on_key_form(key),
            OrdersTab::Confirmation => self.on_key_confirmation(key),
        }
    }

    fn on_key_products(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.product_cursor = self.product_cursor.saturating_sub(1),
            KeyCode::Down => {
                let visible = self.visible_products().len();
                if self.product_cursor + 1 < visible {
                    self.product_cursor += 1;
                }
            }
            KeyCode::Char('+') => {
                self.pending_quantity = money::clamp_quantity(self.pending_quantity as i64 + 1);
            }
            KeyCode::Char('-') => {
                self.pending_quantity = money::clamp_quantity(self.pending_quantity as i64 - 1);
            }
            KeyCode::Char('/') => self.input_mode = InputMode::Editing,
            KeyCode::Char('c') => self.cycle_category(),
            KeyCode::Char('v') => self.cycle_subcategory(),
            KeyCode::Char('b') => self.cycle_availability(),
            KeyCode::Char('x') => {
                self.filter.clear();
                self.search.reset();
                self.product_cursor = 0;
            }
            KeyCode::Enter | KeyCode::Char('a') => self.add_selected_product(),
            _ => {}
        }
    }

    fn add_selected_product(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        if product.availability.is_unavailable() {
            self.toasts
                .error(format!("Produkt {} jest niedostępny.", product.name));
            return;
        }

        self.state.session.select_product(&product, self.pending_quantity);
        self.pending_quantity = 1;

        // Stage-advance policy: the original jumps to the order form
        // after each add; AUTO_REVIEW=false keeps the user browsing.
        if self.config.auto_review && self.state.session.advance_to_review().is_ok() {
            self.orders_tab = OrdersTab::Form;
        }
    }

    fn on_key_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.cart_cursor = self.cart_cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cart_cursor + 1 < self.state.session.item_count() {
                    self.cart_cursor += 1;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('-') => {
                let delta = if key.code == KeyCode::Char('+') { 1 } else { -1 };
                if let Some(item) = self.state.session.line_items().get(self.cart_cursor) {
                    let (id, quantity) = (item.product_id.clone(), item.quantity);
                    // floor of 1 is the manager's rule; going below is a no-op
                    self.state.session.set_quantity(&id, quantity + delta);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(item) = self.state.session.line_items().get(self.cart_cursor) {
                    let id = item.product_id.clone();
                    self.state.session.remove_item(&id);
                }
                if self.state.session.is_empty() {
                    // nothing left to review; the tab gates itself off
                    self.orders_tab = OrdersTab::Products;
                }
            }
            KeyCode::Tab => self.order_form.focus_next(),
            KeyCode::BackTab => self.order_form.focus_prev(),
            KeyCode::Char('i') | KeyCode::Enter => self.input_mode = InputMode::Editing,
            KeyCode::Char('s') => self.submit_order(),
            _ => {}
        }
    }

    fn on_key_confirmation(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('n') {
            self.start_new_order();
        }
    }

    fn on_key_settings(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') => {
                self.settings_tab = SettingsTab::Company;
                return;
            }
            KeyCode::Char('2') => {
                self.settings_tab = SettingsTab::Certifications;
                return;
            }
            KeyCode::Char('3') => {
                self.settings_tab = SettingsTab::Social;
                return;
            }
            _ => {}
        }

        match self.settings_tab {
            SettingsTab::Company => match key.code {
                KeyCode::Tab => self.company_form.focus_next(),
                KeyCode::BackTab => self.company_form.focus_prev(),
                KeyCode::Char('i') | KeyCode::Enter => self.input_mode = InputMode::Editing,
                KeyCode::Char('s') => self.save_company(),
                _ => {}
            },
            SettingsTab::Certifications => match key.code {
                KeyCode::Up => self.cert_cursor = self.cert_cursor.saturating_sub(1),
                KeyCode::Down => {
                    if self.cert_cursor + 1 < self.state.settings.certifications().len() {
                        self.cert_cursor += 1;
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => self.remove_certification(),
                KeyCode::Tab => self.cert_form.focus_next(),
                KeyCode::BackTab => self.cert_form.focus_prev(),
                KeyCode::Char('i') | KeyCode::Enter => self.input_mode = InputMode::Editing,
                KeyCode::Char('a') => self.add_certification(),
                _ => {}
            },
            SettingsTab::Social => match key.code {
                KeyCode::Tab => self.social_form.focus_next(),
                KeyCode::BackTab => self.social_form.focus_prev(),
                KeyCode::Char('i') | KeyCode::Enter => self.input_mode = InputMode::Editing,
                KeyCode::Char('s') => self.save_social(),
                _ => {}
            },
        }
    }

    fn on_key_editing(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Tab => {
                if let Some(form) = self.active_form_mut() {
                    form.focus_next();
                } else {
                    self.input_mode = InputMode::Normal;
                }
                return;
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return;
            }
            _ => {}
        }

        // Route the keystroke into the focused input
        if self.screen == Screen::Orders && self.orders_tab == OrdersTab::Products {
            self.search.handle_event(&Event::Key(key));
            self.filter.search = self.search.value().to_string();
            self.product_cursor = 0;
            return;
        }
        if let Some(form) = self.active_form_mut() {
            form.focused_input_mut().handle_event(&Event::Key(key));
        }
    }

    /// The text form keystrokes go to, given the active screen and tab.
    fn active_form_mut(&mut self) -> Option<&mut TextForm> {
        match (self.screen, self.orders_tab, self.settings_tab) {
            (Screen::Orders, OrdersTab::Form, _) => Some(&mut self.order_form),
            (Screen::Settings, _, SettingsTab::Company) => Some(&mut self.company_form),
            (Screen::Settings, _, SettingsTab::Certifications) => Some(&mut self.cert_form),
            (Screen::Settings, _, SettingsTab::Social) => Some(&mut self.social_form),
            _ => None,
        }
    }

    // ── Filter cycling ──────────────────────────────────────────────

    fn cycle_category(&mut self) {
        let categories: Vec<String> = self
            .state
            .catalog
            .categories()
            .iter()
            .map(|c| c.to_string())
            .collect();
        self.filter.category = cycle_option(&categories, self.filter.category.take());
        self.product_cursor = 0;
    }

    fn cycle_subcategory(&mut self) {
        let subcategories: Vec<String> = self
            .state
            .catalog
            .subcategories()
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.filter.subcategory = cycle_option(&subcategories, self.filter.subcategory.take());
        self.product_cursor = 0;
    }

    fn cycle_availability(&mut self) {
        self.filter.availability = match self.filter.availability {
            None => Some(Availability::Available),
            Some(Availability::Available) => Some(Availability::Low),
            Some(Availability::Low) => Some(Availability::Unavailable),
            Some(Availability::Unavailable) => None,
        };
        self.product_cursor = 0;
    }

    // ── Order actions ───────────────────────────────────────────────

    fn submit_order(&mut self) {
        // The date is a UI concern until it parses; the manager validates
        // the parsed value against the calendar.
        let date_raw = self.order_form.value("delivery_date").trim().to_string();
        let delivery_date = match NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                let mut errors = FieldErrors::new();
                errors.add(
                    "delivery_date",
                    "Nieprawidłowa data dostawy (format RRRR-MM-DD).",
                );
                self.form_errors = errors;
                return;
            }
        };

        let notes = self.order_form.value("notes").trim();
        let info = CustomerInfo {
            customer_name: self.order_form.value("customer_name").to_string(),
            customer_email: self.order_form.value("customer_email").to_string(),
            customer_phone: self.order_form.value("customer_phone").to_string(),
            delivery_address: self.order_form.value("delivery_address").to_string(),
            delivery_date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        };

        if self.state.session.stage() == Stage::Browsing
            && self.state.session.advance_to_review().is_err()
        {
            self.toasts.error("Zamówienie jest puste.");
            return;
        }

        match self.state.session.submit(&info) {
            Ok(_) => {
                self.form_errors = FieldErrors::new();
                self.orders_tab = OrdersTab::Confirmation;
            }
            Err(SessionError::Validation(errors)) => self.form_errors = errors,
            Err(SessionError::EmptyCart) => self.toasts.error("Zamówienie jest puste."),
            Err(SessionError::AlreadyConfirmed) => {
                self.toasts.error("Zamówienie zostało już potwierdzone.");
            }
        }
    }

    fn start_new_order(&mut self) {
        self.state.session.reset();
        self.form_errors = FieldErrors::new();
        self.order_form.clear();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        self.order_form.set_value("delivery_date", &today);
        self.cart_cursor = 0;
        self.orders_tab = OrdersTab::Products;
    }

    // ── Settings actions ────────────────────────────────────────────

    fn save_company(&mut self) {
        let update = CompanyProfileUpdate {
            name: Some(self.company_form.value("name").to_string()),
            address: Some(self.company_form.value("address").to_string()),
            phone: Some(self.company_form.value("phone").to_string()),
            email: Some(self.company_form.value("email").to_string()),
            description: Some(self.company_form.value("description").to_string()),
        };
        match self.state.settings.update_company(update) {
            Ok(()) => self
                .toasts
                .success("Dane firmy zostały zaktualizowane pomyślnie."),
            Err(AppError::Validation(_)) => self.toasts.error(
                "Wszystkie pola podstawowe (nazwa, adres, telefon, email) są wymagane.",
            ),
            Err(e) => self.toasts.error(format!("Błąd: {e}")),
        }
    }

    fn add_certification(&mut self) {
        let name = self.cert_form.value("name").trim().to_string();
        let description = self.cert_form.value("description").trim();
        let description = (!description.is_empty()).then(|| description.to_string());

        match self.state.settings.add_certification(name, description) {
            Ok(()) => {
                self.cert_form.clear();
                self.toasts.success("Certyfikat został dodany.");
            }
            Err(AppError::Validation(_)) => {
                self.toasts.error("Wprowadź nazwę certyfikatu.");
            }
            Err(e) => self.toasts.error(format!("Błąd: {e}")),
        }
    }

    fn remove_certification(&mut self) {
        if self.state.settings.remove_certification(self.cert_cursor).is_ok() {
            self.toasts.success("Certyfikat został usunięty.");
        }
    }

    fn save_social(&mut self) {
        let update = SocialLinksUpdate {
            facebook: Some(self.social_form.value("facebook").to_string()),
            instagram: Some(self.social_form.value("instagram").to_string()),
            twitter: Some(self.social_form.value("twitter").to_string()),
        };
        match self.state.settings.update_social(update) {
            Ok(()) => self
                .toasts
                .success("Linki do mediów społecznościowych zostały zaktualizowane."),
            Err(e) => self.toasts.error(format!("Błąd: {e}")),
        }
    }
}

/// Cycle `current` through `values`: None → first → ... → last → None.
fn cycle_option(values: &[String], current: Option<String>) -> Option<String> {
    match current {
        None => values.first().cloned(),
        Some(current) => match values.iter().position(|v| *v == current) {
            Some(i) if i + 1 < values.len() => Some(values[i + 1].clone()),
            _ => None,
        },
    }
}

// ── Terminal lifecycle ──────────────────────────────────────────────

/// Run the storefront UI until the user quits.
pub fn run(config: Config, state: AppState, toasts: ToastFeed) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, state, toasts);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    while !app.should_quit {
        app.toasts.prune();
        terminal.draw(|frame| render::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullNotifier;

    fn app() -> App {
        let config = Config::default();
        let state = AppState::initialize(&config, Box::new(NullNotifier)).unwrap();
        App::new(config, state, ToastFeed::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn form_tab_is_gated_until_the_cart_has_items() {
        let mut a = app();
        press(&mut a, KeyCode::Char('2'));
        assert_eq!(a.orders_tab, OrdersTab::Products);

        press(&mut a, KeyCode::Enter); // add first product
        assert!(!a.state.session.is_empty());
        // auto_review default jumps straight to the form
        assert_eq!(a.orders_tab, OrdersTab::Form);
    }

    #[test]
    fn auto_review_off_stays_on_the_product_list() {
        let config = Config {
            auto_review: false,
            ..Config::default()
        };
        let state = AppState::initialize(&config, Box::new(NullNotifier)).unwrap();
        let mut a = App::new(config, state, ToastFeed::new());

        press(&mut a, KeyCode::Enter);
        assert!(!a.state.session.is_empty());
        assert_eq!(a.orders_tab, OrdersTab::Products);
        assert_eq!(a.state.session.stage(), Stage::Browsing);

        // explicit navigation still works
        press(&mut a, KeyCode::Char('2'));
        assert_eq!(a.orders_tab, OrdersTab::Form);
    }

    #[test]
    fn unavailable_products_cannot_be_added() {
        let mut a = app();
        // prod_011 (Serce wołowe) is niedostępny in the seed data
        let unavailable_pos = a
            .visible_products()
            .iter()
            .position(|p| p.availability.is_unavailable())
            .unwrap();
        a.product_cursor = unavailable_pos;

        press(&mut a, KeyCode::Enter);
        assert!(a.state.session.is_empty());
        assert!(a.toasts.current().is_some());
    }

    #[test]
    fn search_editing_narrows_the_table() {
        let mut a = app();
        press(&mut a, KeyCode::Char('/'));
        assert_eq!(a.input_mode, InputMode::Editing);
        for c in "schab".chars() {
            press(&mut a, KeyCode::Char(c));
        }
        press(&mut a, KeyCode::Esc);

        assert_eq!(a.visible_products().len(), 1);
        assert_eq!(a.visible_products()[0].name, "Schab wieprzowy");
    }

    #[test]
    fn confirmation_tab_requires_a_confirmed_order() {
        let mut a = app();
        press(&mut a, KeyCode::Char('3'));
        assert_eq!(a.orders_tab, OrdersTab::Products);
    }

    #[test]
    fn submit_with_blank_form_surfaces_field_errors() {
        let mut a = app();
        press(&mut a, KeyCode::Enter); // add product, jump to form
        press(&mut a, KeyCode::Char('s')); // submit the blank form

        assert!(a.form_errors.get("customer_name").is_some());
        assert!(a.form_errors.get("customer_email").is_some());
        assert_eq!(a.state.session.stage(), Stage::Reviewing);
    }

    #[test]
    fn full_flow_reaches_confirmation_and_resets() {
        let mut a = app();
        press(&mut a, KeyCode::Enter);
        assert_eq!(a.orders_tab, OrdersTab::Form);

        a.order_form.set_value("customer_name", "Jan Kowalski");
        a.order_form.set_value("customer_email", "jan.kowalski@example.com");
        a.order_form.set_value("customer_phone", "123-456-789");
        a.order_form
            .set_value("delivery_address", "ul. Przykładowa 1, 00-000 Warszawa");
        press(&mut a, KeyCode::Char('s'));

        assert_eq!(a.orders_tab, OrdersTab::Confirmation);
        assert_eq!(a.state.session.stage(), Stage::Confirmed);

        press(&mut a, KeyCode::Char('n'));
        assert_eq!(a.orders_tab, OrdersTab::Products);
        assert!(a.state.session.is_empty());
        assert_eq!(a.state.session.stage(), Stage::Browsing);
    }

    #[test]
    fn settings_certification_roundtrip() {
        let mut a = app();
        press(&mut a, KeyCode::Char('u'));
        assert_eq!(a.screen, Screen::Settings);
        press(&mut a, KeyCode::Char('2'));

        a.cert_form.set_value("name", "Produkt polski");
        press(&mut a, KeyCode::Char('a'));
        assert_eq!(a.state.settings.certifications().len(), 4);

        a.cert_cursor = 3;
        press(&mut a, KeyCode::Char('d'));
        assert_eq!(a.state.settings.certifications().len(), 3);
    }
}
