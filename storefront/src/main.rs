use storefront::ui::{ToastFeed, ToastNotifier};
use storefront::{AppState, Config, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env)
    setup_environment();

    print_banner();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Logging: file only - the TUI owns the terminal
    if config.log_dir.is_some() {
        storefront::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    }

    tracing::info!(environment = %config.environment, "storefront starting");

    // 4. Initialize state; session events feed the toast line
    let toasts = ToastFeed::new();
    let notifier = Box::new(ToastNotifier::new(toasts.clone()));
    let state = AppState::initialize(&config, notifier)?;

    // 5. Run the UI until the user quits
    storefront::ui::run(config, state, toasts)
}
