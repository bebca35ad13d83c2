//! Runs the newsletter screen natively against a live backend and saves the
//! subscriber CSV into a directory.
//!
//! ```text
//! ADMIN_API_URL=http://localhost:5000/api ADMIN_API_TOKEN=... \
//!     cargo run -p admin-panel --example export_subscribers -- ./exports
//! ```

use admin_client::{ClientConfig, HttpClient};
use admin_panel::download::DirectoryDownloader;
use admin_panel::{
    dispatch, NewsletterMsg, NewsletterScreen, Services, ToastKind, ToastLog, EXPORT_FILENAME,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,admin_client=debug,admin_panel=debug")),
        )
        .init();

    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    // Клиент из переменных окружения
    let config = ClientConfig::from_env();
    println!("Backend: {}", config.base_url);
    let api = HttpClient::with_config(config);
    if api.get_token().is_none() {
        println!("ADMIN_API_TOKEN is not set, requests go out unauthenticated");
    }

    let downloader = DirectoryDownloader::new(dir.as_str());
    let services = Services::new(&api, &downloader);
    let toasts = ToastLog::new();
    let mut screen = NewsletterScreen::new();

    // Первая страница и статистика
    dispatch(&mut screen, NewsletterMsg::Mount, &services, &toasts).await;
    let stats = screen.stats();
    println!(
        "{} subscribers ({} active, {} unsubscribed on this page), {}",
        stats.total,
        stats.active,
        stats.unsubscribed,
        screen.page_controls().summary()
    );

    // Экспорт
    dispatch(&mut screen, NewsletterMsg::Export, &services, &toasts).await;

    let mut failed = false;
    for toast in toasts.drain() {
        match toast.kind {
            ToastKind::Success => println!("✅ {}", toast.text),
            ToastKind::Error => {
                failed = true;
                println!("❌ {}", toast.text);
            }
        }
    }

    if failed {
        return Err("export did not complete".into());
    }

    println!(
        "Saved to {}",
        downloader.path_for(EXPORT_FILENAME).display()
    );
    Ok(())
}
