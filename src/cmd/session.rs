//! Session commands — `jobdeck login`, `logout`, `status`.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use jobdeck::api::ApiClient;
use jobdeck::config::Config;
use jobdeck::session::SessionStore;
use jobdeck::ui;

pub async fn cmd_login(config: &Config, username: Option<&str>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let username = match username {
        Some(name) => name.to_string(),
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let api = ApiClient::new(config);
    let bar = ui::spinner("Logging in...");
    let result = api.login(username.trim(), &password).await;
    bar.finish_and_clear();

    let token = result?;
    let store = SessionStore::new(&config.data_dir);
    store.save(&token)?;
    ui::print_success(&format!("Logged in as {}", username.trim()));
    Ok(())
}

pub fn cmd_logout(config: &Config) -> Result<()> {
    let store = SessionStore::new(&config.data_dir);
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn cmd_status(config: &Config) -> Result<()> {
    let store = SessionStore::new(&config.data_dir);
    println!();
    if store.is_authenticated() {
        println!("{}", style("Logged in").green());
    } else {
        println!("{}", style("Not logged in").yellow());
    }
    println!("Session file: {}", store.path().display());
    println!("Job endpoint: {}", config.api_base);
    println!("Login endpoint: {}", config.login_url);
    println!();
    Ok(())
}
