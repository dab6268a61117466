//! `whoami` and `logout`, plus the profile printout shared with the wizard.

use anyhow::{Context, Result};
use auth_core::Session;
use colored::Colorize;

use crate::context::AppContext;

pub fn whoami(ctx: &AppContext) -> Result<()> {
    let session = ctx.session_store().read();
    if !session.is_logged_in() {
        ctx.print_warning("Not logged in.");
        return Ok(());
    }
    print_profile(&session);
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    let store = ctx.session_store();
    if !store.is_logged_in() {
        ctx.print_warning("Not logged in.");
    }
    if !ctx.confirm("Log out and forget this device's session?", true)? {
        return Ok(());
    }
    store.clear().context("Failed to clear session")?;
    ctx.print_success("👋 Logged out.");
    Ok(())
}

pub fn print_profile(session: &Session) {
    for (label, value) in profile_lines(session) {
        println!("  {} {}", format!("{label}:").bright_yellow(), value);
    }
}

/// Fields worth showing; the token itself is never printed.
fn profile_lines(session: &Session) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    if let Some(name) = &session.user_name {
        lines.push(("Name", name.clone()));
    }
    if let Some(phone) = &session.user_phone {
        lines.push(("Phone", phone.clone()));
    }
    if let Some(id) = &session.user_id {
        lines.push(("User ID", id.clone()));
    }
    if let Some(image) = &session.profile_image_path {
        lines.push(("Profile image", image.clone()));
    }
    lines
}
