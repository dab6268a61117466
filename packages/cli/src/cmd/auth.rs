//! Terminal host for the OTP wizard.
//!
//! Plays the part of the login/signup modal: one prompt per step, the
//! wizard's error line under it, and an escape menu (edit number, resend,
//! cancel) reached by submitting an empty answer.

use anyhow::{Context, Result};
use auth_core::kernel::BaseAuthApi;
use auth_core::session::SessionStorage;
use auth_core::{FlowKind, OtpWizard, WizardProgress, WizardResult, WizardStep};
use dialoguer::{Input, Select};

use crate::context::AppContext;

enum Escape {
    Retry,
    Resend,
    EditPhone,
    Cancel,
}

/// Run one wizard for `kind` until it completes or the user cancels.
pub async fn run(ctx: &AppContext, kind: FlowKind) -> Result<WizardResult> {
    let api = ctx.config.api_client().context("Failed to create API client")?;
    let mut wizard = OtpWizard::new(kind.config(), api, ctx.session_store());

    ctx.print_header(&format!("{} with your phone number", kind.label()));
    drive(ctx, &mut wizard).await
}

async fn drive<A, S>(ctx: &AppContext, wizard: &mut OtpWizard<A, S>) -> Result<WizardResult>
where
    A: BaseAuthApi,
    S: SessionStorage,
{
    loop {
        let outcome = match wizard.step() {
            WizardStep::PhoneEntry => {
                let phone = prompt(ctx, "Phone number (10 digits)")?;
                if phone.trim().is_empty() {
                    if ctx.confirm("Cancel?", true)? {
                        return Ok(wizard.cancel());
                    }
                    continue;
                }
                ctx.print_info("Sending OTP...");
                wizard.request_code(phone.trim()).await
            }
            WizardStep::OtpEntry => {
                let sent_to = wizard
                    .phone()
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                let code = prompt(
                    ctx,
                    &format!(
                        "Enter the {}-digit OTP sent to {} (empty for options)",
                        wizard.flow().otp_len,
                        sent_to
                    ),
                )?;
                if code.trim().is_empty() {
                    match escape_menu(ctx, true)? {
                        Escape::Retry => continue,
                        Escape::Resend => {
                            ctx.print_info("Resending OTP...");
                            wizard.resend_code().await
                        }
                        Escape::EditPhone => {
                            wizard.edit_phone();
                            continue;
                        }
                        Escape::Cancel => return Ok(wizard.cancel()),
                    }
                } else {
                    ctx.print_info("Verifying...");
                    wizard.verify_code(code.trim()).await
                }
            }
            WizardStep::NameEntry => {
                ctx.print_info("New here! Tell us your name to finish.");
                let name = prompt(ctx, "Your name (empty for options)")?;
                if name.trim().is_empty() {
                    match escape_menu(ctx, false)? {
                        Escape::Retry | Escape::Resend => continue,
                        Escape::EditPhone => {
                            wizard.edit_phone();
                            continue;
                        }
                        Escape::Cancel => return Ok(wizard.cancel()),
                    }
                } else {
                    ctx.print_info("Creating your account...");
                    wizard.register(&name).await
                }
            }
        };

        match outcome {
            Ok(WizardProgress::Completed(session)) => return Ok(WizardResult::Completed(session)),
            Ok(WizardProgress::Advanced(WizardStep::OtpEntry)) => {
                ctx.print_success("OTP sent.");
            }
            Ok(WizardProgress::Advanced(_)) => {}
            Err(_) => {
                if let Some(message) = wizard.error() {
                    ctx.print_error(message);
                }
            }
        }
    }
}

fn prompt(ctx: &AppContext, label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ctx.theme())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

fn escape_menu(ctx: &AppContext, can_resend: bool) -> Result<Escape> {
    let mut options = vec![("Try again", Escape::Retry)];
    if can_resend {
        options.push(("Resend OTP", Escape::Resend));
    }
    options.push(("Edit phone number", Escape::EditPhone));
    options.push(("Cancel", Escape::Cancel));

    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
    let selection = Select::with_theme(&ctx.theme())
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options
        .into_iter()
        .nth(selection)
        .map(|(_, escape)| escape)
        .unwrap_or(Escape::Cancel))
}
