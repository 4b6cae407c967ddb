//! Login command - the simulated step-up sign-in flow

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Input, Password};

use super::{get_context, simulate_delay};
use sukhbank_core::LogEvent;

pub fn run(email: Option<String>, password: Option<String>, otp: Option<String>) -> Result<()> {
    let mut ctx = get_context()?;

    let email = match email {
        Some(e) => e,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    if !ctx.auth.credentials_present(&email, &password) {
        let _ = ctx
            .events
            .log(LogEvent::new("login_failed").with_error("empty credentials"));
        bail!("Please enter email and password");
    }

    println!("An OTP has been sent to {} (any 6 digits work here)", email);
    let otp = match otp {
        Some(o) => o,
        None => Input::<String>::new()
            .with_prompt("6-digit OTP")
            .interact_text()?,
    };

    if !ctx.auth.verify_otp(&otp) {
        let _ = ctx
            .events
            .log(LogEvent::new("login_failed").with_error("invalid otp"));
        bail!("Invalid OTP: please enter a 6-digit code");
    }

    simulate_delay("Verifying biometric...", 1500);
    if !ctx.auth.verify_biometric() {
        let _ = ctx
            .events
            .log(LogEvent::new("login_failed").with_error("biometric rejected"));
        bail!("Biometric verification failed");
    }

    if ctx.auth.complete_login(&mut ctx.store, &email, &password)? {
        let _ = ctx.events.log_command("login");
        println!("{}", "Login successful. Welcome to Sukh Secure Bank.".green());
        println!("Run 'sukh status' to see your wallet.");
    } else {
        bail!("Login failed: invalid credentials");
    }

    Ok(())
}

pub fn run_logout() -> Result<()> {
    let mut ctx = get_context()?;

    if !ctx.store.is_authenticated() {
        println!("{}", "No active session".yellow());
        return Ok(());
    }

    ctx.store.logout()?;
    let _ = ctx.events.log_command("logout");
    println!(
        "{}",
        "Signed out. Cards and history remain on this device.".green()
    );
    Ok(())
}
