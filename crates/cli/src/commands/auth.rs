//! Account commands.

use auramart_app::state::{AppState, SIGNUP_NOTICE};

/// Log in with email and password.
///
/// # Errors
///
/// Returns the user-visible auth error on invalid credentials.
pub fn login(app: &mut AppState, email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user = app.login(email, password)?;
    if user.role.is_admin() {
        println!("Logged in as {} (admin).", user.email);
    } else {
        println!("Logged in as {}.", user.email);
    }
    Ok(())
}

/// Create a customer account and log it in.
///
/// # Errors
///
/// Returns the user-visible auth error for a duplicate or malformed
/// email.
pub fn signup(app: &mut AppState, email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    app.signup(email, password)?;
    println!("{SIGNUP_NOTICE}");
    Ok(())
}

/// Clear the current session.
pub fn logout(app: &mut AppState) {
    app.logout();
    println!("Logged out.");
}

/// Show the current session.
pub fn whoami(app: &AppState) {
    match app.session() {
        Some(user) => println!("{} ({:?})", user.email, user.role),
        None => println!("Not logged in."),
    }
}
