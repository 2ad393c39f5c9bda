//! Admin dashboard command.

use auramart_core::ProductCategory;

use auramart_app::state::AppState;
use auramart_app::view::View;

/// Show the admin dashboard: customer accounts and a catalog summary.
///
/// Navigation to the dashboard is gated on an admin session; without one
/// the attempt is ignored and a notice is printed instead.
pub fn dashboard(app: &mut AppState) {
    app.navigate(View::AdminDashboard);
    if app.view().current_view() != View::AdminDashboard {
        println!("Admin access required. Log in with the administrator account first.");
        return;
    }

    println!("== Customer accounts ==");
    let customers = app.customer_accounts();
    if customers.is_empty() {
        println!("(none)");
    } else {
        for user in &customers {
            println!("{:<34} {}", user.email.as_str(), user.id.as_str());
        }
    }

    println!();
    println!("== Catalog ==");
    for category in ProductCategory::ALL {
        let count = app
            .catalog()
            .iter()
            .filter(|p| p.category == category)
            .count();
        println!("{:<12} {count}", category.name());
    }
    println!("{} products total", app.catalog().len());
}
