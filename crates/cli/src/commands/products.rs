//! Catalog browsing commands.

use auramart_core::ProductCategory;

use auramart_app::catalog::FilterSelection;
use auramart_app::state::AppState;

/// List the products the given filter displays.
///
/// # Errors
///
/// Returns an error for an unknown category name.
pub fn list(
    app: &mut AppState,
    category: Option<&str>,
    new_arrivals: bool,
    search: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = if new_arrivals {
        FilterSelection::NewArrivals
    } else if let Some(name) = category {
        FilterSelection::Category(name.parse::<ProductCategory>()?)
    } else {
        FilterSelection::All
    };

    app.select_filter(selection);
    if let Some(term) = search {
        app.search(term);
    }

    let displayed = app.displayed_products();
    if displayed.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    for product in &displayed {
        println!(
            "{:>3}  {:<30} {:>10}  {:<12} {}",
            product.id.as_str(),
            product.name,
            product.price.to_string(),
            product.category.name(),
            product.description
        );
    }
    println!("({} products)", displayed.len());

    Ok(())
}
