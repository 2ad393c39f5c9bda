//! Shopping cart commands.

use auramart_core::ProductId;

use auramart_app::state::AppState;

/// Print the cart contents, item count, and tax-inclusive total.
pub fn show(app: &AppState) {
    if app.cart().is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in app.cart().items() {
        println!(
            "{:>3}  {:<30} x{:<3} {:>10}",
            item.product.id.as_str(),
            item.product.name,
            item.quantity,
            format!("${:.2}", item.line_total()),
        );
    }
    println!("Items: {}", app.item_count());
    println!("Total (incl. 8% tax): ${:.2}", app.cart_total());
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns an error if the id is not in the catalog.
pub fn add(app: &mut AppState, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    app.add_to_cart(&id)?;
    println!("Added product {id} to cart ({} items).", app.item_count());
    Ok(())
}

/// Remove a product from the cart. Unknown ids are a no-op.
pub fn remove(app: &mut AppState, id: &str) {
    app.remove_from_cart(&ProductId::new(id));
    println!("Removed product {id} ({} items).", app.item_count());
}

/// Overwrite a product's quantity. Quantities below 1 are ignored.
pub fn set_quantity(app: &mut AppState, id: &str, quantity: u32) {
    app.set_quantity(&ProductId::new(id), quantity);
    println!("Cart now holds {} items.", app.item_count());
}

/// Confirm the order: clears the cart and prints the receipt.
pub fn checkout(app: &mut AppState, payment: &str) {
    if app.cart().is_empty() {
        println!("Your cart is empty.");
        return;
    }

    app.open_checkout();
    let confirmation = app.confirm_order(payment);
    println!("{}", confirmation.message());
    println!("Charged: ${:.2}", confirmation.total);
}
