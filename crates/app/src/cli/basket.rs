use std::io;

use bistro::{cart::Cart, receipt::write_cart};
use bistro_app::{catalog::MenuItem, context::AppContext};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct BasketArgs {
    /// Menu item id to add; repeat to add more
    #[arg(long = "item", required = true)]
    items: Vec<String>,
}

pub(crate) async fn run(context: &AppContext, args: BasketArgs) -> Result<(), String> {
    let menu = context
        .catalog
        .list_menu()
        .await
        .map_err(|error| format!("failed to load menu: {error}"))?;

    let (cart, skipped) = fill_cart(&menu, &args.items);

    for message in skipped {
        eprintln!("skipped: {message}");
    }

    write_cart(io::stdout().lock(), &cart).map_err(|error| format!("{error}"))
}

/// Add each id to a fresh cart. Returns the cart and one message per id that
/// could not be added.
fn fill_cart(menu: &[MenuItem], ids: &[String]) -> (Cart, Vec<String>) {
    let mut cart = Cart::new();
    let mut skipped = Vec::new();

    for id in ids {
        let Some(item) = menu.iter().find(|item| item.id.as_str() == id) else {
            skipped.push(format!("unknown menu item {id}"));
            continue;
        };

        match item.to_line_item() {
            Ok(line) => cart.add(line),
            Err(error) => skipped.push(format!("{id}: {error}")),
        }
    }

    (cart, skipped)
}
