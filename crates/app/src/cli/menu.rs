use bistro_app::{
    catalog::{CategoryFilter, MenuItem, filter_menu},
    context::AppContext,
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Only show one category
    #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
    category: CategoryFilter,
}

pub(crate) async fn run(context: &AppContext, args: MenuArgs) -> Result<(), String> {
    let items = context
        .catalog
        .list_menu()
        .await
        .map_err(|error| format!("failed to load menu: {error}"))?;

    let selected = filter_menu(&items, args.category);

    println!("{} ({})", args.category, selected.len());

    for item in selected {
        println!("  {}", describe_item(item));
    }

    Ok(())
}

pub(super) fn describe_item(item: &MenuItem) -> String {
    let price = item
        .unit_price()
        .map_or_else(|_| "price unavailable".to_string(), |price| price.to_string());

    let mut line = format!("{}  {}  {price}", item.id, item.name);

    if let Some(restaurant) = &item.restaurant {
        line.push_str(&format!("  @ {}", restaurant.name));
    }

    if !item.available {
        line.push_str("  (unavailable)");
    }

    line
}
