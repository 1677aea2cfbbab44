use bistro_app::{catalog::group_by_category, context::AppContext};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct RestaurantArgs {
    /// Restaurant id
    id: String,
}

pub(crate) async fn run(context: &AppContext, args: RestaurantArgs) -> Result<(), String> {
    let restaurant = context
        .catalog
        .get_restaurant(&args.id)
        .await
        .map_err(|error| format!("failed to load restaurant: {error}"))?;

    println!("{} ({}) {:.1}★", restaurant.name, restaurant.cuisine, restaurant.rating);

    if !restaurant.address.is_empty() {
        println!("{}", restaurant.address);
    }

    if !restaurant.description.is_empty() {
        println!("{}", restaurant.description);
    }

    for section in group_by_category(&restaurant.menu) {
        println!();
        println!("{}", section.category);

        for item in section.items {
            println!("  {}", super::menu::describe_item(item));
        }
    }

    Ok(())
}
