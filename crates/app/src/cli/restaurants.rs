use bistro_app::context::AppContext;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let restaurants = context
        .catalog
        .list_restaurants()
        .await
        .map_err(|error| format!("failed to load restaurants: {error}"))?;

    if restaurants.is_empty() {
        println!("no restaurants");

        return Ok(());
    }

    for restaurant in restaurants {
        println!(
            "{}  {} ({}) {:.1}★",
            restaurant.id, restaurant.name, restaurant.cuisine, restaurant.rating
        );
    }

    Ok(())
}
