use bistro::session::User;
use bistro_app::{config::AppConfig, context::AppContext, observability};
use clap::{Parser, Subcommand};

mod basket;
mod login;
mod menu;
mod register;
mod restaurant;
mod restaurants;

#[derive(Debug, Parser)]
#[command(name = "bistro-app", about = "Bistro ordering client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List restaurants
    Restaurants,
    /// Show a restaurant and its menu
    Restaurant(restaurant::RestaurantArgs),
    /// List the menu
    Menu(menu::MenuArgs),
    /// Fill a cart from menu item ids and print it
    Basket(basket::BasketArgs),
    /// Sign in and optionally check access to a route
    Login(login::LoginArgs),
    /// Create an account
    Register(register::RegisterArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialize logging: {error}"))?;

        let context = AppContext::from_config(&self.config.api)
            .map_err(|error| format!("failed to initialize client: {error}"))?;

        match self.command {
            Commands::Restaurants => restaurants::run(&context).await,
            Commands::Restaurant(args) => restaurant::run(&context, args).await,
            Commands::Menu(args) => menu::run(&context, args).await,
            Commands::Basket(args) => basket::run(&context, args).await,
            Commands::Login(args) => login::run(&context, args).await,
            Commands::Register(args) => register::run(&context, args).await,
        }
    }
}

fn print_user(user: &User) {
    println!("user_id: {}", user.id);
    println!("name: {}", user.full_name());
    println!("email: {}", user.email);
    println!("role: {}", user.role.label());
}
