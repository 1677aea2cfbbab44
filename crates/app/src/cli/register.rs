use bistro_app::{auth::Registration, context::AppContext};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    phone: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    #[arg(long, env = "BISTRO_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn run(context: &AppContext, args: RegisterArgs) -> Result<(), String> {
    let registration = Registration {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        password: args.password,
    };

    let mut store = context.session_store();

    store
        .register(&registration)
        .await
        .map_err(|error| format!("registration failed: {error}"))?;

    if let Some(user) = store.user() {
        super::print_user(user);
    }

    Ok(())
}
