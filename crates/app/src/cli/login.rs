use bistro::routes::{AccessDecision, Route};
use bistro_app::context::AppContext;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "BISTRO_PASSWORD", hide_env_values = true)]
    password: String,

    /// Path to check against the signed-in session, e.g. `/admin`
    #[arg(long)]
    route: Option<String>,
}

pub(crate) async fn run(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    let route = args
        .route
        .as_deref()
        .map(|path| Route::parse(path).ok_or_else(|| format!("unknown route {path}")))
        .transpose()?;

    let mut store = context.session_store();

    store
        .login(&args.email, &args.password)
        .await
        .map_err(|error| format!("login failed: {error}"))?;

    if let Some(user) = store.user() {
        super::print_user(user);
    }

    if let Some(route) = route {
        println!("{}", describe_decision(&route, store.guard(&route)));
    }

    Ok(())
}

fn describe_decision(route: &Route, decision: AccessDecision) -> String {
    match decision.redirect() {
        None => format!("{route}: allowed"),
        Some(target) => format!("{route}: redirect to {target}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_decisions() {
        assert_eq!(
            describe_decision(&Route::Profile, AccessDecision::Allow),
            "/profile: allowed"
        );
        assert_eq!(
            describe_decision(
                &Route::Admin("orders".to_string()),
                AccessDecision::RedirectToHome
            ),
            "/admin/orders: redirect to /"
        );
        assert_eq!(
            describe_decision(&Route::Profile, AccessDecision::RedirectToLogin),
            "/profile: redirect to /login"
        );
    }
}
