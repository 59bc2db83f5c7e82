//! Demo command - save sample users and list them

use anyhow::Result;
use colored::Colorize;
use userbase_core::config::SeedUser;

use super::{get_context, log_command};
use crate::output;

fn builtin_users() -> Vec<SeedUser> {
    vec![
        SeedUser::new("Gabriel", "secret"),
        SeedUser::new("Maria", "hunter2"),
    ]
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    log_command(&ctx, "demo");

    // The context already saved configured seed users
    if ctx.config.seed_users.is_empty() {
        for seed in builtin_users() {
            ctx.user_service.register(seed.login, seed.password)?;
        }
    }

    let users = ctx.user_service.find_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    println!("{}", "Demo Users".bold());
    println!();
    println!("{}", output::users_table(&users));
    println!();
    output::info(&format!("{} user(s) in memory; they are discarded on exit.", users.len()));

    Ok(())
}
