use std::path::Path;

use warbler_db::config::AppConfig;
use warbler_db::services::auth;
use warbler_db::{db, repo, seed};

fn main() -> anyhow::Result<()> {
    warbler_db::logging::init_tracing("warbler-seed");

    let config = AppConfig::load()?;
    let pool = db::create_pool(&config.database_url)?;
    let mut conn = pool.get()?;

    db::run_migrations(&mut conn)?;
    seed::wipe(&mut conn)?;

    let summary = seed::load_dir(&mut conn, Path::new(&config.seed_dir))?;
    tracing::info!(
        users = summary.users,
        messages = summary.messages,
        follows = summary.follows,
        likes = summary.likes,
        "fixtures loaded"
    );

    // Demo accounts with working credentials, on top of the CSV fixtures.
    let mut lena = auth::signup(
        "meow",
        "meow@email.com",
        "meowmeow",
        Some("https://static.boredpanda.com/blog/wp-content/uploads/2016/08/cute-kittens-46.jpg".into()),
    )?;
    lena.id = Some(403);
    repo::users::create(&mut conn, &lena)?;

    let mut gabriela = auth::signup(
        "satan",
        "hahaha@gmail.com",
        "devilish1",
        Some("https://previews.123rf.com/images/red-devil-head-cartoon.jpg".into()),
    )?;
    gabriela.id = Some(401);
    repo::users::create(&mut conn, &gabriela)?;

    // A few likes spread across the fixture rows.
    repo::messages::like(&mut conn, 100, 907)?;
    repo::messages::like(&mut conn, 103, 912)?;
    repo::messages::like(&mut conn, 108, 907)?;

    tracing::info!("seed complete");
    Ok(())
}
