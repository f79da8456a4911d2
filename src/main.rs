// Social Core demo - seeds a platform and runs the query surface

use social_core::{config::Config, data_seeder, SocialPlatform};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Build and seed an in-memory platform
    let mut platform = SocialPlatform::new();
    data_seeder::seed_demo_data(&mut platform, &config.seeder)?;

    println!("🚀 Social Core demo platform seeded");
    println!("{}", serde_json::to_string_pretty(&platform.stats())?);

    println!("\n📈 Top 5 content by engagement:");
    for content in platform.most_popular_content(5)? {
        println!(
            "  {:10} {:5} score={} \"{}\"",
            content.id(),
            content.kind().label(),
            content.engagement_score(),
            content.description(),
        );
    }

    if let Some(&username) = platform.usernames().first() {
        println!("\n🕑 Most recent content of {}:", username);
        for content in platform.most_recent_content(username, 3)? {
            println!("  {} published {}", content.id(), content.published_at());
        }

        println!("\n📜 Activity log of {}:", username);
        for line in platform.activity_log(username)? {
            println!("  {}", line);
        }
    }

    match platform.most_popular_user() {
        Ok(username) => println!("\n⭐ Most mentioned user: {}", username),
        Err(err) => println!("\n⭐ Most mentioned user: {}", err),
    }

    println!("\n🔎 Content tagged #rust:");
    for content in platform.find_content_by_tag("#rust")? {
        println!("  {} by {}", content.id(), content.creator());
    }

    Ok(())
}
