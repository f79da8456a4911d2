use chrono::Local;
use social_core::{PlatformError, SocialPlatform};

#[test]
fn test_publish_engage_and_query() {
    let mut platform = SocialPlatform::new();
    platform.register("ann").unwrap();
    platform.register("bob").unwrap();

    let now = Local::now().naive_local();
    let post = platform.publish_post("ann", now, "hi @bob #go").unwrap();
    let story = platform.publish_story("bob", now, "daily #go @ann").unwrap();
    assert_eq!(post, "ann-0");
    assert_eq!(story, "bob-1");

    // Engagement drives the popularity ranking
    platform.like("bob", &post).unwrap();
    platform.like("ann", &post).unwrap();
    platform.comment("bob", "hello there", &post).unwrap();
    platform.like("ann", &story).unwrap();

    let popular = platform.most_popular_content(10).unwrap();
    let ids: Vec<_> = popular.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["ann-0", "bob-1"]);

    // Tag search sees both pieces of content
    let tagged = platform.find_content_by_tag("#go").unwrap();
    assert_eq!(tagged.len(), 2);

    // Both users mention each other once; the tie goes to "ann"
    assert_eq!(platform.most_popular_user().unwrap(), "ann");

    // Recency is scoped to the author
    let recent = platform.most_recent_content("ann", 5).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id(), "ann-0");

    // History is most recent first and survives repeated reads
    let log = platform.activity_log("bob").unwrap();
    assert_eq!(log.len(), 3);
    assert!(log[0].contains("Commented \"hello there\" on a content with id ann-0"));
    assert!(log[1].contains("Liked a content with id ann-0"));
    assert!(log[2].contains("Created a story with id bob-1"));
    assert_eq!(platform.activity_log("bob").unwrap(), log);

    // Failed calls leave the platform usable
    assert!(matches!(
        platform.like("ghost", &post),
        Err(PlatformError::UsernameNotFound(_))
    ));
    assert!(matches!(
        platform.most_popular_content(-1),
        Err(PlatformError::InvalidArgument(_))
    ));
    platform.like("ann", &story).unwrap();
}
