//! Sample data for first-run seeding
//!
//! When the slot has never been written the store seeds itself with a
//! batch of plausible posts so the dashboard and listing views have
//! something to show. Not used in normal operation.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::types::{Post, PostStatus, SocialNetwork};

/// Tag vocabulary the seeded posts draw from
const HASHTAGS: [&str; 10] = [
    "#marketing",
    "#socialmedia",
    "#content",
    "#digital",
    "#business",
    "#growth",
    "#engagement",
    "#brand",
    "#strategy",
    "#viral",
];

/// Word pool for generated titles and body text
const WORDS: [&str; 32] = [
    "campaign", "audience", "content", "launch", "brand", "growth", "reach",
    "stories", "metrics", "trends", "community", "creative", "planning",
    "strategy", "weekly", "update", "behind", "scenes", "product", "teaser",
    "giveaway", "results", "insights", "partner", "spotlight", "season",
    "release", "recap", "highlights", "questions", "ideas", "series",
];

const MINUTES_PER_30_DAYS: i64 = 30 * 24 * 60;

/// Generate `count` sample posts
pub fn generate_posts(count: usize) -> Vec<Post> {
    let mut rng = rand::thread_rng();
    (0..count).map(|i| generate_post(&mut rng, i)).collect()
}

fn generate_post(rng: &mut impl Rng, index: usize) -> Post {
    let status = PostStatus::ALL[rng.gen_range(0..PostStatus::ALL.len())];
    let created_at = Utc::now() - Duration::minutes(rng.gen_range(0..MINUTES_PER_30_DAYS));

    let scheduled_date = (status == PostStatus::Scheduled)
        .then(|| Utc::now() + Duration::minutes(rng.gen_range(60..MINUTES_PER_30_DAYS)));
    let published_date = (status == PostStatus::Published).then_some(created_at);

    let network_count = rng.gen_range(1..=3);
    let social_networks: Vec<SocialNetwork> = SocialNetwork::ALL
        .choose_multiple(rng, network_count)
        .copied()
        .collect();

    let hashtag_count = rng.gen_range(2..=5);
    let hashtags: Vec<String> = HASHTAGS
        .choose_multiple(rng, hashtag_count)
        .map(|tag| tag.to_string())
        .collect();

    let image_url = rng
        .gen_bool(0.5)
        .then(|| format!("https://picsum.photos/400/300?random={}", index));

    Post {
        id: Uuid::new_v4().to_string(),
        title: title(rng),
        content: body(rng),
        status,
        social_networks,
        scheduled_date,
        published_date,
        created_at,
        updated_at: created_at,
        image_url,
        hashtags,
    }
}

/// A 3-8 word title, capitalized
fn title(rng: &mut impl Rng) -> String {
    let word_count = rng.gen_range(3..=8);
    let mut words = sentence(rng, word_count);
    if let Some(first) = words.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    words
}

/// 1-3 short paragraphs
fn body(rng: &mut impl Rng) -> String {
    let paragraph_count = rng.gen_range(1..=3);
    let paragraphs: Vec<String> = (0..paragraph_count)
        .map(|_| {
            let sentence_count = rng.gen_range(2..=4);
            (0..sentence_count)
                .map(|_| {
                    let sentence_len = rng.gen_range(5..=12);
                    let mut s = sentence(rng, sentence_len);
                    if let Some(first) = s.get_mut(..1) {
                        first.make_ascii_uppercase();
                    }
                    s.push('.');
                    s
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    paragraphs.join("\n\n")
}

fn sentence(rng: &mut impl Rng, word_count: usize) -> String {
    (0..word_count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_posts(15).len(), 15);
        assert_eq!(generate_posts(0).len(), 0);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let posts = generate_posts(50);
        let ids: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn test_network_count_in_range_and_distinct() {
        for post in generate_posts(50) {
            assert!((1..=3).contains(&post.social_networks.len()));
            let distinct: HashSet<_> = post.social_networks.iter().collect();
            assert_eq!(distinct.len(), post.social_networks.len());
        }
    }

    #[test]
    fn test_hashtags_from_vocabulary() {
        for post in generate_posts(50) {
            assert!((2..=5).contains(&post.hashtags.len()));
            for tag in &post.hashtags {
                assert!(HASHTAGS.contains(&tag.as_str()), "unexpected tag {}", tag);
            }
        }
    }

    #[test]
    fn test_dates_follow_status() {
        let now = Utc::now();
        for post in generate_posts(100) {
            match post.status {
                PostStatus::Scheduled => {
                    let scheduled = post.scheduled_date.expect("scheduled post needs a date");
                    assert!(scheduled > now - Duration::minutes(1));
                    assert!(post.published_date.is_none());
                }
                PostStatus::Published => {
                    assert_eq!(post.published_date, Some(post.created_at));
                    assert!(post.scheduled_date.is_none());
                }
                PostStatus::Draft => {
                    assert!(post.scheduled_date.is_none());
                    assert!(post.published_date.is_none());
                }
            }
        }
    }

    #[test]
    fn test_created_within_last_30_days() {
        let now = Utc::now();
        for post in generate_posts(100) {
            assert!(post.created_at <= now);
            assert!(post.created_at >= now - Duration::days(31));
            assert_eq!(post.updated_at, post.created_at);
        }
    }

    #[test]
    fn test_title_and_body_are_nonempty() {
        for post in generate_posts(20) {
            assert!(!post.title.is_empty());
            assert!(!post.content.is_empty());
        }
    }
}
