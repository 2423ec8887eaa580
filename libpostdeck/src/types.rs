//! Core types for Postdeck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle label of a post.
///
/// The wire labels are the ones this tool has always written to the slot
/// file, so an existing payload revives without migration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PostStatus {
    #[serde(rename = "publicado")]
    Published,
    #[serde(rename = "programado")]
    Scheduled,
    #[serde(rename = "rascunho")]
    Draft,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [Self::Published, Self::Scheduled, Self::Draft];

    /// Label used in the serialized payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "publicado",
            Self::Scheduled => "programado",
            Self::Draft => "rascunho",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    /// Accepts both the wire labels and the English names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "publicado" | "published" => Ok(Self::Published),
            "programado" | "scheduled" => Ok(Self::Scheduled),
            "rascunho" | "draft" => Ok(Self::Draft),
            _ => Err(format!(
                "Invalid status: '{}'. Valid options: published, scheduled, draft",
                s
            )),
        }
    }
}

/// Target platform label attached to a post. Purely descriptive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 6] = [
        Self::Instagram,
        Self::Facebook,
        Self::Twitter,
        Self::Linkedin,
        Self::Tiktok,
        Self::Youtube,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocialNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "tiktok" => Ok(Self::Tiktok),
            "youtube" => Ok(Self::Youtube),
            _ => Err(format!(
                "Invalid network: '{}'. Valid options: instagram, facebook, twitter, linkedin, tiktok, youtube",
                s
            )),
        }
    }
}

/// A social-media content item.
///
/// `id` and `created_at` are immutable after creation; `updated_at` is
/// refreshed by the store on every mutation. The camelCase field names and
/// RFC 3339 timestamps match the slot payload format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub social_networks: Vec<SocialNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub hashtags: Vec<String>,
}

impl Post {
    /// Build a fresh post from creation input: new UUID, both timestamps now
    pub fn new(data: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            content: data.content,
            status: data.status,
            social_networks: data.social_networks,
            scheduled_date: data.scheduled_date,
            published_date: data.published_date,
            created_at: now,
            updated_at: now,
            image_url: data.image_url,
            hashtags: data.hashtags,
        }
    }
}

/// Creation input: everything a [`Post`] carries except the fields the
/// store assigns (`id`, `created_at`, `updated_at`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub social_networks: Vec<SocialNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Partial update applied by shallow merge.
///
/// Outer `None` leaves a field untouched. For the nullable fields the inner
/// option distinguishes setting a value from clearing it.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    pub social_networks: Option<Vec<SocialNetwork>>,
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    pub published_date: Option<Option<DateTime<Utc>>>,
    pub image_url: Option<Option<String>>,
    pub hashtags: Option<Vec<String>>,
}

impl PostPatch {
    /// Merge the supplied fields over `post`. Timestamps are the store's
    /// business and are not touched here.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(status) = self.status {
            post.status = status;
        }
        if let Some(networks) = &self.social_networks {
            post.social_networks = networks.clone();
        }
        if let Some(scheduled) = self.scheduled_date {
            post.scheduled_date = scheduled;
        }
        if let Some(published) = self.published_date {
            post.published_date = published;
        }
        if let Some(image) = &self.image_url {
            post.image_url = image.clone();
        }
        if let Some(hashtags) = &self.hashtags {
            post.hashtags = hashtags.clone();
        }
    }
}

/// Aggregate counts derived from the live collection. Never stored;
/// recomputed on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub scheduled_posts: usize,
    pub draft_posts: usize,
    pub this_month_posts: usize,
}
