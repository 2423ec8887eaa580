//! The post store
//!
//! Owns the canonical in-memory ordered collection of posts and keeps the
//! persistence slot synchronized with every mutation. Reads are served
//! straight from memory; derived views are recomputed on demand. All
//! operations are synchronous and run to completion before returning.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::sample;
use crate::storage::StorageSlot;
use crate::types::{DashboardStats, NewPost, Post, PostPatch, PostStatus, SocialNetwork};

/// Number of sample posts seeded into a never-written slot
pub const SEED_COUNT: usize = 15;

pub struct PostStore {
    slot: Box<dyn StorageSlot>,
    posts: Vec<Post>,
}

impl PostStore {
    /// Open the store over `slot`.
    ///
    /// A previously written slot is revived (timestamps come back from
    /// their RFC 3339 text form). A never-written slot is seeded with
    /// [`SEED_COUNT`] sample posts, persisted immediately. A payload that
    /// does not deserialize is reported as [`StorageError::Corrupt`].
    pub fn open(slot: Box<dyn StorageSlot>) -> Result<Self> {
        let posts = match slot.load()? {
            Some(payload) => {
                serde_json::from_str(&payload).map_err(StorageError::Corrupt)?
            }
            None => {
                let seeded = sample::generate_posts(SEED_COUNT);
                persist(slot.as_ref(), &seeded)?;
                debug!(count = seeded.len(), "seeded empty slot with sample posts");
                seeded
            }
        };

        Ok(Self { slot, posts })
    }

    /// The live collection, newest-first by construction
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a single post by id
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Aggregate counts over the live collection, recomputed on every call.
    ///
    /// `this_month_posts` counts posts created on or after the first day of
    /// the current calendar month, host-clock relative in local time.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let month_start = current_month_start();

        DashboardStats {
            total_posts: self.posts.len(),
            published_posts: self.count_with_status(PostStatus::Published),
            scheduled_posts: self.count_with_status(PostStatus::Scheduled),
            draft_posts: self.count_with_status(PostStatus::Draft),
            this_month_posts: self
                .posts
                .iter()
                .filter(|p| p.created_at >= month_start)
                .count(),
        }
    }

    /// Create a post from `data`: fresh id, both timestamps now, prepended
    /// to the head of the collection. Persists the full collection and
    /// returns the created record.
    pub fn add(&mut self, data: NewPost) -> Result<Post> {
        let post = Post::new(data);
        self.posts.insert(0, post.clone());
        self.persist()?;
        debug!(id = %post.id, status = %post.status, "added post");
        Ok(post)
    }

    /// Shallow-merge `patch` over the post with `id`, refresh `updated_at`,
    /// persist. The record keeps its position. Returns whether the id was
    /// found; a miss mutates and persists nothing.
    pub fn update(&mut self, id: &str, patch: &PostPatch) -> Result<bool> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            debug!(id, "update: no such post");
            return Ok(false);
        };

        patch.apply_to(post);
        post.updated_at = Utc::now();
        self.persist()?;
        debug!(id, "updated post");
        Ok(true)
    }

    /// Remove the post with `id` and persist. Returns whether the id was
    /// found; a miss is a no-op.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.posts.iter().position(|p| p.id == id) else {
            debug!(id, "delete: no such post");
            return Ok(false);
        };

        self.posts.remove(index);
        self.persist()?;
        debug!(id, "deleted post");
        Ok(true)
    }

    /// Posts whose status equals `status`, collection order preserved
    pub fn posts_by_status(&self, status: PostStatus) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.status == status).collect()
    }

    /// Posts targeting `network`, collection order preserved
    pub fn posts_by_network(&self, network: SocialNetwork) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.social_networks.contains(&network))
            .collect()
    }

    fn count_with_status(&self, status: PostStatus) -> usize {
        self.posts.iter().filter(|p| p.status == status).count()
    }

    fn persist(&self) -> Result<()> {
        persist(self.slot.as_ref(), &self.posts)
    }
}

/// Serialize the whole collection and overwrite the slot. Every mutation
/// goes through here; there is no partial persistence.
fn persist(slot: &dyn StorageSlot, posts: &[Post]) -> Result<()> {
    let payload = serde_json::to_string(posts).map_err(StorageError::Encode)?;
    slot.store(&payload)
}

/// First instant of the current calendar month in local time, as UTC
fn current_month_start() -> DateTime<Utc> {
    let now = Local::now();
    Local
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .earliest()
        .map(|start| start.with_timezone(&Utc))
        // Midnight on the 1st can be skipped by a DST jump; the UTC month
        // start is the closest well-defined instant.
        .unwrap_or_else(|| {
            Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
                .earliest()
                .unwrap_or_else(Utc::now)
        })
}
