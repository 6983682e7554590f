use std::sync::Arc;

use tokio::sync::RwLock;

use models::post::{Post, PostDraft, PostPatch};

use crate::errors::ServiceError;

/// Sortable post field for the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    fn key<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Parsed `sort`/`direction` query pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parse the raw query parameters. Neither present means no sorting;
    /// otherwise both must carry a supported value.
    pub fn from_params(
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Option<Self>, ServiceError> {
        if sort.is_none() && direction.is_none() {
            return Ok(None);
        }
        let field = match sort {
            Some("title") => SortField::Title,
            Some("content") => SortField::Content,
            _ => return Err(ServiceError::InvalidQuery),
        };
        let direction = match direction {
            Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            _ => return Err(ServiceError::InvalidQuery),
        };
        Ok(Some(Self { field, direction }))
    }
}

/// In-memory post collection, in insertion order.
///
/// All posts live behind one `RwLock`: reads (list/search) share the lock,
/// every mutation holds it exclusively for the whole read-modify-write, so
/// two concurrent creates can never race on the `max id + 1` assignment.
#[derive(Clone)]
pub struct PostStore {
    inner: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    /// Empty store.
    pub fn new() -> Arc<Self> {
        Self::with_posts(Vec::new())
    }

    /// Store pre-populated with the two boot-time posts.
    pub fn seeded() -> Arc<Self> {
        Self::with_posts(vec![
            Post {
                id: 1,
                title: "First post".to_string(),
                content: "This is the first post.".to_string(),
            },
            Post {
                id: 2,
                title: "Second post".to_string(),
                content: "This is the second post.".to_string(),
            },
        ])
    }

    pub fn with_posts(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(posts)) })
    }

    /// List all posts, in insertion order or sorted by the given order.
    /// Sorting is lexicographic on the field's string value and stable, so
    /// ties keep their insertion order.
    pub async fn list(&self, order: Option<SortOrder>) -> Vec<Post> {
        let posts = self.inner.read().await;
        let mut out = posts.clone();
        if let Some(order) = order {
            out.sort_by(|a, b| {
                let ord = order.field.key(a).cmp(order.field.key(b));
                match order.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        out
    }

    /// Append a new post, assigning `max existing id + 1` (1 when empty).
    pub async fn create(&self, draft: PostDraft) -> Post {
        let mut posts = self.inner.write().await;
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = Post { id, title: draft.title, content: draft.content };
        posts.push(post.clone());
        post
    }

    /// Apply a partial update to the post with the given id.
    pub async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, ServiceError> {
        let mut posts = self.inner.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::NotFound)?;
        post.apply(patch);
        Ok(post.clone())
    }

    /// Remove the post with the given id.
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let mut posts = self.inner.write().await;
        let idx = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(ServiceError::NotFound)?;
        posts.remove(idx);
        Ok(())
    }

    /// Substring search: a post matches when a supplied title fragment occurs
    /// in its title OR a supplied content fragment occurs in its content.
    ///
    /// Known quirk, preserved deliberately: a fragment that is supplied but
    /// empty is a substring of everything, so its clause matches every post,
    /// and a request with neither parameter returns the whole collection.
    pub async fn search(&self, title: Option<&str>, content: Option<&str>) -> Vec<Post> {
        let posts = self.inner.read().await;
        if title.is_none() && content.is_none() {
            return posts.clone();
        }
        posts
            .iter()
            .filter(|p| {
                title.is_some_and(|t| p.title.contains(t))
                    || content.is_some_and(|c| p.content.contains(c))
            })
            .cloned()
            .collect()
    }
}
