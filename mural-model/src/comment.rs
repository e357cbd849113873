use std::mem;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
}

/// Comment list and draft text of one rendered post.
///
/// Ids are assigned from a per-thread counter, so two comments with the
/// same text stay distinguishable. Lives exactly as long as the post
/// component that created it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentThread {
    comments: Vec<Comment>,
    draft: String,
    next_id: u64,
}

impl CommentThread {
    pub fn new() -> CommentThread {
        CommentThread::default()
    }

    pub fn seeded(texts: impl IntoIterator<Item = impl Into<String>>) -> CommentThread {
        let mut thread = CommentThread::new();
        for text in texts {
            thread.push(text.into());
        }
        thread
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Called on every edit of the comment textarea
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Appends the draft as a new comment and resets the draft.
    ///
    /// Returns `None` without touching anything when the draft is
    /// empty; the form keeps its submit button disabled in that state,
    /// this guard just keeps the operation total.
    pub fn submit(&mut self) -> Option<CommentId> {
        if self.draft.is_empty() {
            return None;
        }
        let text = mem::take(&mut self.draft);
        Some(self.push(text))
    }

    /// Removes the comment with the given id, keeping the relative
    /// order of the others. A no-op if the id is absent.
    pub fn delete(&mut self, target: CommentId) {
        self.comments.retain(|c| c.id != target);
    }

    fn push(&mut self, text: String) -> CommentId {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        self.comments.push(Comment { id, text });
        id
    }
}
