use crate::{Author, BlockId, BlockKind, ContentBlock, Time};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub published_at: Time,

    /// Blocks in display order
    content: Vec<ContentBlock>,
}

impl Post {
    pub fn new(
        id: PostId,
        author: Author,
        published_at: Time,
        blocks: impl IntoIterator<Item = (BlockKind, String)>,
    ) -> Post {
        let content = blocks
            .into_iter()
            .enumerate()
            .map(|(i, (kind, text))| ContentBlock {
                id: BlockId(i as u64),
                kind,
                text,
            })
            .collect();
        Post {
            id,
            author,
            published_at,
            content,
        }
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn example_author() -> Author {
        Author {
            name: String::from("Ana Souza"),
            role: String::from("Web Developer"),
            avatar_url: String::from("https://example.org/ana.png"),
        }
    }

    fn example_instant() -> Time {
        chrono::Utc.with_ymd_and_hms(2022, 5, 17, 13, 30, 0).unwrap()
    }

    #[test]
    fn blocks_get_sequential_ids_in_display_order() {
        let post = Post::new(
            PostId(1),
            example_author(),
            example_instant(),
            vec![
                (BlockKind::Paragraph, String::from("Fala galera")),
                (BlockKind::Paragraph, String::from("Projeto novo no ar")),
                (BlockKind::Link, String::from("ana.dev/doctorcare")),
            ],
        );
        let ids: Vec<_> = post.content().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BlockId(0), BlockId(1), BlockId(2)]);
        assert_eq!(post.content()[2].kind, BlockKind::Link);
        assert_eq!(post.content()[2].text, "ana.dev/doctorcare");
    }

    #[test]
    fn duplicate_block_text_keeps_distinct_ids() {
        let post = Post::new(
            PostId(1),
            example_author(),
            example_instant(),
            vec![
                (BlockKind::Paragraph, String::from("same text")),
                (BlockKind::Paragraph, String::from("same text")),
            ],
        );
        assert_eq!(post.content().len(), 2);
        assert_ne!(post.content()[0].id, post.content()[1].id);
    }

    #[test]
    fn empty_content_is_allowed() {
        let post = Post::new(PostId(1), example_author(), example_instant(), vec![]);
        assert!(post.content().is_empty());
    }
}
