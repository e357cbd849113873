#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct BlockId(pub u64);

/// An unknown kind is a deserialization error, not a silent skip.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Link,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContentBlock {
    pub id: BlockId,
    pub kind: BlockKind,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BlockKind::Paragraph).unwrap(),
            r#""paragraph""#,
        );
        assert_eq!(serde_json::to_string(&BlockKind::Link).unwrap(), r#""link""#,);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<BlockKind>(r#""video""#).is_err());
        assert!(serde_json::from_str::<BlockKind>(r#""Paragraph""#).is_err());
    }
}
