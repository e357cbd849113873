#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}
