use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque record identifier: whatever integer or string the input uses.
///
/// Integers order before strings, and each kind orders naturally within
/// itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl Id {
    // "12" is the integer 12, anything else is text
    pub fn parse(s: &str) -> Self {
        s.parse().map(Id::Int).unwrap_or_else(|_| Id::Text(s.to_string()))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct UserId(pub Id);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PageId(pub Id);

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId(Id::Int(n))
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(Id::from(s))
    }
}

impl From<i64> for PageId {
    fn from(n: i64) -> Self {
        PageId(Id::Int(n))
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId(Id::from(s))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member of the social graph.
///
/// `name`, `friends` and `liked_pages` may be absent or `null` in the input;
/// they default to empty when the record is deserialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub friends: Vec<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub liked_pages: Vec<PageId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: Vec<Page>,
}

impl User {
    pub fn new(id: i64, name: &str, friends: &[i64], liked_pages: &[i64]) -> Self {
        User {
            id: UserId::from(id),
            name: name.to_string(),
            friends: friends.iter().copied().map(UserId::from).collect(),
            liked_pages: liked_pages.iter().copied().map(PageId::from).collect(),
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    // zero-degree users are dropped by the cleaner
    pub fn is_isolated(&self) -> bool {
        self.friends.is_empty() && self.liked_pages.is_empty()
    }
}

impl Page {
    pub fn new(id: i64, name: &str) -> Self {
        Page {
            id: PageId::from(id),
            name: name.to_string(),
        }
    }
}

impl Dataset {
    pub fn new(users: Vec<User>, pages: Vec<Page>) -> Self {
        Dataset { users, pages }
    }

    pub fn contains_user(&self, id: &UserId) -> bool {
        self.users.iter().any(|u| &u.id == id)
    }
}

// `null` and a missing key mean the same thing for optional fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let json = r#"{"users":[{"id":7}],"pages":[{"id":3,"name":"P"}]}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.users[0], User::new(7, "", &[], &[]));
        assert_eq!(dataset.pages[0], Page::new(3, "P"));
    }

    #[test]
    fn null_optional_fields_default_to_empty() {
        let json = r#"{"users":[{"id":1,"name":null,"friends":null,"liked_pages":[4]}]}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.users[0], User::new(1, "", &[], &[4]));
        assert!(dataset.pages.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"users":[{"id":1,"name":"A","age":30}],"pages":[],"meta":{}}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.users[0].name, "A");
    }

    #[test]
    fn string_and_negative_ids() {
        let json = r#"{
            "users": [{"id": "alice", "name": "Alice", "friends": [-1, "bob"], "liked_pages": ["p"]}],
            "pages": [{"id": -5, "name": "Neg"}, {"id": "p", "name": "Text"}]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        let alice = &dataset.users[0];
        assert_eq!(alice.id, UserId::from("alice"));
        assert_eq!(alice.friends, vec![UserId::from(-1), UserId::from("bob")]);
        assert_eq!(alice.liked_pages, vec![PageId::from("p")]);
        assert_eq!(dataset.pages[0].id, PageId::from(-5));
        assert_eq!(dataset.pages[1].id, PageId::from("p"));
    }

    #[test]
    fn ids_serialize_as_plain_json_values() {
        let user = User {
            id: UserId::from("alice"),
            name: "Alice".to_string(),
            friends: vec![UserId::from(-1)],
            liked_pages: vec![],
        };
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":"alice","name":"Alice","friends":[-1],"liked_pages":[]}"#
        );
    }

    #[test]
    fn ids_order_integers_before_text() {
        assert!(Id::from(-3) < Id::from(2));
        assert!(Id::from(1_000) < Id::from("a"));
        assert!(Id::from("a") < Id::from("b"));
    }

    #[test]
    fn parse_picks_integer_when_possible() {
        assert_eq!(Id::parse("12"), Id::Int(12));
        assert_eq!(Id::parse("-4"), Id::Int(-4));
        assert_eq!(Id::parse("bob"), Id::Text("bob".to_string()));
    }

    #[test]
    fn whitespace_name_is_not_a_name() {
        assert!(!User::new(1, " \t\n", &[], &[]).has_name());
        assert!(User::new(1, " x ", &[], &[]).has_name());
    }

    #[test]
    fn contains_user_by_id() {
        let dataset = Dataset::new(vec![User::new(1, "A", &[2], &[])], vec![]);
        assert!(dataset.contains_user(&UserId::from(1)));
        assert!(!dataset.contains_user(&UserId::from(2)));
        assert!(!dataset.contains_user(&UserId::from("1")));
    }
}
