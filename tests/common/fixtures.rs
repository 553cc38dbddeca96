//! Shared fixtures: a small dataset and a reply sink that records posts.

use async_trait::async_trait;
use parking_lot::Mutex;
use statbot::db::Database;
use statbot::{Comment, CommentFeed, DatasetProvider, ReplySink, StatBot};
use std::sync::Arc;

pub const DATASET: &str = r#"{
    "stats": ["PTS", "AST", "REB", "3P", "FG%"],
    "players": {
        "lebron james": {
            "2018-19": { "regular": { "PTS": 27.4, "AST": 8.3, "REB": 8.5 } },
            "2019-20": {
                "regular": { "PTS": 25.3, "AST": 10.2, "REB": 7.8 },
                "playoffs": { "PTS": 27.6, "AST": 8.8, "REB": 10.8 }
            }
        },
        "stephen curry": {
            "2017-18": {
                "regular": { "PTS": 26.4, "3P": 4.2 },
                "playoffs": { "PTS": 25.5, "3P": 4.4 }
            },
            "2018-19": {
                "regular": { "PTS": 27.3, "3P": 5.1 },
                "playoffs": { "PTS": 28.2, "3P": 4.2 }
            }
        },
        "kevin durant": {
            "2015-16": { "regular": { "PTS": 28.2 } },
            "2016-17": { "regular": { "PTS": 25.1 } }
        }
    }
}"#;

/// Bot over the fixture dataset with an in-memory request log.
pub async fn test_bot() -> StatBot {
    let provider = Arc::new(DatasetProvider::from_json(DATASET).unwrap());
    let db = Database::new(":memory:").await.unwrap();
    StatBot::new(provider, db, "!STAT").await.unwrap()
}

/// Feed over in-memory comments.
pub fn feed_of(comments: &[Comment]) -> CommentFeed {
    let mut input = String::new();
    for comment in comments {
        input.push_str(&serde_json::to_string(comment).unwrap());
        input.push('\n');
    }
    CommentFeed::new(std::io::Cursor::new(input.into_bytes()))
}

/// Records every posted reply.
#[derive(Default)]
pub struct CollectingSink {
    pub posts: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ReplySink for CollectingSink {
    async fn post(&self, comment: &Comment, text: &str) -> std::io::Result<()> {
        self.posts.lock().push((comment.url.clone(), text.to_string()));
        Ok(())
    }
}

/// Fails every post.
pub struct BrokenSink;

#[async_trait]
impl ReplySink for BrokenSink {
    async fn post(&self, _comment: &Comment, _text: &str) -> std::io::Result<()> {
        Err(std::io::Error::other("reply endpoint unavailable"))
    }
}
