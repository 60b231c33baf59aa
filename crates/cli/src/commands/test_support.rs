//! Shared helpers for command tests

use std::collections::VecDeque;
use std::path::Path;

use async_trait::async_trait;
use sbm_core::{BucketInfo, ListResult, ObjectInfo, ObjectStore, Result};

use super::input::LineReader;
use crate::output::{Formatter, OutputConfig};

mockall::mock! {
    pub Store {}

    #[async_trait]
    impl ObjectStore for Store {
        async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;
        async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;
        async fn delete_bucket(&self, bucket: &str) -> Result<()>;
        async fn list_objects(
            &self,
            bucket: &str,
            continuation_token: Option<String>,
        ) -> Result<ListResult>;
        async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
        async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<ObjectInfo>;
        async fn download_file(&self, bucket: &str, key: &str, path: &Path) -> Result<u64>;
        async fn put_bucket_policy(&self, bucket: &str, policy: &str) -> Result<()>;
    }
}

/// Formatter without colours or spinners
pub fn quiet_formatter() -> Formatter {
    Formatter::new(OutputConfig {
        color: false,
        progress: false,
    })
}

/// Replays a fixed list of answers and records every prompt shown
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().map(|a| a.trim().to_string())
    }
}
