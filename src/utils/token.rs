/// Token generation strategy.
///
/// Injected into the minter so tests can mint deterministic tokens and
/// exercise the reuse path without depending on the process-wide random
/// source.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random alphanumeric tokens. Collisions are made negligible by length,
/// not cryptography; tokens are guessable by design.
pub struct RandomTokens {
    length: usize,
}

impl RandomTokens {
    pub fn new(length: usize) -> Self {
        RandomTokens { length }
    }
}

impl TokenGenerator for RandomTokens {
    fn generate(&self) -> String {
        use std::iter;

        // 随机选择字母和数字
        let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

        iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
            .take(self.length)
            .collect()
    }
}
