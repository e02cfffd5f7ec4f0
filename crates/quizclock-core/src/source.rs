//! Line-based token reader over any async buffered input.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::model::Answer;
use crate::traits::AnswerSource;

/// Reads whitespace-delimited answer tokens from a buffered stream.
///
/// A line can carry several tokens; they are handed out one per read, in
/// order. A token that is not valid UTF-8 is handed out as
/// [`Answer::Unreadable`] in its place. Blank lines are skipped. At end of stream a read never completes,
/// so a closed input behaves like a player who stopped typing.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<Answer>,
}

impl<R> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }
}

impl TokenReader<BufReader<Stdin>> {
    /// Token reader over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> AnswerSource for TokenReader<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn read_answer(&mut self) -> Answer {
        loop {
            if let Some(answer) = self.pending.pop_front() {
                return answer;
            }

            let mut line = Vec::new();
            match self.inner.read_until(b'\n', &mut line).await {
                Ok(0) => {
                    tracing::debug!("answer stream closed");
                    return std::future::pending().await;
                }
                Ok(_) => self.pending.extend(split_tokens(&line)),
                Err(e) => {
                    tracing::warn!("failed to read answer: {e}");
                    return Answer::Unreadable;
                }
            }
        }
    }
}

/// Split raw input on whitespace, decoding each token on its own.
fn split_tokens(line: &[u8]) -> Vec<Answer> {
    let mut answers = Vec::new();
    for raw in line
        .split(|b| b.is_ascii_whitespace())
        .filter(|raw| !raw.is_empty())
    {
        match std::str::from_utf8(raw) {
            Ok(text) => answers.extend(text.split_whitespace().map(Answer::token)),
            Err(_) => {
                tracing::warn!("answer token is not valid UTF-8");
                answers.push(Answer::Unreadable);
            }
        }
    }
    answers
}
