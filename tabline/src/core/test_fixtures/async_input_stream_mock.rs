// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineVec, PinnedInputStream};
use async_stream::stream;
use std::time::Duration;

/// The main constructors are:
/// - [`super::InputDeviceExtMock::new_mock()`]
/// - [`super::InputDeviceExtMock::new_mock_with_delay()`]
pub fn gen_input_stream<T>(generator_vec: InlineVec<T>) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

pub fn gen_input_stream_with_delay<T>(
    generator_vec: InlineVec<T>,
    delay: Duration,
) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            tokio::time::sleep(delay).await;
            yield item;
        }
    };
    Box::pin(it)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use smallvec::smallvec;

    #[tokio::test]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(smallvec![1, 2, 3]);
        for expected in 1..=3 {
            pretty_assertions::assert_eq!(input_stream.next().await, Some(expected));
        }
        pretty_assertions::assert_eq!(input_stream.next().await, None);
    }

    #[tokio::test]
    async fn test_gen_input_stream_with_delay() {
        const DELAY: u64 = 20;

        let start_time = std::time::Instant::now();

        let mut input_stream =
            gen_input_stream_with_delay(smallvec![1, 2, 3], Duration::from_millis(DELAY));
        for _ in 1..=3 {
            input_stream.next().await;
        }

        let end_time = std::time::Instant::now();

        pretty_assertions::assert_eq!(input_stream.next().await, None);
        assert!(end_time - start_time >= Duration::from_millis(DELAY * 3));
    }
}
