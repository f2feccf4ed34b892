//! Transcript chunking.
//!
//! Splits the normalized transcript into fixed-size pieces so each prompt
//! stays inside the completion service's input budget. Splits land on the
//! character boundary regardless of words or sentences; the downstream model
//! copes fine and keeping the split trivial keeps the round-trip exact.

/// Split a transcript into chunks of at most `max_chars` characters.
///
/// Chunks are returned in order and concatenating them reconstructs the
/// input exactly. The result is non-empty iff the input is non-empty.
pub fn split_transcript(transcript: &str, max_chars: usize) -> Vec<String> {
    // A zero budget would never terminate; treat it as one-char chunks.
    let max_chars = max_chars.max(1);

    let mut chunks = Vec::new();
    let mut rest = transcript;

    while !rest.is_empty() {
        let split_at = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(split_at);
        chunks.push(head.to_string());
        rest = tail;
    }

    chunks
}
