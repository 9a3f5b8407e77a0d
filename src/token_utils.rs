/*!
 * Token counting and token-bounded text splitting.
 *
 * Counting uses the cl100k_base BPE table via tiktoken. Splitting walks a
 * separator hierarchy (paragraph, line, sentence, word) and cuts on substring
 * boundaries of the original text, so concatenating the returned chunks in
 * order always reproduces the input byte for byte. Token targets are
 * approximate: token boundaries do not align with text boundaries.
 */

use once_cell::sync::OnceCell;
use tiktoken_rs::{CoreBPE, cl100k_base};

use crate::errors::SplitError;

/// Name of the BPE encoding used for all token counting
pub const TOKEN_ENCODING: &str = "cl100k_base";

/// Separator hierarchy, coarsest first
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

static ENCODER: OnceCell<CoreBPE> = OnceCell::new();

/// Get the process-wide BPE encoder, building it on first use
fn encoder() -> Result<&'static CoreBPE, SplitError> {
    ENCODER.get_or_try_init(|| {
        cl100k_base().map_err(|e| SplitError::EncoderInit {
            encoding: TOKEN_ENCODING.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Count the tokens in a string
pub fn count_tokens(text: &str) -> Result<usize, SplitError> {
    Ok(encoder()?.encode_with_special_tokens(text).len())
}

/// Split text into contiguous chunks of roughly `target_tokens` tokens each.
///
/// Guarantees: chunks are non-overlapping, in document order, and their
/// in-order concatenation equals the input exactly. Separators stay attached
/// to the piece that precedes the cut, so no whitespace is lost or rewritten.
///
/// Texts at or under the target come back as a single chunk.
pub fn split_by_token_target(text: &str, target_tokens: usize) -> Result<Vec<String>, SplitError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let total = count_tokens(text)?;
    if target_tokens == 0 || total <= target_tokens {
        return Ok(vec![text.to_string()]);
    }

    // Near-equal split: the planner hands us total/num_chunks as the target,
    // so rounding recovers the chunk count it intended.
    let num_chunks = ((total as f64 / target_tokens as f64).round() as usize).max(2);
    let ideal = total as f64 / num_chunks as f64;

    // Pieces fine enough that chunk boundaries can land near the ideal size
    let granularity = (target_tokens / 4).max(8);
    let mut pieces = Vec::new();
    refine(text, &SEPARATORS, granularity, &mut pieces)?;

    let mut chunks: Vec<String> = Vec::with_capacity(num_chunks);
    let mut current = String::new();
    let mut consumed = 0usize;

    for piece in pieces {
        let piece_tokens = count_tokens(piece)?;

        // Cut before this piece once its midpoint would pass the next chunk
        // boundary. Boundaries are cumulative, so rounding drift in earlier
        // chunks never shifts later ones. The last chunk absorbs the rest.
        let is_last_chunk = chunks.len() + 1 >= num_chunks;
        let boundary = (chunks.len() + 1) as f64 * ideal;
        if !current.is_empty()
            && !is_last_chunk
            && consumed as f64 + piece_tokens as f64 / 2.0 >= boundary
        {
            chunks.push(std::mem::take(&mut current));
        }

        current.push_str(piece);
        consumed += piece_tokens;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    // Reassembly relies on exact coverage
    if chunks.concat() != text {
        return Err(SplitError::CoverageCheckFailed(format!(
            "{} chunks do not reassemble into the original {} bytes",
            chunks.len(),
            text.len()
        )));
    }

    Ok(chunks)
}

/// Recursively break `text` into pieces of at most ~`max_tokens` tokens,
/// preferring coarse separators and keeping each separator attached to the
/// piece before it
fn refine<'a>(
    text: &'a str,
    separators: &[&str],
    max_tokens: usize,
    out: &mut Vec<&'a str>,
) -> Result<(), SplitError> {
    if count_tokens(text)? <= max_tokens {
        out.push(text);
        return Ok(());
    }

    let Some((separator, rest)) = separators.split_first() else {
        // No separator left to cut on; an oversized unbreakable piece stays whole
        out.push(text);
        return Ok(());
    };

    let parts: Vec<&str> = text.split_inclusive(separator).collect();
    if parts.len() <= 1 {
        return refine(text, rest, max_tokens, out);
    }

    for part in parts {
        refine(part, rest, max_tokens, out)?;
    }
    Ok(())
}
