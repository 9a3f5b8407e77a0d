/*!
 * Chunk size planning for long inputs.
 */

/// Compute a per-chunk token target for splitting `total_tokens` of text
/// under a `token_limit`.
///
/// Texts at or under the limit need no split and come back unchanged. Longer
/// texts are divided into the minimum number of chunks that each fit the
/// limit, with the size spread near-equally so no chunk ends up much shorter
/// than the rest. The result is an approximate target, not an exact
/// guarantee: token boundaries do not align with text boundaries, so the
/// splitter treats it as a goal.
pub fn plan_chunk_size(total_tokens: usize, token_limit: usize) -> usize {
    if total_tokens <= token_limit {
        return total_tokens;
    }

    let num_chunks = total_tokens.div_ceil(token_limit);
    total_tokens / num_chunks
}
