/// Cadence Inspect - read, check and strip stream details documents
use anyhow::Context;
use cadence_stream::StreamDetails;
use chrono::{DateTime, Utc};
use std::io::Read;
use std::path::Path;

/// Path argument that means "read standard input"
pub const STDIN_PATH: &str = "-";

/// Read a document from a file, or from stdin when `path` is `-`
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(Path::new(path)).with_context(|| format!("failed to read {path}"))
}

/// Parse a stream details document
pub fn parse(input: &str) -> anyhow::Result<StreamDetails> {
    let details = StreamDetails::from_json(input)?;
    Ok(details)
}

/// Human readable summary of stream details at `now`
pub fn describe(details: &StreamDetails, now: DateTime<Utc>) -> String {
    let format = details.audio_format();
    let mut lines = vec![
        format!("uri:        {details}"),
        format!("media type: {}", details.media_type()),
        format!(
            "format:     {} ({} Hz, {}-bit, {} ch)",
            format.content_type,
            format.sample_rate.as_hz(),
            format.bit_depth,
            format.channels
        ),
        format!("can seek:   {}", details.can_seek()),
    ];

    if let Some(title) = details.stream_title() {
        lines.push(format!("title:      {title}"));
    }
    if let Some(duration) = details.duration() {
        lines.push(format!("duration:   {duration}s"));
    }
    if let Some(loudness) = details.loudness() {
        lines.push(format!("loudness:   {loudness}"));
    }

    let expiry = if details.is_expired_at(now) {
        format!("expired at {}", details.expires().to_rfc3339())
    } else {
        format!(
            "valid for {}s (until {})",
            details.time_remaining_at(now).num_seconds(),
            details.expires().to_rfc3339()
        )
    };
    lines.push(format!("expires:    {expiry}"));

    lines.join("\n")
}

/// Pretty printed transmissible form of a document
pub fn strip(input: &str) -> anyhow::Result<String> {
    let details = parse(input)?;
    let pretty = serde_json::to_string_pretty(&details.to_transmissible_form())?;
    Ok(pretty)
}
