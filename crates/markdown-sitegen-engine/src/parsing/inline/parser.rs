use super::{
    kinds::{Delimiter, Media},
    types::InlineSpan,
};
use crate::parsing::MarkdownError;

/// Parses inline text into an ordered sequence of [`InlineSpan`]s.
///
/// Plain text without any markup yields a single `Plain` span; empty input
/// yields no spans.
///
/// # Errors
/// - [`MarkdownError::UnterminatedDelimiter`] when a Plain span holds an odd
///   number of one delimiter
/// - [`MarkdownError::UnterminatedMedia`] when a matched image/link cannot be
///   located again in its source text
pub fn parse_inline(text: &str) -> Result<Vec<InlineSpan>, MarkdownError> {
    let mut spans = if text.is_empty() {
        vec![]
    } else {
        vec![InlineSpan::Plain(text.to_string())]
    };
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }
    spans = split_media(spans, Media::Image)?;
    split_media(spans, Media::Link)
}

/// Splits every Plain span on `delimiter`; odd segments take its style.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: Delimiter,
) -> Result<Vec<InlineSpan>, MarkdownError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            InlineSpan::Plain(text) => text,
            styled => {
                out.push(styled);
                continue;
            }
        };

        let sections: Vec<&str> = text.split(marker).collect();
        if sections.len() % 2 == 0 {
            return Err(MarkdownError::UnterminatedDelimiter(marker));
        }
        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineSpan::Plain(section.to_string()));
            } else {
                out.push(delimiter.wrap(section.to_string()));
            }
        }
    }

    Ok(out)
}

/// Replaces `media` markup in every Plain span with spans of that kind.
pub fn split_media(spans: Vec<InlineSpan>, media: Media) -> Result<Vec<InlineSpan>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            InlineSpan::Plain(text) => text,
            styled => {
                out.push(styled);
                continue;
            }
        };

        let found = media.extract(&text);
        if found.is_empty() {
            out.push(InlineSpan::Plain(text));
            continue;
        }

        let mut remaining = text.as_str();
        for (label, url) in found {
            let markup = media.markup(&label, &url);
            let Some((before, after)) = remaining.split_once(markup.as_str()) else {
                return Err(MarkdownError::UnterminatedMedia {
                    kind: media,
                    markup,
                });
            };
            if !before.is_empty() {
                out.push(InlineSpan::Plain(before.to_string()));
            }
            out.push(media.span(label, url));
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(InlineSpan::Plain(remaining.to_string()));
        }
    }

    Ok(out)
}
