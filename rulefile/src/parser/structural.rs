use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::document::{CodeBlock, LinkRef, Section, SectionBody};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split Markdown into a preamble and a flat, ordered section list.
///
/// `offset` shifts every recorded span back into coordinates of the
/// original file (the body may start after a frontmatter block).
pub fn parse_sections(body: &str, offset: usize) -> (SectionBody, Vec<Section>) {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(body, options);
    let events: Vec<(Event<'_>, Range<usize>)> = parser.into_offset_iter().collect();

    let mut preamble = SectionBody::default();
    let mut sections: Vec<Section> = Vec::new();

    let mut i = 0;
    while i < events.len() {
        let (ref ev, ref range) = events[i];

        match ev {
            Event::Start(Tag::Heading { level, .. }) => {
                let level = heading_level_to_u8(level);
                let span = range.start + offset..range.end + offset;
                i += 1;
                let title = collect_heading_text(&events, &mut i);
                sections.push(Section {
                    title: normalize_title(&title),
                    level,
                    body: SectionBody::default(),
                    span,
                });
            }

            Event::Start(Tag::CodeBlock(kind)) => {
                let span = range.start + offset..range.end + offset;
                let fenced_tag = match kind {
                    CodeBlockKind::Fenced(info) => {
                        // The language tag is the token immediately after
                        // the opening delimiter.
                        Some(info.split_whitespace().next().map(str::to_string))
                    }
                    CodeBlockKind::Indented => None,
                };
                i += 1;
                let content =
                    collect_text_until(&events, &mut i, |e| matches!(e, TagEnd::CodeBlock));
                let body = current_body(&mut preamble, &mut sections);
                match fenced_tag {
                    Some(language) => body.code_blocks.push(CodeBlock {
                        language,
                        content,
                        span,
                    }),
                    // Indented code is plain body content, not an entity.
                    None => body.text.push_str(&content),
                }
            }

            Event::Start(Tag::Link { dest_url, .. }) => {
                let span = range.start + offset..range.end + offset;
                current_body(&mut preamble, &mut sections)
                    .links
                    .push(LinkRef {
                        dest: dest_url.to_string(),
                        span,
                    });
                // The link text itself still arrives as Text events.
                i += 1;
            }

            Event::Text(s) => {
                current_body(&mut preamble, &mut sections).text.push_str(s);
                i += 1;
            }
            Event::Code(s) => {
                current_body(&mut preamble, &mut sections).text.push_str(s);
                i += 1;
            }
            Event::SoftBreak | Event::HardBreak => {
                current_body(&mut preamble, &mut sections).text.push('\n');
                i += 1;
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => {
                current_body(&mut preamble, &mut sections).text.push('\n');
                i += 1;
            }

            _ => {
                i += 1;
            }
        }
    }

    (preamble, sections)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The body new content attaches to: the latest section, or the preamble
/// when no heading has been seen yet.
fn current_body<'a>(
    preamble: &'a mut SectionBody,
    sections: &'a mut Vec<Section>,
) -> &'a mut SectionBody {
    match sections.last_mut() {
        Some(section) => &mut section.body,
        None => preamble,
    }
}

fn heading_level_to_u8(level: &HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Collect heading text (all Text events until End(Heading)).
fn collect_heading_text(events: &[(Event<'_>, Range<usize>)], i: &mut usize) -> String {
    let mut title = String::new();
    while *i < events.len() {
        let (ref ev, _) = events[*i];
        match ev {
            Event::End(TagEnd::Heading(_)) => {
                *i += 1;
                break;
            }
            Event::Text(s) => {
                title.push_str(s);
                *i += 1;
            }
            Event::Code(s) => {
                title.push_str(s);
                *i += 1;
            }
            _ => {
                *i += 1;
            }
        }
    }
    title
}

/// Normalize a heading title: strip leading/trailing whitespace, collapse
/// interior whitespace.
fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collect all text content until a matching End tag.
fn collect_text_until(
    events: &[(Event<'_>, Range<usize>)],
    i: &mut usize,
    is_end: impl Fn(&TagEnd) -> bool,
) -> String {
    let mut text = String::new();
    while *i < events.len() {
        let (ref ev, _) = events[*i];
        match ev {
            Event::End(tag_end) if is_end(tag_end) => {
                *i += 1;
                break;
            }
            Event::Text(s) => {
                text.push_str(s);
                *i += 1;
            }
            _ => {
                *i += 1;
            }
        }
    }
    text
}
