// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checklist extraction from GitHub-flavored markdown.
//!
//! Only task-list entries of top-level lists are selected. An entry nested
//! under another entry stays part of its parent's body.
//!
//! ```text
//! - [x] [Fix login](https://github.com/o/r/issues/1)   -> tracked, checked
//! - [ ] Write release notes                             -> note, open
//!     mention the new flag                              -> note body
//! ```

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::model::ChecklistItem;
use crate::text::dedent;

/// Coarse classification of open tags, enough to find top-level list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    List,
    Item,
    Block,
    Inline,
}

impl Frame {
    fn of(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::List(_) => Frame::List,
            Tag::Item => Frame::Item,
            Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote
            | Tag::CodeBlock(_)
            | Tag::FootnoteDefinition(_)
            | Tag::Table(_) => Frame::Block,
            _ => Frame::Inline,
        }
    }
}

/// An entry being collected while its events stream past.
struct Entry {
    range: Range<usize>,
    /// Stack depth of the entry's own `Item` frame.
    depth: usize,
    checked: Option<bool>,
    title: String,
    title_done: bool,
    url: Option<String>,
}

impl Entry {
    fn new(range: Range<usize>, depth: usize) -> Self {
        Entry {
            range,
            depth,
            checked: None,
            title: String::new(),
            title_done: false,
            url: None,
        }
    }

    fn finish(self, source: &str) -> Option<ChecklistItem> {
        let checked = self.checked?;
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return None;
        }
        let text = source.get(self.range.clone()).unwrap_or("");
        let rest = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
        let body = dedent(rest);
        Some(ChecklistItem {
            title,
            checked,
            url: self.url,
            body: if body.is_empty() { None } else { Some(body) },
        })
    }
}

/// Parse document text into checklist records, in document order.
///
/// Never fails: entries that are not task items, or whose title is empty,
/// are skipped.
pub fn parse(text: &str) -> Vec<ChecklistItem> {
    let parser = Parser::new_ext(text, Options::ENABLE_TASKLISTS).into_offset_iter();

    let mut items = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut entry: Option<Entry> = None;

    for (event, range) in parser {
        match event {
            Event::Start(tag) => {
                let frame = Frame::of(&tag);
                if frame == Frame::Item && entry.is_none() && stack == [Frame::List] {
                    entry = Some(Entry::new(range, stack.len() + 1));
                } else if let Some(e) = entry.as_mut() {
                    if let Tag::Link { dest_url, .. } = &tag {
                        if e.url.is_none() {
                            e.url = Some(dest_url.to_string());
                        }
                    }
                    // Anything past the first paragraph belongs to the body.
                    if matches!(frame, Frame::List | Frame::Item)
                        || (frame == Frame::Block && !matches!(tag, Tag::Paragraph))
                    {
                        e.title_done = true;
                    }
                }
                stack.push(frame);
            }
            Event::End(tag_end) => {
                if let Some(e) = entry.as_mut() {
                    match tag_end {
                        TagEnd::Item if stack.len() == e.depth => {
                            if let Some(item) = entry.take().and_then(|e| e.finish(text)) {
                                items.push(item);
                            }
                        }
                        TagEnd::Paragraph => e.title_done = true,
                        _ => {}
                    }
                }
                stack.pop();
            }
            Event::TaskListMarker(checked) => {
                if let Some(e) = entry.as_mut() {
                    if e.checked.is_none() && e.title.is_empty() && stack.len() <= e.depth + 1 {
                        e.checked = Some(checked);
                    }
                }
            }
            Event::Text(s) | Event::Code(s) => {
                if let Some(e) = entry.as_mut().filter(|e| !e.title_done) {
                    e.title.push_str(&s);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(e) = entry.as_mut() {
                    e.title_done = true;
                }
            }
            _ => {}
        }
    }

    tracing::debug!(count = items.len(), "parsed checklist");
    items
}

#[cfg(test)]
#[path = "checklist_tests.rs"]
mod tests;
