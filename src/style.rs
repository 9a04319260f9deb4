//! Named style spans over the document
//!
//! Each tag owns a sorted list of disjoint ranges. Ranges that touch or
//! overlap are merged on insert, so "the selection fully carries the tag"
//! is the same as "one span contains the selection".

use crate::buffer::shift_for_delete;
use crate::palette::Rgb;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Style tags the editor knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleTag {
    Bold,
    Italic,
    Colored,
}

impl StyleTag {
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::Colored => "colored",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Regular = 400,
    Bold = 700,
}

/// Rendering attribute a tag stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagAttribute {
    Weight(FontWeight),
    Italic,
    Foreground(Rgb),
}

/// Whole-buffer colors, independent of the span table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferColors {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for BufferColors {
    fn default() -> Self {
        Self {
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
        }
    }
}

/// Outcome of a toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    Applied,
    Removed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTable {
    spans: BTreeMap<StyleTag, Vec<Range<usize>>>,
    /// Foreground used by the `colored` tag; every colored span shares it
    color: Option<Rgb>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no tag carries any range
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn clear(&mut self) {
        self.spans.clear();
        self.color = None;
    }

    pub fn spans(&self, tag: StyleTag) -> &[Range<usize>] {
        self.spans.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = Some(color);
    }

    pub fn attribute(&self, tag: StyleTag) -> Option<TagAttribute> {
        match tag {
            StyleTag::Bold => Some(TagAttribute::Weight(FontWeight::Bold)),
            StyleTag::Italic => Some(TagAttribute::Italic),
            StyleTag::Colored => self.color.map(TagAttribute::Foreground),
        }
    }

    /// Whether every byte of `range` carries `tag`
    pub fn covers(&self, tag: StyleTag, range: &Range<usize>) -> bool {
        !range.is_empty()
            && self
                .spans(tag)
                .iter()
                .any(|span| span.start <= range.start && range.end <= span.end)
    }

    /// Remove `tag` from `range` when it fully carries it, otherwise add it.
    /// Empty ranges are ignored.
    pub fn toggle(&mut self, tag: StyleTag, range: Range<usize>) -> Option<Toggled> {
        if range.is_empty() {
            return None;
        }
        if self.covers(tag, &range) {
            self.remove(tag, range);
            Some(Toggled::Removed)
        } else {
            self.add(tag, range);
            Some(Toggled::Applied)
        }
    }

    pub fn add(&mut self, tag: StyleTag, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let ranges = self.spans.entry(tag).or_default();
        ranges.push(range);
        normalize(ranges);
    }

    pub fn remove(&mut self, tag: StyleTag, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let Some(ranges) = self.spans.get_mut(&tag) else {
            return;
        };

        let mut kept = Vec::with_capacity(ranges.len() + 1);
        for span in ranges.drain(..) {
            if span.end <= range.start || span.start >= range.end {
                kept.push(span);
                continue;
            }
            if span.start < range.start {
                kept.push(span.start..range.start);
            }
            if range.end < span.end {
                kept.push(range.end..span.end);
            }
        }
        *ranges = kept;

        if ranges.is_empty() {
            self.spans.remove(&tag);
        }
    }

    /// Shift spans for text inserted at `pos`. Text typed strictly inside a
    /// span joins it; text at either edge does not.
    pub fn on_insert(&mut self, pos: usize, len: usize) {
        if len == 0 {
            return;
        }
        for ranges in self.spans.values_mut() {
            for span in ranges.iter_mut() {
                if pos <= span.start {
                    span.start += len;
                    span.end += len;
                } else if pos < span.end {
                    span.end += len;
                }
            }
        }
    }

    /// Shrink or drop spans for a deleted range
    pub fn on_delete(&mut self, range: &Range<usize>) {
        if range.is_empty() {
            return;
        }
        for ranges in self.spans.values_mut() {
            for span in ranges.iter_mut() {
                span.start = shift_for_delete(span.start, range);
                span.end = shift_for_delete(span.end, range);
            }
            normalize(ranges);
        }
        self.spans.retain(|_, ranges| !ranges.is_empty());
    }
}

/// Sort, drop empties, and merge overlapping or touching ranges
fn normalize(ranges: &mut Vec<Range<usize>>) {
    ranges.retain(|r| !r.is_empty());
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges.drain(..) {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    *ranges = merged;
}
