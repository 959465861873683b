use std::collections::VecDeque;

use egui::Color32;

/// A line color and the matching translucent fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphColor {
    pub primary: Color32,
    pub background: Color32,
}

const fn pair(r: u8, g: u8, b: u8) -> GraphColor {
    GraphColor {
        primary: Color32::from_rgb(r, g, b),
        background: Color32::from_rgba_premultiplied(r / 4, g / 4, b / 4, 64),
    }
}

/// Fixed palette, in allocation order.
pub const GRAPH_COLORS: [GraphColor; 10] = [
    pair(0x42, 0x85, 0xf4), // blue
    pair(0xea, 0x43, 0x35), // red
    pair(0x34, 0xa8, 0x53), // green
    pair(0xfb, 0xbc, 0x04), // amber
    pair(0xa1, 0x42, 0xf4), // purple
    pair(0x24, 0xc1, 0xe0), // cyan
    pair(0xf4, 0x6d, 0x20), // orange
    pair(0xe9, 0x49, 0x9e), // pink
    pair(0x9a, 0xa0, 0xa6), // gray
    pair(0x7c, 0xb3, 0x42), // lime
];

/// Recyclable palette manager. Two live series never share a pair while a
/// free one remains; once the palette is exhausted it refills and cycles.
pub struct GraphColorPool {
    available: VecDeque<GraphColor>,
}

impl GraphColorPool {
    pub fn new() -> Self {
        Self {
            available: GRAPH_COLORS.into_iter().collect(),
        }
    }

    /// Next free pair in palette order. Never fails: an exhausted pool wraps
    /// around by refilling from the full palette.
    pub fn graph_color(&mut self) -> GraphColor {
        if self.available.is_empty() {
            self.available.extend(GRAPH_COLORS);
        }
        // refill above guarantees a front element
        self.available.pop_front().unwrap_or(GRAPH_COLORS[0])
    }

    /// Returns a primary color to the pool. The matching pair goes to the
    /// front of the free list so the most recently freed color is reused
    /// first. Unknown or already-free colors are ignored.
    pub fn add_color(&mut self, primary: Color32) {
        if let Some(pair) = GRAPH_COLORS.iter().find(|c| c.primary == primary) {
            if !self.available.contains(pair) {
                self.available.push_front(*pair);
            }
        }
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

impl Default for GraphColorPool {
    fn default() -> Self {
        Self::new()
    }
}
